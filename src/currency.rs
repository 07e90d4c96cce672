//! Display currencies and conversion rates.
//!
//! Canonical totals are stored in Pakistani Rupees; display conversion uses a
//! fixed rate table. Rates are snapshot constants, not live market data.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO code of the base currency all canonical totals are stored in.
pub const BASE_CURRENCY_CODE: &str = "PKR";

/// A display currency selectable in the storefront.
///
/// The storefront offers a fixed set of currencies, but the selection is
/// accepted as free text from collaborators, so any other code is carried
/// through as [`Currency::Other`] and converts at a rate of 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    /// United States Dollar
    Usd,
    /// Euro
    Eur,
    /// Pound Sterling
    Gbp,
    /// Canadian Dollar
    Cad,
    /// Australian Dollar
    Aud,
    /// Any unrecognised code; converts at a rate of 1.
    Other(String),
}

impl Currency {
    /// The currencies offered by the storefront, in display order.
    pub const SUPPORTED: [Self; 5] = [Self::Usd, Self::Eur, Self::Gbp, Self::Cad, Self::Aud];

    /// Resolve a currency from its ISO code.
    ///
    /// Unrecognised codes are preserved as [`Currency::Other`] rather than
    /// rejected.
    pub fn from_code(code: &str) -> Self {
        match code {
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            "GBP" => Self::Gbp,
            "CAD" => Self::Cad,
            "AUD" => Self::Aud,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The ISO code for this currency.
    pub fn code(&self) -> &str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Other(code) => code,
        }
    }

    /// The display symbol, if the currency is one the storefront knows.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Usd => Some("$"),
            Self::Eur => Some("€"),
            Self::Gbp => Some("£"),
            Self::Cad => Some("C$"),
            Self::Aud => Some("A$"),
            Self::Other(_) => None,
        }
    }

    /// Conversion rate from one PKR to one unit of this currency.
    ///
    /// Unrecognised currencies convert at a rate of 1; this is a defined
    /// fallback, not an error.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Usd => Decimal::new(36, 4),
            Self::Eur => Decimal::new(33, 4),
            Self::Gbp => Decimal::new(28, 4),
            Self::Cad => Decimal::new(49, 4),
            Self::Aud => Decimal::new(55, 4),
            Self::Other(_) => Decimal::ONE,
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_owned()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
