//! Shipping methods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An international shipping option with a fixed cost and delivery window.
///
/// Costs are in PKR and folded into the line-item total at quote time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// Standard shipping, 7-14 business days.
    Standard,
    /// Express shipping, 3-7 business days.
    Express,
    /// Premium shipping, 2-5 business days.
    Premium,
}

impl ShippingMethod {
    /// All methods, in display order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Express, Self::Premium];

    /// Customer-facing name of the method.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "Standard Shipping",
            Self::Express => "Express Shipping",
            Self::Premium => "Premium Shipping",
        }
    }

    /// The fixed cost of this method, in PKR.
    pub fn cost(self) -> Decimal {
        match self {
            Self::Standard => Decimal::from(1500),
            Self::Express => Decimal::from(2500),
            Self::Premium => Decimal::from(3500),
        }
    }

    /// Estimated delivery window in business days.
    pub fn delivery_days(self) -> &'static str {
        match self {
            Self::Standard => "7-14",
            Self::Express => "3-7",
            Self::Premium => "2-5",
        }
    }
}
