//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// A product sourced from an external storefront on the customer's behalf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductData {
    /// Product name
    pub name: String,

    /// Brand or label
    pub brand: String,

    /// URL of the listing the product was sourced from
    pub url: String,

    /// Listed base price in PKR; expected non-negative
    pub base_price: Decimal,

    /// Display currency selected when the product was quoted
    pub currency: Currency,
}
