//! Quote computation for a line item.
//!
//! The order form computes the line-item total before the item enters the
//! cart; the cart itself only aggregates precomputed totals. This module is
//! the single source of truth for that formula: the total in PKR is the base
//! price plus the 5% service fee, the QC fee, and the shipping cost.

use rust_decimal::Decimal;

use crate::{currency::Currency, products::ProductData, qc::QcTier, shipping::ShippingMethod};

/// Service fee rate charged on the base price.
pub const SERVICE_FEE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// An itemised quote for one prospective line item, in PKR.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Listed base price.
    pub base_price: Decimal,

    /// 5% purchasing-agent service fee on the base price.
    pub service_fee: Decimal,

    /// Fee for the selected QC tier; zero when no tier is selected.
    pub qc_fee: Decimal,

    /// Cost of the selected shipping method.
    pub shipping_cost: Decimal,
}

impl Quote {
    /// Total cost in PKR.
    pub fn total_pkr(&self) -> Decimal {
        self.base_price + self.service_fee + self.qc_fee + self.shipping_cost
    }

    /// Total converted into the given display currency.
    pub fn total_in(&self, currency: &Currency) -> Decimal {
        self.total_pkr() * currency.rate()
    }
}

/// The 5% service fee on a base price.
///
/// A base price of zero (or below) carries no fee, matching the order form's
/// behaviour while the price field is still empty.
pub fn service_fee(base_price: Decimal) -> Decimal {
    if base_price > Decimal::ZERO {
        base_price * SERVICE_FEE_RATE
    } else {
        Decimal::ZERO
    }
}

/// Build the quote for a product with the given QC and shipping selections.
pub fn quote(product: &ProductData, qc: Option<QcTier>, shipping: ShippingMethod) -> Quote {
    Quote {
        base_price: product.base_price,
        service_fee: service_fee(product.base_price),
        qc_fee: qc.map_or(Decimal::ZERO, QcTier::fee),
        shipping_cost: shipping.cost(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(base_price: Decimal) -> ProductData {
        ProductData {
            name: "Lawn Suit".to_owned(),
            brand: "Sapphire".to_owned(),
            url: "https://example.com/suit".to_owned(),
            base_price,
            currency: Currency::Usd,
        }
    }

    #[test]
    fn quote_sums_base_service_qc_and_shipping() {
        let product = test_product(Decimal::from(5000));

        let quote = quote(&product, Some(QcTier::Detailed), ShippingMethod::Standard);

        assert_eq!(quote.service_fee, Decimal::from(250));
        assert_eq!(quote.qc_fee, Decimal::from(500));
        assert_eq!(quote.shipping_cost, Decimal::from(1500));
        assert_eq!(quote.total_pkr(), Decimal::from(7250));
    }

    #[test]
    fn no_qc_tier_means_no_qc_fee() {
        let product = test_product(Decimal::from(1000));

        let quote = quote(&product, None, ShippingMethod::Express);

        assert_eq!(quote.qc_fee, Decimal::ZERO);
        assert_eq!(quote.total_pkr(), Decimal::from(3550));
    }

    #[test]
    fn zero_base_price_carries_no_service_fee() {
        assert_eq!(service_fee(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn total_converts_at_the_selected_rate() {
        let product = test_product(Decimal::from(5000));

        let quote = quote(&product, Some(QcTier::Detailed), ShippingMethod::Standard);

        assert_eq!(quote.total_in(&Currency::Usd), Decimal::new(261, 1));
        assert_eq!(quote.total_in(&Currency::from_code("JPY")), quote.total_pkr());
    }
}
