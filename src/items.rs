//! Cart line items.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{orders::OrderDetails, products::ProductData, qc::QcTier, shipping::ShippingMethod};

/// One product entry in the cart, with its own order customization and
/// precomputed totals.
///
/// Totals are computed once by the caller before insertion (see
/// [`crate::pricing::quote`]); the cart only aggregates them, it never
/// recomputes per-item totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique identifier, assigned at add time and stable for the item's
    /// lifetime.
    pub id: Uuid,

    /// The sourced product.
    pub product: ProductData,

    /// Order customization.
    pub order: OrderDetails,

    /// Selected quality-control tier, if any.
    pub qc: Option<QcTier>,

    /// Selected shipping method.
    pub shipping: ShippingMethod,

    /// When the item was added; immutable.
    pub added_at: Timestamp,

    /// Total cost in PKR at add time: base price + service fee + QC fee +
    /// shipping cost.
    pub total_pkr: Decimal,

    /// The total converted to the currency selected at add time.
    pub total_selected: Decimal,
}

/// A line item as handed over by the order form, before the store assigns an
/// id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCartItem {
    /// The sourced product.
    pub product: ProductData,

    /// Order customization.
    pub order: OrderDetails,

    /// Selected quality-control tier, if any.
    pub qc: Option<QcTier>,

    /// Selected shipping method.
    pub shipping: ShippingMethod,

    /// Total cost in PKR, precomputed by the caller.
    pub total_pkr: Decimal,

    /// The total converted to the currency selected at add time.
    pub total_selected: Decimal,
}

impl NewCartItem {
    /// Promote to a full [`CartItem`] with the given identity and timestamp.
    pub fn into_item(self, id: Uuid, added_at: Timestamp) -> CartItem {
        CartItem {
            id,
            product: self.product,
            order: self.order,
            qc: self.qc,
            shipping: self.shipping,
            added_at,
            total_pkr: self.total_pkr,
            total_selected: self.total_selected,
        }
    }
}

/// A partial update to a [`CartItem`].
///
/// `None` fields are left untouched; `id` and `added_at` are never updatable.
/// The `qc` field is doubly optional so an update can clear the tier as well
/// as replace it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartItemUpdate {
    /// Replacement product data.
    pub product: Option<ProductData>,

    /// Replacement order details.
    pub order: Option<OrderDetails>,

    /// Replacement QC selection; `Some(None)` clears it.
    pub qc: Option<Option<QcTier>>,

    /// Replacement shipping method.
    pub shipping: Option<ShippingMethod>,

    /// Replacement PKR total.
    pub total_pkr: Option<Decimal>,

    /// Replacement converted total.
    pub total_selected: Option<Decimal>,
}

impl CartItem {
    /// Apply a partial update in place.
    pub fn patch(&mut self, update: CartItemUpdate) {
        if let Some(product) = update.product {
            self.product = product;
        }
        if let Some(order) = update.order {
            self.order = order;
        }
        if let Some(qc) = update.qc {
            self.qc = qc;
        }
        if let Some(shipping) = update.shipping {
            self.shipping = shipping;
        }
        if let Some(total_pkr) = update.total_pkr {
            self.total_pkr = total_pkr;
        }
        if let Some(total_selected) = update.total_selected {
            self.total_selected = total_selected;
        }
    }
}
