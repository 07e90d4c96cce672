//! PakShopper Cart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartAction},
    currency::{BASE_CURRENCY_CODE, Currency},
    items::{CartItem, CartItemUpdate, NewCartItem},
    orders::OrderDetails,
    pricing::{Quote, SERVICE_FEE_RATE, quote, service_fee},
    products::ProductData,
    qc::QcTier,
    shipping::ShippingMethod,
    storage::{CartStorage, JsonFileStorage, STORAGE_KEY, StorageError},
    store::CartStore,
};
