//! PakShopper Cart
//!
//! Cart core for the PakShopper purchasing-agent storefront: a reducer-driven
//! cart state with derived totals, fixed-rate currency conversion, per-item
//! order quoting, and JSON persistence across sessions.

pub mod cart;
pub mod currency;
pub mod items;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod qc;
pub mod shipping;
pub mod storage;
pub mod store;
