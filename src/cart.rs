//! Cart state and reducer.
//!
//! The cart is a plain value mutated through [`CartAction`]s. The reducer is
//! deterministic: identity and timestamps for new items are produced at the
//! store boundary (see [`crate::store`]), never in here. Every action leaves
//! the derived fields (`total_items`, `subtotal_pkr`, `subtotal_selected`)
//! consistent with `items` and `selected_currency`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    currency::Currency,
    items::{CartItem, CartItemUpdate},
};

/// The full cart state: line items, selected display currency, and derived
/// totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Line items in insertion order.
    pub items: Vec<CartItem>,

    /// The display currency totals are converted into.
    pub selected_currency: Currency,

    /// Derived: number of line items.
    pub total_items: usize,

    /// Derived: sum of all items' PKR totals.
    pub subtotal_pkr: Decimal,

    /// Derived: `subtotal_pkr` converted at the selected currency's rate.
    pub subtotal_selected: Decimal,
}

impl Default for Cart {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected_currency: Currency::Usd,
            total_items: 0,
            subtotal_pkr: Decimal::ZERO,
            subtotal_selected: Decimal::ZERO,
        }
    }
}

/// A mutation of the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Append a fully-formed line item, preserving insertion order.
    Add(CartItem),

    /// Patch the item with the given id; unknown ids are a silent no-op.
    Update {
        /// Id of the item to patch.
        id: Uuid,
        /// The fields to replace.
        update: CartItemUpdate,
    },

    /// Remove the item with the given id; unknown ids are a silent no-op.
    Remove(Uuid),

    /// Empty the cart. The selected currency is unaffected.
    Clear,

    /// Change the display currency.
    SetCurrency(Currency),

    /// Replace the whole state, as when restoring from storage.
    Load(Cart),
}

impl Cart {
    /// Apply an action, then recompute the derived totals.
    ///
    /// Every arm is total: no action can fail, and actions referring to an
    /// absent item id leave the state unchanged.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(item) => {
                self.items.push(item);
            }
            CartAction::Update { id, update } => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.patch(update);
                }
            }
            CartAction::Remove(id) => {
                self.items.retain(|item| item.id != id);
            }
            CartAction::Clear => {
                self.items.clear();
            }
            CartAction::SetCurrency(currency) => {
                self.selected_currency = currency;
            }
            CartAction::Load(cart) => {
                *self = cart;
            }
        }

        self.recalculate_totals();
    }

    /// Look up a line item by id.
    pub fn item(&self, id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn recalculate_totals(&mut self) {
        self.total_items = self.items.len();
        self.subtotal_pkr = self.items.iter().map(|item| item.total_pkr).sum();
        self.subtotal_selected = self.subtotal_pkr * self.selected_currency.rate();
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::{
        orders::OrderDetails,
        products::ProductData,
        qc::QcTier,
        shipping::ShippingMethod,
    };

    use super::*;

    fn test_item(id: Uuid, total_pkr: i64) -> CartItem {
        CartItem {
            id,
            product: ProductData {
                name: "Silk Dupatta".to_owned(),
                brand: "Bareeze".to_owned(),
                url: "https://example.com/dupatta".to_owned(),
                base_price: Decimal::from(total_pkr),
                currency: Currency::Usd,
            },
            order: OrderDetails {
                size: "One Size".to_owned(),
                quantity: 1,
                color: "Maroon".to_owned(),
                special_instructions: String::new(),
                custom_measurements: None,
            },
            qc: None,
            shipping: ShippingMethod::Standard,
            added_at: Timestamp::UNIX_EPOCH,
            total_pkr: Decimal::from(total_pkr),
            total_selected: Decimal::ZERO,
        }
    }

    #[test]
    fn add_appends_and_recomputes_totals() {
        let mut cart = Cart::default();

        cart.apply(CartAction::Add(test_item(Uuid::new_v4(), 6750)));

        assert_eq!(cart.total_items, 1);
        assert_eq!(cart.subtotal_pkr, Decimal::from(6750));
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut cart = Cart::default();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        cart.apply(CartAction::Add(test_item(first, 100)));
        cart.apply(CartAction::Add(test_item(second, 200)));

        let ids: Vec<Uuid> = cart.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn update_patches_matching_item_and_recomputes() {
        let mut cart = Cart::default();
        let id = Uuid::new_v4();
        cart.apply(CartAction::Add(test_item(id, 1000)));

        cart.apply(CartAction::Update {
            id,
            update: CartItemUpdate {
                total_pkr: Some(Decimal::from(2000)),
                ..CartItemUpdate::default()
            },
        });

        assert_eq!(cart.subtotal_pkr, Decimal::from(2000));
    }

    #[test]
    fn update_of_unknown_id_is_a_noop() {
        let mut cart = Cart::default();
        cart.apply(CartAction::Add(test_item(Uuid::new_v4(), 1000)));
        let before = cart.clone();

        cart.apply(CartAction::Update {
            id: Uuid::new_v4(),
            update: CartItemUpdate {
                total_pkr: Some(Decimal::from(9999)),
                ..CartItemUpdate::default()
            },
        });

        assert_eq!(cart, before);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::default();
        let id = Uuid::new_v4();
        cart.apply(CartAction::Add(test_item(id, 500)));

        cart.apply(CartAction::Remove(id));
        let after_first = cart.clone();
        cart.apply(CartAction::Remove(id));

        assert_eq!(cart, after_first);
        assert_eq!(cart.total_items, 0);
    }

    #[test]
    fn clear_zeroes_totals_but_keeps_currency() {
        let mut cart = Cart::default();
        cart.apply(CartAction::SetCurrency(Currency::Gbp));
        cart.apply(CartAction::Add(test_item(Uuid::new_v4(), 500)));

        cart.apply(CartAction::Clear);

        assert!(cart.is_empty());
        assert_eq!(cart.total_items, 0);
        assert_eq!(cart.subtotal_pkr, Decimal::ZERO);
        assert_eq!(cart.subtotal_selected, Decimal::ZERO);
        assert_eq!(cart.selected_currency, Currency::Gbp);
    }

    #[test]
    fn set_currency_converts_the_subtotal() {
        let mut cart = Cart::default();
        cart.apply(CartAction::Add(test_item(Uuid::new_v4(), 6750)));

        cart.apply(CartAction::SetCurrency(Currency::Usd));

        assert_eq!(cart.subtotal_selected, Decimal::new(243, 1));
    }

    #[test]
    fn unknown_currency_leaves_subtotal_at_parity() {
        let mut cart = Cart::default();
        cart.apply(CartAction::Add(test_item(Uuid::new_v4(), 6750)));

        cart.apply(CartAction::SetCurrency(Currency::from_code("JPY")));

        assert_eq!(cart.subtotal_selected, cart.subtotal_pkr);
    }

    #[test]
    fn load_replaces_state_and_normalizes_derived_fields() {
        let mut stale = Cart::default();
        stale.items.push(test_item(Uuid::new_v4(), 1000));
        // Derived fields deliberately left inconsistent.

        let mut cart = Cart::default();
        cart.apply(CartAction::Load(stale));

        assert_eq!(cart.total_items, 1);
        assert_eq!(cart.subtotal_pkr, Decimal::from(1000));
    }
}
