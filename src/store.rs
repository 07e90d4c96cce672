//! The cart store.
//!
//! Owns the single source of truth for the cart and ties the pure reducer to
//! its side effects: identity and timestamps for new items are generated
//! here, and every successful mutation is followed by a synchronous save of
//! the full state. Collaborators hold a reference to the store and read
//! immutable snapshots via [`CartStore::cart`].

use jiff::Timestamp;
use tracing::warn;
use uuid::Uuid;

use crate::{
    cart::{Cart, CartAction},
    currency::Currency,
    items::{CartItemUpdate, NewCartItem},
    storage::{CartStorage, StorageError},
};

/// The cart store: in-memory cart state plus an injected storage adapter.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Open the store, restoring any persisted cart.
    ///
    /// A missing, unreadable, or malformed record falls back silently to the
    /// empty cart; opening never fails.
    pub fn open(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(saved)) => {
                let mut cart = Cart::default();
                cart.apply(CartAction::Load(saved));
                cart
            }
            Ok(None) => Cart::default(),
            Err(err) => {
                warn!(error = %err, "discarding saved cart");
                Cart::default()
            }
        };

        Self { cart, storage }
    }

    /// Read-only snapshot of the current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a line item, assigning it a fresh id and timestamp.
    ///
    /// Returns the assigned id.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the resulting state fails;
    /// the in-memory cart has already been updated at that point.
    pub fn add_item(&mut self, item: NewCartItem) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();
        let item = item.into_item(id, Timestamp::now());

        self.dispatch(CartAction::Add(item))?;

        Ok(id)
    }

    /// Patch the item with the given id; unknown ids are a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the resulting state fails.
    pub fn update_item(&mut self, id: Uuid, update: CartItemUpdate) -> Result<(), StorageError> {
        self.dispatch(CartAction::Update { id, update })
    }

    /// Remove the item with the given id; unknown ids are a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the resulting state fails.
    pub fn remove_item(&mut self, id: Uuid) -> Result<(), StorageError> {
        self.dispatch(CartAction::Remove(id))
    }

    /// Empty the cart, leaving the selected currency untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the resulting state fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.dispatch(CartAction::Clear)
    }

    /// Change the display currency and reconvert the subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the resulting state fails.
    pub fn set_currency(&mut self, currency: Currency) -> Result<(), StorageError> {
        self.dispatch(CartAction::SetCurrency(currency))
    }

    fn dispatch(&mut self, action: CartAction) -> Result<(), StorageError> {
        self.cart.apply(action);
        self.storage.save(&self.cart)
    }
}
