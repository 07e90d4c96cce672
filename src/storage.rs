//! Cart persistence.
//!
//! The cart is persisted as a single JSON record under a fixed key so it
//! survives across sessions. Adapters are injected into the store; the bundled
//! [`JsonFileStorage`] writes one file in a caller-chosen directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::cart::Cart;

/// File name of the persisted cart record.
pub const STORAGE_KEY: &str = "pakshopper-cart.json";

/// Errors raised by a storage adapter.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The persisted record could not be read or written.
    #[error("cart storage I/O failed")]
    Io(#[from] io::Error),

    /// The persisted record could not be serialized or deserialized.
    #[error("cart record was malformed")]
    Malformed(#[from] serde_json::Error),
}

/// A durable slot the cart state is saved to and restored from.
///
/// `load` and `save` are synchronous: the store runs on a single control
/// thread and writes after every mutation, with no queuing or retries.
pub trait CartStorage {
    /// Read the persisted cart, if one exists.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the record exists but cannot be read or
    /// parsed. Callers are expected to treat this as "no saved cart".
    fn load(&self) -> Result<Option<Cart>, StorageError>;

    /// Persist the full cart state, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the record cannot be serialized or
    /// written.
    fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}

/// Storage adapter keeping the cart as one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage under [`STORAGE_KEY`] in the given directory.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_KEY),
        }
    }

    /// The file the cart is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let cart = serde_json::from_str(&contents)?;

        Ok(Some(cart))
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let contents = serde_json::to_string(cart)?;
        fs::write(&self.path, contents)?;

        debug!(path = %self.path.display(), "saved cart");

        Ok(())
    }
}
