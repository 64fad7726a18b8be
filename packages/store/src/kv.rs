//! # Durable key-value primitive
//!
//! The session layer persists exactly one record (the signed-in identity) under
//! one string key, so the storage contract is deliberately tiny: read a string,
//! write a string, remove a key. Every backend in this crate implements
//! [`KeyValueStore`]:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStore`] | tests, and any host without durable storage |
//! | [`crate::FileStore`] | desktop / mobile, one file per key |
//! | `LocalStorageStore` | browser (`wasm32` + `web` feature) |
//!
//! Reads never fail: an unreadable or missing value is `None`, the same as
//! "nothing stored". Writes report failure so callers can log it.

use thiserror::Error;

/// Errors raised by durable storage writes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string key-value storage.
///
/// A single `set` or `remove` is atomic at the granularity of one value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
