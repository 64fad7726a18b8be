//! Storage layer for the dashboard: the durable key-value primitive, its
//! platform backends, the identity model and the dashboard configuration.

pub mod config;
pub mod kv;
pub mod models;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{DashboardConfig, GuardConfig, SessionConfig};
pub use kv::{KeyValueStore, StoreError};
pub use models::{Identity, Role, StoredIdentity};
