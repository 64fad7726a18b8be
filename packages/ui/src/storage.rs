//! Shared storage constructor for all platforms.
//!
//! Returns the [`store::KeyValueStore`] the session is persisted in:
//! - **Web** (WASM + `web` feature): `window.localStorage` via `store::LocalStorageStore`
//! - **Desktop / Mobile** (native): files under `<data_dir>/dashboard/` via [`store::FileStore`]
//! - WASM without the `web` feature: process memory only

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Create the platform-appropriate durable store.
pub fn make_storage() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("dashboard");
        store::FileStore::new(base)
    }
}
