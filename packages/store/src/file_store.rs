//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in
//! its own file. It is used on desktop and mobile platforms so a signed-in
//! session survives an app restart, the way `localStorage` does in a browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json         # the stored value, verbatim
//! ```
//!
//! Key bytes outside `[A-Za-z0-9-]` are written as `_XX` (uppercase hex), so
//! `a/b` and `a_b` land in `a_2Fb.json` and `a_5Fb.json`.
//!
//! Writes go to `<key>.json.tmp` first and are renamed into place, so a reader
//! sees either the old value or the new one, never a torn write.
//!
//! ## Platform data directories
//!
//! Callers typically pass `dirs::data_dir().join("dashboard")`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/dashboard/` |
//! | Linux | `~/.local/share/dashboard/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\dashboard\` |

use std::io::ErrorKind;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::kv::{KeyValueStore, StoreError};

/// Filesystem-backed KeyValueStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // `_` is the escape byte, so distinct keys never share a file.
        let mut name = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                name.push(byte as char);
            } else {
                let _ = write!(name, "_{byte:02X}");
            }
        }
        self.base.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        let path = self.key_path(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("dashboard_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = scratch_dir("reopen");

        let store = FileStore::new(dir.clone());
        store.set("currentUser", r#"{"id":"1"}"#).unwrap();

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("currentUser").as_deref(), Some(r#"{"id":"1"}"#));

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let dir = scratch_dir("remove");
        let store = FileStore::new(dir.clone());

        // Base directory does not even exist yet
        store.remove("currentUser").unwrap();

        store.set("currentUser", "x").unwrap();
        store.remove("currentUser").unwrap();
        assert!(store.get("currentUser").is_none());
        store.remove("currentUser").unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_keys_are_escaped_to_file_names() {
        let dir = scratch_dir("escape");
        let store = FileStore::new(dir.clone());

        store.set("../escape/attempt", "v").unwrap();
        assert!(dir.join("_2E_2E_2Fescape_2Fattempt.json").exists());
        assert_eq!(store.get("../escape/attempt").as_deref(), Some("v"));

        store.set("currentUser", "u").unwrap();
        assert!(dir.join("currentUser.json").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_similar_keys_do_not_collide() {
        let dir = scratch_dir("collide");
        let store = FileStore::new(dir.clone());

        store.set("a/b", "slash").unwrap();
        store.set("a_b", "underscore").unwrap();
        store.set("a.b", "dot").unwrap();
        assert_eq!(store.get("a/b").as_deref(), Some("slash"));
        assert_eq!(store.get("a_b").as_deref(), Some("underscore"));
        assert_eq!(store.get("a.b").as_deref(), Some("dot"));

        store.remove("a_b").unwrap();
        assert_eq!(store.get("a/b").as_deref(), Some("slash"));
        assert!(store.get("a_b").is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
