//! # Local Storage
//!
//! The browser-local-storage analog: a directory holding one JSON file per
//! key.
//!
//! ## Behavior Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Local Storage Semantics                              │
//! │                                                                         │
//! │  get("cart")                                                            │
//! │       │                                                                 │
//! │       ├── file absent ───────► default value (empty cart)              │
//! │       ├── file malformed ────► default value + warn log                │
//! │       └── file valid ────────► decoded value                           │
//! │                                                                         │
//! │  set("cart", value) ─────────► serialize + write, synchronously,       │
//! │                                before the mutating call returns         │
//! │                                                                         │
//! │  remove("user") ─────────────► delete file (absent = ok)               │
//! │                                                                         │
//! │  No schema versioning. No locking: two app instances sharing a root    │
//! │  race last-write-wins, an accepted hazard of the demo.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// The well-known local-storage keys.
pub mod keys {
    /// The authenticated user record.
    pub const USER: &str = "user";
    /// The active role tag, stored separately from the user record.
    pub const ROLE: &str = "role";
    /// Cart line items.
    pub const CART: &str = "cart";
    /// Wishlist entries.
    pub const WISHLIST: &str = "wishlist";
    /// The customer's placed orders (append-only).
    pub const ORDERS: &str = "orders";
}

/// A directory of JSON files, one per key.
///
/// Cloning is cheap (a path); clones share the same directory, like two
/// handles onto the same browser storage.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Opens (creating if needed) a storage directory.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::RootUnavailable {
            path: root.display().to_string(),
            source,
        })?;
        Ok(LocalStorage { root })
    }

    /// The directory backing this storage.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Reads and decodes the value under `key`.
    ///
    /// An absent or malformed value decodes to `T::default()`; malformed
    /// values are logged at warn level and otherwise ignored (there is no
    /// schema versioning to migrate through).
    pub fn get<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.path_for(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(key, %err, "local-storage read failed, using default");
                }
                return T::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "malformed local-storage value, using default");
                T::default()
            }
        }
    }

    /// Serializes and writes `value` under `key`, synchronously.
    ///
    /// Every store mutation in the app goes through here before the
    /// mutating call returns.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;

        let path = self.path_for(key);
        fs::write(&path, json).map_err(|source| StoreError::WriteFailed {
            key: key.to_string(),
            source,
        })?;

        debug!(key, path = %path.display(), "local-storage value written");
        Ok(())
    }

    /// Deletes the value under `key`. Absent keys are fine.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::WriteFailed {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Whether a value exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn temp_storage() -> LocalStorage {
        let dir = std::env::temp_dir().join(format!("bazaar-local-{}", uuid::Uuid::new_v4()));
        LocalStorage::open(dir).unwrap()
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let storage = temp_storage();
        let value = Sample {
            name: "cart".to_string(),
            count: 3,
        };

        storage.set("sample", &value).unwrap();
        let loaded: Sample = storage.get("sample");
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_absent_key_decodes_to_default() {
        let storage = temp_storage();
        let loaded: Sample = storage.get("never-written");
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_malformed_value_decodes_to_default() {
        let storage = temp_storage();
        std::fs::write(storage.root().join("sample.json"), b"{not json!").unwrap();

        let loaded: Sample = storage.get("sample");
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let storage = temp_storage();
        storage
            .set("sample", &Sample::default())
            .unwrap();

        storage.remove("sample").unwrap();
        assert!(!storage.contains("sample"));
        // Second remove of an absent key is fine
        storage.remove("sample").unwrap();
    }

    #[test]
    fn test_optional_values() {
        let storage = temp_storage();

        let loaded: Option<Sample> = storage.get("user");
        assert!(loaded.is_none());

        storage.set("user", &Some(Sample::default())).unwrap();
        let loaded: Option<Sample> = storage.get("user");
        assert!(loaded.is_some());
    }
}
