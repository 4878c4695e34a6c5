//! Persistent store: three independent records (identity, saved colleges,
//! theme), each read once at start-up and rewritten in full on every change.
//!
//! Backends implement `KeyValueStore` over raw strings. Typed access goes
//! through `load_record` / `save_record`, which wrap every value in a
//! versioned envelope.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

pub mod file;

pub use file::FileStore;

/// Current envelope format. Bump when a record's `data` shape changes.
pub const RECORD_VERSION: u32 = 1;

pub const USER_KEY: &str = "user";
pub const SAVED_COLLEGES_KEY: &str = "saved_colleges";
pub const THEME_KEY: &str = "theme";

/// Raw key/value persistence. Writes are last-write-wins.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn clear(&self, key: &str) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    updated_at: DateTime<Utc>,
    data: T,
}

/// Reads a typed record. A record that is missing, from another version, or
/// unparseable is reported as absent; only backend failures are errors.
pub fn load_record<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store
        .get(key)
        .with_context(|| format!("Failed to read '{key}' record"))?
    else {
        return Ok(None);
    };

    let envelope: Envelope<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("Ignoring unreadable '{key}' record: {e}");
            return Ok(None);
        }
    };

    if envelope.version != RECORD_VERSION {
        warn!(
            "Ignoring '{key}' record with version {} (expected {RECORD_VERSION})",
            envelope.version
        );
        return Ok(None);
    }

    match serde_json::from_value(envelope.data) {
        Ok(data) => Ok(Some(data)),
        Err(e) => {
            warn!("Ignoring malformed '{key}' record: {e}");
            Ok(None)
        }
    }
}

/// Writes a typed record in full.
pub fn save_record<T: Serialize>(store: &dyn KeyValueStore, key: &str, data: &T) -> Result<()> {
    let envelope = Envelope {
        version: RECORD_VERSION,
        updated_at: Utc::now(),
        data,
    };
    let serialized = serde_json::to_string(&envelope)
        .with_context(|| format!("Failed to serialize '{key}' record"))?;
    store
        .set(key, &serialized)
        .with_context(|| format!("Failed to write '{key}' record"))
}

pub fn clear_record(store: &dyn KeyValueStore, key: &str) -> Result<()> {
    store
        .clear(key)
        .with_context(|| format!("Failed to clear '{key}' record"))
}

/// In-process store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, std::collections::HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{Identity, Theme};

    #[test]
    fn test_record_is_wrapped_in_versioned_envelope() {
        let store = MemoryStore::new();
        save_record(&store, THEME_KEY, &Theme::Dark).unwrap();

        let raw = store.get(THEME_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["data"], "dark");
        assert!(json["updated_at"].is_string());
    }

    #[test]
    fn test_load_returns_saved_value() {
        let store = MemoryStore::new();
        let identity = Identity {
            name: "Priya".to_string(),
            email: "priya@example.org".to_string(),
        };
        save_record(&store, USER_KEY, &identity).unwrap();

        let loaded: Option<Identity> = load_record(&store, USER_KEY).unwrap();
        assert_eq!(loaded, Some(identity));
    }

    #[test]
    fn test_missing_record_is_absent() {
        let store = MemoryStore::new();
        let loaded: Option<Theme> = load_record(&store, THEME_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_unversioned_legacy_value_is_ignored() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        let loaded: Option<Theme> = load_record(&store, THEME_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_future_version_is_ignored() {
        let store = MemoryStore::new();
        store
            .set(
                THEME_KEY,
                r#"{"version": 2, "updated_at": "2026-01-01T00:00:00Z", "data": "dark"}"#,
            )
            .unwrap();
        let loaded: Option<Theme> = load_record(&store, THEME_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_wrong_data_shape_is_ignored() {
        let store = MemoryStore::new();
        store
            .set(
                THEME_KEY,
                r#"{"version": 1, "updated_at": "2026-01-01T00:00:00Z", "data": "sepia"}"#,
            )
            .unwrap();
        let loaded: Option<Theme> = load_record(&store, THEME_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_clear_removes_only_that_key() {
        let store = MemoryStore::new();
        save_record(&store, THEME_KEY, &Theme::Dark).unwrap();
        save_record(&store, SAVED_COLLEGES_KEY, &Vec::<String>::new()).unwrap();

        clear_record(&store, SAVED_COLLEGES_KEY).unwrap();

        assert!(store.get(SAVED_COLLEGES_KEY).unwrap().is_none());
        assert!(store.get(THEME_KEY).unwrap().is_some());
    }
}
