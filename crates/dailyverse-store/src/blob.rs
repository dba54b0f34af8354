//! JSON encoding of store contents

use crate::kv::{KeyValueStore, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Load and decode a blob. Missing, unreadable or corrupt blobs decode as empty.
pub fn load_blob<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let bytes = match store.get(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return T::default(),
        Err(e) => {
            warn!("Failed to read '{}' from store, starting empty: {}", key, e);
            return T::default();
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            warn!("Corrupt '{}' blob ({} bytes), starting empty: {}", key, bytes.len(), e);
            T::default()
        }
    }
}

pub fn save_blob<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
{
    let json = serde_json::to_vec(value)?;
    store.set(key, &json)
}
