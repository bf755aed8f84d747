use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStorage;

/// In-memory SessionStorage for tests and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.load("k").is_none());

        storage.save("k", "v1");
        storage.save("k", "v2");
        assert_eq!(storage.load("k").as_deref(), Some("v2"));

        storage.remove("k");
        assert!(storage.load("k").is_none());
    }

    #[test]
    fn test_clones_share_values() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.save("k", "v");
        assert_eq!(b.load("k").as_deref(), Some("v"));
    }
}
