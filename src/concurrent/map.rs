//! A deliberately simplistic shared map. `set` and `get` are fine;
//! `set_if_absent` is broken on purpose and exists to be caught by the
//! `map_ops` fuzz target and the stress test.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct SharedMap {
    data: RwLock<HashMap<String, String>>,
}

impl SharedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: &str, value: &str) {
        let mut data = self
            .data
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        data.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        data.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
        data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Broken: the read lock is released before the write lock is taken, so
    /// two concurrent callers can both see the key absent and both insert.
    /// Returns whether this caller believed it inserted first.
    pub fn set_if_absent(&self, key: &str, value: &str) -> bool {
        let present = {
            let data = self.data.read().unwrap_or_else(PoisonError::into_inner);
            data.contains_key(key)
        };
        // lost-update window lives here
        if present {
            return false;
        }
        let mut data = self
            .data
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        data.insert(key.to_string(), value.to_string());
        true
    }
}
