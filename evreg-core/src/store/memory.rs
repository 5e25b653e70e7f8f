//! In-memory storage area, used as a stand-in for the file backend in tests
//! and ephemeral runs.

use std::collections::HashMap;
use std::sync::Mutex;

use super::StorageArea;
use crate::error::{EvregError, EvregResult};

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageArea for MemoryStorage {
    fn read(&self, key: &str) -> EvregResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| EvregError::Storage("storage mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> EvregResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| EvregError::Storage("storage mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
