//! In-memory snapshot store, for tests and hosts without browser storage.

use std::cell::RefCell;
use std::collections::HashMap;

use super::traits::{RepositoryResult, SnapshotStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> RepositoryResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> RepositoryResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> RepositoryResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
