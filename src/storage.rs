//! Browser Storage
//!
//! `localStorage` behind the repository key/value interface.

use board_core::repository::{RepositoryError, RepositoryResult, SnapshotStore};
use wasm_bindgen::JsValue;

pub struct LocalStorage {
    storage: web_sys::Storage,
}

/// `None` when the window has no storage (sandboxed frames, some privacy modes)
pub fn local_storage() -> Option<LocalStorage> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    Some(LocalStorage { storage })
}

fn backend(err: JsValue) -> RepositoryError {
    RepositoryError::Backend(format!("{:?}", err))
}

impl SnapshotStore for LocalStorage {
    fn read(&self, key: &str) -> RepositoryResult<Option<String>> {
        self.storage.get_item(key).map_err(backend)
    }

    fn write(&self, key: &str, value: &str) -> RepositoryResult<()> {
        self.storage.set_item(key, value).map_err(backend)
    }

    fn remove(&self, key: &str) -> RepositoryResult<()> {
        self.storage.remove_item(key).map_err(backend)
    }
}
