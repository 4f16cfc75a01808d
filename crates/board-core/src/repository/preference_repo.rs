//! Preference Repository
//!
//! Small UI flags that survive a reload.

use super::traits::{RepositoryResult, SnapshotStore};
use crate::config::SIDEBAR_KEY;

pub struct PreferenceRepository<S> {
    store: S,
}

impl<S: SnapshotStore> PreferenceRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Missing or malformed flags read as expanded
    pub fn sidebar_collapsed(&self) -> bool {
        self.store.read_json::<bool>(SIDEBAR_KEY).ok().flatten().unwrap_or(false)
    }

    pub fn set_sidebar_collapsed(&self, collapsed: bool) -> RepositoryResult<()> {
        self.store.write_json(SIDEBAR_KEY, &collapsed)
    }
}
