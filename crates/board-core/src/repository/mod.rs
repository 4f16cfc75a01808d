//! Repository Layer
//!
//! Snapshot persistence over an opaque string key/value store.
//! The browser backs it with local storage; tests use [`MemoryStore`].

mod traits;
mod memory;
mod page_repo;
mod user_repo;
mod preference_repo;

#[cfg(test)]
mod tests;

pub use traits::{RepositoryError, RepositoryResult, SnapshotStore};
pub use memory::MemoryStore;
pub use page_repo::PageRepository;
pub use user_repo::UserRepository;
pub use preference_repo::PreferenceRepository;
