//! User Repository
//!
//! Account list and the signed-in session email.

use log::warn;

use super::traits::{RepositoryResult, SnapshotStore};
use crate::access::UserDirectory;
use crate::config::{SESSION_KEY, USERS_KEY};

pub struct UserRepository<S> {
    store: S,
}

impl<S: SnapshotStore> UserRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored accounts; the seeded admin when none are stored or the list is unreadable
    pub fn load(&self) -> UserDirectory {
        match self.store.read_json::<UserDirectory>(USERS_KEY) {
            Ok(Some(directory)) if !directory.users().is_empty() => directory,
            Ok(_) => UserDirectory::default(),
            Err(e) => {
                warn!("[REPO] Account list unreadable, reseeding: {}", e);
                UserDirectory::default()
            }
        }
    }

    pub fn save(&self, directory: &UserDirectory) -> RepositoryResult<()> {
        self.store.write_json(USERS_KEY, directory)
    }

    pub fn load_session(&self) -> RepositoryResult<Option<String>> {
        Ok(self.store.read(SESSION_KEY)?.filter(|email| !email.is_empty()))
    }

    pub fn save_session(&self, email: &str) -> RepositoryResult<()> {
        self.store.write(SESSION_KEY, email)
    }

    pub fn clear_session(&self) -> RepositoryResult<()> {
        self.store.remove(SESSION_KEY)
    }
}
