//! Repository Layer - Core Traits
//!
//! Defines the abstract key/value interface the repositories persist through.
//! Implementations can use browser local storage, in-memory maps, etc.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store refused the operation (quota, privacy mode, ...)
    #[error("Storage backend error: {0}")]
    Backend(String),
    #[error("Failed to encode {key}: {message}")]
    Encode { key: String, message: String },
    #[error("Failed to decode {key}: {message}")]
    Decode { key: String, message: String },
}

/// Raw string storage, addressed by key
pub trait SnapshotStore {
    fn read(&self, key: &str) -> RepositoryResult<Option<String>>;

    fn write(&self, key: &str, value: &str) -> RepositoryResult<()>;

    fn remove(&self, key: &str) -> RepositoryResult<()>;

    /// Read and decode a JSON value; `Ok(None)` when the key is absent
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> RepositoryResult<Option<T>>
    where
        Self: Sized,
    {
        match self.read(key)? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| RepositoryError::Decode {
                key: key.to_string(),
                message: e.to_string(),
            }),
            None => Ok(None),
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> RepositoryResult<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value).map_err(|e| RepositoryError::Encode {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.write(key, &raw)
    }
}

impl<S: SnapshotStore> SnapshotStore for &S {
    fn read(&self, key: &str) -> RepositoryResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> RepositoryResult<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> RepositoryResult<()> {
        (**self).remove(key)
    }
}
