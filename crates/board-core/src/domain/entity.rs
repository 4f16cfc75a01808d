//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all board entities.
//! Every entity carries a string id that never changes once created.

use thiserror::Error;

/// Column identifier (e.g. `citas`, `col-1718000000000`)
pub type ColumnId = String;
/// Item identifier, unique across the whole page
pub type ItemId = String;

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

/// Build a `prefix-<millis>` id, suffixed when the plain form is already taken.
pub fn unique_id(prefix: &str, now_ms: i64, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{}-{}", prefix, now_ms);
    if !taken(&base) {
        return base;
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_id_plain() {
        assert_eq!(unique_id("col", 42, |_| false), "col-42");
    }

    #[test]
    fn test_unique_id_suffixes_on_collision() {
        let taken = ["item-7", "item-7-1"];
        assert_eq!(unique_id("item", 7, |id| taken.contains(&id)), "item-7-2");
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::NotFound("column citas".to_string());
        assert_eq!(err.to_string(), "Not found: column citas");
    }
}
