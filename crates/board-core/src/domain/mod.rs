//! Domain Layer
//!
//! Contains all board entities and core abstractions.
//! This layer has NO browser dependencies (serde for snapshots only).

mod entity;
mod status;
mod item;
mod column;
mod page;
mod footer;
mod seed;

pub use entity::{unique_id, ColumnId, DomainError, DomainResult, Entity, ItemId};
pub use status::{default_categories, ensure_default_categories, StatusBadge, StatusCategory, TailwindColor};
pub use item::{Item, ItemField, ItemKind};
pub use column::{Column, ColumnColor};
pub use page::{PageConfig, PageData, PageField};
pub use footer::{Connection, ConnectionKind, DocumentationLink, FooterMetric, LinkField, MetricColor, MetricField};
pub use seed::{initial_columns, initial_metrics};
