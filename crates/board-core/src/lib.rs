//! Status Board Core
//!
//! Layered architecture:
//! - domain: Board entities (columns, items, status categories, pages)
//! - board: Board store and gated edit operations
//! - ledger: Per-page change history
//! - access: Local accounts and page permissions
//! - dnd: Drag gesture tracking, drop resolution and reorder commits
//! - repository: Snapshot persistence over an opaque key/value store

pub mod access;
pub mod board;
pub mod config;
pub mod dnd;
pub mod domain;
pub mod ledger;
pub mod pages;
pub mod repository;

pub use access::{AccessGate, AuthError, PagePermission, UserAccount, UserDirectory};
pub use board::{BoardEditor, BoardStore};
pub use dnd::{
    Bounds, DndController, DndState, DragKind, DragPhase, DragStart, DragView, DropIndicator,
    DropOutcome, Gesture, IndicatorPosition, PointerOrigin,
};
pub use domain::{
    Column, ColumnColor, ColumnId, DomainError, DomainResult, Item, ItemField, ItemId, ItemKind,
    PageConfig, PageData, StatusCategory, TailwindColor,
};
pub use ledger::{ChangeAction, ChangeLedger, ChangeRecord, ChangeType};
pub use pages::PageBook;
