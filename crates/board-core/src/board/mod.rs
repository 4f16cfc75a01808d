//! Board Layer
//!
//! The column store and the gated edit surface built on it.

mod store;
mod editor;

pub use store::{owner_of, BoardStore};
pub use editor::BoardEditor;
