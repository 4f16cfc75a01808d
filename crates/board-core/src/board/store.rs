//! Board Data Store
//!
//! Ordered columns, each holding ordered items. Every mutation builds a new
//! column array and swaps it in with a single assignment, so holders of an
//! older [`BoardStore::columns`] handle keep a consistent snapshot and
//! [`BoardStore::is_same`] can detect changes by pointer.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::{ensure_default_categories, Column, Item};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardStore {
    columns: Arc<Vec<Column>>,
}

impl BoardStore {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns: Arc::new(columns) }
    }

    /// Shared handle to the current column array
    pub fn columns(&self) -> Arc<Vec<Column>> {
        Arc::clone(&self.columns)
    }

    pub fn as_slice(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when `other` is the exact array currently held
    pub fn is_same(&self, other: &Arc<Vec<Column>>) -> bool {
        Arc::ptr_eq(&self.columns, other)
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    /// Column owning an item
    pub fn owner_of(&self, item_id: &str) -> Option<&Column> {
        owner_of(&self.columns, item_id)
    }

    /// Swap in a whole new column array
    pub fn replace(&mut self, columns: Vec<Column>) {
        self.columns = Arc::new(columns);
    }

    fn rebuild(&mut self, f: impl FnOnce(&mut Vec<Column>) -> bool) -> bool {
        let mut next = (*self.columns).clone();
        if f(&mut next) {
            self.replace(next);
            true
        } else {
            false
        }
    }

    /// Move the column at `from` so it ends up at index `to`.
    ///
    /// `to` is an index into the sequence after removal; values past the end
    /// append.
    pub fn move_column(&mut self, from: usize, to: usize) -> bool {
        self.rebuild(|cols| {
            if from >= cols.len() {
                return false;
            }
            let moved = cols.remove(from);
            let to = to.min(cols.len());
            cols.insert(to, moved);
            true
        })
    }

    /// Move an item within its column. Same index semantics as [`Self::move_column`].
    pub fn move_item_within_column(&mut self, column_id: &str, from: usize, to: usize) -> bool {
        self.rebuild(|cols| {
            let Some(col) = cols.iter_mut().find(|c| c.id == column_id) else {
                return false;
            };
            if from >= col.items.len() {
                return false;
            }
            let moved = col.items.remove(from);
            let to = to.min(col.items.len());
            col.items.insert(to, moved);
            true
        })
    }

    pub fn push_column(&mut self, column: Column) {
        self.rebuild(|cols| {
            cols.push(column);
            true
        });
    }

    pub fn remove_column(&mut self, column_id: &str) -> Option<Column> {
        let index = self.column_index(column_id)?;
        let mut removed = None;
        self.rebuild(|cols| {
            removed = Some(cols.remove(index));
            true
        });
        removed
    }

    /// Apply `f` to one column; no replacement when the column is missing
    pub fn update_column(&mut self, column_id: &str, f: impl FnOnce(&mut Column)) -> bool {
        self.rebuild(|cols| match cols.iter_mut().find(|c| c.id == column_id) {
            Some(col) => {
                f(col);
                true
            }
            None => false,
        })
    }

    /// Apply `f` to one item of one column
    pub fn update_item(&mut self, column_id: &str, item_id: &str, f: impl FnOnce(&mut Item)) -> bool {
        self.rebuild(|cols| {
            let item = cols
                .iter_mut()
                .find(|c| c.id == column_id)
                .and_then(|c| c.items.iter_mut().find(|i| i.id == item_id));
            match item {
                Some(item) => {
                    f(item);
                    true
                }
                None => false,
            }
        })
    }

    pub fn push_item(&mut self, column_id: &str, item: Item) -> bool {
        self.update_column(column_id, |col| col.items.push(item))
    }

    pub fn remove_item(&mut self, column_id: &str, item_id: &str) -> Option<Item> {
        let index = self.column(column_id)?.position_of(item_id)?;
        let mut removed = None;
        self.update_column(column_id, |col| removed = Some(col.items.remove(index)));
        removed
    }

    /// Merge default status categories into every column
    pub fn backfill_categories(&mut self) {
        self.rebuild(|cols| {
            for col in cols.iter_mut() {
                let categories = std::mem::take(&mut col.status_categories);
                col.status_categories = ensure_default_categories(categories);
            }
            true
        });
    }
}

/// Column owning an item, searched across a column slice
pub fn owner_of<'a>(columns: &'a [Column], item_id: &str) -> Option<&'a Column> {
    columns.iter().find(|c| c.contains(item_id))
}
