//! Page Repository
//!
//! Persists every page (board + change history) and the open page id.

use log::warn;

use super::traits::{RepositoryResult, SnapshotStore};
use crate::config::{CURRENT_PAGE_KEY, PAGES_KEY};
use crate::domain::PageData;
use crate::pages::PageBook;

pub struct PageRepository<S> {
    store: S,
}

impl<S: SnapshotStore> PageRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored book; `Ok(None)` when nothing was saved yet
    pub fn load(&self) -> RepositoryResult<Option<PageBook>> {
        let pages: Option<Vec<PageData>> = self.store.read_json(PAGES_KEY)?;
        let Some(pages) = pages else {
            return Ok(None);
        };
        let current = self.store.read(CURRENT_PAGE_KEY)?;
        Ok(Some(PageBook::new(pages, current)))
    }

    /// Load the stored book, or seed a template page when there is none or
    /// the snapshot cannot be read
    pub fn load_or_seed(&self, now_ms: i64) -> PageBook {
        match self.load() {
            Ok(Some(book)) if !book.pages().is_empty() => book,
            Ok(_) => PageBook::seeded(now_ms),
            Err(e) => {
                warn!("[REPO] Page snapshot unreadable, starting fresh: {}", e);
                PageBook::seeded(now_ms)
            }
        }
    }

    pub fn save(&self, book: &PageBook) -> RepositoryResult<()> {
        self.store.write_json(PAGES_KEY, &book.pages())?;
        match book.current_id() {
            Some(id) => self.store.write(CURRENT_PAGE_KEY, id),
            None => self.store.remove(CURRENT_PAGE_KEY),
        }
    }
}
