//! Page Book
//!
//! The ordered list of pages plus the current selection. The first page is
//! the template: new pages start as a copy of its board.

use log::{info, warn};

use crate::board::BoardStore;
use crate::config::{NEW_PAGE_DESCRIPTION, NEW_PAGE_FOOTER, TEMPLATE_FOOTER, TEMPLATE_IDENTIFIER, TEMPLATE_TITLE};
use crate::domain::{initial_columns, initial_metrics, unique_id, DomainError, DomainResult, PageConfig, PageData};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageBook {
    pages: Vec<PageData>,
    current: Option<String>,
}

impl PageBook {
    /// Build from a stored snapshot, repairing what a stale snapshot may lack
    pub fn new(pages: Vec<PageData>, current: Option<String>) -> Self {
        let mut book = Self { pages, current };
        book.normalize();
        book
    }

    /// A book holding only a template page built from the initial columns
    pub fn seeded(now_ms: i64) -> Self {
        let config = PageConfig::new(TEMPLATE_IDENTIFIER, TEMPLATE_TITLE, "").with_footer(TEMPLATE_FOOTER);
        let mut page = PageData::new(format!("page-{}", now_ms), config, BoardStore::new(initial_columns()), now_ms);
        page.footer_metrics = initial_metrics();
        Self::new(vec![page], None)
    }

    fn normalize(&mut self) {
        if let Some(template) = self.pages.first_mut() {
            if template.page_config.identifier != TEMPLATE_IDENTIFIER {
                template.page_config.identifier = TEMPLATE_IDENTIFIER.to_string();
                template.page_config.title = TEMPLATE_TITLE.to_string();
            }
        }
        for page in self.pages.iter_mut() {
            page.columns.backfill_categories();
        }
        let dangling = self
            .current
            .as_deref()
            .map_or(false, |id| !self.pages.iter().any(|p| p.id == id));
        if dangling {
            warn!("[PAGES] Stored selection {:?} no longer exists", self.current);
            self.current = None;
        }
        if self.current.is_none() {
            self.current = self.pages.first().map(|p| p.id.clone());
        }
    }

    pub fn pages(&self) -> &[PageData] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<PageData> {
        self.pages
    }

    pub fn page(&self, page_id: &str) -> Option<&PageData> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    pub fn is_template(&self, page_id: &str) -> bool {
        self.pages.first().map_or(false, |p| p.id == page_id)
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current(&self) -> Option<&PageData> {
        let id = self.current.as_deref()?;
        self.page(id)
    }

    pub fn current_mut(&mut self) -> Option<&mut PageData> {
        let id = self.current.as_deref()?;
        self.pages.iter_mut().find(|p| p.id == id)
    }

    pub fn select_page(&mut self, page_id: &str) -> DomainResult<()> {
        let page = self
            .pages
            .iter_mut()
            .find(|p| p.id == page_id)
            .ok_or_else(|| DomainError::NotFound(format!("page {}", page_id)))?;
        page.columns.backfill_categories();
        self.current = Some(page_id.to_string());
        info!("[PAGES] Selected page {}", page_id);
        Ok(())
    }

    /// Admin only. Copies the template board (or the initial columns when
    /// there is no page yet) and selects the new page.
    pub fn create_page(&mut self, identifier: &str, title: &str, is_admin: bool, now_ms: i64) -> DomainResult<String> {
        if !is_admin {
            return Err(DomainError::PermissionDenied("only administrators create pages".to_string()));
        }
        let identifier = identifier.trim();
        let title = title.trim();
        if identifier.is_empty() || title.is_empty() {
            return Err(DomainError::InvalidInput("identifier and title are required".to_string()));
        }

        let (columns, metrics, links, connections) = match self.pages.first() {
            Some(template) => (
                template.columns.as_slice().to_vec(),
                template.footer_metrics.clone(),
                template.documentation_links.clone(),
                template.connections.clone(),
            ),
            None => (initial_columns(), initial_metrics(), Vec::new(), Vec::new()),
        };
        let mut board = BoardStore::new(columns);
        board.backfill_categories();

        let id = unique_id("page", now_ms, |candidate| self.page(candidate).is_some());
        let config = PageConfig::new(identifier, title, NEW_PAGE_DESCRIPTION).with_footer(NEW_PAGE_FOOTER);
        let mut page = PageData::new(id.clone(), config, board, now_ms);
        page.footer_metrics = metrics;
        page.documentation_links = links;
        page.connections = connections;
        self.pages.push(page);
        self.current = Some(id.clone());
        info!("[PAGES] Created page {} ({})", id, identifier);
        Ok(id)
    }

    /// Admin only. Deleting the open page selects the first remaining one.
    pub fn delete_page(&mut self, page_id: &str, is_admin: bool) -> DomainResult<PageData> {
        if !is_admin {
            return Err(DomainError::PermissionDenied("only administrators delete pages".to_string()));
        }
        let index = self
            .pages
            .iter()
            .position(|p| p.id == page_id)
            .ok_or_else(|| DomainError::NotFound(format!("page {}", page_id)))?;
        let removed = self.pages.remove(index);
        if self.current.as_deref() == Some(page_id) {
            self.current = self.pages.first().map(|p| p.id.clone());
        }
        // a deleted template hands the role to the next page
        self.normalize();
        info!("[PAGES] Deleted page {}", page_id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Column, ColumnColor, Connection, ConnectionKind, DocumentationLink, StatusCategory, TailwindColor};

    fn page(id: &str, identifier: &str) -> PageData {
        let mut col = Column::new(format!("{}-col", id), "COL", ColumnColor::Blue);
        col.status_categories = vec![StatusCategory::new("custom", "Custom", TailwindColor::Cyan)];
        let config = PageConfig::new(identifier, identifier.to_uppercase(), "");
        PageData::new(id, config, BoardStore::new(vec![col]), 0)
    }

    #[test]
    fn test_first_page_forced_to_template() {
        let book = PageBook::new(vec![page("p1", "roadmap"), page("p2", "other")], None);
        assert_eq!(book.pages()[0].page_config.identifier, "plantilla");
        assert_eq!(book.pages()[0].page_config.title, "PLANTILLA");
        assert_eq!(book.pages()[1].page_config.identifier, "other");
        assert_eq!(book.current_id(), Some("p1"));
        assert!(book.is_template("p1"));
    }

    #[test]
    fn test_load_backfills_categories() {
        let book = PageBook::new(vec![page("p1", "plantilla")], None);
        let ids: Vec<&str> = book.pages()[0].columns.as_slice()[0]
            .status_categories
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["custom", "productivo", "endev", "upgrade", "detenido", "terminado"]);
    }

    #[test]
    fn test_dangling_selection_falls_back() {
        let book = PageBook::new(vec![page("p1", "plantilla")], Some("gone".to_string()));
        assert_eq!(book.current_id(), Some("p1"));
    }

    #[test]
    fn test_seeded_book() {
        let book = PageBook::seeded(1_000);
        assert_eq!(book.pages().len(), 1);
        let current = book.current().unwrap();
        assert_eq!(current.page_config.identifier, "plantilla");
        assert_eq!(current.columns.len(), initial_columns().len());
        assert_eq!(current.footer_metrics, initial_metrics());
        assert_eq!(current.page_config.footer_title, "SIDON-AXESS");
    }

    #[test]
    fn test_create_page_copies_template() {
        let mut book = PageBook::new(vec![page("p1", "plantilla")], None);
        let id = book.create_page("OPS-2026", "Operaciones", true, 42).unwrap();
        assert_eq!(id, "page-42");
        assert_eq!(book.current_id(), Some("page-42"));

        let created = book.current().unwrap();
        assert_eq!(created.page_config.description, NEW_PAGE_DESCRIPTION);
        assert!(created.change_history.is_empty());
        assert_eq!(created.columns.as_slice()[0].id, "p1-col");

        assert_eq!(created.page_config.footer_title, "Nuevo Sistema");

        // pages are independent after the copy
        book.current_mut().unwrap().columns.remove_column("p1-col");
        assert_eq!(book.page("p1").unwrap().columns.len(), 1);
    }

    #[test]
    fn test_create_page_copies_template_footer_sections() {
        let mut template = page("p1", "plantilla");
        template.footer_metrics = initial_metrics();
        template.documentation_links.push(DocumentationLink {
            id: "doc-1".to_string(),
            title: "Manual".to_string(),
            url: "docs.example.com".to_string(),
            ..DocumentationLink::default()
        });
        template.connections.push(Connection {
            id: "k1".to_string(),
            from_item_id: "c1".to_string(),
            from_column_id: "citas".to_string(),
            to_item_id: "a1".to_string(),
            to_column_id: "axess".to_string(),
            kind: ConnectionKind::Dependency,
        });
        let mut book = PageBook::new(vec![template], None);
        book.create_page("OPS", "Operaciones", true, 9).unwrap();

        let created = book.current().unwrap();
        assert_eq!(created.footer_metrics.len(), 4);
        assert_eq!(created.documentation_links[0].title, "Manual");
        assert_eq!(created.connections[0].kind, ConnectionKind::Dependency);
        book.current_mut().unwrap().footer_metrics.clear();
        assert_eq!(book.page("p1").unwrap().footer_metrics.len(), 4);
    }

    #[test]
    fn test_create_page_requires_admin_and_names() {
        let mut book = PageBook::new(vec![page("p1", "plantilla")], None);
        assert!(matches!(
            book.create_page("X", "Y", false, 1),
            Err(DomainError::PermissionDenied(_))
        ));
        assert!(matches!(book.create_page(" ", "Y", true, 1), Err(DomainError::InvalidInput(_))));
        assert_eq!(book.pages().len(), 1);
    }

    #[test]
    fn test_create_page_id_collision() {
        let mut book = PageBook::new(vec![page("page-7", "plantilla")], None);
        let id = book.create_page("A", "A", true, 7).unwrap();
        assert_eq!(id, "page-7-1");
    }

    #[test]
    fn test_delete_current_selects_first() {
        let mut book = PageBook::new(vec![page("p1", "plantilla"), page("p2", "b"), page("p3", "c")], None);
        book.select_page("p3").unwrap();
        book.delete_page("p3", true).unwrap();
        assert_eq!(book.current_id(), Some("p1"));

        book.select_page("p2").unwrap();
        book.delete_page("p1", true).unwrap();
        assert_eq!(book.current_id(), Some("p2"));
        assert_eq!(book.pages()[0].page_config.identifier, "plantilla");
    }

    #[test]
    fn test_delete_requires_admin() {
        let mut book = PageBook::new(vec![page("p1", "plantilla")], None);
        assert!(book.delete_page("p1", false).is_err());
        assert!(matches!(book.delete_page("nope", true), Err(DomainError::NotFound(_))));
        book.delete_page("p1", true).unwrap();
        assert_eq!(book.current(), None);
    }

    #[test]
    fn test_select_unknown_page() {
        let mut book = PageBook::new(vec![page("p1", "plantilla")], None);
        assert!(book.select_page("p9").is_err());
        assert_eq!(book.current_id(), Some("p1"));
    }
}
