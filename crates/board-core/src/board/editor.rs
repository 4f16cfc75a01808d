//! Board Editor
//!
//! Gated edit operations on one page. Each entry point checks the edit
//! permission first and silently does nothing without it. Field edits,
//! status changes, creations/deletions and footer metric edits are written
//! to the page ledger; reorders are handled by the drag-and-drop executor
//! and are not.

use log::debug;

use crate::access::AccessGate;
use crate::config::{
    FALLBACK_STATUS, NEW_COLUMN_DESCRIPTION, NEW_COLUMN_TITLE, NEW_ITEM_LABEL, NEW_METRIC_LABEL, NEW_METRIC_VALUE,
    NEW_SECTION_LABEL,
};
use crate::domain::{
    default_categories, unique_id, Column, ColumnColor, ColumnId, DocumentationLink, FooterMetric, Item, ItemField,
    ItemId, ItemKind, LinkField, MetricColor, MetricField, PageData, PageField, StatusCategory,
};
use crate::ledger::{format_date_value, ChangeAction, ChangeDetails, ChangeType};

/// Edit session over one page
pub struct BoardEditor<'a> {
    page: &'a mut PageData,
    can_edit: bool,
    now_ms: i64,
}

impl<'a> BoardEditor<'a> {
    pub fn new(page: &'a mut PageData, gate: &impl AccessGate, now_ms: i64) -> Self {
        Self {
            page,
            can_edit: gate.can_edit(),
            now_ms,
        }
    }

    fn guard(&self, op: &str) -> bool {
        if !self.can_edit {
            debug!("[BOARD] {} ignored: page {} is read-only", op, self.page.id);
        }
        self.can_edit
    }

    fn item_taken(&self, id: &str) -> bool {
        self.page.columns.owner_of(id).is_some()
    }

    fn group_details(column: &Column) -> ChangeDetails {
        ChangeDetails {
            group_name: Some(column.title.clone()),
            group_description: Some(column.description.clone()),
            ..ChangeDetails::default()
        }
    }

    fn log(&mut self, change_type: ChangeType, action: ChangeAction, description: String, details: ChangeDetails) {
        self.page
            .change_history
            .record(self.now_ms, change_type, action, description, details);
    }

    // ========================
    // Page header
    // ========================

    pub fn update_page_config(&mut self, field: PageField, value: String) -> bool {
        if !self.guard("update_page_config") {
            return false;
        }
        self.page.page_config.set_field(field, value);
        true
    }

    // ========================
    // Columns
    // ========================

    /// Append an empty column; returns its id
    pub fn add_column(&mut self) -> Option<ColumnId> {
        if !self.guard("add_column") {
            return None;
        }
        let id = unique_id("col", self.now_ms, |id| self.page.columns.column(id).is_some());
        let column = Column {
            id: id.clone(),
            title: NEW_COLUMN_TITLE.to_string(),
            description: NEW_COLUMN_DESCRIPTION.to_string(),
            color: ColumnColor::Slate,
            items: Vec::new(),
            status_categories: default_categories(),
            footer_text: None,
        };
        let details = Self::group_details(&column);
        self.page.columns.push_column(column);
        self.log(ChangeType::Column, ChangeAction::Created, "Nuevo grupo creado".to_string(), details);
        Some(id)
    }

    /// Remove a column together with its items
    pub fn delete_column(&mut self, column_id: &str) -> bool {
        if !self.guard("delete_column") {
            return false;
        }
        let Some(removed) = self.page.columns.remove_column(column_id) else {
            return false;
        };
        let description = format!("Grupo \"{}\" eliminado con {} tarjetas", removed.title, removed.items.len());
        self.log(ChangeType::Column, ChangeAction::Deleted, description, Self::group_details(&removed));
        true
    }

    pub fn update_column_title(&mut self, column_id: &str, title: String) -> bool {
        if !self.guard("update_column_title") {
            return false;
        }
        self.page.columns.update_column(column_id, |c| c.title = title)
    }

    pub fn update_column_description(&mut self, column_id: &str, description: String) -> bool {
        if !self.guard("update_column_description") {
            return false;
        }
        self.page.columns.update_column(column_id, |c| c.description = description)
    }

    pub fn update_column_color(&mut self, column_id: &str, color: ColumnColor) -> bool {
        if !self.guard("update_column_color") {
            return false;
        }
        self.page.columns.update_column(column_id, |c| c.color = color)
    }

    /// Replace a column's status vocabulary. Items keep their status ids even
    /// when the category they point at is gone.
    pub fn set_status_categories(&mut self, column_id: &str, categories: Vec<StatusCategory>) -> bool {
        if !self.guard("set_status_categories") {
            return false;
        }
        self.page.columns.update_column(column_id, |c| c.status_categories = categories)
    }

    // ========================
    // Items
    // ========================

    /// Append a leaf card using the column's first status; returns its id
    pub fn add_item(&mut self, column_id: &str) -> Option<ItemId> {
        if !self.guard("add_item") {
            return None;
        }
        let column = self.page.columns.column(column_id)?;
        let status = column.default_status().unwrap_or(FALLBACK_STATUS).to_string();
        let details = ChangeDetails {
            item_name: Some(NEW_ITEM_LABEL.to_string()),
            ..Self::group_details(column)
        };
        let description = format!("Nueva tarjeta creada en \"{}\"", column.title);
        let id = unique_id("item", self.now_ms, |id| self.item_taken(id));
        self.page.columns.push_item(column_id, Item::leaf(id.clone(), NEW_ITEM_LABEL, status));
        self.log(ChangeType::Item, ChangeAction::Created, description, details);
        Some(id)
    }

    /// Append a section divider; dividers are not logged
    pub fn add_section_header(&mut self, column_id: &str) -> Option<ItemId> {
        if !self.guard("add_section_header") {
            return None;
        }
        self.page.columns.column(column_id)?;
        let id = unique_id("section", self.now_ms, |id| self.item_taken(id));
        self.page
            .columns
            .push_item(column_id, Item::section_header(id.clone(), NEW_SECTION_LABEL));
        Some(id)
    }

    pub fn delete_item(&mut self, column_id: &str, item_id: &str) -> bool {
        if !self.guard("delete_item") {
            return false;
        }
        let Some(column) = self.page.columns.column(column_id) else {
            return false;
        };
        let details = Self::group_details(column);
        let title = column.title.clone();
        let Some(removed) = self.page.columns.remove_item(column_id, item_id) else {
            return false;
        };
        if removed.kind != ItemKind::SectionHeader {
            let details = ChangeDetails {
                item_name: Some(removed.label.clone()),
                ..details
            };
            self.log(
                ChangeType::Item,
                ChangeAction::Deleted,
                format!("Tarjeta eliminada de \"{}\"", title),
                details,
            );
        }
        true
    }

    /// Edit label, description or date. Date edits are logged with the
    /// previous and new dates.
    pub fn update_item(&mut self, column_id: &str, item_id: &str, field: ItemField, value: String) -> bool {
        if !self.guard("update_item") {
            return false;
        }
        let Some(column) = self.page.columns.column(column_id) else {
            return false;
        };
        let Some(item) = column.item(item_id) else {
            return false;
        };
        let record = (field == ItemField::Date).then(|| {
            let details = ChangeDetails {
                item_name: Some(item.label.clone()),
                previous_value: Some(format_date_value(item.date.as_deref())),
                new_value: Some(format_date_value(Some(&value))),
                ..Self::group_details(column)
            };
            let description = format!("Fecha actualizada en \"{}\" para \"{}\"", column.title, item.label);
            (description, details)
        });
        self.page.columns.update_item(column_id, item_id, |i| i.set_field(field, value));
        if let Some((description, details)) = record {
            self.log(ChangeType::Item, ChangeAction::Updated, description, details);
        }
        true
    }

    /// Point an item at a status category (logged with previous/new labels)
    pub fn set_item_status(&mut self, column_id: &str, item_id: &str, status_id: &str) -> bool {
        if !self.guard("set_item_status") {
            return false;
        }
        let Some(column) = self.page.columns.column(column_id) else {
            return false;
        };
        let Some(item) = column.item(item_id) else {
            return false;
        };
        let previous = item.status.as_deref().map(|s| column.badge(s).label().to_string());
        let details = ChangeDetails {
            item_name: Some(item.label.clone()),
            previous_value: previous,
            new_value: Some(column.badge(status_id).label().to_string()),
            ..Self::group_details(column)
        };
        let description = format!("Estado actualizado en \"{}\" para \"{}\"", column.title, item.label);
        let status = status_id.to_string();
        self.page.columns.update_item(column_id, item_id, |i| i.status = Some(status));
        self.log(ChangeType::Status, ChangeAction::Updated, description, details);
        true
    }

    /// Advance to the next category of the column, wrapping around.
    /// An unknown status moves to the first category; external cards and
    /// link cards never cycle.
    pub fn cycle_item_status(&mut self, column_id: &str, item_id: &str) -> bool {
        if !self.guard("cycle_item_status") {
            return false;
        }
        let next = {
            let Some(column) = self.page.columns.column(column_id) else {
                return false;
            };
            let Some(item) = column.item(item_id) else {
                return false;
            };
            let categories = &column.status_categories;
            if item.kind == ItemKind::External || item.is_external_link || categories.is_empty() {
                return false;
            }
            let next_index = item
                .status
                .as_deref()
                .and_then(|s| categories.iter().position(|c| c.id == s))
                .map_or(0, |i| (i + 1) % categories.len());
            categories[next_index].id.clone()
        };
        self.set_item_status(column_id, item_id, &next)
    }

    // ========================
    // Footer metrics
    // ========================

    /// Append a placeholder metric; returns its id
    pub fn add_metric(&mut self) -> Option<String> {
        if !self.guard("add_metric") {
            return None;
        }
        let metrics = &self.page.footer_metrics;
        let id = unique_id("m", self.now_ms, |id| metrics.iter().any(|m| m.id == id));
        self.page
            .footer_metrics
            .push(FooterMetric::new(id.clone(), NEW_METRIC_LABEL, NEW_METRIC_VALUE, MetricColor::White));
        let details = ChangeDetails {
            new_value: Some(NEW_METRIC_LABEL.to_string()),
            ..ChangeDetails::default()
        };
        self.log(ChangeType::Metric, ChangeAction::Created, "Nueva métrica creada".to_string(), details);
        Some(id)
    }

    /// Edit a metric's label or value; logged with the previous and new text
    pub fn update_metric(&mut self, metric_id: &str, field: MetricField, value: String) -> bool {
        if !self.guard("update_metric") {
            return false;
        }
        let Some(metric) = self.page.footer_metrics.iter_mut().find(|m| m.id == metric_id) else {
            return false;
        };
        let slot = match field {
            MetricField::Label => &mut metric.label,
            MetricField::Value => &mut metric.value,
        };
        if *slot == value {
            return true;
        }
        let previous = std::mem::replace(slot, value.clone());
        let description = format!("Métrica \"{}\" actualizada", metric.label);
        let details = ChangeDetails {
            previous_value: Some(previous),
            new_value: Some(value),
            ..ChangeDetails::default()
        };
        self.log(ChangeType::Metric, ChangeAction::Updated, description, details);
        true
    }

    pub fn update_metric_color(&mut self, metric_id: &str, color: MetricColor) -> bool {
        if !self.guard("update_metric_color") {
            return false;
        }
        let Some(metric) = self.page.footer_metrics.iter_mut().find(|m| m.id == metric_id) else {
            return false;
        };
        if metric.color == color {
            return true;
        }
        let previous = std::mem::replace(&mut metric.color, color);
        let description = format!("Color de la métrica \"{}\" actualizado", metric.label);
        let details = ChangeDetails {
            previous_value: Some(previous.as_str().to_string()),
            new_value: Some(color.as_str().to_string()),
            ..ChangeDetails::default()
        };
        self.log(ChangeType::Metric, ChangeAction::Updated, description, details);
        true
    }

    pub fn delete_metric(&mut self, metric_id: &str) -> bool {
        if !self.guard("delete_metric") {
            return false;
        }
        let Some(index) = self.page.footer_metrics.iter().position(|m| m.id == metric_id) else {
            return false;
        };
        let removed = self.page.footer_metrics.remove(index);
        let details = ChangeDetails {
            previous_value: Some(removed.value.clone()),
            ..ChangeDetails::default()
        };
        let description = format!("Métrica \"{}\" eliminada", removed.label);
        self.log(ChangeType::Metric, ChangeAction::Deleted, description, details);
        true
    }

    // ========================
    // Documentation links
    // ========================

    /// Append a blank link; returns its id. Links are not logged.
    pub fn add_documentation_link(&mut self) -> Option<String> {
        if !self.guard("add_documentation_link") {
            return None;
        }
        let links = &self.page.documentation_links;
        let id = unique_id("doc", self.now_ms, |id| links.iter().any(|l| l.id == id));
        self.page.documentation_links.push(DocumentationLink::empty(id.clone()));
        Some(id)
    }

    pub fn update_documentation_link(&mut self, link_id: &str, field: LinkField, value: String) -> bool {
        if !self.guard("update_documentation_link") {
            return false;
        }
        match self.page.documentation_links.iter_mut().find(|l| l.id == link_id) {
            Some(link) => {
                link.set_field(field, value);
                true
            }
            None => false,
        }
    }

    pub fn delete_documentation_link(&mut self, link_id: &str) -> bool {
        if !self.guard("delete_documentation_link") {
            return false;
        }
        let before = self.page.documentation_links.len();
        self.page.documentation_links.retain(|l| l.id != link_id);
        self.page.documentation_links.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardStore;
    use crate::domain::{initial_columns, PageConfig, TailwindColor};

    fn page() -> PageData {
        PageData::new(
            "page-1",
            PageConfig::new("plantilla", "PLANTILLA", ""),
            BoardStore::new(initial_columns()),
            0,
        )
    }

    #[test]
    fn test_read_only_gate_blocks_everything() {
        let mut page = page();
        let before = page.clone();
        {
            let mut editor = BoardEditor::new(&mut page, &false, 1);
            assert!(editor.add_column().is_none());
            assert!(!editor.delete_column("citas"));
            assert!(editor.add_item("citas").is_none());
            assert!(!editor.update_item("citas", "c1", ItemField::Label, "X".to_string()));
            assert!(!editor.set_item_status("citas", "c1", "endev"));
            assert!(!editor.cycle_item_status("citas", "c1"));
            assert!(!editor.update_page_config(PageField::Title, "X".to_string()));
        }
        assert_eq!(page, before);
    }

    #[test]
    fn test_add_column_logs_creation() {
        let mut page = page();
        let id = BoardEditor::new(&mut page, &true, 1000).add_column().unwrap();
        assert_eq!(id, "col-1000");
        let col = page.columns.column(&id).unwrap();
        assert_eq!(col.title, "NUEVO GRUPO");
        assert_eq!(col.status_categories.len(), 5);
        let record = &page.change_history.records()[0];
        assert_eq!(record.change_type, ChangeType::Column);
        assert_eq!(record.action, ChangeAction::Created);
    }

    #[test]
    fn test_add_item_uses_first_category() {
        let mut page = page();
        {
            let mut editor = BoardEditor::new(&mut page, &true, 5);
            editor.set_status_categories(
                "compliance",
                vec![StatusCategory::new("qa", "QA", TailwindColor::Amber)],
            );
        }
        let id = BoardEditor::new(&mut page, &true, 6).add_item("compliance").unwrap();
        let item = page.columns.column("compliance").unwrap().item(&id).unwrap();
        assert_eq!(item.status.as_deref(), Some("qa"));
        assert_eq!(page.change_history.records()[0].details.item_name.as_deref(), Some("Nuevo Item"));
    }

    #[test]
    fn test_section_header_not_logged() {
        let mut page = page();
        let mut editor = BoardEditor::new(&mut page, &true, 5);
        let id = editor.add_section_header("poa").unwrap();
        assert!(editor.delete_item("poa", &id));
        assert!(page.change_history.is_empty());
    }

    #[test]
    fn test_date_edit_logged_label_edit_not() {
        let mut page = page();
        let mut editor = BoardEditor::new(&mut page, &true, 5);
        assert!(editor.update_item("citas", "c1", ItemField::Label, "INTER 2".to_string()));
        assert!(editor.update_item("citas", "c1", ItemField::Date, "2026-02-10".to_string()));
        assert_eq!(page.change_history.len(), 1);
        let details = &page.change_history.records()[0].details;
        assert_eq!(details.previous_value.as_deref(), Some("sin fecha"));
        assert_eq!(details.new_value.as_deref(), Some("10/02/2026"));
        assert_eq!(details.item_name.as_deref(), Some("INTER 2"));
    }

    #[test]
    fn test_status_change_with_orphaned_previous() {
        let mut page = page();
        let mut editor = BoardEditor::new(&mut page, &true, 5);
        editor.set_status_categories("citas", vec![StatusCategory::new("endev", "En Dev", TailwindColor::Blue)]);
        // c1 still points at the removed "productivo" category
        assert!(editor.set_item_status("citas", "c1", "endev"));
        let record = &page.change_history.records()[0];
        assert_eq!(record.change_type, ChangeType::Status);
        assert_eq!(record.details.previous_value.as_deref(), Some("productivo"));
        assert_eq!(record.details.new_value.as_deref(), Some("En Dev"));
    }

    #[test]
    fn test_cycle_status_wraps() {
        let mut page = page();
        let mut editor = BoardEditor::new(&mut page, &true, 5);
        editor.set_item_status("citas", "c1", "terminado");
        assert!(editor.cycle_item_status("citas", "c1"));
        let status = page.columns.column("citas").unwrap().item("c1").unwrap().status.clone();
        assert_eq!(status.as_deref(), Some("productivo"));
    }

    #[test]
    fn test_delete_column_and_item() {
        let mut page = page();
        let mut editor = BoardEditor::new(&mut page, &true, 5);
        assert!(editor.delete_item("citas", "c2"));
        assert!(!editor.delete_item("citas", "c2"));
        assert!(editor.delete_column("axess"));
        assert!(page.columns.column("axess").is_none());
        assert_eq!(page.change_history.len(), 2);
    }

    #[test]
    fn test_metric_edits_logged_as_metric() {
        let mut page = page();
        let mut editor = BoardEditor::new(&mut page, &true, 50);
        let id = editor.add_metric().unwrap();
        assert_eq!(id, "m-50");
        assert!(editor.update_metric(&id, MetricField::Value, "42".to_string()));
        assert!(editor.update_metric_color(&id, MetricColor::Amber));
        // unchanged value is not recorded again
        assert!(editor.update_metric(&id, MetricField::Value, "42".to_string()));
        assert!(editor.delete_metric(&id));
        assert!(!editor.delete_metric(&id));

        let records = page.change_history.records();
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.change_type == ChangeType::Metric));
        assert_eq!(records[0].action, ChangeAction::Deleted);
        assert_eq!(records[1].details.new_value.as_deref(), Some("amber"));
        assert_eq!(records[2].details.previous_value.as_deref(), Some("Valor"));
        assert_eq!(records[3].action, ChangeAction::Created);
        assert!(page.footer_metrics.is_empty());
    }

    #[test]
    fn test_documentation_links_crud_unlogged() {
        let mut page = page();
        let mut editor = BoardEditor::new(&mut page, &true, 7);
        let id = editor.add_documentation_link().unwrap();
        assert_eq!(id, "doc-7");
        assert!(editor.update_documentation_link(&id, LinkField::Url, "wiki.example.com".to_string()));
        assert!(editor.update_documentation_link(&id, LinkField::Title, "Wiki".to_string()));
        assert!(!editor.update_documentation_link("doc-x", LinkField::Title, "X".to_string()));
        let link = &page.documentation_links[0];
        assert_eq!(link.href().as_deref(), Some("https://wiki.example.com"));
        assert!(page.change_history.is_empty());

        let mut editor = BoardEditor::new(&mut page, &true, 8);
        assert!(editor.delete_documentation_link("doc-7"));
        assert!(page.documentation_links.is_empty());
    }

    #[test]
    fn test_read_only_gate_blocks_footer_edits() {
        let mut page = page();
        page.footer_metrics = crate::domain::initial_metrics();
        let before = page.clone();
        {
            let mut editor = BoardEditor::new(&mut page, &false, 1);
            assert!(editor.add_metric().is_none());
            assert!(!editor.update_metric("m1", MetricField::Label, "X".to_string()));
            assert!(!editor.update_metric_color("m1", MetricColor::Rose));
            assert!(!editor.delete_metric("m1"));
            assert!(editor.add_documentation_link().is_none());
            assert!(!editor.update_page_config(PageField::FooterUrl, "x".to_string()));
        }
        assert_eq!(page, before);
    }
}
