//! Page Entity
//!
//! One named dashboard: header and footer configuration, its board,
//! documentation links, footer metrics and its change log.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::footer::{Connection, DocumentationLink, FooterMetric};
use crate::board::BoardStore;
use crate::ledger::ChangeLedger;

/// Header and footer text of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Short code shown above the title (e.g. `O2T-STRATEGY-2026`)
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub footer_title: String,
    #[serde(default)]
    pub footer_description: String,
    #[serde(default)]
    pub footer_version: String,
    #[serde(default)]
    pub footer_button_label: String,
    #[serde(default)]
    pub footer_url: String,
}

/// Editable header and footer fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageField {
    Identifier,
    Title,
    Description,
    FooterTitle,
    FooterDescription,
    FooterVersion,
    FooterButtonLabel,
    FooterUrl,
}

impl PageConfig {
    /// Header text only; footer fields left empty
    pub fn new(identifier: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Footer as `[title, description, version, button label, url]`
    pub fn with_footer(mut self, [title, description, version, button_label, url]: [&str; 5]) -> Self {
        self.footer_title = title.to_string();
        self.footer_description = description.to_string();
        self.footer_version = version.to_string();
        self.footer_button_label = button_label.to_string();
        self.footer_url = url.to_string();
        self
    }

    pub fn field(&self, field: PageField) -> &str {
        match field {
            PageField::Identifier => &self.identifier,
            PageField::Title => &self.title,
            PageField::Description => &self.description,
            PageField::FooterTitle => &self.footer_title,
            PageField::FooterDescription => &self.footer_description,
            PageField::FooterVersion => &self.footer_version,
            PageField::FooterButtonLabel => &self.footer_button_label,
            PageField::FooterUrl => &self.footer_url,
        }
    }

    pub fn set_field(&mut self, field: PageField, value: String) {
        let slot = match field {
            PageField::Identifier => &mut self.identifier,
            PageField::Title => &mut self.title,
            PageField::Description => &mut self.description,
            PageField::FooterTitle => &mut self.footer_title,
            PageField::FooterDescription => &mut self.footer_description,
            PageField::FooterVersion => &mut self.footer_version,
            PageField::FooterButtonLabel => &mut self.footer_button_label,
            PageField::FooterUrl => &mut self.footer_url,
        };
        *slot = value;
    }
}

/// A persisted page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub id: String,
    pub page_config: PageConfig,
    /// Ordered columns
    #[serde(default)]
    pub columns: BoardStore,
    #[serde(default)]
    pub documentation_links: Vec<DocumentationLink>,
    #[serde(default)]
    pub footer_metrics: Vec<FooterMetric>,
    /// Stored and copied along; not edited on this board
    #[serde(default)]
    pub connections: Vec<Connection>,
    /// Newest first
    #[serde(default)]
    pub change_history: ChangeLedger,
    /// Creation time, unix millis
    #[serde(default)]
    pub created_at: i64,
}

impl PageData {
    pub fn new(id: impl Into<String>, page_config: PageConfig, columns: BoardStore, created_at: i64) -> Self {
        Self {
            id: id.into(),
            page_config,
            columns,
            documentation_links: Vec::new(),
            footer_metrics: Vec::new(),
            connections: Vec::new(),
            change_history: ChangeLedger::default(),
            created_at,
        }
    }
}

impl Entity for PageData {
    fn id(&self) -> &str {
        &self.id
    }
}
