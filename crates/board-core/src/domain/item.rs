//! Item Entity
//!
//! A status card or a section divider inside a column.

use serde::{Deserialize, Serialize};
use super::entity::{Entity, ItemId};

/// Item kind determines rendering; all kinds reorder the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    /// Regular status card
    #[default]
    Leaf,
    /// Card pointing outside the board (no status badge)
    External,
    /// Visual divider grouping the cards below it
    SectionHeader,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Leaf => "leaf",
            ItemKind::External => "external",
            ItemKind::SectionHeader => "section-header",
        }
    }
}

/// Editable text fields of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Label,
    Description,
    Date,
}

/// A card within a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Card title
    pub label: String,
    /// Card kind
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    /// Id of a status category of the owning column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Decorative icon name (`dollar`, `bulb`, `refresh`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_icon: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_external_link: bool,
}

impl Item {
    /// Create a new leaf card with a status
    pub fn leaf(id: impl Into<ItemId>, label: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ItemKind::Leaf,
            status: Some(status.into()),
            description: None,
            date: None,
            has_icon: None,
            is_external_link: false,
        }
    }

    /// Create a new section divider
    pub fn section_header(id: impl Into<ItemId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ItemKind::SectionHeader,
            status: None,
            description: None,
            date: None,
            has_icon: None,
            is_external_link: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.has_icon = Some(icon.into());
        self
    }

    pub fn is_section_header(&self) -> bool {
        self.kind == ItemKind::SectionHeader
    }

    /// Whether a status badge is shown (and can be cycled)
    pub fn shows_status(&self) -> bool {
        self.kind == ItemKind::Leaf && self.status.is_some() && !self.is_external_link
    }

    /// Current value of an editable field (empty when unset)
    pub fn field(&self, field: ItemField) -> &str {
        match field {
            ItemField::Label => &self.label,
            ItemField::Description => self.description.as_deref().unwrap_or(""),
            ItemField::Date => self.date.as_deref().unwrap_or(""),
        }
    }

    pub fn set_field(&mut self, field: ItemField, value: String) {
        match field {
            ItemField::Label => self.label = value,
            ItemField::Description => self.description = Some(value),
            ItemField::Date => self.date = Some(value),
        }
    }
}

impl Entity for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::leaf("c1", "INTER", "productivo");
        assert_eq!(item.id(), "c1");
        assert_eq!(item.kind, ItemKind::Leaf);
        assert!(item.shows_status());
        assert!(!item.is_section_header());
    }

    #[test]
    fn test_section_header_has_no_status() {
        let header = Item::section_header("h1", "Módulos Principales");
        assert!(header.is_section_header());
        assert!(!header.shows_status());
    }

    #[test]
    fn test_item_wire_format() {
        let json = serde_json::to_value(Item::section_header("h1", "Core")).unwrap();
        assert_eq!(json["type"], "section-header");
        assert!(json.get("status").is_none());

        let parsed: Item = serde_json::from_str(
            r#"{"id":"a1","label":"MINA","type":"leaf","status":"upgrade","hasIcon":"bulb"}"#,
        )
        .unwrap();
        assert_eq!(parsed.status.as_deref(), Some("upgrade"));
    }

    #[test]
    fn test_set_field() {
        let mut item = Item::leaf("c1", "INTER", "productivo");
        item.set_field(ItemField::Date, "2026-03-01".to_string());
        assert_eq!(item.field(ItemField::Date), "2026-03-01");
        assert_eq!(item.field(ItemField::Description), "");
    }
}
