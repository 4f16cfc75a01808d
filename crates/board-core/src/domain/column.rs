//! Column Entity
//!
//! A titled, colored group of items with its own status vocabulary.

use serde::{Deserialize, Serialize};
use super::entity::{ColumnId, Entity};
use super::item::Item;
use super::status::{StatusBadge, StatusCategory};

/// Header color of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnColor {
    Blue,
    Orange,
    Purple,
    Green,
    #[default]
    Slate,
}

impl ColumnColor {
    pub const ALL: [ColumnColor; 5] = [
        ColumnColor::Blue,
        ColumnColor::Orange,
        ColumnColor::Purple,
        ColumnColor::Green,
        ColumnColor::Slate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnColor::Blue => "blue",
            ColumnColor::Orange => "orange",
            ColumnColor::Purple => "purple",
            ColumnColor::Green => "green",
            ColumnColor::Slate => "slate",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "blue" => ColumnColor::Blue,
            "orange" => ColumnColor::Orange,
            "purple" => ColumnColor::Purple,
            "green" => ColumnColor::Green,
            _ => ColumnColor::Slate,
        }
    }
}

impl From<String> for ColumnColor {
    fn from(s: String) -> Self {
        ColumnColor::from_str(&s)
    }
}

impl From<ColumnColor> for String {
    fn from(c: ColumnColor) -> Self {
        c.as_str().to_string()
    }
}

/// A board column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: ColumnColor,
    /// Ordered; reorderable only within this column
    #[serde(default)]
    pub items: Vec<Item>,
    /// Ordered status vocabulary of this column
    #[serde(default)]
    pub status_categories: Vec<StatusCategory>,
    /// Note rendered under the column's cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_text: Option<String>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>, color: ColumnColor) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            color,
            items: Vec::new(),
            status_categories: Vec::new(),
            footer_text: None,
        }
    }

    /// Index of an item in this column
    pub fn position_of(&self, item_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == item_id)
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.position_of(item_id).is_some()
    }

    /// Status shown for an item of this column
    pub fn badge<'a>(&'a self, status: &'a str) -> StatusBadge<'a> {
        StatusBadge::resolve(&self.status_categories, status)
    }

    /// Default status for new cards: the first category
    pub fn default_status(&self) -> Option<&str> {
        self.status_categories.first().map(|c| c.id.as_str())
    }
}

impl Entity for Column {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_categories, ItemKind};

    #[test]
    fn test_column_lookup() {
        let mut col = Column::new("citas", "CITAS", ColumnColor::Blue);
        col.items.push(Item::section_header("h1", "Módulos"));
        col.items.push(Item::leaf("c1", "INTER", "productivo"));
        assert_eq!(col.position_of("c1"), Some(1));
        assert!(col.contains("h1"));
        assert!(col.item("zz").is_none());
    }

    #[test]
    fn test_missing_categories_deserialize_empty() {
        let col: Column = serde_json::from_str(
            r#"{"id":"x","title":"X","description":"","color":"teal","items":[{"id":"i","label":"I","type":"external"}]}"#,
        )
        .unwrap();
        assert!(col.status_categories.is_empty());
        assert_eq!(col.color, ColumnColor::Slate);
        assert_eq!(col.items[0].kind, ItemKind::External);
    }

    #[test]
    fn test_default_status_is_first_category() {
        let mut col = Column::new("x", "X", ColumnColor::Green);
        assert_eq!(col.default_status(), None);
        col.status_categories = default_categories();
        assert_eq!(col.default_status(), Some("productivo"));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let col = Column::new("x", "X", ColumnColor::Orange);
        let json = serde_json::to_value(&col).unwrap();
        assert!(json.get("statusCategories").is_some());
        assert_eq!(json["color"], "orange");
    }
}
