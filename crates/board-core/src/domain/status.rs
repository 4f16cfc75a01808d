//! Status Category Entity
//!
//! Column-scoped status vocabulary. An item's `status` is the id of one of
//! its own column's categories; there is no global status list.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Palette a status badge can be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TailwindColor {
    Emerald,
    Blue,
    Rose,
    Amber,
    Purple,
    Cyan,
    Indigo,
    #[default]
    Slate,
}

impl TailwindColor {
    pub const ALL: [TailwindColor; 8] = [
        TailwindColor::Emerald,
        TailwindColor::Blue,
        TailwindColor::Rose,
        TailwindColor::Amber,
        TailwindColor::Purple,
        TailwindColor::Cyan,
        TailwindColor::Indigo,
        TailwindColor::Slate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TailwindColor::Emerald => "emerald",
            TailwindColor::Blue => "blue",
            TailwindColor::Rose => "rose",
            TailwindColor::Amber => "amber",
            TailwindColor::Purple => "purple",
            TailwindColor::Cyan => "cyan",
            TailwindColor::Indigo => "indigo",
            TailwindColor::Slate => "slate",
        }
    }

    /// Unknown names fall back to slate
    pub fn from_str(s: &str) -> Self {
        match s {
            "emerald" => TailwindColor::Emerald,
            "blue" => TailwindColor::Blue,
            "rose" => TailwindColor::Rose,
            "amber" => TailwindColor::Amber,
            "purple" => TailwindColor::Purple,
            "cyan" => TailwindColor::Cyan,
            "indigo" => TailwindColor::Indigo,
            _ => TailwindColor::Slate,
        }
    }

    /// Human label shown in the status manager color picker
    pub fn label(&self) -> &'static str {
        match self {
            TailwindColor::Emerald => "Verde",
            TailwindColor::Blue => "Azul",
            TailwindColor::Rose => "Rojo",
            TailwindColor::Amber => "Naranja",
            TailwindColor::Purple => "Morado",
            TailwindColor::Cyan => "Cyan",
            TailwindColor::Indigo => "Indigo",
            TailwindColor::Slate => "Gris",
        }
    }
}

impl From<String> for TailwindColor {
    fn from(s: String) -> Self {
        TailwindColor::from_str(&s)
    }
}

impl From<TailwindColor> for String {
    fn from(c: TailwindColor) -> Self {
        c.as_str().to_string()
    }
}

/// A label/color pair an item's status points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCategory {
    pub id: String,
    pub label: String,
    pub color: TailwindColor,
}

impl StatusCategory {
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: TailwindColor) -> Self {
        Self { id: id.into(), label: label.into(), color }
    }
}

impl Entity for StatusCategory {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Categories every column carries unless the user removed them
pub fn default_categories() -> Vec<StatusCategory> {
    vec![
        StatusCategory::new("productivo", "Productivo", TailwindColor::Emerald),
        StatusCategory::new("endev", "En Dev", TailwindColor::Blue),
        StatusCategory::new("upgrade", "Upgrade", TailwindColor::Rose),
        StatusCategory::new("detenido", "Detenido", TailwindColor::Rose),
        StatusCategory::new("terminado", "Terminado", TailwindColor::Indigo),
    ]
}

/// Merge the default set into `categories` by id.
///
/// Existing entries (custom or edited defaults) keep their position and
/// content; only defaults whose id is missing are appended.
pub fn ensure_default_categories(categories: Vec<StatusCategory>) -> Vec<StatusCategory> {
    let mut merged = categories;
    for default in default_categories() {
        if !merged.iter().any(|c| c.id == default.id) {
            merged.push(default);
        }
    }
    merged
}

/// How an item's status should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBadge<'a> {
    /// Status refers to a category of the column
    Known(&'a StatusCategory),
    /// Category was deleted (or never existed); show the raw id in neutral style
    Orphaned(&'a str),
}

impl<'a> StatusBadge<'a> {
    pub fn resolve(categories: &'a [StatusCategory], status: &'a str) -> Self {
        categories
            .iter()
            .find(|c| c.id == status)
            .map(StatusBadge::Known)
            .unwrap_or(StatusBadge::Orphaned(status))
    }

    pub fn label(&self) -> &'a str {
        match self {
            StatusBadge::Known(cat) => &cat.label,
            StatusBadge::Orphaned(raw) => raw,
        }
    }

    pub fn color(&self) -> TailwindColor {
        match self {
            StatusBadge::Known(cat) => cat.color,
            StatusBadge::Orphaned(_) => TailwindColor::Slate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backfill_appends_missing_defaults() {
        let custom = vec![StatusCategory::new("qa", "QA", TailwindColor::Amber)];
        let merged = ensure_default_categories(custom);
        assert_eq!(merged.len(), 6);
        assert_eq!(merged[0].id, "qa");
        assert_eq!(merged[1].id, "productivo");
    }

    #[test]
    fn test_backfill_never_overwrites_edited_default() {
        let edited = vec![StatusCategory::new("endev", "Desarrollo", TailwindColor::Cyan)];
        let merged = ensure_default_categories(edited);
        let endev: Vec<_> = merged.iter().filter(|c| c.id == "endev").collect();
        assert_eq!(endev.len(), 1);
        assert_eq!(endev[0].label, "Desarrollo");
        assert_eq!(endev[0].color, TailwindColor::Cyan);
        assert_eq!(merged[0].id, "endev");
    }

    #[test]
    fn test_backfill_empty() {
        assert_eq!(ensure_default_categories(Vec::new()), default_categories());
    }

    #[test]
    fn test_orphaned_status_degrades() {
        let cats = default_categories();
        let badge = StatusBadge::resolve(&cats, "borrado");
        assert_eq!(badge, StatusBadge::Orphaned("borrado"));
        assert_eq!(badge.label(), "borrado");
        assert_eq!(badge.color(), TailwindColor::Slate);

        let known = StatusBadge::resolve(&cats, "endev");
        assert_eq!(known.label(), "En Dev");
    }

    #[test]
    fn test_unknown_color_deserializes_to_slate() {
        let cat: StatusCategory =
            serde_json::from_str(r#"{"id":"x","label":"X","color":"magenta"}"#).unwrap();
        assert_eq!(cat.color, TailwindColor::Slate);
        let json = serde_json::to_string(&StatusCategory::new("y", "Y", TailwindColor::Rose)).unwrap();
        assert_eq!(json, r#"{"id":"y","label":"Y","color":"rose"}"#);
    }
}
