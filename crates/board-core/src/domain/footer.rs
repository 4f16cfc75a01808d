//! Page Footer Entities
//!
//! Documentation links, footer metrics and cross-column connections kept
//! with each page.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Text color of a footer metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MetricColor {
    Emerald,
    Blue,
    Purple,
    Rose,
    #[default]
    White,
    Amber,
}

impl MetricColor {
    pub const ALL: [MetricColor; 6] = [
        MetricColor::Emerald,
        MetricColor::Blue,
        MetricColor::Purple,
        MetricColor::Rose,
        MetricColor::White,
        MetricColor::Amber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricColor::Emerald => "emerald",
            MetricColor::Blue => "blue",
            MetricColor::Purple => "purple",
            MetricColor::Rose => "rose",
            MetricColor::White => "white",
            MetricColor::Amber => "amber",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "emerald" => MetricColor::Emerald,
            "blue" => MetricColor::Blue,
            "purple" => MetricColor::Purple,
            "rose" => MetricColor::Rose,
            "amber" => MetricColor::Amber,
            _ => MetricColor::White,
        }
    }
}

impl From<String> for MetricColor {
    fn from(s: String) -> Self {
        MetricColor::from_str(&s)
    }
}

impl From<MetricColor> for String {
    fn from(c: MetricColor) -> Self {
        c.as_str().to_string()
    }
}

/// A labelled figure shown in the page footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterMetric {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub color: MetricColor,
}

impl FooterMetric {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>, color: MetricColor) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    Label,
    Value,
}

/// External documentation entry of a page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentationLink {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    /// ISO date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkField {
    Title,
    Description,
    Url,
    Date,
}

impl DocumentationLink {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: Some(String::new()),
            ..Self::default()
        }
    }

    pub fn set_field(&mut self, field: LinkField, value: String) {
        match field {
            LinkField::Title => self.title = value,
            LinkField::Description => self.description = value,
            LinkField::Url => self.url = value,
            LinkField::Date => self.date = Some(value),
        }
    }

    /// Address to open; bare hosts get `https://`, blank urls open nothing
    pub fn href(&self) -> Option<String> {
        let url = self.url.trim();
        if url.is_empty() {
            return None;
        }
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Some(url.to_string())
        } else {
            Some(format!("https://{}", url))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionKind {
    Dependency,
    Integration,
    SharedResource,
}

/// Link between two items, possibly in different columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub from_item_id: String,
    pub from_column_id: String,
    pub to_item_id: String,
    pub to_column_id: String,
    #[serde(rename = "type")]
    pub kind: ConnectionKind,
}

impl Entity for FooterMetric {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for DocumentationLink {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_normalization() {
        let mut link = DocumentationLink::empty("doc-1");
        assert_eq!(link.href(), None);
        link.url = "  docs.example.com/guia ".to_string();
        assert_eq!(link.href().as_deref(), Some("https://docs.example.com/guia"));
        link.url = "HTTP://intranet/wiki".to_string();
        assert_eq!(link.href().as_deref(), Some("HTTP://intranet/wiki"));
    }

    #[test]
    fn test_unknown_metric_color_degrades() {
        let metric: FooterMetric =
            serde_json::from_str(r#"{"id":"m1","label":"UPTIME","value":"99.9%","color":"teal"}"#).unwrap();
        assert_eq!(metric.color, MetricColor::White);
    }

    #[test]
    fn test_connection_wire_format() {
        let json = r#"{"id":"k1","fromItemId":"c1","fromColumnId":"citas","toItemId":"a1",
                       "toColumnId":"axess","type":"shared-resource"}"#;
        let conn: Connection = serde_json::from_str(json).unwrap();
        assert_eq!(conn.kind, ConnectionKind::SharedResource);
        let back = serde_json::to_string(&conn).unwrap();
        assert!(back.contains("\"type\":\"shared-resource\""));
    }
}
