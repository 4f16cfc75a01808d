//! Change Ledger
//!
//! Append-only, human readable history of edits made to one page.
//! Reorders (drag and drop) are deliberately not recorded.

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::config::NO_DATE_LABEL;

/// What kind of entity a record is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Item,
    Status,
    Group,
    Column,
    Metric,
}

impl ChangeType {
    pub const ALL: [ChangeType; 5] = [
        ChangeType::Item,
        ChangeType::Status,
        ChangeType::Group,
        ChangeType::Column,
        ChangeType::Metric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Item => "item",
            ChangeType::Status => "status",
            ChangeType::Group => "group",
            ChangeType::Column => "column",
            ChangeType::Metric => "metric",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Item => "Tarjeta",
            ChangeType::Status => "Estado",
            ChangeType::Group => "Grupo",
            ChangeType::Column => "Columna",
            ChangeType::Metric => "Métrica",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
}

impl ChangeAction {
    pub fn label(&self) -> &'static str {
        match self {
            ChangeAction::Created => "Creado",
            ChangeAction::Updated => "Actualizado",
            ChangeAction::Deleted => "Eliminado",
        }
    }
}

/// Context captured with a record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

/// One ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub id: String,
    /// Unix millis
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub action: ChangeAction,
    pub description: String,
    #[serde(default)]
    pub details: ChangeDetails,
}

impl ChangeRecord {
    /// `dd/mm HH:MM` in the given zone
    pub fn formatted_time<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: Display,
    {
        format_timestamp(self.timestamp, tz)
    }
}

/// Per-page change history, newest first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeLedger {
    records: Vec<ChangeRecord>,
}

impl ChangeLedger {
    /// Prepend a record; returns its id
    pub fn record(
        &mut self,
        timestamp: i64,
        change_type: ChangeType,
        action: ChangeAction,
        description: impl Into<String>,
        details: ChangeDetails,
    ) -> String {
        let id = format!("change-{}-{}", timestamp, self.records.len());
        self.records.insert(
            0,
            ChangeRecord {
                id: id.clone(),
                timestamp,
                change_type,
                action,
                description: description.into(),
                details,
            },
        );
        id
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records of one type, or all when `None`
    pub fn filtered(&self, change_type: Option<ChangeType>) -> Vec<&ChangeRecord> {
        self.records
            .iter()
            .filter(|r| change_type.map_or(true, |t| r.change_type == t))
            .collect()
    }

    pub fn recent(&self, limit: usize) -> &[ChangeRecord] {
        &self.records[..self.records.len().min(limit)]
    }

    /// Latest card edits only
    pub fn recent_items(&self, limit: usize) -> Vec<&ChangeRecord> {
        self.records
            .iter()
            .filter(|r| r.change_type == ChangeType::Item)
            .take(limit)
            .collect()
    }
}

/// `dd/mm HH:MM`; empty for out-of-range timestamps
pub fn format_timestamp<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|utc| utc.with_timezone(tz).format("%d/%m %H:%M").to_string())
        .unwrap_or_default()
}

/// Render an item date for change records: `dd/mm/yyyy`, or "sin fecha"
pub fn format_date_value(value: Option<&str>) -> String {
    let raw = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return NO_DATE_LABEL.to_string(),
    };
    let date_part = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
