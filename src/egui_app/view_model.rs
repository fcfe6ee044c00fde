//! Pure helpers turning a query response into render-ready data.
//!
//! Kept free of egui types so the table derivation and label formatting are
//! testable without any GUI environment.

use crate::egui_app::state::TableView;
use crate::query_gateway::Row;

/// Build a generic table from result rows.
///
/// Columns are the first row's keys in that row's natural key order. Rows are
/// not guaranteed homogeneous by the server; a key missing from a later row
/// renders as an empty cell, and keys absent from the first row are dropped.
pub fn results_table(rows: &[Row]) -> TableView {
    let Some(first) = rows.first() else {
        return TableView::default();
    };
    let columns: Vec<String> = first.keys().cloned().collect();
    let table_rows = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| row.get(column).map(display_value).unwrap_or_default())
                .collect()
        })
        .collect();
    TableView {
        columns,
        rows: table_rows,
    }
}

/// Display string for one cell value.
///
/// Nulls render as the empty string, never a literal "null"/"undefined".
/// Composite values fall back to compact JSON.
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::Bool(flag) => flag.to_string(),
        composite => composite.to_string(),
    }
}

/// Badge label rule: upper-case only the first character, rest untouched.
pub fn badge_label(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fixed two-decimal confidence line.
pub fn confidence_text(confidence: f64) -> String {
    format!("Confidence: {confidence:.2}")
}
