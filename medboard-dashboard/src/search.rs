//! The search predicate applied to the active section's rows.

use medboard_model::Record;
use serde_json::Value;

/// Case-insensitive substring match across a record's field values.
///
/// String fields match directly; list fields match when any element's
/// string form contains the term. Bare boolean and numeric values never
/// match. The empty term matches every record.
#[must_use]
pub fn record_matches(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .fields
        .values()
        .any(|value| value_matches(value, &needle))
}

fn value_matches(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(s) => s.to_lowercase().contains(needle),
        Value::Array(items) => items
            .iter()
            .any(|item| element_text(item).to_lowercase().contains(needle)),
        _ => false,
    }
}

fn element_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
