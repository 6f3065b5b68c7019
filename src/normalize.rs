//! Response Normalization
//!
//! Turns whatever the spreadsheet endpoint returned into board tasks. The
//! endpoint answers either with an array of record objects or, in the legacy
//! shape, with the raw sheet: a header row followed by data rows.

use serde_json::{Map, Value};

use crate::models::{AckState, Task, DEFAULT_TASK_TYPE, UNKNOWN_NAME};

/// Shown for legacy sheet rows with no submission stamp
const LEGACY_SUBMITTED: &str = "Existing";

/// Legacy sheet column layout
const COL_WEEK_START: usize = 0;
const COL_NAME: usize = 1;
const COL_TYPE: usize = 2;
const COL_ITEM: usize = 3;
const COL_HOURS: usize = 4;
const COL_SUBMITTED: usize = 5;
const COL_ACKNOWLEDGED: usize = 6;

/// Normalize a GET response body. Non-array and empty input yield no tasks.
pub fn normalize_response(data: &Value) -> Vec<Task> {
    let Some(entries) = data.as_array() else {
        log::warn!("Expected an array from the endpoint, got {}", kind_of(data));
        return Vec::new();
    };

    match entries.first() {
        None => Vec::new(),
        Some(Value::Array(_)) => normalize_rows(entries),
        Some(_) => normalize_records(entries),
    }
}

/// Header + rows form. The first row is always treated as the header.
fn normalize_rows(rows: &[Value]) -> Vec<Task> {
    rows.iter()
        .skip(1)
        .filter_map(|row| match row {
            Value::Array(cells) => Some(cells),
            other => {
                log::warn!("Skipping non-row entry in sheet data: {}", kind_of(other));
                None
            }
        })
        .filter(|cells| cells.iter().any(|cell| text(Some(cell)).is_some()))
        .map(|cells| Task {
            row_number: None,
            week_start: text(cells.get(COL_WEEK_START)).unwrap_or_default(),
            name: text(cells.get(COL_NAME)).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            task_type: text(cells.get(COL_TYPE)).unwrap_or_else(|| DEFAULT_TASK_TYPE.to_string()),
            item: text(cells.get(COL_ITEM)).unwrap_or_default(),
            hours: hours(cells.get(COL_HOURS)),
            submitted: Some(
                text(cells.get(COL_SUBMITTED)).unwrap_or_else(|| LEGACY_SUBMITTED.to_string()),
            ),
            ack: AckState::from_server(flag(cells.get(COL_ACKNOWLEDGED))),
        })
        .collect()
}

/// Array-of-objects form
fn normalize_records(records: &[Value]) -> Vec<Task> {
    records
        .iter()
        .filter_map(|record| match record {
            Value::Object(fields) => Some(record_to_task(fields)),
            other => {
                log::warn!("Skipping non-object task record: {}", kind_of(other));
                None
            }
        })
        .collect()
}

fn record_to_task(fields: &Map<String, Value>) -> Task {
    Task {
        row_number: row_number(fields.get("rowNumber")),
        week_start: text(fields.get("weekStart")).unwrap_or_default(),
        name: text(fields.get("name")).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        task_type: text(fields.get("type")).unwrap_or_else(|| DEFAULT_TASK_TYPE.to_string()),
        item: text(fields.get("item")).unwrap_or_default(),
        hours: hours(fields.get("hours")),
        submitted: text(fields.get("submitted")),
        ack: AckState::from_server(flag(fields.get("acknowledged"))),
    }
}

/// Non-empty text; numbers are stringified, blanks count as missing
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn hours(value: Option<&Value>) -> f64 {
    number(value).filter(|h| *h >= 0.0).unwrap_or(0.0)
}

fn row_number(value: Option<&Value>) -> Option<u32> {
    let n = number(value)?;
    if n.fract() != 0.0 || n < 1.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n as u32)
}

/// `true` or the string `"true"`; anything else is false
fn flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_array_is_empty() {
        assert!(normalize_response(&json!({"error": "nope"})).is_empty());
        assert!(normalize_response(&json!(null)).is_empty());
        assert!(normalize_response(&json!("[]")).is_empty());
    }

    #[test]
    fn test_empty_array_is_empty() {
        assert!(normalize_response(&json!([])).is_empty());
    }

    #[test]
    fn test_empty_sheet_sentinel() {
        assert!(normalize_response(&json!([[""]])).is_empty());
    }

    #[test]
    fn test_header_only_sheet() {
        let data = json!([["Week Start", "Name", "Type", "Item", "Hours", "Submitted"]]);
        assert!(normalize_response(&data).is_empty());
    }

    #[test]
    fn test_legacy_rows_skip_header() {
        let data = json!([
            ["Week Start", "Name", "Type", "Item", "Hours", "Submitted"],
            ["2025-01-06", "Dana", "Meeting", "Planning", 2, "1/6/2025 09:12"],
            ["2025-01-06", "", "", "Cleanup", "1.5", ""],
            ["", "", "", "", "", ""]
        ]);
        let tasks = normalize_response(&data);
        assert_eq!(tasks.len(), 2);

        assert_eq!(tasks[0].name, "Dana");
        assert_eq!(tasks[0].task_type, "Meeting");
        assert_eq!(tasks[0].hours, 2.0);
        assert_eq!(tasks[0].submitted.as_deref(), Some("1/6/2025 09:12"));
        assert_eq!(tasks[0].row_number, None);

        assert_eq!(tasks[1].name, "Unknown");
        assert_eq!(tasks[1].task_type, "Task");
        assert_eq!(tasks[1].hours, 1.5);
        assert_eq!(tasks[1].submitted.as_deref(), Some("Existing"));
    }

    #[test]
    fn test_legacy_short_rows() {
        let data = json!([["h"], ["2025-01-06", "Lee"]]);
        let tasks = normalize_response(&data);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].item, "");
        assert_eq!(tasks[0].hours, 0.0);
        assert_eq!(tasks[0].ack, AckState::Open);
    }

    #[test]
    fn test_record_defaults() {
        let data = json!([{ "rowNumber": 5, "weekStart": "2025-01-06" }]);
        let tasks = normalize_response(&data);
        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.row_number, Some(5));
        assert_eq!(task.name, "Unknown");
        assert_eq!(task.task_type, "Task");
        assert_eq!(task.item, "");
        assert_eq!(task.hours, 0.0);
        assert_eq!(task.submitted, None);
        assert!(!task.is_acknowledged());
    }

    #[test]
    fn test_record_acknowledged_forms() {
        let data = json!([
            { "rowNumber": 2, "acknowledged": true },
            { "rowNumber": 3, "acknowledged": "true" },
            { "rowNumber": 4, "acknowledged": "yes" },
            { "rowNumber": 5, "acknowledged": false },
            { "rowNumber": 6 }
        ]);
        let acks: Vec<_> = normalize_response(&data).iter().map(|t| t.ack).collect();
        assert_eq!(
            acks,
            vec![
                AckState::Confirmed,
                AckState::Confirmed,
                AckState::Open,
                AckState::Open,
                AckState::Open,
            ]
        );
    }

    #[test]
    fn test_record_numeric_coercion() {
        let data = json!([
            { "rowNumber": "7", "hours": "3.25" },
            { "rowNumber": 2.5, "hours": -4 },
            { "rowNumber": 0, "hours": "lots" }
        ]);
        let tasks = normalize_response(&data);
        assert_eq!(tasks[0].row_number, Some(7));
        assert_eq!(tasks[0].hours, 3.25);
        assert_eq!(tasks[1].row_number, None);
        assert_eq!(tasks[1].hours, 0.0);
        assert_eq!(tasks[2].row_number, None);
        assert_eq!(tasks[2].hours, 0.0);
    }

    #[test]
    fn test_records_skip_non_objects() {
        let data = json!([{ "name": "Ari" }, 42, "text", null]);
        let tasks = normalize_response(&data);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Ari");
    }
}
