//! Task Form Draft
//!
//! Raw form field values and their validation into a submission payload.

use crate::error::{AppError, Result};
use crate::models::{NewTask, DEFAULT_TASK_TYPE};
use crate::week::{format_week_key, parse_date, week_start};

/// Task type options offered by the form
pub const TASK_TYPES: &[&str] = &[DEFAULT_TASK_TYPE, "Meeting", "Review", "Support", "Admin"];

/// Form fields exactly as typed
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub week_start: String,
    pub name: String,
    pub task_type: String,
    pub item: String,
    pub hours: String,
}

impl TaskDraft {
    /// A fresh form: given week, remembered name, default type
    pub fn blank(week: &str, name: &str) -> Self {
        Self {
            week_start: week.to_string(),
            name: name.to_string(),
            task_type: DEFAULT_TASK_TYPE.to_string(),
            item: String::new(),
            hours: String::new(),
        }
    }

    /// Validate into a payload. The week is normalized to its Monday.
    pub fn validate(&self) -> Result<NewTask> {
        let week = parse_date(&self.week_start)
            .ok_or_else(|| AppError::Invalid("Pick a valid week start date".to_string()))?;
        let name = required(&self.name, "Name")?;
        let task_type = required(&self.task_type, "Type")?;
        let item = required(&self.item, "Item")?;
        let hours = self
            .hours
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|h| h.is_finite() && *h > 0.0)
            .ok_or_else(|| AppError::Invalid("Hours must be a number greater than 0".to_string()))?;

        Ok(NewTask {
            week_start: format_week_key(week_start(week)),
            name,
            task_type,
            item,
            hours,
        })
    }
}

fn required(value: &str, field: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Invalid(format!("{} is required", field)));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TaskDraft {
        TaskDraft {
            week_start: "2025-01-08".to_string(),
            name: " Dana ".to_string(),
            task_type: "Meeting".to_string(),
            item: "Sprint review".to_string(),
            hours: "1.5".to_string(),
        }
    }

    #[test]
    fn test_validate_normalizes() {
        let task = draft().validate().unwrap();
        assert_eq!(task.week_start, "2025-01-06");
        assert_eq!(task.name, "Dana");
        assert_eq!(task.task_type, "Meeting");
        assert_eq!(task.item, "Sprint review");
        assert_eq!(task.hours, 1.5);
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert_eq!(d.validate(), Err(AppError::Invalid("Name is required".to_string())));

        let mut d = draft();
        d.item = String::new();
        assert_eq!(d.validate(), Err(AppError::Invalid("Item is required".to_string())));
    }

    #[test]
    fn test_validate_rejects_bad_hours_and_week() {
        for hours in ["", "abc", "0", "-2", "NaN", "inf"] {
            let mut d = draft();
            d.hours = hours.to_string();
            assert!(matches!(d.validate(), Err(AppError::Invalid(_))), "hours {:?}", hours);
        }

        let mut d = draft();
        d.week_start = "someday".to_string();
        assert!(matches!(d.validate(), Err(AppError::Invalid(_))));
    }

    #[test]
    fn test_blank_uses_defaults() {
        let d = TaskDraft::blank("2025-01-06", "Dana");
        assert_eq!(d.task_type, "Task");
        assert_eq!(d.name, "Dana");
        assert!(d.item.is_empty());
        assert!(d.hours.is_empty());
    }
}
