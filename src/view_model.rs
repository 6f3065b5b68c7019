//! Table View Model
//!
//! Pure projection of the board into what the table shows.

use chrono::NaiveDate;

use crate::models::{AckState, Task};
use crate::week::{parse_date, week_start_timestamp};

/// Table filter inputs
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFilter {
    pub show_all: bool,
    /// Any date inside the selected week
    pub week: NaiveDate,
    pub search: String,
}

/// Why the table is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    NoRecords,
    NoneThisWeek,
    NoMatches(String),
}

impl EmptyState {
    pub fn title(&self) -> String {
        match self {
            EmptyState::NoRecords => "No items yet.".to_string(),
            EmptyState::NoneThisWeek => "No items for this week.".to_string(),
            EmptyState::NoMatches(term) => format!("No items match \"{}\".", term),
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoRecords => "Add your first task to get started!",
            EmptyState::NoneThisWeek => "Pick another week or show all weeks.",
            EmptyState::NoMatches(_) => "Try a different name.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    /// Position in the board list
    pub index: usize,
    pub row_number: Option<u32>,
    pub name: String,
    pub task_type: String,
    pub item: String,
    pub hours: f64,
    pub hours_label: String,
    pub submitted_label: String,
    pub ack: AckState,
    pub acknowledged: bool,
    pub can_acknowledge: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub rows: Vec<TaskRow>,
    pub total_hours: f64,
    pub empty: Option<EmptyState>,
}

impl BoardView {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn total_label(&self) -> String {
        hours_label(self.total_hours)
    }
}

/// Keep tasks whose Monday-midnight bucket equals the filter week's.
/// Unparsable dates always pass.
pub fn in_week(task: &Task, week: NaiveDate) -> bool {
    match parse_date(&task.week_start).and_then(week_start_timestamp) {
        Some(bucket) => Some(bucket) == week_start_timestamp(week),
        None => true,
    }
}

/// Case-insensitive name substring match; blank term matches all
pub fn matches_search(task: &Task, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || task.name.to_lowercase().contains(&term.to_lowercase())
}

pub fn render(tasks: &[Task], filter: &TaskFilter) -> BoardView {
    let rows: Vec<TaskRow> = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.show_all || in_week(task, filter.week))
        .filter(|(_, task)| matches_search(task, &filter.search))
        .map(|(index, task)| to_row(index, task))
        .collect();

    let total_hours = rows.iter().map(|row| row.hours).sum();

    let empty = if tasks.is_empty() {
        Some(EmptyState::NoRecords)
    } else if !rows.is_empty() {
        None
    } else if !filter.search.trim().is_empty() {
        Some(EmptyState::NoMatches(filter.search.trim().to_string()))
    } else if !filter.show_all {
        Some(EmptyState::NoneThisWeek)
    } else {
        Some(EmptyState::NoRecords)
    };

    BoardView { rows, total_hours, empty }
}

fn to_row(index: usize, task: &Task) -> TaskRow {
    TaskRow {
        index,
        row_number: task.row_number,
        name: task.name.clone(),
        task_type: task.task_type.clone(),
        item: task.item.clone(),
        hours: task.hours,
        hours_label: hours_label(task.hours),
        submitted_label: task.submitted.clone().unwrap_or_else(|| "Just now".to_string()),
        ack: task.ack,
        acknowledged: task.is_acknowledged(),
        can_acknowledge: task.row_number.is_some() && task.ack.accepts_acknowledge(),
    }
}

/// "2.5h", "3h"
pub fn hours_label(hours: f64) -> String {
    let rounded = (hours * 100.0).round() / 100.0;
    format!("{}h", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_task(row: u32, week_start: &str, name: &str, hours: f64) -> Task {
        Task {
            row_number: Some(row),
            week_start: week_start.to_string(),
            name: name.to_string(),
            task_type: "Task".to_string(),
            item: "Work".to_string(),
            hours,
            submitted: None,
            ack: AckState::Open,
        }
    }

    fn week_filter(week: NaiveDate) -> TaskFilter {
        TaskFilter { show_all: false, week, search: String::new() }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(2, "2025-01-06", "Dana Scully", 2.0),
            make_task(3, "2025-01-10", "Fox Mulder", 1.5),
            make_task(4, "2025-01-13", "Dana Scully", 4.0),
            make_task(5, "not a date", "Walter Skinner", 0.5),
            make_task(6, "", "Alex Krycek", 3.0),
        ]
    }

    #[test]
    fn test_week_filter_keeps_matching_and_unparsable() {
        let view = render(&sample(), &week_filter(date(2025, 1, 8)));
        let rows: Vec<_> = view.rows.iter().map(|r| r.row_number.unwrap()).collect();
        assert_eq!(rows, vec![2, 3, 5, 6]);
        assert!(view.empty.is_none());
    }

    #[test]
    fn test_week_filter_other_week() {
        let view = render(&sample(), &week_filter(date(2025, 1, 19)));
        let rows: Vec<_> = view.rows.iter().map(|r| r.row_number.unwrap()).collect();
        assert_eq!(rows, vec![4, 5, 6]);
    }

    #[test]
    fn test_in_week_any_weekday_of_bucket() {
        let task = make_task(2, "2025-01-09", "Dana", 1.0);
        for day in 6..=12 {
            assert!(in_week(&task, date(2025, 1, day)), "day {}", day);
        }
        assert!(!in_week(&task, date(2025, 1, 5)));
        assert!(!in_week(&task, date(2025, 1, 13)));
        assert!(in_week(&make_task(3, "soon", "Fox", 1.0), date(2025, 1, 13)));
    }

    #[test]
    fn test_show_all_ignores_week() {
        let filter = TaskFilter { show_all: true, ..week_filter(date(2030, 1, 1)) };
        assert_eq!(render(&sample(), &filter).count(), 5);
    }

    #[test]
    fn test_search_is_case_insensitive_name_only() {
        let filter = TaskFilter {
            show_all: true,
            week: date(2025, 1, 6),
            search: "  SCULLY ".to_string(),
        };
        let view = render(&sample(), &filter);
        assert_eq!(view.count(), 2);
        assert!(view.rows.iter().all(|r| r.name == "Dana Scully"));

        // item text is not searched
        let filter = TaskFilter { search: "work".to_string(), ..filter };
        let view = render(&sample(), &filter);
        assert_eq!(view.count(), 0);
        assert_eq!(view.empty, Some(EmptyState::NoMatches("work".to_string())));
    }

    #[test]
    fn test_total_hours_over_filtered_rows() {
        let view = render(&sample(), &week_filter(date(2025, 1, 6)));
        assert_eq!(view.total_hours, 2.0 + 1.5 + 0.5 + 3.0);
        assert_eq!(view.total_label(), "7h");

        let filter = TaskFilter {
            show_all: true,
            week: date(2025, 1, 6),
            search: "dana".to_string(),
        };
        assert_eq!(render(&sample(), &filter).total_hours, 6.0);
    }

    #[test]
    fn test_empty_states() {
        let none = render(&[], &week_filter(date(2025, 1, 6)));
        assert_eq!(none.empty, Some(EmptyState::NoRecords));
        assert_eq!(none.total_hours, 0.0);

        let tasks = vec![make_task(2, "2025-01-06", "Dana", 1.0)];
        let other_week = render(&tasks, &week_filter(date(2025, 2, 3)));
        assert_eq!(other_week.empty, Some(EmptyState::NoneThisWeek));
    }

    #[test]
    fn test_acknowledged_rows_render_acknowledged() {
        let mut tasks = sample();
        tasks[0].ack = AckState::Pending;
        tasks[1].ack = AckState::Reverted;
        tasks[2].row_number = None;
        let filter = TaskFilter { show_all: true, week: date(2025, 1, 6), search: String::new() };
        let view = render(&tasks, &filter);

        assert!(view.rows[0].acknowledged);
        assert!(!view.rows[0].can_acknowledge);
        assert!(view.rows[1].acknowledged);
        assert!(view.rows[1].can_acknowledge);
        assert!(!view.rows[2].can_acknowledge);
        assert!(view.rows[3].can_acknowledge);
    }

    #[test]
    fn test_row_labels() {
        let mut tasks = vec![make_task(2, "2025-01-06", "Dana", 2.5)];
        tasks[0].submitted = Some("1/6/2025".to_string());
        tasks.push(make_task(3, "2025-01-06", "Fox", 1.0 / 3.0));
        let filter = TaskFilter { show_all: true, week: date(2025, 1, 6), search: String::new() };
        let view = render(&tasks, &filter);
        assert_eq!(view.rows[0].hours_label, "2.5h");
        assert_eq!(view.rows[0].submitted_label, "1/6/2025");
        assert_eq!(view.rows[1].hours_label, "0.33h");
        assert_eq!(view.rows[1].submitted_label, "Just now");
    }
}
