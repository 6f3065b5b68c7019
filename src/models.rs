//! Frontend Models
//!
//! Task entities as held by the board and as sent to the endpoint.

use serde::Serialize;

/// Default task type when the server leaves it blank
pub const DEFAULT_TASK_TYPE: &str = "Task";

/// Default name when the server leaves it blank
pub const UNKNOWN_NAME: &str = "Unknown";

/// Acknowledgement lifecycle of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AckState {
    /// Not acknowledged
    #[default]
    Open,
    /// Acknowledged locally, request sent or in flight
    Pending,
    /// Server reports the task acknowledged
    Confirmed,
    /// Request failed to go out; still shown acknowledged, may be retried
    Reverted,
}

impl AckState {
    pub fn from_server(acknowledged: bool) -> Self {
        if acknowledged {
            AckState::Confirmed
        } else {
            AckState::Open
        }
    }

    /// Whether the row renders as acknowledged
    pub fn is_acknowledged(self) -> bool {
        self != AckState::Open
    }

    /// Whether the acknowledge action is currently offered
    pub fn accepts_acknowledge(self) -> bool {
        matches!(self, AckState::Open | AckState::Reverted)
    }
}

/// One logged row of work
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Server row identity; unknown until the server has stored the task
    pub row_number: Option<u32>,
    pub week_start: String,
    pub name: String,
    pub task_type: String,
    pub item: String,
    pub hours: f64,
    pub submitted: Option<String>,
    pub ack: AckState,
}

impl Task {
    pub fn is_acknowledged(&self) -> bool {
        self.ack.is_acknowledged()
    }
}

/// Create payload (matches the endpoint's expected keys)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub week_start: String,
    pub name: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub item: String,
    pub hours: f64,
}

/// Acknowledge payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgeRequest {
    pub action: &'static str,
    pub row_number: u32,
}

impl AcknowledgeRequest {
    pub fn new(row_number: u32) -> Self {
        Self { action: "acknowledge", row_number }
    }
}
