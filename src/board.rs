//! Board State
//!
//! The single task list plus the transitions applied to it. Fetches replace
//! the list wholesale; acknowledgement moves a row through `AckState`.

use crate::error::Result;
use crate::models::{AckState, Task};

/// Why an acknowledge request was not started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckRejected {
    UnknownRow(u32),
    AlreadyAcknowledged(u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    tasks: Vec<Task>,
}

impl Board {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Install a fetched list. The server is authoritative, so local
    /// acknowledgement state is discarded with the rest of the old list.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Merge a fetch outcome. A successful fetch replaces the list, even
    /// with nothing; a failed one leaves it untouched and hands the error back.
    pub fn apply_fetch(&mut self, fetched: Result<Vec<Task>>) -> Result<usize> {
        let tasks = fetched?;
        self.replace(tasks);
        Ok(self.tasks.len())
    }

    /// Optimistically acknowledge the row. Only the first task carrying the
    /// row number is touched.
    pub fn begin_acknowledge(&mut self, row_number: u32) -> std::result::Result<(), AckRejected> {
        let task = self
            .find_mut(row_number)
            .ok_or(AckRejected::UnknownRow(row_number))?;
        if !task.ack.accepts_acknowledge() {
            return Err(AckRejected::AlreadyAcknowledged(row_number));
        }
        task.ack = AckState::Pending;
        Ok(())
    }

    /// The acknowledge request never left the client. The row keeps showing
    /// as acknowledged but offers the action again.
    pub fn acknowledge_failed(&mut self, row_number: u32) {
        if let Some(task) = self.find_mut(row_number) {
            if task.ack == AckState::Pending {
                task.ack = AckState::Reverted;
            }
        }
    }

    fn find_mut(&mut self, row_number: u32) -> Option<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.row_number == Some(row_number))
    }
}
