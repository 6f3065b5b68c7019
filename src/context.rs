//! TaskBoard Controller
//!
//! Shared state provided via Leptos Context API, plus the fetch, submit and
//! acknowledge pipelines that mutate it. Every pipeline catches its own
//! failures and reports them as a toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::Board;
use crate::commands;
use crate::config::{self, Config};
use crate::error::{AppError, Result};
use crate::models::NewTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Sequence number, so an older timer never hides a newer toast
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Clear `current` only if it still shows toast `id`
fn dismiss_toast(current: &mut Option<Toast>, id: u64) {
    if current.as_ref().is_some_and(|t| t.id == id) {
        *current = None;
    }
}

/// App-wide state and pipelines
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Task list - fetched, optimistically acknowledged
    pub board: RwSignal<Board>,
    /// Current notification
    pub toast: RwSignal<Option<Toast>>,
    /// Fetches in flight
    pub fetching: RwSignal<u32>,
    config: StoredValue<Result<Config>>,
    toast_seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new(config: Result<Config>) -> Self {
        Self {
            board: RwSignal::new(Board::new(Vec::new())),
            toast: RwSignal::new(None),
            fetching: RwSignal::new(0),
            config: StoredValue::new(config),
            toast_seq: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> Result<Config> {
        self.config.get_value()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching.get() > 0
    }

    // ========================
    // Notifications
    // ========================

    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.toast_seq.with_value(|seq| seq + 1);
        self.toast_seq.set_value(id);
        self.toast.set(Some(Toast { id, message: message.into(), kind }));

        let lifetime = self.config.with_value(|c| {
            c.as_ref()
                .map(|c| c.toast_ms)
                .unwrap_or_else(|_| config::fallback_toast_ms())
        });
        let toast = self.toast;
        spawn_local(async move {
            TimeoutFuture::new(lifetime).await;
            toast.update(|current| dismiss_toast(current, id));
        });
    }

    pub fn fail(&self, err: &AppError) {
        match err {
            AppError::Invalid(_) => log::warn!("{}", err),
            _ => log::error!("{}", err),
        }
        self.notify(err.to_string(), ToastKind::Error);
    }

    // ========================
    // Fetch
    // ========================

    /// Fetch and replace the board. Overlapping fetches are not fenced; the
    /// last one to complete wins.
    pub fn refresh(self) {
        let config = match self.config() {
            Ok(config) => config,
            Err(e) => return self.fail(&e),
        };

        self.fetching.update(|n| *n += 1);
        spawn_local(async move {
            let fetched = commands::fetch_tasks(&config.endpoint).await;
            match self.board.try_update(|board| board.apply_fetch(fetched)) {
                Some(Ok(count)) => log::info!("Loaded {} tasks", count),
                Some(Err(e)) => self.fail(&e),
                None => {}
            }
            self.fetching.update(|n| *n = n.saturating_sub(1));
        });
    }

    /// Refresh after the reconcile delay
    pub fn refresh_later(self) {
        let Ok(config) = self.config() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(config.reconcile_delay_ms).await;
            self.refresh();
        });
    }

    // ========================
    // Submit / Acknowledge
    // ========================

    /// Send a new task. Success only means the request went out; the next
    /// fetch shows whether the server stored it.
    pub async fn submit(self, task: NewTask) -> Result<()> {
        let config = self.config()?;
        commands::submit_task(&config.endpoint, &task).await?;

        log::info!("Submitted task for {} ({}h)", task.name, task.hours);
        commands::remember_name(&task.name);
        self.notify("Task added successfully!", ToastKind::Success);
        self.refresh_later();
        Ok(())
    }

    /// Optimistically acknowledge a row, then tell the server
    pub fn acknowledge(self, row_number: u32) {
        let config = match self.config() {
            Ok(config) => config,
            Err(e) => return self.fail(&e),
        };

        match self.board.try_update(|board| board.begin_acknowledge(row_number)) {
            Some(Ok(())) => {}
            Some(Err(rejected)) => {
                log::warn!("Acknowledge not started: {:?}", rejected);
                return;
            }
            None => return,
        }

        spawn_local(async move {
            match commands::acknowledge_task(&config.endpoint, row_number).await {
                Ok(()) => {
                    log::info!("Acknowledged row {}", row_number);
                    self.refresh_later();
                }
                Err(e) => {
                    self.board.update(|board| board.acknowledge_failed(row_number));
                    self.fail(&e);
                }
            }
        });
    }
}

/// Get the controller from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Option<Toast> {
        Some(Toast { id, message: format!("toast {}", id), kind: ToastKind::Success })
    }

    #[test]
    fn test_dismiss_current_toast() {
        let mut current = toast(3);
        dismiss_toast(&mut current, 3);
        assert_eq!(current, None);
    }

    #[test]
    fn test_older_timer_keeps_newer_toast() {
        let mut current = toast(4);
        dismiss_toast(&mut current, 3);
        assert_eq!(current, toast(4));

        let mut empty = None;
        dismiss_toast(&mut empty, 1);
        assert_eq!(empty, None);
    }
}
