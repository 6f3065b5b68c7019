//! UI Components
//!
//! Leptos components for the task board.

mod task_form;
mod task_table;
mod board_toolbar;
mod toast;

pub use task_form::TaskForm;
pub use task_table::TaskTable;
pub use board_toolbar::BoardToolbar;
pub use toast::ToastView;
