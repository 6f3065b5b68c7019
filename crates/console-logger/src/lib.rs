//! Console Logger
//!
//! A `log` backend for browser apps. Each record becomes one line on the
//! devtools console, routed to `console.error`/`warn`/`info`/`debug` by level.

use std::fmt;

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger that writes formatted records to the browser console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let stamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&stamp, record.level(), record.target(), record.args());
        match record.level() {
            Level::Error => web_sys::console::error_1(&line.into()),
            Level::Warn => web_sys::console::warn_1(&line.into()),
            Level::Info => web_sys::console::info_1(&line.into()),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// `HH:MM:SS.mmm LEVEL [target] message`
fn format_line(stamp: &str, level: Level, target: &str, args: &fmt::Arguments) -> String {
    format!("{} {:<5} [{}] {}", stamp, level, target, args)
}
