//! TaskBoard Frontend Entry Point

mod app;
mod board;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod form;
mod models;
mod normalize;
mod view_model;
mod week;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if console_logger::init(level).is_err() {
        web_sys::console::warn_1(&"Logger already installed".into());
    }

    mount_to_body(App);
}
