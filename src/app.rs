//! TaskBoard Frontend App
//!
//! Entry form on top, filtered task table below, toast overlay.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::components::{BoardToolbar, TaskForm, TaskTable, ToastView};
use crate::config::Config;
use crate::context::AppContext;
use crate::view_model::TaskFilter;
use crate::week::current_week;

#[component]
pub fn App() -> impl IntoView {
    let config = Config::load();
    match &config {
        Ok(c) => log::info!("Task endpoint: {}", c.endpoint),
        Err(e) => log::error!("{}", e),
    }
    let refresh_interval = config.as_ref().ok().map(|c| c.refresh_interval_ms);

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Filter state
    let selected_week = RwSignal::new(current_week());
    let show_all = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let filter = Signal::derive(move || TaskFilter {
        show_all: show_all.get(),
        week: selected_week.get(),
        search: search.get(),
    });

    // Initial load; reports a config error once if the endpoint is unusable
    ctx.refresh();

    // Periodic reconcile. Lives as long as the page.
    if let Some(ms) = refresh_interval {
        Interval::new(ms, move || ctx.refresh()).forget();
    }

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Task Log"</h1>

                <TaskForm />

                <section class="board">
                    <BoardToolbar
                        selected_week=selected_week
                        show_all=show_all
                        search=search
                    />
                    <TaskTable filter=filter />
                </section>
            </main>

            <ToastView />
        </div>
    }
}
