//! Board Toolbar Component
//!
//! Week navigation, show-all toggle, name search and manual refresh.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::week::{current_week, shift_weeks, week_range_label};

#[component]
pub fn BoardToolbar(
    selected_week: RwSignal<NaiveDate>,
    show_all: RwSignal<bool>,
    search: RwSignal<String>,
) -> impl IntoView {
    let ctx = use_app_context();

    let range_label = move || {
        if show_all.get() {
            "All weeks".to_string()
        } else {
            week_range_label(selected_week.get())
        }
    };

    view! {
        <div class="board-toolbar">
            <div class="week-nav">
                <button
                    class="btn-week"
                    disabled=move || show_all.get()
                    on:click=move |_| selected_week.update(|w| *w = shift_weeks(*w, -1))
                >
                    "‹"
                </button>
                <span class="current-week">{range_label}</span>
                <button
                    class="btn-week"
                    disabled=move || show_all.get()
                    on:click=move |_| selected_week.update(|w| *w = shift_weeks(*w, 1))
                >
                    "›"
                </button>
                <button class="btn-week" on:click=move |_| selected_week.set(current_week())>
                    "This week"
                </button>
            </div>

            <label class="show-all">
                <input
                    type="checkbox"
                    prop:checked=move || show_all.get()
                    on:change=move |ev| show_all.set(event_target_checked(&ev))
                />
                "Show all weeks"
            </label>

            <input
                type="search"
                class="search-input"
                placeholder="Search by name..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <button
                class=move || if ctx.is_fetching() { "btn-refresh loading" } else { "btn-refresh" }
                on:click=move |_| ctx.refresh()
            >
                "Refresh"
            </button>
        </div>
    }
}
