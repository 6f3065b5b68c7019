//! Task Form Component
//!
//! Timesheet entry form. Submits without waiting for a readable response,
//! then resets to the remembered name and the current week.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::form::{TaskDraft, TASK_TYPES};
use crate::week::{current_week, format_display, format_week_key, parse_date, week_end};

fn fresh_draft() -> TaskDraft {
    let name = commands::remembered_name().unwrap_or_default();
    TaskDraft::blank(&format_week_key(current_week()), &name)
}

/// Form for logging a new task
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let initial = fresh_draft();
    let week_start = RwSignal::new(initial.week_start);
    let name = RwSignal::new(initial.name);
    let task_type = RwSignal::new(initial.task_type);
    let item = RwSignal::new(initial.item);
    let hours = RwSignal::new(initial.hours);
    let (submitting, set_submitting) = signal(false);

    let reset = move || {
        let draft = fresh_draft();
        week_start.set(draft.week_start);
        name.set(draft.name);
        task_type.set(draft.task_type);
        item.set(draft.item);
        hours.set(draft.hours);
    };

    let week_ending = move || {
        parse_date(&week_start.get())
            .map(|date| format!("Week ending {}", format_display(week_end(date))))
            .unwrap_or_default()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let draft = TaskDraft {
            week_start: week_start.get_untracked(),
            name: name.get_untracked(),
            task_type: task_type.get_untracked(),
            item: item.get_untracked(),
            hours: hours.get_untracked(),
        };
        let task = match draft.validate() {
            Ok(task) => task,
            Err(e) => return ctx.fail(&e),
        };

        set_submitting.set(true);
        spawn_local(async move {
            match ctx.submit(task).await {
                Ok(()) => reset(),
                Err(e) => ctx.fail(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <div class="form-row">
                <label>
                    "Week start"
                    <input
                        type="date"
                        prop:value=move || week_start.get()
                        on:change=move |ev| week_start.set(event_target_value(&ev))
                    />
                </label>
                <span class="week-end">{week_ending}</span>
            </div>

            <div class="form-row">
                <label>
                    "Name"
                    <input
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Type"
                    <select
                        prop:value=move || task_type.get()
                        on:change=move |ev| task_type.set(event_target_value(&ev))
                    >
                        {TASK_TYPES.iter().map(|t| view! {
                            <option value=*t>{*t}</option>
                        }).collect_view()}
                    </select>
                </label>
            </div>

            <label class="form-item">
                "Item"
                <textarea
                    placeholder="What did you work on?"
                    prop:value=move || item.get()
                    on:input=move |ev| item.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="form-row">
                <label>
                    "Hours"
                    <input
                        type="number"
                        min="0"
                        step="0.25"
                        prop:value=move || hours.get()
                        on:input=move |ev| hours.set(event_target_value(&ev))
                    />
                </label>
                <button
                    type="submit"
                    class=move || if submitting.get() { "btn-submit loading" } else { "btn-submit" }
                    disabled=move || submitting.get()
                >
                    "Submit"
                </button>
            </div>
        </form>
    }
}
