//! Task Table Component
//!
//! Renders the filtered view model: rows, empty state and hour total.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::view_model::{render, BoardView, EmptyState, TaskFilter, TaskRow};

/// Filtered task table with per-row acknowledge buttons
#[component]
pub fn TaskTable(#[prop(into)] filter: Signal<TaskFilter>) -> impl IntoView {
    let ctx = use_app_context();

    let board_view = Memo::new(move |_| {
        let filter = filter.get();
        ctx.board.with(|board| render(board.tasks(), &filter))
    });

    let rows = move || board_view.with(|v| v.rows.clone());
    let empty = move || board_view.with(|v| v.empty.clone());

    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Type"</th>
                    <th>"Item"</th>
                    <th>"Hours"</th>
                    <th>"Submitted"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || empty().map(|state| view! { <EmptyRow state=state /> })}
                <For
                    each=rows
                    key=|row| {
                        (
                            row.index,
                            row.row_number,
                            row.ack,
                            row.name.clone(),
                            row.item.clone(),
                            row.hours_label.clone(),
                        )
                    }
                    children=move |row| view! { <TaskRowView row=row /> }
                />
            </tbody>
            <tfoot>
                <tr>
                    <td colspan="3">
                        {move || board_view.with(|v| format!("{} items", v.count()))}
                    </td>
                    <td colspan="3">{move || board_view.with(BoardView::total_label)}</td>
                </tr>
            </tfoot>
        </table>
    }
}

#[component]
fn TaskRowView(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();
    let row_number = row.row_number;
    let item_title = row.item.clone();

    let ack_label = if row.acknowledged { "Acked" } else { "Ack" };
    let ack_title = if row_number.is_none() {
        "Not synced yet - refresh to acknowledge"
    } else {
        ""
    };

    view! {
        <tr class=if row.acknowledged { "task-row acknowledged" } else { "task-row" }>
            <td><strong>{row.name}</strong></td>
            <td><span class="badge">{row.task_type}</span></td>
            <td title=item_title>{row.item}</td>
            <td>{row.hours_label}</td>
            <td class="submitted">{row.submitted_label}</td>
            <td>
                <button
                    class="btn-ack"
                    title=ack_title
                    disabled=!row.can_acknowledge
                    on:click=move |_| {
                        if let Some(row_number) = row_number {
                            ctx.acknowledge(row_number);
                        }
                    }
                >
                    {ack_label}
                </button>
            </td>
        </tr>
    }
}

#[component]
fn EmptyRow(state: EmptyState) -> impl IntoView {
    view! {
        <tr class="empty-state">
            <td colspan="6">
                <div class="empty-message">
                    <p>{state.title()}</p>
                    <p class="empty-subtext">{state.hint()}</p>
                </div>
            </td>
        </tr>
    }
}
