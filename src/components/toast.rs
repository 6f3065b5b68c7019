//! Toast Component

use leptos::prelude::*;

use crate::context::{use_app_context, ToastKind};

/// Auto-dismissing notification banner
#[component]
pub fn ToastView() -> impl IntoView {
    let ctx = use_app_context();

    move || {
        ctx.toast.get().map(|toast| {
            let class = match toast.kind {
                ToastKind::Success => "toast show",
                ToastKind::Error => "toast show error",
            };
            view! {
                <div class=class role="status">
                    <span class="toast-message">{toast.message}</span>
                </div>
            }
        })
    }
}
