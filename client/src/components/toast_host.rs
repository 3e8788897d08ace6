//! Renders the transient notification queue.

use leptos::prelude::*;

use crate::state::toast::use_toasts;

/// Fixed-position stack of active toasts. Mount once, near the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .current()
                    .into_iter()
                    .map(|toast| {
                        view! {
                            <div class=format!("toast {}", toast.kind.class())>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
