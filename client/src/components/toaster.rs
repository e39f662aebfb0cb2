//! Toast stack rendered above the editor.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Milliseconds a toast stays visible before dismissing itself.
#[cfg(feature = "csr")]
const TOAST_TIMEOUT_MS: u32 = 3_000;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Arm one timer per new toast. The untracked update keeps the effect from
    // re-running on its own write.
    Effect::new(move || {
        toasts.track();
        let fresh = toasts.try_update_untracked(ToastState::take_unscheduled).unwrap_or_default();
        for id in fresh {
            schedule_dismiss(toasts, id);
        }
    });

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class={format!("toast {}", toast.intent.class())}>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    aria-label="关闭"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Arrange for toast `id` to disappear after [`TOAST_TIMEOUT_MS`]. A toast
/// closed by hand before then makes the dismiss a no-op.
fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(TOAST_TIMEOUT_MS, move || {
            let _ = toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (toasts, id);
    }
}
