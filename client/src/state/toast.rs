//! Transient notification state.
//!
//! Validation failures, cart updates, and identity-provider errors all
//! surface here as short-lived messages; nothing in the core state tree
//! records them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// CSS modifier for the host component.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// The notification queue. Plain data so it tests without a browser; the
/// context wraps it in a signal.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a message, returning its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message });
        id
    }

    /// Drop a toast by id; no-op when already gone.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// How long a toast stays on screen.
const TOAST_DURATION_MS: u32 = 3_000;

/// Cloneable context handle to the notification queue.
#[derive(Clone, Copy)]
pub struct Toasts {
    state: RwSignal<ToastState>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message.into());
    }

    /// Currently visible toasts, tracked reactively.
    pub fn current(&self) -> Vec<Toast> {
        self.state.with(|state| state.toasts.clone())
    }

    fn show(&self, kind: ToastKind, message: String) {
        let mut id = 0;
        self.state.update(|state| id = state.push(kind, message));
        let state = self.state;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            state.update(|state| state.dismiss(id));
        });
    }
}

/// Provide an empty queue to descendants.
pub fn provide_toasts() -> Toasts {
    let toasts = Toasts { state: RwSignal::new(ToastState::default()) };
    provide_context(toasts);
    toasts
}

/// The queue provided by [`provide_toasts`].
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
