//! Toast posting with self-expiry.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::future::Future;

use leptos::prelude::*;

use crate::state::toast::{DEFAULT_TOAST_MS, ToastKind, ToastState};

/// Post a toast that disappears after the default duration.
pub fn push_toast(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    push_toast_for(toasts, message, kind, DEFAULT_TOAST_MS);
}

/// Post a toast that disappears after `duration_ms`.
pub fn push_toast_for(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind, duration_ms: u32) {
    let Some(toast) = toasts.try_update(|t| t.push(message, kind, duration_ms)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(expire_after(toasts, toast.id, gloo_timers::future::sleep(toast.lifetime())));
    #[cfg(not(feature = "hydrate"))]
    let _ = toast;
}

/// Remove toast `id` once `wait` completes. Returns whether it was still shown.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) async fn expire_after(toasts: RwSignal<ToastState>, id: u64, wait: impl Future<Output = ()>) -> bool {
    wait.await;
    toasts.try_update(|t| t.dismiss(id)).unwrap_or(false)
}
