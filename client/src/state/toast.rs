//! Transient notification list.
//!
//! DESIGN
//! ======
//! Toasts are kept in arrival order. Each one is removed by its own timer
//! (see `util::toast`) after `duration_ms`; there is no dedup or priority.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// Lifetime of a toast when the caller does not pick one.
pub const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS classes for the toast stack.
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

impl Toast {
    /// How long the toast stays on screen.
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return a copy carrying its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, duration_ms: u32) -> Toast {
        self.next_id += 1;
        let toast = Toast { id: self.next_id, message: message.into(), kind, duration_ms };
        self.items.push(toast.clone());
        toast
    }

    /// Remove the toast with `id`. Returns whether it was still showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}
