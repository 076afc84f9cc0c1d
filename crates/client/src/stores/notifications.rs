//! Toast queue and global loading overlay.

use dioxus::prelude::*;
use mafia_shared::Severity;

const DEFAULT_TOAST_MS: i32 = 4000;

/// A transient notification shown in the toast stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub severity: Severity,
    /// Remaining display time; the toast host counts this down.
    pub ttl_ms: i32,
}

/// Active toasts, newest last.
pub static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

/// Message for the modal loading overlay, `None` when hidden.
pub static LOADING: GlobalSignal<Option<String>> = Signal::global(|| None);

/// Show a toast with the default duration.
pub fn notify(message: impl Into<String>, severity: Severity) {
    notify_for(message, severity, DEFAULT_TOAST_MS);
}

/// Show a toast for a specific duration.
pub fn notify_for(message: impl Into<String>, severity: Severity, duration_ms: i32) {
    TOASTS.write().push(Toast {
        id: uuid::Uuid::new_v4().to_string(),
        message: message.into(),
        severity,
        ttl_ms: duration_ms,
    });
}

/// Dismiss a toast by id.
pub fn dismiss(id: &str) {
    TOASTS.write().retain(|t| t.id != id);
}

/// Age all toasts by `elapsed_ms`, dropping expired ones.
pub fn advance_toasts(elapsed_ms: i32) {
    let mut toasts = TOASTS.write();
    for toast in toasts.iter_mut() {
        toast.ttl_ms -= elapsed_ms;
    }
    toasts.retain(|t| t.ttl_ms > 0);
}

/// Show the loading overlay with a status message.
pub fn show_loading(message: impl Into<String>) {
    *LOADING.write() = Some(message.into());
}

/// Hide the loading overlay.
pub fn hide_loading() {
    *LOADING.write() = None;
}

/// Clear toasts and the overlay.
pub fn reset() {
    TOASTS.write().clear();
    hide_loading();
}
