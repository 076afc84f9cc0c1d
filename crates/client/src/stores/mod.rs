//! Global state stores.
//!
//! Server state replicas and UI notification queues live here as
//! `GlobalSignal`s with free mutator functions, so both the WebSocket
//! dispatch path and the views can reach them without prop drilling.

pub mod notifications;
pub mod session;

pub use notifications::{
    dismiss, hide_loading, notify, notify_for, show_loading, Toast, LOADING, TOASTS,
};
pub use session::{apply_server_event, SessionState, VoteEntry, SESSION};

/// Clear all cached state (used during logout).
pub fn reset() {
    session::reset();
    notifications::reset();
}
