//! WebSocket event channel.
//!
//! A single managed connection to the game server: auto-reconnect with a
//! bounded fixed backoff, re-authentication after every (re)connect, and
//! a dispatch path that folds incoming events into the global stores.

mod connection;
mod manager;

pub use connection::{ConnectionState, ReconnectConfig, WsConnection, WsHandle};
pub use manager::{clear_connection, handle, is_connected, state, WsManager, WS_STATE};
