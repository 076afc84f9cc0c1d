//! WebSocket connection with state management and auto-reconnect.
//!
//! This module provides the shared types and conditionally includes
//! the platform-specific implementation.

use futures_channel::mpsc::UnboundedSender;
use mafia_shared::{ClientCommand, MessageKind};

/// Connection state for the event channel
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting { attempt: u32 },
    Failed { reason: String },
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    pub fn is_connecting(&self) -> bool {
        matches!(
            self,
            ConnectionState::Connecting | ConnectionState::Reconnecting { .. }
        )
    }

    /// Short status label for the connection indicator.
    pub fn label(&self) -> String {
        match self {
            ConnectionState::Disconnected => "Disconnected".to_string(),
            ConnectionState::Connecting => "Connecting...".to_string(),
            ConnectionState::Connected => "Connected".to_string(),
            ConnectionState::Reconnecting { attempt } => {
                format!("Reconnecting (attempt {})...", attempt)
            }
            ConnectionState::Failed { .. } => "Connection failed".to_string(),
        }
    }
}

/// Configuration for auto-reconnect behavior
#[derive(Debug, Clone)]
pub struct ReconnectConfig {
    /// Maximum number of reconnect attempts (0 = infinite)
    pub max_attempts: u32,
    /// Fixed delay between attempts in milliseconds
    pub delay_ms: u32,
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay_ms: 1000,
        }
    }
}

impl ReconnectConfig {
    /// Delay before the given attempt. The backoff is deliberately flat:
    /// game rooms are short-lived and a player either comes back within a
    /// few seconds or not at all.
    pub fn delay_for_attempt(&self, _attempt: u32) -> u32 {
        self.delay_ms
    }
}

/// Handle for sending commands through the WebSocket connection
#[derive(Clone)]
pub struct WsHandle {
    sender: UnboundedSender<ClientCommand>,
}

impl WsHandle {
    pub(crate) fn new(sender: UnboundedSender<ClientCommand>) -> Self {
        Self { sender }
    }

    /// Send a command to the server
    pub fn send(&self, cmd: ClientCommand) -> Result<(), String> {
        crate::log_debug!("WsHandle::send: {:?}", cmd);
        self.sender
            .unbounded_send(cmd)
            .map_err(|e| format!("Failed to send: {}", e))
    }

    /// Bind this socket to a logged-in user
    pub fn authenticate(&self, user_id: i64) -> Result<(), String> {
        self.send(ClientCommand::Authenticate { user_id })
    }

    /// Send a chat message to the current room
    pub fn send_chat(&self, content: &str) -> Result<(), String> {
        self.send(ClientCommand::SendMessage {
            content: content.to_string(),
            message_type: MessageKind::Text,
        })
    }

    /// Toggle the ready flag in the lobby
    pub fn toggle_ready(&self) -> Result<(), String> {
        self.send(ClientCommand::ToggleReady)
    }
}

// Include platform-specific implementation
#[cfg(target_arch = "wasm32")]
mod connection_wasm;
#[cfg(target_arch = "wasm32")]
pub use connection_wasm::WsConnection;

#[cfg(not(target_arch = "wasm32"))]
mod connection_native;
#[cfg(not(target_arch = "wasm32"))]
pub use connection_native::WsConnection;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconnect_delay_is_fixed_across_attempts() {
        let config = ReconnectConfig::default();
        assert_eq!(config.delay_for_attempt(0), 1000);
        assert_eq!(config.delay_for_attempt(3), 1000);
        assert_eq!(config.delay_for_attempt(config.max_attempts), 1000);
    }

    #[test]
    fn reconnect_attempts_are_bounded() {
        let config = ReconnectConfig::default();
        assert_eq!(config.max_attempts, 5);
    }

    #[test]
    fn connection_state_helpers() {
        assert!(ConnectionState::Connected.is_connected());
        assert!(!ConnectionState::Disconnected.is_connected());
        assert!(ConnectionState::Connecting.is_connecting());
        assert!(ConnectionState::Reconnecting { attempt: 2 }.is_connecting());
        assert!(!ConnectionState::Failed {
            reason: "gone".to_string()
        }
        .is_connecting());
    }
}
