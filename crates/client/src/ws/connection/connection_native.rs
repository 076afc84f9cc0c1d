//! Native/Desktop WebSocket implementation using tokio-tungstenite.

use dioxus::prelude::*;
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::{SinkExt, StreamExt};
use mafia_shared::{ClientCommand, ServerEvent};
use std::sync::Arc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::{ConnectionState, ReconnectConfig, WsHandle};

/// A managed WebSocket connection to the game server (Native implementation)
pub struct WsConnection {
    /// Current connection state
    pub state: SyncSignal<ConnectionState>,
    /// Channel for sending commands
    sender: UnboundedSender<ClientCommand>,
}

impl WsConnection {
    /// Create a new WebSocket connection
    pub fn new(
        url_builder: impl Fn() -> Option<String> + Send + Sync + 'static,
        on_event: impl Fn(ServerEvent) + Send + Sync + 'static,
    ) -> Self {
        let (sender, receiver) = unbounded();
        let state = Signal::new_maybe_sync(ConnectionState::Disconnected);
        let reconnect_config = ReconnectConfig::default();

        let connection = Self { state, sender };

        // Start connection loop in a background task
        start_connection_loop(
            state,
            receiver,
            Arc::new(url_builder),
            Arc::new(on_event),
            reconnect_config,
        );

        connection
    }

    /// Get a handle for sending commands
    pub fn handle(&self) -> WsHandle {
        WsHandle::new(self.sender.clone())
    }
}

/// Start the connection management loop in a background tokio task
fn start_connection_loop(
    mut state: SyncSignal<ConnectionState>,
    receiver: UnboundedReceiver<ClientCommand>,
    url_builder: Arc<dyn Fn() -> Option<String> + Send + Sync>,
    on_event: Arc<dyn Fn(ServerEvent) + Send + Sync>,
    reconnect_config: ReconnectConfig,
) {
    tokio::spawn(async move {
        // Wrap receiver in a mutex for sharing between tasks
        let receiver = Arc::new(tokio::sync::Mutex::new(receiver));
        let mut attempt = 0u32;

        loop {
            // Build URL
            let Some(url) = url_builder() else {
                // No URL available (probably not authenticated)
                state.set(ConnectionState::Disconnected);
                // Wait a bit and try again
                tokio::time::sleep(tokio::time::Duration::from_millis(1000)).await;
                continue;
            };

            if attempt == 0 {
                state.set(ConnectionState::Connecting);
            } else {
                state.set(ConnectionState::Reconnecting { attempt });
            }

            // Attempt connection
            match connect_async(&url).await {
                Ok((ws_stream, _response)) => {
                    state.set(ConnectionState::Connected);
                    attempt = 0;
                    crate::log_info!("Event channel connected");

                    let (mut write, mut read) = ws_stream.split();

                    // Channel to signal when connection closes
                    let (close_tx, mut close_rx) = tokio::sync::mpsc::unbounded_channel::<()>();

                    // Spawn read task
                    let on_event_clone = on_event.clone();
                    let close_tx_for_read = close_tx.clone();
                    tokio::spawn(async move {
                        while let Some(msg_result) = read.next().await {
                            match msg_result {
                                Ok(Message::Text(text)) => {
                                    crate::log_debug!("Received: {}", text);
                                    match serde_json::from_str::<ServerEvent>(&text) {
                                        Ok(event) => on_event_clone(event),
                                        Err(e) => {
                                            crate::log_warn!("Unrecognized event: {}", e)
                                        }
                                    }
                                }
                                Ok(Message::Close(_)) => {
                                    crate::log_info!("Event channel received close frame");
                                    break;
                                }
                                Ok(Message::Ping(data)) => {
                                    // Pong is handled automatically by tungstenite
                                    crate::log_debug!("Received ping: {:?}", data);
                                }
                                Ok(_) => {
                                    // Ignore binary, pong, etc.
                                }
                                Err(e) => {
                                    crate::log_error!("Event channel read error: {}", e);
                                    break;
                                }
                            }
                        }
                        let _ = close_tx_for_read.send(());
                    });

                    // Spawn write task
                    let receiver_for_write = receiver.clone();
                    tokio::spawn(async move {
                        loop {
                            let msg = {
                                let mut rx = receiver_for_write.lock().await;
                                rx.next().await
                            };

                            match msg {
                                Some(cmd) => match serde_json::to_string(&cmd) {
                                    Ok(json) => {
                                        crate::log_debug!("Sending: {}", json);
                                        if let Err(e) = write.send(Message::Text(json.into())).await
                                        {
                                            crate::log_error!("Send failed: {}", e);
                                            break;
                                        }
                                    }
                                    Err(e) => {
                                        crate::log_error!("Serialize failed: {}", e);
                                    }
                                },
                                None => {
                                    // Sender dropped
                                    crate::log_info!("Sender dropped, stopping write task");
                                    break;
                                }
                            }
                        }
                        let _ = close_tx.send(());
                    });

                    // Wait for connection to close
                    close_rx.recv().await;
                    crate::log_info!("Event channel closed");
                    state.set(ConnectionState::Disconnected);
                }
                Err(e) => {
                    crate::log_error!("Event channel error: {}", e);

                    // Check if we should retry
                    if reconnect_config.max_attempts > 0 && attempt >= reconnect_config.max_attempts
                    {
                        state.set(ConnectionState::Failed {
                            reason: format!(
                                "Max reconnect attempts ({}) exceeded",
                                reconnect_config.max_attempts
                            ),
                        });
                        break;
                    }

                    // Wait before reconnecting
                    let delay = reconnect_config.delay_for_attempt(attempt);
                    crate::log_info!("Reconnecting in {}ms (attempt {})", delay, attempt + 1);
                    tokio::time::sleep(tokio::time::Duration::from_millis(delay as u64)).await;
                    attempt += 1;
                }
            }
        }
    });
}
