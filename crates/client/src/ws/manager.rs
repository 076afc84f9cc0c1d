//! Connection manager and event dispatch.
//!
//! Owns the single WebSocket connection for the logged-in user and folds
//! incoming events into the global stores plus the toast queue.

use std::rc::Rc;

use dioxus::prelude::*;
use mafia_shared::{ServerEvent, Severity};

use super::connection::{ConnectionState, WsConnection, WsHandle};
use crate::session::SessionContext;
use crate::stores::{self, notify_for};

const DEFAULT_TOAST_MS: i32 = 4000;

/// Global connection state for the status indicator.
pub static WS_STATE: GlobalSignal<ConnectionState> =
    Signal::global(|| ConnectionState::Disconnected);

static WS_HANDLE: GlobalSignal<Option<WsHandle>> = Signal::global(|| None);

/// Get the handle for the active connection, if any.
pub fn handle() -> Option<WsHandle> {
    WS_HANDLE.read().clone()
}

/// Current connection state.
pub fn state() -> ConnectionState {
    WS_STATE.read().clone()
}

/// Check if the event channel is up.
pub fn is_connected() -> bool {
    state().is_connected()
}

/// Drop the connection handle (used during logout).
pub fn clear_connection() {
    *WS_HANDLE.write() = None;
    *WS_STATE.write() = ConnectionState::Disconnected;
}

/// Toast to surface for an event, if any. `None` means the event is
/// rendered inline (chat feed, vote panel, summary modal).
fn toast_for(event: &ServerEvent) -> Option<(String, Severity, i32)> {
    match event {
        ServerEvent::RoomJoined { room } => Some((
            format!("Joined room {}", room.room_code),
            Severity::Success,
            DEFAULT_TOAST_MS,
        )),
        ServerEvent::RoomLeft => Some((
            "You left the room".to_string(),
            Severity::Info,
            DEFAULT_TOAST_MS,
        )),
        ServerEvent::PlayerJoined { player } => Some((
            format!("{} joined the room", player.display_name),
            Severity::Info,
            DEFAULT_TOAST_MS,
        )),
        ServerEvent::PlayerLeft { player } => Some((
            format!("{} left the room", player.display_name),
            Severity::Warning,
            DEFAULT_TOAST_MS,
        )),
        ServerEvent::GameStarted { .. } => Some((
            "The game has started!".to_string(),
            Severity::Success,
            DEFAULT_TOAST_MS,
        )),
        ServerEvent::GamePhaseChanged { phase } => {
            Some((phase.phase.banner_text().to_string(), Severity::Info, 3000))
        }
        ServerEvent::RoleAssigned { role } => Some((
            format!("Your role: {}", role.display_name()),
            Severity::Info,
            5000,
        )),
        ServerEvent::PlayerDied { player } => Some((
            format!("{} was killed!", player.display_name),
            Severity::Danger,
            DEFAULT_TOAST_MS,
        )),
        ServerEvent::VoteResult { message, .. } => {
            Some((message.clone(), Severity::Info, DEFAULT_TOAST_MS))
        }
        ServerEvent::Notification { message, kind } => {
            Some((message.clone(), *kind, DEFAULT_TOAST_MS))
        }
        ServerEvent::Error { message } => {
            Some((message.clone(), Severity::Danger, DEFAULT_TOAST_MS))
        }
        ServerEvent::NewMessage { .. }
        | ServerEvent::MessageHidden { .. }
        | ServerEvent::VoiceTranscribed { .. }
        | ServerEvent::VoteCast { .. }
        | ServerEvent::GameEnded { .. } => None,
    }
}

/// Fold a server event into the stores and surface user-facing toasts.
pub fn dispatch(event: ServerEvent) {
    stores::apply_server_event(&event);

    if let Some((message, severity, duration_ms)) = toast_for(&event) {
        notify_for(message, severity, duration_ms);
    }
}

/// Component that manages the WebSocket connection for the session.
#[component]
pub fn WsManager(children: Element) -> Element {
    let session = use_context::<SessionContext>();

    // Keep the live connection alive across renders
    let mut active = use_signal(|| None::<Rc<WsConnection>>);
    let mut last_user_id = use_signal(|| None::<i64>);

    // Establish (or tear down) the connection when the session changes
    use_effect(move || {
        let user_id = session.user.read().as_ref().map(|u| u.id);

        if *last_user_id.peek() != user_id {
            crate::log_info!("WsManager: session changed, dropping old connection");
            active.set(None);
            clear_connection();
            last_user_id.set(user_id);
        }

        if user_id.is_none() || active.peek().is_some() {
            return;
        }

        // The URL is computed once per session; reconnect attempts reuse it.
        let ws_url = session.ws_url("/ws");
        crate::log_info!("WsManager: opening event channel at {}", ws_url);

        let url_builder = move || Some(ws_url.clone());
        let connection = WsConnection::new(url_builder, dispatch);

        *WS_HANDLE.write() = Some(connection.handle());
        active.set(Some(Rc::new(connection)));
    });

    // Mirror connection state and re-authenticate after every (re)connect
    use_effect(move || {
        let Some(conn_state) = active.read().as_ref().map(|c| c.state.read().clone()) else {
            return;
        };

        let was_connected = WS_STATE.peek().is_connected();
        let now_connected = conn_state.is_connected();
        *WS_STATE.write() = conn_state;

        // The server drops socket identity on disconnect, so each new
        // connection has to bind itself to the user again.
        if now_connected && !was_connected {
            if let (Some(user_id), Some(h)) = (*last_user_id.peek(), handle()) {
                let mut session = session;
                spawn(async move {
                    // Confirm the cookie session is still alive before
                    // binding; a dead session means a clean logout instead
                    // of a socket that gets every command rejected.
                    match session.client().fetch_me().await {
                        Ok(me) if me.success => {
                            if me.user.is_some() {
                                session.user.set(me.user);
                            }
                            crate::log_info!("WsManager: authenticating as user {}", user_id);
                            if let Err(e) = h.authenticate(user_id) {
                                crate::log_error!("WsManager: authenticate failed: {}", e);
                            }
                        }
                        Ok(_) => {
                            crate::log_warn!("WsManager: session expired, logging out");
                            session.logout();
                        }
                        Err(e) => {
                            // Transient API failure; still try to bind.
                            crate::log_warn!("WsManager: session refresh failed: {}", e);
                            if let Err(e) = h.authenticate(user_id) {
                                crate::log_error!("WsManager: authenticate failed: {}", e);
                            }
                        }
                    }
                });
            }
        }
    });

    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use mafia_shared::{ChatMessage, MessageKind};

    #[test]
    fn leaving_the_room_surfaces_an_info_toast() {
        let toast = toast_for(&ServerEvent::RoomLeft).expect("room_left should toast");
        assert_eq!(toast.0, "You left the room");
        assert_eq!(toast.1, Severity::Info);
    }

    #[test]
    fn inline_rendered_events_produce_no_toast() {
        let message = ChatMessage {
            id: Some(1),
            user_id: Some(2),
            sender_name: "amira".to_string(),
            content: "hi".to_string(),
            message_type: MessageKind::Text,
            sent_at: chrono::Utc::now(),
            is_flagged: false,
            suspicion_score: 0.0,
            hidden_reason: None,
            transcription: None,
        };
        assert!(toast_for(&ServerEvent::NewMessage { message }).is_none());
        assert!(toast_for(&ServerEvent::VoteCast {
            voter_name: "omar".to_string(),
            target_name: None,
        })
        .is_none());
    }

    #[test]
    fn server_errors_surface_as_danger_toasts() {
        let toast = toast_for(&ServerEvent::Error {
            message: "room is full".to_string(),
        })
        .expect("error should toast");
        assert_eq!(toast.0, "room is full");
        assert_eq!(toast.1, Severity::Danger);
    }
}
