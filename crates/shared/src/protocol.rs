//! WebSocket event and command definitions.
//!
//! Every frame is a JSON object of the form `{"event": <name>, "data": ...}`.
//! Inbound events update the client's cached replicas and trigger a render;
//! the client never computes state transitions of its own.

use serde::{Deserialize, Serialize};

use crate::models::{
    ChatMessage, GameResult, GameState, MessageKind, PhaseState, Player, Role, Room, Severity,
};

/// Events pushed by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    RoomJoined {
        room: Room,
    },
    RoomLeft,
    PlayerJoined {
        player: Player,
    },
    PlayerLeft {
        player: Player,
    },
    GameStarted {
        game_state: GameState,
    },
    GamePhaseChanged {
        phase: PhaseState,
    },
    /// Delivered only to the player the role belongs to.
    RoleAssigned {
        role: Role,
    },
    PlayerDied {
        player: Player,
    },
    GameEnded {
        result: GameResult,
    },
    NewMessage {
        message: ChatMessage,
    },
    /// Moderation verdict for an already-delivered message.
    MessageHidden {
        message_id: i64,
        reason: String,
    },
    VoiceTranscribed {
        message_id: i64,
        transcription: String,
    },
    VoteCast {
        voter_name: String,
        /// `None` means the voter abstained.
        target_name: Option<String>,
    },
    VoteResult {
        message: String,
        eliminated: Option<Player>,
    },
    Notification {
        message: String,
        #[serde(rename = "type")]
        kind: Severity,
    },
    Error {
        message: String,
    },
}

/// Actions emitted by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Sent on every (re)connect; safe to repeat.
    Authenticate {
        user_id: i64,
    },
    SendMessage {
        content: String,
        message_type: MessageKind,
    },
    ToggleReady,
}
