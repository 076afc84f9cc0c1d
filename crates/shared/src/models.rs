//! Shared data models for the Mafia game wire contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Identity ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Assigned by the server once a game starts; `None` in the lobby.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

// --- Rooms & players ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: i64,
    pub room_code: String,
    pub name: String,
    pub max_players: u32,
    pub min_players: u32,
    #[serde(default)]
    pub current_players: u32,
    #[serde(default)]
    pub allow_voice_chat: bool,
    #[serde(default)]
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: i64,
    pub user_id: i64,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_alive: bool,
    #[serde(default)]
    pub is_ready: bool,
    #[serde(default)]
    pub is_online: bool,
}

fn default_true() -> bool {
    true
}

// --- Game state ---

/// A stage of a game round. Transitions are always pushed by the server;
/// the client only maps each phase to display text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Night,
    Day,
    Vote,
}

impl GamePhase {
    pub fn banner_text(&self) -> &'static str {
        match self {
            GamePhase::Night => "Night falls. Special roles are at work",
            GamePhase::Day => "Day breaks. Time to discuss",
            GamePhase::Vote => "Voting: choose who to eliminate",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            GamePhase::Night => "🌙",
            GamePhase::Day => "☀️",
            GamePhase::Vote => "🗳️",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            GamePhase::Night => "phase-night",
            GamePhase::Day => "phase-day",
            GamePhase::Vote => "phase-vote",
        }
    }
}

/// Current phase plus the server-provided remaining-time budget in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseState {
    pub phase: GamePhase,
    pub time_left: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub phase: PhaseState,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub round: u32,
}

// --- Roles ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Citizen,
    Mafia,
    Doctor,
    Detective,
    Vigilante,
    Mayor,
    Jester,
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Citizen => "Citizen",
            Role::Mafia => "Mafia",
            Role::Doctor => "Doctor",
            Role::Detective => "Detective",
            Role::Vigilante => "Vigilante",
            Role::Mayor => "Mayor",
            Role::Jester => "Jester",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Citizen => "An ordinary citizen. Vote out the mafia during the day.",
            Role::Mafia => "You are mafia. Eliminate citizens at night and hide by day.",
            Role::Doctor => "Protect one player from being killed each night.",
            Role::Detective => "Investigate one player's identity each night.",
            Role::Vigilante => "You may take justice into your own hands once per night.",
            Role::Mayor => "Your vote counts twice during the day.",
            Role::Jester => "You win if the town votes you out during the day.",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Role::Citizen => "role-citizen",
            Role::Mafia => "role-mafia",
            Role::Doctor => "role-doctor",
            Role::Detective => "role-detective",
            Role::Vigilante => "role-vigilante",
            Role::Mayor => "role-mayor",
            Role::Jester => "role-jester",
        }
    }
}

// --- Chat ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    #[default]
    Text,
    Voice,
    System,
    GameAction,
    Private,
    Announcement,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// `None` for synthesized system lines.
    #[serde(default)]
    pub id: Option<i64>,
    /// `None` when the sender is the system rather than a player.
    #[serde(default)]
    pub user_id: Option<i64>,
    pub sender_name: String,
    pub content: String,
    #[serde(default)]
    pub message_type: MessageKind,
    pub sent_at: DateTime<Utc>,
    #[serde(default)]
    pub is_flagged: bool,
    /// Server-side moderation signal in [0, 1]; opaque to the client.
    #[serde(default)]
    pub suspicion_score: f32,
    /// Set client-side when a `message_hidden` event arrives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden_reason: Option<String>,
    /// Set client-side when a `voice_transcribed` event arrives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
}

// --- End of game ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Civilians,
    Mafia,
}

impl Winner {
    pub fn banner_text(&self) -> &'static str {
        match self {
            Winner::Civilians => "🏆 The citizens win!",
            Winner::Mafia => "🏆 The mafia wins!",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameResult {
    pub winner: Winner,
    /// Game duration in minutes.
    pub duration: u32,
    pub rounds: u32,
    #[serde(default)]
    pub survivors: Vec<String>,
    #[serde(default)]
    pub players: Vec<PlayerOutcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerOutcome {
    pub display_name: String,
    pub role: Role,
    pub is_winner: bool,
}

// --- Notifications ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "bg-green-600",
            Severity::Info => "bg-indigo-500",
            Severity::Warning => "bg-amber-500",
            Severity::Danger => "bg-red-600",
        }
    }
}

// --- REST request/response types ---

/// Common success/failure envelope returned by every REST action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub max_players: u32,
    pub min_players: u32,
    pub allow_voice_chat: bool,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedRoom {
    pub room_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub room: Option<CreatedRoom>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRoomRequest {
    pub room_code: String,
    pub password: Option<String>,
}
