//! Shared wire contract between the Mafia game server and its clients.
//!
//! The server owns all game truth; everything in this crate is a replica
//! shape for what it pushes over the WebSocket channel or returns from the
//! REST API.

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{try_response_message, ApiError};
pub use models::{
    ApiResponse, ChatMessage, CreateRoomRequest, CreateRoomResponse, CreatedRoom, GamePhase,
    GameResult, GameState, JoinRoomRequest, LoginRequest, MeResponse, MessageKind, PhaseState,
    Player, PlayerOutcome, RegisterRequest, Role, Room, Severity, User, Winner,
};
pub use protocol::{ClientCommand, ServerEvent};
