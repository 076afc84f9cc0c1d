//! Mafia Client - Dioxus application
//!
//! Cross-platform (web/desktop) client for a server-authoritative Mafia
//! party game. The client renders cached replicas of server state; all
//! game logic lives on the server.

pub mod api_client;
pub mod logging;
pub mod session;
pub mod storage;
pub mod stores;
pub mod text;
pub mod time;
pub mod ws;

pub mod components;
pub mod routes;
pub mod views;

pub use api_client::ApiClient;
pub use routes::Route;
pub use session::{SessionContext, SessionProvider};
