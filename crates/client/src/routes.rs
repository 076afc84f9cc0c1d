//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{Dashboard, Game, Home, Login, Register};

// Router configuration
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Landing page redirects to login or dashboard
    #[route("/")]
    Home {},

    // Auth routes
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},

    // Lobby
    #[route("/dashboard")]
    Dashboard {},

    // In-room view
    #[route("/game/:room_code")]
    Game { room_code: String },
}
