//! Mafia Client - Main entry point
//!
//! A Dioxus client for a server-authoritative Mafia party game.
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use mafia_client::components::ui::{LoadingOverlay, ToastHost};
use mafia_client::{routes::Route, session::SessionProvider, ws::WsManager};

// Assets
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    // Initialize tracing for desktop
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("mafia_client=debug")),
            )
            .init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            WsManager {
                Router::<Route> {}
            }
        }
        ToastHost {}
        LoadingOverlay {}
    }
}
