//! Authentication session management with persistent storage.
//!
//! Session cookies are handled by the browser/HTTP client; what we keep
//! locally is the last known user so the UI can render immediately on
//! reload while `/api/auth/me` refreshes it in the background.

use dioxus::prelude::*;
use mafia_shared::User;

use crate::api_client::ApiClient;
use crate::{log_warn, storage, stores, ws};

const STORAGE_KEY: &str = "mafia_session";
const SERVER_KEY: &str = "mafia_server";

/// Session context provided to the app
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    pub user: Signal<Option<User>>,
    pub server: Signal<String>,
}

/// Provider component that sets up the session context
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let user = use_signal(|| storage::load::<User>(STORAGE_KEY));
    let server = use_signal(|| storage::load::<String>(SERVER_KEY).unwrap_or_default());

    // Sync user to storage
    use_effect(move || {
        let current = user.cloned();
        match current.as_ref() {
            Some(u) => {
                storage::save(STORAGE_KEY, u);
            }
            None => storage::remove(STORAGE_KEY),
        }
    });

    // Sync server address to storage
    use_effect(move || {
        let addr = server.cloned();
        storage::save(SERVER_KEY, &addr);
    });

    let ctx = use_context_provider(|| SessionContext { user, server });

    // Refresh the cached user from the server on boot. A stale cached
    // session renders instantly, then either confirms or logs out.
    use_effect(move || {
        let mut ctx = ctx;
        if ctx.user.peek().is_none() {
            return;
        }
        spawn(async move {
            match ctx.client().fetch_me().await {
                Ok(me) if me.success => ctx.user.set(me.user),
                Ok(_) => ctx.logout(),
                Err(e) => log_warn!("session refresh failed: {}", e),
            }
        });
    });

    children
}

impl SessionContext {
    /// Record a successful login
    pub fn login(&mut self, user: User) {
        self.user.set(Some(user));
    }

    /// Logout and clear all cached state
    pub fn logout(&mut self) {
        ws::clear_connection();
        stores::reset();
        storage::remove(STORAGE_KEY);
        self.user.set(None);
    }

    /// Create an API client for the current server
    pub fn client(&self) -> ApiClient {
        ApiClient::new().with_base_url(self.api_base_url())
    }

    /// Check if a user is logged in
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Get the current user's id
    pub fn user_id(&self) -> Option<i64> {
        self.user.read().as_ref().map(|u| u.id)
    }

    /// Get the current user's display name
    pub fn display_name(&self) -> Option<String> {
        self.user.read().as_ref().map(|u| u.display_name.clone())
    }

    /// Get the base URL for API calls
    fn api_base_url(&self) -> String {
        let server = self.server.read().clone();

        if server.trim().is_empty() {
            return String::new(); // Use relative paths
        }

        if server.contains("://") {
            server.trim_end_matches('/').to_string()
        } else {
            let host_part = server.split(':').next().unwrap_or(&server);
            let is_local = host_part == "localhost"
                || host_part == "127.0.0.1"
                || host_part == "0.0.0.0"
                || host_part.starts_with("192.168.")
                || host_part.starts_with("10.");

            if is_local {
                format!("http://{}", server.trim_end_matches('/'))
            } else {
                format!("https://{}", server.trim_end_matches('/'))
            }
        }
    }

    /// Construct an API URL for a path
    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.api_base_url();
        if base.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = base.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Construct the WebSocket URL for the event channel
    pub fn ws_url(&self, path: &str) -> String {
        Self::http_to_ws(&self.api_url(path), path)
    }

    /// Convert HTTP/HTTPS URL to WS/WSS
    fn http_to_ws(url: &str, path: &str) -> String {
        if url.starts_with("https://") {
            url.replacen("https://", "wss://", 1)
        } else if url.starts_with("http://") {
            url.replacen("http://", "ws://", 1)
        } else {
            // Relative path: derive from the page origin on web.
            #[cfg(target_arch = "wasm32")]
            if let Some(window) = web_sys::window() {
                if let Ok(origin) = window.location().origin() {
                    let ws_origin = if origin.starts_with("https://") {
                        origin.replacen("https://", "wss://", 1)
                    } else {
                        origin.replacen("http://", "ws://", 1)
                    };
                    return format!(
                        "{}{}",
                        ws_origin.trim_end_matches('/'),
                        if path.starts_with('/') { path.to_string() } else { format!("/{path}") }
                    );
                }
            }
            let _ = path;
            url.to_string()
        }
    }
}
