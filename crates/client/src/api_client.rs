//! HTTP client for the game server's REST endpoints.

use mafia_shared::{
    ApiError, ApiResponse, CreateRoomRequest, CreateRoomResponse, JoinRoomRequest, LoginRequest,
    MeResponse, RegisterRequest,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

/// HTTP client for the action gateway (auth, room and game endpoints).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: String::new(),
        }
    }

    /// Set the base URL for API requests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if self.base_url.is_empty() {
            if path.starts_with('/') {
                path.to_string()
            } else {
                format!("/{path}")
            }
        } else {
            let base = self.base_url.trim_end_matches('/');
            let path = path.trim_start_matches('/');
            format!("{base}/{path}")
        }
    }

    /// Make a GET request
    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let url = self.url(path);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// Make a POST request with JSON body
    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let url = self.url(path);

        let body_bytes =
            serde_json::to_vec(body).map_err(|e| ApiError::Deserialize(e.to_string()))?;

        let resp = self
            .client
            .post(&url)
            .body(body_bytes)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }

        if text.is_empty() {
            serde_json::from_str("null").map_err(|e| ApiError::Deserialize(e.to_string()))
        } else {
            serde_json::from_str(&text).map_err(|e| ApiError::Deserialize(e.to_string()))
        }
    }

    // --- Auth API methods ---

    /// Fetch the currently authenticated user, if any
    pub async fn fetch_me(&self) -> Result<MeResponse, ApiError> {
        self.get_json("/api/auth/me").await
    }

    /// Log in with username and password
    pub async fn login(&self, req: &LoginRequest) -> Result<ApiResponse, ApiError> {
        self.post_json("/api/auth/login", req).await
    }

    /// Register a new account
    pub async fn register(&self, req: &RegisterRequest) -> Result<ApiResponse, ApiError> {
        self.post_json("/api/auth/register", req).await
    }

    // --- Room/Game API methods ---

    /// Create a new game room
    pub async fn create_room(&self, req: &CreateRoomRequest) -> Result<CreateRoomResponse, ApiError> {
        self.post_json("/api/room/create", req).await
    }

    /// Join an existing room by code
    pub async fn join_room(&self, req: &JoinRoomRequest) -> Result<ApiResponse, ApiError> {
        self.post_json("/api/room/join", req).await
    }

    /// Ask the server to start the game in the current room
    pub async fn start_game(&self) -> Result<ApiResponse, ApiError> {
        self.post_json("/api/game/start", &json!({})).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
