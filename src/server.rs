use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use reqwest::Client;

use crate::{Res, api, config::Config, success};

/// Shared application state handed to every handler.
///
/// Built once at startup; the configuration is immutable afterwards and the
/// HTTP client is reused across all outbound calls.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
    key: Key,
}

impl AppState {
    /// Derives the cookie signing key from the configured session secret.
    /// Secrets shorter than 32 bytes are unusable and abort startup.
    pub fn new(config: Config) -> Self {
        let key = Key::derive_from(config.session_secret.as_bytes());
        AppState {
            config: Arc::new(config),
            http: Client::new(),
            key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.key.clone()
    }
}

/// Builds the application router with all routes wired to the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/playlists", get(api::playlists))
        .route("/playlist", post(api::playlist))
        .route("/logout", get(api::logout))
        .route("/health", get(api::health))
        .with_state(state)
}

/// Binds the configured address and serves requests until the process ends.
pub async fn start_server(state: AppState) -> Res<()> {
    let addr = SocketAddr::from_str(&state.config.server_addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("Listening on http://{}", addr);
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
