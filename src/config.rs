//! Configuration management for the playlist viewer.
//!
//! This module collects every runtime parameter into a single [`Config`]
//! value that is built once at process start and handed to the request
//! handlers through the router state. Values come from environment variables,
//! optionally seeded from a `.env` file in the working directory.
//!
//! Missing Spotify credentials are NOT rejected locally. The authorization
//! URL is still assembled and the upstream service refuses it, which mirrors
//! how the hosted application behaves when deployed half-configured.

use std::env;

/// OAuth scope requested during authorization. Reading private playlists is
/// the only permission this application needs.
pub const SCOPE: &str = "playlist-read-private";

/// Fallback signing secret used when `SESSION_SECRET` is unset. Anyone who
/// knows this value can forge session cookies, so real deployments must
/// override it.
const DEFAULT_SESSION_SECRET: &str = "super-secret-session-key-change-me-in-production";

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Loads environment variables from a `.env` file in the working directory.
///
/// Absence of the file is not an error; variables already present in the
/// process environment always win.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Runtime configuration, assembled once from the environment.
///
/// | Field | Variable | Default |
/// |---|---|---|
/// | `client_id` | `SPOTIFY_CLIENT_ID` | empty |
/// | `client_secret` | `SPOTIFY_CLIENT_SECRET` | empty |
/// | `redirect_uri` | `SPOTIFY_REDIRECT_URI` | empty |
/// | `auth_url` | `SPOTIFY_AUTH_URL` | accounts.spotify.com/authorize |
/// | `token_url` | `SPOTIFY_TOKEN_URL` | accounts.spotify.com/api/token |
/// | `api_url` | `SPOTIFY_API_URL` | api.spotify.com/v1 |
/// | `session_secret` | `SESSION_SECRET` | hardcoded fallback |
/// | `server_addr` | `SERVER_ADDRESS` | 127.0.0.1:3000 |
///
/// The endpoint URLs are overridable so tests can point the client at a
/// local stand-in for the Spotify services.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub session_secret: String,
    pub server_addr: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `bind_override` takes precedence over `SERVER_ADDRESS` when given,
    /// which backs the binary's `--bind` flag.
    pub fn from_env(bind_override: Option<String>) -> Self {
        Config {
            client_id: env::var("SPOTIFY_CLIENT_ID").unwrap_or_default(),
            client_secret: env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: env::var("SPOTIFY_REDIRECT_URI").unwrap_or_default(),
            auth_url: env::var("SPOTIFY_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.into()),
            token_url: env::var("SPOTIFY_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.into()),
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| DEFAULT_SESSION_SECRET.into()),
            server_addr: bind_override.unwrap_or_else(|| {
                env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.into())
            }),
        }
    }
}
