use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;

use crate::{
    config::{self, Config},
    error::SpotifyError,
    types::TokenResponse,
};

const TOKEN_ENDPOINT: &str = "token endpoint";

/// Constructs the authorization redirect target for the login entry point.
///
/// The URL embeds the client identifier, `response_type=code`, the
/// pre-registered callback address, the requested scope, and the caller's
/// `state` nonce. Configuration values are interpolated without local
/// validation; an empty client id produces a URL the authorization service
/// rejects on its side.
///
/// # Example
///
/// ```
/// let url = build_authorize_url(&config, "nonce123");
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
/// ```
pub fn build_authorize_url(config: &Config, state: &str) -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
        auth_url = &config.auth_url,
        client_id = &config.client_id,
        redirect_uri = &config.redirect_uri,
        scope = config::SCOPE,
        state = state
    )
}

/// Exchanges an authorization code for a bearer access token.
///
/// Performs exactly one POST against the token endpoint with the
/// `authorization_code` grant. Client credentials travel in an HTTP Basic
/// authorization header as the provider expects for confidential clients.
///
/// # Arguments
///
/// * `http` - Shared HTTP client
/// * `config` - Runtime configuration holding credentials and the token URL
/// * `code` - Single-use authorization code from the callback query
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - Body of a successful exchange
/// - `Err(SpotifyError)` - Transport failure, non-success status, or a
///   success body without an `access_token` field
///
/// # Security Note
///
/// The authorization code is single-use and short-lived. The exchange is
/// issued immediately after the callback delivers the code.
pub async fn exchange_code(
    http: &Client,
    config: &Config,
    code: &str,
) -> Result<TokenResponse, SpotifyError> {
    let credentials = STANDARD.encode(format!("{}:{}", config.client_id, config.client_secret));

    let response = http
        .post(&config.token_url)
        .header(AUTHORIZATION, format!("Basic {credentials}"))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|source| SpotifyError::Transport {
            endpoint: TOKEN_ENDPOINT,
            source,
        })?;

    if !response.status().is_success() {
        return Err(SpotifyError::Status {
            endpoint: TOKEN_ENDPOINT,
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| SpotifyError::Transport {
            endpoint: TOKEN_ENDPOINT,
            source,
        })?;

    serde_json::from_str(&body).map_err(|source| SpotifyError::Malformed {
        endpoint: TOKEN_ENDPOINT,
        source,
    })
}
