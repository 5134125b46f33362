//! Request-level error types and their mapping onto HTTP responses.
//!
//! Failures are terminal for the current request. Session problems turn into
//! a navigational redirect to the login entry point, everything else into a
//! blunt plain-text status response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

use crate::warning;

/// Failures of the outbound Spotify client layer.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The request never completed, e.g. connection refused or DNS failure.
    #[error("request to {endpoint} could not be completed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-success status code.
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected payload from {endpoint}: {source}")]
    Malformed {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Handler-level errors, one variant per user-visible failure mode.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Callback request arrived without a `code` query parameter.
    #[error("No authorization code was provided in the callback request.")]
    MissingAuthorizationCode,

    /// Callback `state` did not match the nonce stored at login time.
    #[error("The authorization state did not match. Please start the login flow again.")]
    StateMismatch,

    /// The user (or the provider) rejected the authorization request.
    #[error("Authorization was denied: {0}")]
    AuthorizationDenied(String),

    /// Exchanging the authorization code for an access token failed.
    #[error("Token exchange with Spotify failed: {0}")]
    TokenExchange(#[source] SpotifyError),

    /// A protected route was hit without a session token. Rendered as a
    /// redirect to `/login`, not as an error page.
    #[error("Not signed in.")]
    MissingSessionToken,

    /// Fetching playlist or track data from the resource API failed.
    #[error("Error fetching data from Spotify: {0}")]
    ResourceFetch(#[source] SpotifyError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingSessionToken => Redirect::to("/login").into_response(),
            ApiError::MissingAuthorizationCode
            | ApiError::StateMismatch
            | ApiError::AuthorizationDenied(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::TokenExchange(_) | ApiError::ResourceFetch(_) => {
                warning!("{}", self);
                (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
            }
        }
    }
}
