use axum::http::StatusCode;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::SpotifyError,
    types::{PlaylistPage, PlaylistTracksPage},
};

/// Retrieves the current user's playlists from the Spotify Web API.
///
/// Issues one GET against `/me/playlists` with the bearer token and returns
/// the first page in upstream order. Pagination is not followed, so users
/// with more playlists than the API's page size see a truncated listing.
pub async fn current_user_playlists(
    http: &Client,
    config: &Config,
    token: &str,
) -> Result<PlaylistPage, SpotifyError> {
    let api_url = format!("{url}/me/playlists", url = &config.api_url);
    get_json(http, &api_url, token, "me/playlists").await
}

/// Retrieves the track listing of a single playlist.
///
/// The identifier is forwarded exactly as extracted from the caller's input;
/// an invalid id surfaces as whatever status the API answers with. Only the
/// first page of tracks is fetched.
pub async fn playlist_tracks(
    http: &Client,
    config: &Config,
    token: &str,
    playlist_id: &str,
) -> Result<PlaylistTracksPage, SpotifyError> {
    let api_url = format!(
        "{url}/playlists/{id}/tracks",
        url = &config.api_url,
        id = playlist_id
    );
    get_json(http, &api_url, token, "playlist tracks").await
}

/// Shared GET-and-decode helper for the resource API.
///
/// A non-200 status is reported as [`SpotifyError::Status`] and a body that
/// does not decode into `T` as [`SpotifyError::Malformed`], so callers can
/// distinguish an unavailable upstream from an unexpected payload shape.
async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    token: &str,
    endpoint: &'static str,
) -> Result<T, SpotifyError> {
    let response = http
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|source| SpotifyError::Transport { endpoint, source })?;

    if response.status() != StatusCode::OK {
        return Err(SpotifyError::Status {
            endpoint,
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| SpotifyError::Transport { endpoint, source })?;

    serde_json::from_str(&body).map_err(|source| SpotifyError::Malformed { endpoint, source })
}
