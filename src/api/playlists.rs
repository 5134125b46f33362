use axum::Form;
use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

use crate::{aggregate, error::ApiError, render, server::AppState, session, spotify, utils};

/// Reads the access token out of the session, or asks the caller to log in.
fn session_token(jar: &SignedCookieJar) -> Result<String, ApiError> {
    session::get(jar, session::ACCESS_TOKEN)
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingSessionToken)
}

/// Overview of all playlists with aggregated statistics.
pub async fn playlists(
    State(app): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Html<String>, ApiError> {
    let token = session_token(&jar)?;

    let summaries = aggregate::aggregate_playlists(&app.http, &app.config, &token)
        .await
        .map_err(ApiError::ResourceFetch)?;

    Ok(Html(render::playlists_page(&summaries)))
}

#[derive(Debug, Deserialize)]
pub struct PlaylistForm {
    pub playlist_url: String,
}

/// Track listing for one playlist, identified by a pasted share URL or id.
pub async fn playlist(
    State(app): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<PlaylistForm>,
) -> Result<Html<String>, ApiError> {
    let token = session_token(&jar)?;

    let playlist_id = utils::extract_playlist_id(&form.playlist_url);
    let tracks = spotify::playlists::playlist_tracks(&app.http, &app.config, &token, playlist_id)
        .await
        .map_err(ApiError::ResourceFetch)?;

    Ok(Html(render::tracks_page(&aggregate::project_tracks(
        &tracks,
    ))))
}
