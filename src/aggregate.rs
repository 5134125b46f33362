//! Playlist aggregation.
//!
//! Turns raw Spotify Web API responses into the display models rendered by
//! the presentation layer. Everything here is recomputed on every request;
//! two requests may observe different upstream data without reconciliation.

use reqwest::Client;

use crate::{
    config::Config,
    error::SpotifyError,
    spotify,
    types::{Playlist, PlaylistSummary, PlaylistTracksPage, TrackView},
    utils,
};

/// Fetches all playlists of the current user and derives their statistics.
///
/// Issues one listing call plus one track-listing call per playlist, in
/// sequence. The output preserves upstream order. A playlist whose track
/// response does not have the expected shape is skipped entirely rather than
/// reported; transport failures and non-200 statuses abort the whole
/// aggregation.
pub async fn aggregate_playlists(
    http: &Client,
    config: &Config,
    token: &str,
) -> Result<Vec<PlaylistSummary>, SpotifyError> {
    let page = spotify::playlists::current_user_playlists(http, config, token).await?;

    let mut summaries = Vec::with_capacity(page.items.len());
    for playlist in &page.items {
        let tracks =
            match spotify::playlists::playlist_tracks(http, config, token, &playlist.id).await {
                Ok(tracks) => tracks,
                Err(SpotifyError::Malformed { .. }) => continue,
                Err(err) => return Err(err),
            };
        summaries.push(summarize_playlist(playlist, &tracks));
    }

    Ok(summaries)
}

/// Derives the overview statistics for one playlist.
///
/// Null track entries (removed or local tracks) count towards neither the
/// track total nor the duration sum. Tracks without a duration are counted
/// but contribute zero milliseconds.
pub fn summarize_playlist(playlist: &Playlist, tracks: &PlaylistTracksPage) -> PlaylistSummary {
    let present: Vec<_> = tracks
        .items
        .iter()
        .filter_map(|entry| entry.track.as_ref())
        .collect();

    let total_ms: u64 = present.iter().filter_map(|track| track.duration_ms).sum();

    PlaylistSummary {
        name: playlist.name.clone(),
        total_tracks: present.len(),
        total_duration_minutes: utils::duration_ms_to_minutes(total_ms),
        spotify_url: playlist.external_urls.spotify.clone(),
    }
}

/// Projects a track page onto the name/artist rows of the single-playlist
/// view, keeping only the first listed artist.
///
/// Entries that are null or carry no artist at all are skipped, matching the
/// skip-and-continue policy of the aggregate listing.
pub fn project_tracks(tracks: &PlaylistTracksPage) -> Vec<TrackView> {
    tracks
        .items
        .iter()
        .filter_map(|entry| entry.track.as_ref())
        .filter_map(|track| {
            track.artists.first().map(|artist| TrackView {
                name: track.name.clone(),
                artist: artist.name.clone(),
            })
        })
        .collect()
}
