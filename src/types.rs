use serde::{Deserialize, Serialize};

/// Successful response body of the authorization-code token exchange.
/// A 2xx body without `access_token` fails deserialization and is treated
/// as a malformed payload by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistTrackEntry>,
}

/// One slot in a playlist. `track` is null for removed or local tracks, so
/// it stays optional and such entries are skipped during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackEntry {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

/// Per-playlist display model shown on the overview page. Recomputed on
/// every request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistSummary {
    pub name: String,
    pub total_tracks: usize,
    pub total_duration_minutes: f64,
    pub spotify_url: String,
}

/// Display model for a single row of the track listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackView {
    pub name: String,
    pub artist: String,
}
