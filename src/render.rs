//! HTML output for the browser.
//!
//! The pages are assembled by hand; there is no template engine. Rendering
//! is purely representational, nothing here issues network calls or touches
//! the session. Upstream-controlled strings (playlist names, track names,
//! artists, URLs) pass through [`escape`] before being embedded.

use crate::types::{PlaylistSummary, TrackView};

/// Landing page with the login entry point.
pub fn landing_page() -> &'static str {
    "<h1>Spotify Playlist Viewer</h1>\n<a href=\"/login\">Login with Spotify</a>"
}

/// Overview page: one table row per playlist plus the lookup form.
pub fn playlists_page(summaries: &[PlaylistSummary]) -> String {
    let mut rows = String::new();
    for summary in summaries {
        rows.push_str(&format!(
            "<tr><td><a href=\"{url}\">{name}</a></td><td>{tracks}</td><td>{minutes:.2} min</td></tr>\n",
            url = escape(&summary.spotify_url),
            name = escape(&summary.name),
            tracks = summary.total_tracks,
            minutes = summary.total_duration_minutes
        ));
    }

    format!(
        "<h1>Your Playlists</h1>\n\
         <table>\n\
         <tr><th>Name</th><th>Tracks</th><th>Duration</th></tr>\n\
         {rows}</table>\n\
         <h3>Inspect a playlist</h3>\n\
         <form action=\"/playlist\" method=\"post\">\n\
         <input type=\"text\" name=\"playlist_url\" placeholder=\"Playlist URL or id\">\n\
         <button type=\"submit\">Show tracks</button>\n\
         </form>\n\
         <a href=\"/logout\">Logout</a>"
    )
}

/// Track listing of a single playlist.
pub fn tracks_page(tracks: &[TrackView]) -> String {
    let mut items = String::new();
    for track in tracks {
        items.push_str(&format!(
            "<li>{name} by {artist}</li>\n",
            name = escape(&track.name),
            artist = escape(&track.artist)
        ));
    }

    format!(
        "<h3>Tracks in Playlist:</h3>\n<ul>\n{items}</ul>\n<a href=\"/playlists\">Back to playlists</a>"
    )
}

/// Minimal HTML escaping for text and attribute positions.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
