use rand::{Rng, distr::Alphanumeric};

/// Generates the random nonce sent as the OAuth `state` parameter.
pub fn generate_state_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Extracts a playlist identifier from a share URL or a bare id.
///
/// The extraction is purely syntactic: the last `/`-separated segment is
/// taken and anything from the first `?` on is dropped. The result is not
/// validated; a malformed identifier is forwarded to the API as-is and
/// surfaces whatever error Spotify returns.
///
/// # Example
///
/// ```
/// let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc");
/// assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
/// ```
pub fn extract_playlist_id(input: &str) -> &str {
    let segment = input.rsplit('/').next().unwrap_or(input);
    segment.split('?').next().unwrap_or(segment)
}

/// Converts a total duration in milliseconds to minutes, rounded to two
/// decimal places.
pub fn duration_ms_to_minutes(total_ms: u64) -> f64 {
    (total_ms as f64 / 60_000.0 * 100.0).round() / 100.0
}
