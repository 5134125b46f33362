use playview::utils::*;

#[test]
fn test_generate_state_token() {
    let token = generate_state_token();

    // Should be exactly 32 characters
    assert_eq!(token.len(), 32);

    // Should contain only alphanumeric characters
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated tokens should be different
    let token2 = generate_state_token();
    assert_ne!(token, token2);
}

#[test]
fn test_extract_playlist_id_from_share_url() {
    let id =
        extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc");
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_extract_playlist_id_without_query_string() {
    let id = extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M");
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_extract_playlist_id_from_bare_id() {
    // A bare identifier has no slashes and passes through unchanged
    assert_eq!(extract_playlist_id("37i9dQZF1DXcBWIGoYBM5M"), "37i9dQZF1DXcBWIGoYBM5M");

    // Query strings are stripped even without a path
    assert_eq!(extract_playlist_id("37i9dQZF1DXcBWIGoYBM5M?si=abc"), "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_extract_playlist_id_is_purely_syntactic() {
    // No validation happens; odd input yields odd output
    assert_eq!(extract_playlist_id("not a playlist url"), "not a playlist url");
    assert_eq!(extract_playlist_id("https://open.spotify.com/playlist/"), "");
}

#[test]
fn test_duration_ms_to_minutes_rounds_to_two_decimals() {
    // 180000ms + 200000ms = 380000ms = 6.333... minutes
    assert_eq!(duration_ms_to_minutes(380_000), 6.33);

    // Exact values stay exact
    assert_eq!(duration_ms_to_minutes(60_000), 1.0);
    assert_eq!(duration_ms_to_minutes(90_000), 1.5);

    // Rounding in both directions
    assert_eq!(duration_ms_to_minutes(200_000), 3.33);
    assert_eq!(duration_ms_to_minutes(100_000), 1.67);
    assert_eq!(duration_ms_to_minutes(0), 0.0);
}
