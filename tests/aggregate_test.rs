use playview::aggregate::{project_tracks, summarize_playlist};
use playview::types::{
    ExternalUrls, Playlist, PlaylistTrackEntry, PlaylistTracksPage, Track, TrackArtist,
};

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        external_urls: ExternalUrls {
            spotify: format!("https://open.spotify.com/playlist/{}", id),
        },
    }
}

// Helper function to create a track entry with a present track
fn create_test_entry(name: &str, artists: &[&str], duration_ms: Option<u64>) -> PlaylistTrackEntry {
    PlaylistTrackEntry {
        track: Some(Track {
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|a| TrackArtist {
                    name: a.to_string(),
                })
                .collect(),
            duration_ms,
        }),
    }
}

fn page(items: Vec<PlaylistTrackEntry>) -> PlaylistTracksPage {
    PlaylistTracksPage { items }
}

#[test]
fn test_summarize_playlist_sums_and_rounds_durations() {
    let playlist = create_test_playlist("pl1", "Road Trip");
    let tracks = page(vec![
        create_test_entry("First Song", &["Artist A"], Some(180_000)),
        create_test_entry("Second Song", &["Artist B"], Some(200_000)),
    ]);

    let summary = summarize_playlist(&playlist, &tracks);

    // 380000ms / 60000 = 6.333..., rounded to two decimals
    assert_eq!(summary.total_duration_minutes, 6.33);
    assert_eq!(summary.total_tracks, 2);
    assert_eq!(summary.name, "Road Trip");
    assert_eq!(summary.spotify_url, "https://open.spotify.com/playlist/pl1");
}

#[test]
fn test_summarize_playlist_skips_null_track_entries() {
    let playlist = create_test_playlist("pl2", "Quiet Hours");
    let tracks = page(vec![
        create_test_entry("Kept", &["Artist A"], Some(60_000)),
        // Removed or local tracks arrive as null entries
        PlaylistTrackEntry { track: None },
        create_test_entry("Also Kept", &["Artist B"], Some(120_000)),
    ]);

    let summary = summarize_playlist(&playlist, &tracks);

    // The null entry affects neither the count nor the sum
    assert_eq!(summary.total_tracks, 2);
    assert_eq!(summary.total_duration_minutes, 3.0);
}

#[test]
fn test_summarize_playlist_tolerates_missing_durations() {
    let playlist = create_test_playlist("pl3", "Mixed");
    let tracks = page(vec![
        create_test_entry("Timed", &["Artist A"], Some(90_000)),
        create_test_entry("Untimed", &["Artist B"], None),
    ]);

    let summary = summarize_playlist(&playlist, &tracks);

    // A track without a duration is still counted, contributing zero
    assert_eq!(summary.total_tracks, 2);
    assert_eq!(summary.total_duration_minutes, 1.5);
}

#[test]
fn test_summarize_playlist_with_no_tracks() {
    let playlist = create_test_playlist("pl4", "Empty");
    let summary = summarize_playlist(&playlist, &page(vec![]));

    assert_eq!(summary.total_tracks, 0);
    assert_eq!(summary.total_duration_minutes, 0.0);
}

#[test]
fn test_project_tracks_uses_first_listed_artist() {
    let tracks = page(vec![create_test_entry(
        "Collab Song",
        &["Lead Artist", "Featured Artist"],
        Some(180_000),
    )]);

    let views = project_tracks(&tracks);

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].name, "Collab Song");
    assert_eq!(views[0].artist, "Lead Artist");
}

#[test]
fn test_project_tracks_skips_incomplete_entries() {
    let tracks = page(vec![
        PlaylistTrackEntry { track: None },
        create_test_entry("No Artist", &[], Some(60_000)),
        create_test_entry("Complete", &["Artist A"], Some(60_000)),
    ]);

    let views = project_tracks(&tracks);

    // Null entries and tracks without any artist are dropped, the rest kept
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].name, "Complete");
}

#[test]
fn test_project_tracks_preserves_upstream_order() {
    let tracks = page(vec![
        create_test_entry("One", &["A"], Some(1_000)),
        create_test_entry("Two", &["B"], Some(2_000)),
        create_test_entry("Three", &["C"], Some(3_000)),
    ]);

    let names: Vec<String> = project_tracks(&tracks).into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["One", "Two", "Three"]);
}
