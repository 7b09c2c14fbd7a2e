use std::sync::atomic::{AtomicUsize, Ordering};

use spotlist::error::SpotifyError;
use spotlist::spotify::{PlaylistSource, playlist::fetch_playlist};
use spotlist::types::*;
use spotlist::utils::extract_playlist_id;

// In-memory provider serving pre-built pages; cursors are "page-<index>".
struct FakeSource {
    name: String,
    pages: Vec<Vec<PlaylistItem>>,
    fail_at: Option<usize>,
    requests: AtomicUsize,
}

impl FakeSource {
    fn new(name: &str, pages: Vec<Vec<PlaylistItem>>) -> Self {
        Self {
            name: name.to_string(),
            pages,
            fail_at: None,
            requests: AtomicUsize::new(0),
        }
    }

    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn page(&self, idx: usize) -> Result<Page<PlaylistItem>, SpotifyError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(idx) {
            return Err(SpotifyError::Api {
                status: 502,
                message: "Bad gateway".to_string(),
            });
        }

        let next = if idx + 1 < self.pages.len() {
            Some(format!("page-{}", idx + 1))
        } else {
            None
        };

        Ok(Page {
            items: self.pages.get(idx).cloned().unwrap_or_default(),
            next,
            total: None,
        })
    }
}

impl PlaylistSource for FakeSource {
    async fn playlist(&self, _id: &PlaylistRef) -> Result<PlaylistResponse, SpotifyError> {
        Ok(PlaylistResponse {
            name: self.name.clone(),
            tracks: self.page(0)?,
        })
    }

    async fn next_page(&self, cursor: &str) -> Result<Page<PlaylistItem>, SpotifyError> {
        let idx = cursor
            .strip_prefix("page-")
            .and_then(|n| n.parse::<usize>().ok())
            .expect("cursor issued by this source");
        self.page(idx)
    }
}

fn item(name: &str, artists: &[&str]) -> PlaylistItem {
    PlaylistItem {
        track: Some(TrackObject {
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|a| ArtistObject {
                    name: a.to_string(),
                })
                .collect(),
        }),
    }
}

fn numbered_page(page: usize, size: usize) -> Vec<PlaylistItem> {
    let artist = format!("Artist {}", page);
    (0..size)
        .map(|i| item(&format!("Song {}-{}", page, i), &[artist.as_str()]))
        .collect()
}

fn playlist_id() -> PlaylistRef {
    extract_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M").unwrap()
}

#[tokio::test]
async fn test_two_pages_issue_two_requests() {
    let source = FakeSource::new("Big Mix", vec![numbered_page(0, 100), numbered_page(1, 37)]);

    let playlist = fetch_playlist(&source, &playlist_id()).await.unwrap();

    assert_eq!(source.requests(), 2);
    assert_eq!(playlist.name, "Big Mix");
    assert_eq!(playlist.tracks.len(), 137);
    assert_eq!(playlist.tracks[0].name, "Song 0-0");
    assert_eq!(playlist.tracks[99].name, "Song 0-99");
    assert_eq!(playlist.tracks[100].name, "Song 1-0");
    assert_eq!(playlist.tracks[136].name, "Song 1-36");
}

#[tokio::test]
async fn test_preserves_page_then_item_order() {
    let sizes = [3, 1, 4, 1, 5];
    let pages: Vec<Vec<PlaylistItem>> = sizes
        .iter()
        .enumerate()
        .map(|(p, &size)| numbered_page(p, size))
        .collect();
    let source = FakeSource::new("Order", pages);

    let playlist = fetch_playlist(&source, &playlist_id()).await.unwrap();

    let expected: Vec<String> = sizes
        .iter()
        .enumerate()
        .flat_map(|(p, &size)| (0..size).map(move |i| format!("Song {}-{}", p, i)))
        .collect();
    let names: Vec<String> = playlist.tracks.iter().map(|t| t.name.clone()).collect();

    assert_eq!(source.requests(), sizes.len());
    assert_eq!(playlist.tracks.len(), sizes.iter().sum::<usize>());
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_empty_playlist_is_valid() {
    let source = FakeSource::new("Nothing Here", Vec::new());

    let playlist = fetch_playlist(&source, &playlist_id()).await.unwrap();

    assert_eq!(source.requests(), 1);
    assert_eq!(playlist.name, "Nothing Here");
    assert!(playlist.tracks.is_empty());
}

#[tokio::test]
async fn test_first_artist_is_used() {
    let source = FakeSource::new(
        "Collabs",
        vec![vec![
            item("Under Pressure", &["Queen", "David Bowie"]),
            item("Solo", &["Only One"]),
        ]],
    );

    let playlist = fetch_playlist(&source, &playlist_id()).await.unwrap();

    assert_eq!(
        playlist.tracks,
        vec![
            Track {
                name: "Under Pressure".to_string(),
                artist: "Queen".to_string()
            },
            Track {
                name: "Solo".to_string(),
                artist: "Only One".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_unavailable_items_are_skipped() {
    let source = FakeSource::new(
        "Gaps",
        vec![vec![
            item("Kept", &["A"]),
            PlaylistItem { track: None },
            item("No Artist", &[]),
        ]],
    );

    let playlist = fetch_playlist(&source, &playlist_id()).await.unwrap();

    assert_eq!(playlist.tracks.len(), 2);
    assert_eq!(playlist.tracks[0].name, "Kept");
    assert_eq!(playlist.tracks[1].name, "No Artist");
    assert_eq!(playlist.tracks[1].artist, "");
}

#[tokio::test]
async fn test_failed_page_discards_partial_result() {
    let mut source = FakeSource::new(
        "Broken",
        vec![numbered_page(0, 10), numbered_page(1, 10), numbered_page(2, 10)],
    );
    source.fail_at = Some(1);

    let err = fetch_playlist(&source, &playlist_id()).await.unwrap_err();

    assert!(matches!(err, SpotifyError::Api { status: 502, .. }));
    assert_eq!(source.requests(), 2);
}

#[tokio::test]
async fn test_failed_playlist_request() {
    let mut source = FakeSource::new("Missing", vec![numbered_page(0, 1)]);
    source.fail_at = Some(0);

    assert!(fetch_playlist(&source, &playlist_id()).await.is_err());
    assert_eq!(source.requests(), 1);
}
