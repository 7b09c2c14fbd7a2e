use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// True when every space separated entry of `scope` was granted.
    pub fn covers(&self, scope: &str) -> bool {
        let granted: Vec<&str> = self.scope.split_whitespace().collect();
        scope.split_whitespace().all(|s| granted.contains(&s))
    }
}

/// Body of a successful token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Error body of the accounts service, e.g. `{"error": "invalid_client"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// Error body of the Web API, e.g. `{"error": {"status": 404, "message": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub status: u16,
    pub message: String,
}

/// OAuth flow state shared between the waiting auth flow and the callback handler.
#[derive(Debug, Clone)]
pub struct PendingAuth {
    pub state: String,
    pub token: Option<Token>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub name: String,
    pub tracks: Page<PlaylistItem>,
}

/// One page of a paginated collection. `next` is the URL of the following
/// page and acts as the pagination cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// `null` for removed or unavailable entries.
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub name: String,
}

/// Playlist identifier extracted from a playlist URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRef(String);

impl PlaylistRef {
    pub(crate) fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
}

impl From<TrackObject> for Track {
    fn from(track: TrackObject) -> Self {
        let artist = track
            .artists
            .into_iter()
            .next()
            .map(|a| a.name)
            .unwrap_or_default();

        Track {
            name: track.name,
            artist,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    pub tracks: Vec<Track>,
}

/// The persisted shape of a [`Playlist`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub playlist: String,
    pub songs: Vec<Track>,
}

impl From<&Playlist> for ExportDocument {
    fn from(playlist: &Playlist) -> Self {
        ExportDocument {
            playlist: playlist.name.clone(),
            songs: playlist.tracks.clone(),
        }
    }
}
