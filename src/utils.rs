use std::sync::LazyLock;

use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;

use crate::{error::InputError, types::PlaylistRef};

static PLAYLIST_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"playlist/([a-zA-Z0-9]+)").expect("playlist id pattern is valid")
});

/// Extracts the playlist ID from a Spotify playlist URL.
///
/// Takes the alphanumeric run right after the first `playlist/`, so query
/// strings like `?si=...` are left out.
///
/// # Errors
///
/// Returns [`InputError::InvalidPlaylistUrl`] when the input has no
/// `playlist/<id>` segment.
pub fn extract_playlist_id(playlist_url: &str) -> Result<PlaylistRef, InputError> {
    PLAYLIST_ID
        .captures(playlist_url)
        .and_then(|caps| caps.get(1))
        .map(|m| PlaylistRef::new(m.as_str().to_string()))
        .ok_or(InputError::InvalidPlaylistUrl)
}

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

/// `Authorization` header value for HTTP Basic client authentication.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}
