use crate::{
    error::SpotifyError,
    spotify::PlaylistSource,
    types::{Page, Playlist, PlaylistItem, PlaylistRef, Track},
};

/// Retrieves a playlist with the tracks of every page.
///
/// Requests the playlist, then follows each page's `next` cursor until a
/// page without one is reached. Tracks keep the provider's order: page order
/// first, then position within the page.
///
/// # Arguments
///
/// * `source` - Authorized provider capability
/// * `id` - Playlist to fetch
///
/// # Returns
///
/// - `Ok(Playlist)` - Name and flattened tracks; an empty playlist is valid
/// - `Err(SpotifyError)` - The first failed request. Tracks gathered so far
///   are discarded.
///
/// # Flattening
///
/// Each item becomes a [`Track`] holding the track name and the name of its
/// first listed artist. Items without a track (removed or unavailable
/// entries) are skipped.
///
/// # Example
///
/// ```
/// let client = SpotifyClient::new(http, &api, token);
/// let playlist = fetch_playlist(&client, &id).await?;
/// println!("{} has {} tracks", playlist.name, playlist.tracks.len());
/// ```
pub async fn fetch_playlist<S: PlaylistSource>(
    source: &S,
    id: &PlaylistRef,
) -> Result<Playlist, SpotifyError> {
    let response = source.playlist(id).await?;

    let mut tracks: Vec<Track> = Vec::new();
    let mut page = response.tracks;

    loop {
        let next = append_page(&mut tracks, page);
        match next {
            Some(cursor) => page = source.next_page(&cursor).await?,
            None => break,
        }
    }

    Ok(Playlist {
        name: response.name,
        tracks,
    })
}

/// Appends the page's tracks and hands back its `next` cursor.
fn append_page(tracks: &mut Vec<Track>, page: Page<PlaylistItem>) -> Option<String> {
    tracks.extend(
        page.items
            .into_iter()
            .filter_map(|item| item.track)
            .map(Track::from),
    );
    page.next
}
