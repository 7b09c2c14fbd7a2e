//! # Spotify Integration Module
//!
//! This module is the integration layer between spotlist and the Spotify Web
//! API. It handles the HTTP communication, the two token flows and the
//! paginated playlist retrieval.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials, authorization code)
//!     └── Playlist retrieval (PlaylistSource + fetch_playlist)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Token endpoint exchanges and the interactive authorization-code flow
//! - [`playlist`] - The pagination-safe playlist fetcher
//!
//! ## Provider Seam
//!
//! [`PlaylistSource`] is the capability the fetcher depends on: "get playlist
//! by ID" and "get the next page given a cursor". [`SpotifyClient`] implements
//! it over HTTP; tests substitute an in-memory source.
//!
//! ## API Coverage
//!
//! - `GET /playlists/{playlist_id}` - Playlist name and first page of items
//! - `GET {next}` - Following pages, addressed by the `next` URL of the previous page
//! - `POST /api/token` - Client credentials, code exchange and refresh
//!
//! ## Error Handling
//!
//! Every request failure is returned as a [`SpotifyError`] and never retried.
//! Non-success statuses carry the message from Spotify's error body when
//! one is present.

pub mod auth;
pub mod playlist;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::ApiConfig,
    error::SpotifyError,
    types::{ApiErrorResponse, Page, PlaylistItem, PlaylistRef, PlaylistResponse},
};

/// Provider capability the playlist fetcher is written against.
#[allow(async_fn_in_trait)]
pub trait PlaylistSource {
    /// Requests the playlist by ID; returns its name and first page of items.
    async fn playlist(&self, id: &PlaylistRef) -> Result<PlaylistResponse, SpotifyError>;

    /// Requests the page a previous page's `next` cursor points at.
    async fn next_page(&self, cursor: &str) -> Result<Page<PlaylistItem>, SpotifyError>;
}

/// Builds the HTTP client shared by every request of a run.
pub fn http_client(api: &ApiConfig) -> Result<Client, SpotifyError> {
    Ok(Client::builder().timeout(api.timeout).build()?)
}

/// Authorized Web API client.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    access_token: String,
}

impl SpotifyClient {
    pub fn new(http: Client, api: &ApiConfig, access_token: String) -> Self {
        Self {
            http,
            api_url: api.api_url.clone(),
            access_token,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SpotifyError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

impl PlaylistSource for SpotifyClient {
    async fn playlist(&self, id: &PlaylistRef) -> Result<PlaylistResponse, SpotifyError> {
        let api_url = format!(
            "{uri}/playlists/{id}?additional_types=track",
            uri = self.api_url,
            id = id
        );
        self.get_json(&api_url).await
    }

    async fn next_page(&self, cursor: &str) -> Result<Page<PlaylistItem>, SpotifyError> {
        self.get_json(cursor).await
    }
}

/// Turns a non-success Web API response into [`SpotifyError::Api`].
async fn check_status(response: Response) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(err) => err.error.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string(),
    };

    Err(SpotifyError::Api {
        status: status.as_u16(),
        message,
    })
}
