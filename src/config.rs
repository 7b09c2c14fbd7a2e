//! Configuration management for the Spotify Playlist Extractor.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)
//!
//! Lookups go through a caller-supplied function so tests can feed values
//! without touching the process environment.

use std::{env, path::PathBuf, time::Duration};

use reqwest::Url;

use crate::error::ConfigError;

pub const ENV_CLIENT_ID: &str = "SPOTIPY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIPY_CLIENT_SECRET";
pub const ENV_REDIRECT_URI: &str = "SPOTIPY_REDIRECT_URI";
pub const ENV_API_URL: &str = "SPOTIFY_API_URL";
pub const ENV_AUTH_URL: &str = "SPOTIFY_API_AUTH_URL";
pub const ENV_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";
pub const ENV_HTTP_TIMEOUT: &str = "SPOTLIST_HTTP_TIMEOUT_SECS";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Scope requested by the authorization-code flow.
pub const PLAYLIST_READ_SCOPE: &str = "playlist-read-private playlist-read-collaborative";

/// Loads environment variables from `.env` files.
///
/// The file in the current working directory is read first, then the one in
/// the platform-specific local data directory under `spotlist/.env`:
/// - Linux: `~/.local/share/spotlist/.env`
/// - macOS: `~/Library/Application Support/spotlist/.env`
/// - Windows: `%LOCALAPPDATA%/spotlist/.env`
///
/// Variables already present in the process are never overridden. Missing
/// files are not an error.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    match dotenv::from_path(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Returns the per-user data directory of the application.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlist");
    path
}

/// Which token flow authorizes the API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AuthMode {
    /// Authorization-code flow; can read private and collaborative playlists
    User,
    /// Client-credentials flow; public playlists only
    Client,
}

/// Application credentials registered with Spotify.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    /// Only present (and required) for [`AuthMode::User`].
    pub redirect_uri: Option<String>,
}

impl Credentials {
    /// Reads the credentials required by `mode` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] for the first required variable
    /// that is unset or empty.
    pub fn from_env(mode: AuthMode) -> Result<Self, ConfigError> {
        Self::from_lookup(mode, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(mode: AuthMode, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = required(&lookup, ENV_CLIENT_ID)?;
        let client_secret = required(&lookup, ENV_CLIENT_SECRET)?;
        let redirect_uri = match mode {
            AuthMode::User => {
                let uri = required(&lookup, ENV_REDIRECT_URI)?;
                CallbackTarget::parse(&uri)?;
                Some(uri)
            }
            AuthMode::Client => None,
        };

        Ok(Self {
            client_id,
            client_secret,
            redirect_uri,
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(key))
}

/// Spotify endpoints and HTTP settings, overridable for testing against a
/// local mock.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let or_default = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        let timeout = match lookup(ENV_HTTP_TIMEOUT).filter(|v| !v.trim().is_empty()) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_HTTP_TIMEOUT,
                        value: raw,
                    });
                }
            },
            None => defaults.timeout,
        };

        Ok(Self {
            api_url: or_default(ENV_API_URL, defaults.api_url),
            auth_url: or_default(ENV_AUTH_URL, defaults.auth_url),
            token_url: or_default(ENV_TOKEN_URL, defaults.token_url),
            timeout,
        })
    }
}

/// Where the local OAuth callback listener binds, derived from the redirect URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackTarget {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl CallbackTarget {
    pub fn parse(redirect_uri: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidRedirectUri {
            uri: redirect_uri.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(redirect_uri).map_err(|e| invalid(&e.to_string()))?;
        let host = url.host_str().ok_or_else(|| invalid("missing host"))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| invalid("missing port"))?;

        Ok(Self {
            host: host.trim_start_matches('[').trim_end_matches(']').to_string(),
            port,
            path: url.path().to_string(),
        })
    }
}

