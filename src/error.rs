//! Error types for each layer of the application.
//!
//! Library code returns these as values. Only the binary entry point decides
//! whether an error terminates the process: configuration, input and provider
//! errors are fatal, export errors are reported and the run still succeeds.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing {0} in environment or .env")]
    MissingVar(&'static str),
    #[error("Invalid redirect URI '{uri}': {reason}")]
    InvalidRedirectUri { uri: String, reason: String },
    #[error("Invalid value '{value}' for {var}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid playlist URL format.")]
    InvalidPlaylistUrl,
    #[error("Failed to read playlist URL: {0}")]
    Read(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum SpotifyError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Spotify API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("authentication failed or timed out")]
    AuthTimeout,
    #[error("cannot start callback listener: {0}")]
    Listener(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("cannot encode playlist: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum TokenCacheError {
    #[error("token cache I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("token cache is corrupt: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Aggregated error returned to the entry point.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to fetch playlist: {0}")]
    Provider(#[from] SpotifyError),
    #[error("Failed to export playlist: {0}")]
    Export(#[from] ExportError),
    #[error("Failed to print playlist: {0}")]
    Output(#[source] io::Error),
}

impl AppError {
    /// Export failures happen after a successful fetch and do not abort the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::Export(_))
    }
}
