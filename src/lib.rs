//! Spotify Playlist Extractor Library
//!
//! This library provides functionality for reading a single Spotify playlist,
//! walking all of its track pages and either printing the tracks or exporting
//! them to a JSON file.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local OAuth callback listener
//! - `cli` - Command-line orchestration, presentation and session setup
//! - `config` - Credentials, endpoints and `.env` loading
//! - `error` - Error types for every layer
//! - `management` - Token cache and playlist export
//! - `server` - Local HTTP listener for OAuth callbacks
//! - `spotify` - Spotify Web API client and playlist fetcher
//! - `types` - Wire types and the playlist domain model
//! - `utils` - Playlist ID extraction and small helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Playlist exported successfully to {}", path);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 after printing. Only the binary
/// entry point uses it; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Failed to fetch playlist: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("Failed to export playlist: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
