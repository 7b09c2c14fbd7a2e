//! # CLI Module
//!
//! The command-line layer of spotlist. It coordinates configuration, the
//! auth session, the playlist fetcher and the two outputs.
//!
//! ## Commands
//!
//! - [`playlist`] - Reads a playlist URL, fetches every page of the playlist
//!   and either prints the tracks or exports them to JSON
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (prompt, presenter, progress)
//!     ↓
//! Management Layer (token cache, export)
//!     ↓
//! API Layer (Spotify integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotlist                                              # prompt for a URL, print tracks
//! spotlist https://open.spotify.com/playlist/<id>       # print tracks
//! spotlist -e -o mix.json <url>                         # export to mix.json
//! spotlist --auth client <url>                          # public playlists, no login
//! spotlist --force-login <url>                          # ignore cached login
//! ```
//!
//! ## Error Handling
//!
//! Functions here return [`crate::error::AppError`]; the binary decides how
//! each error is reported and whether the process exits.

mod auth;
mod display;
mod playlist;

pub use auth::session;
pub use display::display_tracks;
pub use playlist::PlaylistOptions;
pub use playlist::playlist;
