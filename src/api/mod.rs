//! # API Module
//!
//! HTTP handlers for the local listener that receives Spotify's OAuth
//! redirect during the authorization-code flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Validates the `state` parameter and exchanges the
//!   authorization code for a token. Mounted on the path of the configured
//!   redirect URI by [`crate::server::start_callback_server`].
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use spotlist::api::callback;
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .layer(Extension(context));
//! ```

mod callback;

pub use callback::callback;
