mod auth;
mod export;

pub use auth::TokenManager;
pub use export::encode_document;
pub use export::export_playlist;
