use std::path::{Path, PathBuf};

use chrono::Utc;
use reqwest::Client;

use crate::{
    config::{self, ApiConfig, Credentials},
    error::{SpotifyError, TokenCacheError},
    spotify,
    types::Token,
    warning,
};

/// Seconds before expiry at which a token is already treated as expired.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// Cached user token with refresh handling.
pub struct TokenManager {
    token: Token,
    path: PathBuf,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        Self::with_path(token, Self::token_path())
    }

    pub fn with_path(token: Token, path: PathBuf) -> Self {
        TokenManager { token, path }
    }

    pub async fn load() -> Result<Self, TokenCacheError> {
        Self::load_from(Self::token_path()).await
    }

    pub async fn load_from(path: PathBuf) -> Result<Self, TokenCacheError> {
        let content = async_fs::read_to_string(&path).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token, path })
    }

    pub async fn persist(&self) -> Result<(), TokenCacheError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Returns an access token, refreshing it first when it is about to expire.
    ///
    /// A refreshed token is written back to the cache; a failed write only
    /// produces a warning since the token itself is usable.
    pub async fn get_valid_token(
        &mut self,
        http: &Client,
        api: &ApiConfig,
        credentials: &Credentials,
    ) -> Result<String, SpotifyError> {
        if self.is_expired() {
            self.token =
                spotify::auth::refresh_token(http, api, credentials, &self.token.refresh_token)
                    .await?;
            if let Err(e) = self.persist().await {
                warning!("Failed to save token to cache: {}", e);
            }
        }

        Ok(self.token.access_token.clone())
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp() as u64)
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        now + EXPIRY_MARGIN_SECS >= self.token.obtained_at + self.token.expires_in
    }

    pub fn token_path() -> PathBuf {
        config::data_dir().join("cache/token.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
