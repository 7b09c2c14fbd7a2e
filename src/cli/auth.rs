use reqwest::Client;

use crate::{
    config::{ApiConfig, AuthMode, Credentials, PLAYLIST_READ_SCOPE},
    error::SpotifyError,
    info,
    management::TokenManager,
    spotify, success, warning,
};

/// Produces an access token for the chosen auth mode.
///
/// The user flow reuses the cached token when its scope covers playlist
/// reads, refreshing it if needed, and falls back to the interactive
/// authorization-code flow otherwise. `force_login` skips the cache and
/// makes Spotify show the consent dialog again.
pub async fn session(
    http: &Client,
    api: &ApiConfig,
    credentials: &Credentials,
    mode: AuthMode,
    force_login: bool,
) -> Result<String, SpotifyError> {
    match mode {
        AuthMode::Client => {
            let token = spotify::auth::client_credentials(http, api, credentials).await?;
            Ok(token.access_token)
        }
        AuthMode::User => {
            if !force_login {
                if let Ok(mut token_mgr) = TokenManager::load().await {
                    if token_mgr.current_token().covers(PLAYLIST_READ_SCOPE) {
                        match token_mgr.get_valid_token(http, api, credentials).await {
                            Ok(access_token) => return Ok(access_token),
                            Err(e) => warning!("Cached token could not be refreshed: {}", e),
                        }
                    }
                }
            }

            info!("Opening browser for Spotify authorization...");
            let token = spotify::auth::authorize_user(http, api, credentials, force_login).await?;

            let token_mgr = TokenManager::new(token);
            if let Err(e) = token_mgr.persist().await {
                warning!("Failed to save token to cache: {}", e);
            }
            success!("Authentication successful!");

            Ok(token_mgr.current_token().access_token.clone())
        }
    }
}
