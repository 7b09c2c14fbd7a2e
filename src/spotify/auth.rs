use std::{sync::Arc, time::Duration};

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, Url, header::AUTHORIZATION};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    config::{ApiConfig, CallbackTarget, Credentials, PLAYLIST_READ_SCOPE},
    error::SpotifyError,
    server::start_callback_server,
    types::{PendingAuth, Token, TokenErrorResponse, TokenResponse},
    utils, warning,
};

/// How long the authorization-code flow waits for the browser redirect.
const MAX_CALLBACK_WAIT: Duration = Duration::from_secs(120);

/// Everything the callback handler needs to finish the flow.
pub struct AuthContext {
    pub http: Client,
    pub api: ApiConfig,
    pub credentials: Credentials,
    pub pending: Mutex<PendingAuth>,
}

/// Obtains an app-only token with the client-credentials flow.
///
/// The token grants access to public data only and is not cached; it has no
/// refresh token and an empty scope.
pub async fn client_credentials(
    http: &Client,
    api: &ApiConfig,
    credentials: &Credentials,
) -> Result<Token, SpotifyError> {
    let res = request_token(
        http,
        api,
        credentials,
        &[("grant_type", "client_credentials")],
    )
    .await?;

    Ok(into_token(res, ""))
}

/// Runs the interactive authorization-code flow.
///
/// 1. Binds a local listener on the redirect URI's host and port
/// 2. Opens the authorization URL in the default browser
/// 3. Waits for the callback, which checks `state` and exchanges the code
///
/// # Arguments
///
/// * `show_dialog` - Ask Spotify to show the consent dialog even when the
///   user already approved the app
///
/// # Errors
///
/// - [`SpotifyError::Listener`] if the callback address cannot be bound
/// - [`SpotifyError::Auth`] if the user denied access or the exchange failed
/// - [`SpotifyError::AuthTimeout`] if no callback arrived in time
pub async fn authorize_user(
    http: &Client,
    api: &ApiConfig,
    credentials: &Credentials,
    show_dialog: bool,
) -> Result<Token, SpotifyError> {
    let redirect_uri = redirect_uri(credentials)?;
    let target =
        CallbackTarget::parse(redirect_uri).map_err(|e| SpotifyError::Auth(e.to_string()))?;

    let listener = TcpListener::bind((target.host.as_str(), target.port))
        .await
        .map_err(SpotifyError::Listener)?;

    let state = utils::generate_state();
    let auth_url = authorize_url(api, credentials, &state, show_dialog)?;

    let context = Arc::new(AuthContext {
        http: http.clone(),
        api: api.clone(),
        credentials: credentials.clone(),
        pending: Mutex::new(PendingAuth {
            state,
            token: None,
            error: None,
        }),
    });

    let server_context = Arc::clone(&context);
    let server = tokio::spawn(async move {
        start_callback_server(listener, target.path, server_context).await
    });

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Waiting for authorization in the browser...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = wait_for_token(&context, MAX_CALLBACK_WAIT).await;

    pb.finish_and_clear();
    server.abort();
    result
}

/// Builds the authorization URL the user is sent to.
pub fn authorize_url(
    api: &ApiConfig,
    credentials: &Credentials,
    state: &str,
    show_dialog: bool,
) -> Result<Url, SpotifyError> {
    let redirect_uri = redirect_uri(credentials)?;
    let mut params = vec![
        ("client_id", credentials.client_id.as_str()),
        ("response_type", "code"),
        ("redirect_uri", redirect_uri),
        ("scope", PLAYLIST_READ_SCOPE),
        ("state", state),
    ];
    if show_dialog {
        params.push(("show_dialog", "true"));
    }

    Url::parse_with_params(&api.auth_url, &params)
        .map_err(|e| SpotifyError::Auth(format!("invalid authorization URL: {}", e)))
}

/// Polls the shared state until the callback stored a token or an error.
async fn wait_for_token(context: &AuthContext, max_wait: Duration) -> Result<Token, SpotifyError> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < max_wait {
        {
            let pending = context.pending.lock().await;
            if let Some(token) = &pending.token {
                return Ok(token.clone());
            }
            if let Some(error) = &pending.error {
                return Err(SpotifyError::Auth(error.clone()));
            }
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    Err(SpotifyError::AuthTimeout)
}

/// Exchanges an authorization code for a user token.
pub async fn exchange_code(
    http: &Client,
    api: &ApiConfig,
    credentials: &Credentials,
    code: &str,
) -> Result<Token, SpotifyError> {
    let redirect_uri = redirect_uri(credentials)?;
    let res = request_token(
        http,
        api,
        credentials,
        &[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ],
    )
    .await?;

    Ok(into_token(res, ""))
}

/// Exchanges a refresh token for a new access token.
///
/// Spotify may omit the refresh token in the response; the old one is kept
/// in that case.
pub async fn refresh_token(
    http: &Client,
    api: &ApiConfig,
    credentials: &Credentials,
    refresh_token: &str,
) -> Result<Token, SpotifyError> {
    let res = request_token(
        http,
        api,
        credentials,
        &[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ],
    )
    .await?;

    Ok(into_token(res, refresh_token))
}

async fn request_token(
    http: &Client,
    api: &ApiConfig,
    credentials: &Credentials,
    form: &[(&str, &str)],
) -> Result<TokenResponse, SpotifyError> {
    let response = http
        .post(&api.token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&credentials.client_id, &credentials.client_secret),
        )
        .form(form)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<TokenErrorResponse>(&body) {
            Ok(err) => match err.error_description {
                Some(description) => format!("{} ({})", err.error, description),
                None => err.error,
            },
            Err(_) => format!("token endpoint returned {}", status),
        };
        return Err(SpotifyError::Auth(message));
    }

    Ok(response.json::<TokenResponse>().await?)
}

fn into_token(res: TokenResponse, previous_refresh_token: &str) -> Token {
    Token {
        access_token: res.access_token,
        refresh_token: res
            .refresh_token
            .unwrap_or_else(|| previous_refresh_token.to_string()),
        scope: res.scope.unwrap_or_default(),
        expires_in: res.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    }
}

fn redirect_uri(credentials: &Credentials) -> Result<&str, SpotifyError> {
    credentials
        .redirect_uri
        .as_deref()
        .ok_or_else(|| SpotifyError::Auth("no redirect URI configured".to_string()))
}
