use std::{
    io::{self, Write},
    path::PathBuf,
    time::Duration,
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    cli::{auth::session, display::display_tracks},
    config::{ApiConfig, AuthMode, Credentials},
    error::{AppError, InputError, SpotifyError},
    management, spotify,
    spotify::{SpotifyClient, playlist::fetch_playlist},
    success,
    types::{Playlist, PlaylistRef},
    utils,
};

#[derive(Debug, Clone)]
pub struct PlaylistOptions {
    /// Playlist URL; prompted for when absent.
    pub url: Option<String>,
    pub export: bool,
    pub output: PathBuf,
    pub auth: AuthMode,
    pub force_login: bool,
}

/// Fetches one playlist and prints or exports it.
///
/// Credentials are checked before anything else, and the URL is validated
/// before any network request is made.
///
/// # Errors
///
/// Every failure is returned to the caller. An [`AppError::Export`] means the
/// fetch itself succeeded.
pub async fn playlist(opts: PlaylistOptions) -> Result<(), AppError> {
    let credentials = Credentials::from_env(opts.auth)?;
    let api = ApiConfig::from_env()?;

    let playlist_url = match opts.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    let playlist_id = utils::extract_playlist_id(&playlist_url)?;
    success!("Extracted Playlist ID: {}", playlist_id);

    let http = spotify::http_client(&api)?;
    let access_token = session(&http, &api, &credentials, opts.auth, opts.force_login).await?;
    let client = SpotifyClient::new(http, &api, access_token);

    let playlist = fetch_with_progress(&client, &playlist_id).await?;

    if opts.export {
        management::export_playlist(&playlist, &opts.output).await?;
        success!("Playlist exported successfully to {}", opts.output.display());
    } else {
        display_tracks(&mut io::stdout().lock(), &playlist).map_err(AppError::Output)?;
    }

    Ok(())
}

fn prompt_for_url() -> Result<String, InputError> {
    print!("{} ", "🔗 Enter Spotify playlist URL:".yellow());
    io::stdout().flush().map_err(InputError::Read)?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(InputError::Read)?;
    Ok(line.trim().to_string())
}

async fn fetch_with_progress(
    client: &SpotifyClient,
    playlist_id: &PlaylistRef,
) -> Result<Playlist, SpotifyError> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching playlist {}...", playlist_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = fetch_playlist(client, playlist_id).await;
    pb.finish_and_clear();
    result
}
