use std::path::PathBuf;

use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use colored::Colorize;

use spotlist::{
    cli::{self, PlaylistOptions},
    config::{self, AuthMode},
    error, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Spotify playlist URL; prompted for when omitted
    url: Option<String>,

    /// Export the playlist to JSON
    #[clap(short, long)]
    export: bool,

    /// Output JSON file name
    #[clap(short, long, default_value = "playlist.json")]
    output: PathBuf,

    /// Authorization flow used to access the API
    #[clap(short, long, value_enum, default_value_t = AuthMode::User)]
    auth: AuthMode,

    /// Ignore the cached login and show Spotify's consent dialog again
    #[clap(long)]
    force_login: bool,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    println!("{}\n", "🎵 Spotify Playlist Extractor 🎵".cyan().bold());

    let opts = PlaylistOptions {
        url: cli.url,
        export: cli.export,
        output: cli.output,
        auth: cli.auth,
        force_login: cli.force_login,
    };

    if let Err(e) = cli::playlist(opts).await {
        if e.is_fatal() {
            error!("{}", e);
        }
        warning!("{}", e);
    }
}
