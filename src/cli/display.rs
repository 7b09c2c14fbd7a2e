use std::io::{self, Write};

use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::types::Playlist;

/// Clears the terminal and prints the playlist as a numbered track list.
///
/// An empty playlist prints a "no tracks" notice instead of the list.
pub fn display_tracks<W: Write>(out: &mut W, playlist: &Playlist) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    writeln!(
        out,
        "{}\n",
        format!("🎶 Playlist: {}", playlist.name).magenta().bold()
    )?;

    if playlist.tracks.is_empty() {
        writeln!(out, "{}", "No tracks found in the playlist.".red())?;
        return out.flush();
    }

    for (idx, track) in playlist.tracks.iter().enumerate() {
        writeln!(out, "{}. {} - {}", idx + 1, track.name, track.artist)?;
    }

    out.flush()
}
