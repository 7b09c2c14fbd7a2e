use spotlist::cli::display_tracks;
use spotlist::types::{Playlist, Track};

fn render(playlist: &Playlist) -> String {
    let mut out: Vec<u8> = Vec::new();
    display_tracks(&mut out, playlist).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_numbered_track_list() {
    let playlist = Playlist {
        name: "Road Trip".to_string(),
        tracks: vec![
            Track {
                name: "Africa".to_string(),
                artist: "TOTO".to_string(),
            },
            Track {
                name: "Holding Out for a Hero".to_string(),
                artist: "Bonnie Tyler".to_string(),
            },
        ],
    };

    let output = render(&playlist);

    assert!(output.contains("Playlist: Road Trip"));
    assert!(output.contains("1. Africa - TOTO\n"));
    assert!(output.contains("2. Holding Out for a Hero - Bonnie Tyler\n"));
    assert!(!output.contains("No tracks found"));
    assert!(output.find("1. Africa").unwrap() < output.find("2. Holding").unwrap());
}

#[test]
fn test_empty_playlist_notice() {
    let playlist = Playlist {
        name: "Nothing".to_string(),
        tracks: Vec::new(),
    };

    let output = render(&playlist);

    assert!(output.contains("Playlist: Nothing"));
    assert!(output.contains("No tracks found in the playlist."));
    assert!(!output.contains("1. "));
}

#[test]
fn test_clears_screen_first() {
    let playlist = Playlist {
        name: "Any".to_string(),
        tracks: Vec::new(),
    };

    let output = render(&playlist);

    // ESC [ 2 J, then cursor home
    assert!(output.starts_with("\u{1b}[2J"));
}
