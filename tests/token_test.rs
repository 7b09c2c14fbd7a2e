use std::{fs, path::PathBuf};

use spotlist::config::PLAYLIST_READ_SCOPE;
use spotlist::management::TokenManager;
use spotlist::types::Token;

fn temp_token_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("spotlist-token-{}", std::process::id()))
        .join(name)
        .join("token.json")
}

fn create_test_token(scope: &str, obtained_at: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: scope.to_string(),
        expires_in: 3600,
        obtained_at,
    }
}

#[test]
fn test_token_covers_scope() {
    let token = create_test_token("playlist-read-collaborative playlist-read-private", 0);
    assert!(token.covers(PLAYLIST_READ_SCOPE));

    let token = create_test_token("playlist-read-private", 0);
    assert!(!token.covers(PLAYLIST_READ_SCOPE));

    let token = create_test_token("", 0);
    assert!(!token.covers(PLAYLIST_READ_SCOPE));
}

#[test]
fn test_is_expired_at() {
    let mgr = TokenManager::with_path(
        create_test_token(PLAYLIST_READ_SCOPE, 1_000),
        temp_token_path("expiry"),
    );

    assert!(!mgr.is_expired_at(1_000));
    assert!(!mgr.is_expired_at(1_000 + 3600 - 241));
    // refreshed 240 seconds ahead of the real expiry
    assert!(mgr.is_expired_at(1_000 + 3600 - 240));
    assert!(mgr.is_expired_at(1_000 + 7200));
}

#[tokio::test]
async fn test_persist_and_load() {
    let path = temp_token_path("roundtrip");
    let mgr = TokenManager::with_path(create_test_token(PLAYLIST_READ_SCOPE, 42), path.clone());

    mgr.persist().await.unwrap();
    let loaded = TokenManager::load_from(path.clone()).await.unwrap();

    assert_eq!(loaded.path(), path.as_path());
    assert_eq!(loaded.current_token().access_token, "access");
    assert_eq!(loaded.current_token().refresh_token, "refresh");
    assert_eq!(loaded.current_token().obtained_at, 42);
}

#[tokio::test]
async fn test_load_missing_or_corrupt_cache() {
    let path = temp_token_path("missing");
    assert!(TokenManager::load_from(path).await.is_err());

    let path = temp_token_path("corrupt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();
    assert!(TokenManager::load_from(path).await.is_err());
}
