use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;

use crate::{api, spotify::auth::AuthContext};

/// Serves the OAuth callback on `path` until the task is aborted.
pub async fn start_callback_server(
    listener: TcpListener,
    path: String,
    context: Arc<AuthContext>,
) -> std::io::Result<()> {
    let app = Router::new()
        .route(&path, get(api::callback))
        .layer(Extension(context));

    axum::serve(listener, app).await
}
