use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};

use crate::{
    spotify::auth::{AuthContext, exchange_code},
    warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(context): Extension<Arc<AuthContext>>,
) -> Html<&'static str> {
    if let Some(error) = params.get("error") {
        context.pending.lock().await.error = Some(format!("authorization denied: {}", error));
        return Html("<h4>Authorization denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    {
        let mut pending = context.pending.lock().await;
        if params.get("state") != Some(&pending.state) {
            pending.error = Some("state mismatch in OAuth callback".to_string());
            return Html("<h4>Invalid state.</h4>");
        }
    }

    match exchange_code(&context.http, &context.api, &context.credentials, code).await {
        Ok(token) => {
            context.pending.lock().await.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            context.pending.lock().await.error = Some(e.to_string());
            Html("<h4>Login failed.</h4>")
        }
    }
}
