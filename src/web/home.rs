use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tower_sessions::Session;

use super::views::{IndexTemplate, render_template};
use super::{WebError, flash};
use crate::state::AppState;

/// GET /
pub async fn index(session: Session) -> Result<Response, WebError> {
    let flashes = flash::take(&session).await?;
    Ok(render_template(IndexTemplate { flashes })?.into_response())
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok").into_response(),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "database unavailable").into_response()
        }
    }
}
