use axum::{
    Form,
    extract::{Path, Request, State, rejection::FormRejection},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::views::{AdminDashboardTemplate, AdminLoginTemplate, render_template};
use super::{WebError, flash};
use crate::services::AccountError;
use crate::state::AppState;

pub const INVALID_ADMIN_LOGIN: &str = "Invalid admin credentials.";
pub const ADMIN_LOGIN_REQUIRED: &str = "Please log in as an administrator.";

const ADMIN_SESSION_KEY: &str = "admin";

#[derive(Deserialize)]
pub struct AdminLoginForm {
    pub username: String,
    pub password: String,
}

/// Guards the dashboard and status updates when
/// `server.protect_admin_routes` is set; passes everything through otherwise.
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    if !state.config.server.protect_admin_routes {
        return Ok(next.run(request).await);
    }

    if let Some(admin) = session.get::<String>(ADMIN_SESSION_KEY).await? {
        tracing::debug!(admin, "Admin session accepted");
        return Ok(next.run(request).await);
    }

    flash::push(&session, ADMIN_LOGIN_REQUIRED).await?;
    Ok(Redirect::to("/admin_login").into_response())
}

/// GET /admin_login
pub async fn login_page(session: Session) -> Result<Response, WebError> {
    let flashes = flash::take(&session).await?;
    Ok(render_template(AdminLoginTemplate { flashes })?.into_response())
}

/// POST /admin_login
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: Result<Form<AdminLoginForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form.map_err(|e| WebError::bad_request(e.body_text()))?;

    match state.accounts.admin_login(&form.username, &form.password).await {
        Ok(()) => {
            session.insert(ADMIN_SESSION_KEY, &form.username).await?;
            Ok(Redirect::to("/admin_dashboard").into_response())
        }
        Err(AccountError::InvalidCredentials) => {
            let flashes = flash::take_with(&session, INVALID_ADMIN_LOGIN).await?;
            Ok(render_template(AdminLoginTemplate { flashes })?.into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /admin_dashboard
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Response, WebError> {
    let requests = state.renewals.dashboard().await?;
    let flashes = flash::take(&session).await?;
    Ok(render_template(AdminDashboardTemplate::new(flashes, requests))?.into_response())
}

/// GET /update_status/{request_id}/{new_status}
///
/// The status is stored exactly as it appears in the path.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path((request_id, new_status)): Path<(i32, String)>,
) -> Result<Response, WebError> {
    state.renewals.update_status(request_id, &new_status).await?;

    flash::push(
        &session,
        format!("Request {request_id} status updated to {new_status}."),
    )
    .await?;
    Ok(Redirect::to("/admin_dashboard").into_response())
}
