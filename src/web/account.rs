use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::views::{LoginTemplate, RegisterTemplate, render_template};
use super::{WebError, flash};
use crate::models::user::NewUser;
use crate::services::AccountError;
use crate::state::AppState;

pub const REGISTERED: &str = "Registration successful! Please login.";
pub const EMAIL_TAKEN: &str = "Email already exists! Try another.";
pub const LOGGED_IN: &str = "Login successful! Now you can apply for renewal.";
pub const INVALID_LOGIN: &str = "Invalid email or password.";

#[derive(Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// GET /register
pub async fn register_page(session: Session) -> Result<Response, WebError> {
    let flashes = flash::take(&session).await?;
    Ok(render_template(RegisterTemplate { flashes })?.into_response())
}

/// POST /register
pub async fn register(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form.map_err(|e| WebError::bad_request(e.body_text()))?;

    let user = NewUser {
        name: form.name,
        email: form.email,
        phone: form.phone,
        password: form.password,
    };

    match state.accounts.register(user).await {
        Ok(_) => {
            flash::push(&session, REGISTERED).await?;
            Ok(Redirect::to("/login").into_response())
        }
        Err(AccountError::DuplicateEmail) => {
            let flashes = flash::take_with(&session, EMAIL_TAKEN).await?;
            Ok(render_template(RegisterTemplate { flashes })?.into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /login
pub async fn login_page(session: Session) -> Result<Response, WebError> {
    let flashes = flash::take(&session).await?;
    Ok(render_template(LoginTemplate { flashes })?.into_response())
}

/// POST /login
///
/// A match only produces a confirmation; nothing about the user is kept in
/// the session.
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form.map_err(|e| WebError::bad_request(e.body_text()))?;

    match state.accounts.login(&form.email, &form.password).await {
        Ok(_) => {
            flash::push(&session, LOGGED_IN).await?;
            Ok(Redirect::to("/renew").into_response())
        }
        Err(AccountError::InvalidCredentials) => {
            let flashes = flash::take_with(&session, INVALID_LOGIN).await?;
            Ok(render_template(LoginTemplate { flashes })?.into_response())
        }
        Err(e) => Err(e.into()),
    }
}
