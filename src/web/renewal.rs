use axum::{
    Form,
    extract::{Multipart, State, multipart::Field, rejection::FormRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_sessions::Session;

use super::views::{RenewTemplate, StatusTemplate, render_template};
use super::{WebError, flash};
use crate::models::renewal::{RenewalSubmission, UploadedDocument};
use crate::services::RenewalError;
use crate::state::AppState;

pub const SUBMITTED: &str = "Renewal request submitted successfully!";
pub const USER_NOT_FOUND: &str = "User not found. Please register first.";

#[derive(Deserialize)]
pub struct StatusForm {
    pub email: String,
}

/// GET /renew
pub async fn renew_page(session: Session) -> Result<Response, WebError> {
    let flashes = flash::take(&session).await?;
    Ok(render_template(RenewTemplate { flashes })?.into_response())
}

/// POST /renew
pub async fn renew(
    State(state): State<Arc<AppState>>,
    session: Session,
    multipart: Multipart,
) -> Result<Response, WebError> {
    let submission = read_submission(multipart).await?;

    let message = match state.renewals.submit(submission).await {
        Ok(_) => SUBMITTED,
        Err(RenewalError::UserNotFound(_)) => USER_NOT_FOUND,
        Err(e) => return Err(e.into()),
    };

    let flashes = flash::take_with(&session, message).await?;
    Ok(render_template(RenewTemplate { flashes })?.into_response())
}

/// GET /status
pub async fn status_page(session: Session) -> Result<Response, WebError> {
    let flashes = flash::take(&session).await?;
    Ok(render_template(StatusTemplate {
        flashes,
        status_message: String::new(),
    })?
    .into_response())
}

/// POST /status
pub async fn status(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: Result<Form<StatusForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(form) = form.map_err(|e| WebError::bad_request(e.body_text()))?;

    let lookup = state.renewals.check_status(&form.email).await?;

    let flashes = flash::take(&session).await?;
    Ok(render_template(StatusTemplate {
        flashes,
        status_message: lookup.message(),
    })?
    .into_response())
}

async fn read_submission(mut multipart: Multipart) -> Result<RenewalSubmission, WebError> {
    let mut name = None;
    let mut old_pass_number = None;
    let mut id_proof = None;
    let mut old_pass_copy = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("name") => name = Some(read_text(field).await?),
            Some("old_pass_no") => old_pass_number = Some(read_text(field).await?),
            Some("id_proof") => id_proof = read_document(field).await?,
            Some("old_pass_copy") => old_pass_copy = read_document(field).await?,
            _ => {}
        }
    }

    Ok(RenewalSubmission {
        name: name.ok_or_else(|| WebError::bad_request("Missing form field: name"))?,
        old_pass_number: old_pass_number
            .ok_or_else(|| WebError::bad_request("Missing form field: old_pass_no"))?,
        id_proof: id_proof.ok_or_else(|| WebError::bad_request("Missing file: id_proof"))?,
        old_pass_copy,
    })
}

async fn read_text(field: Field<'_>) -> Result<String, WebError> {
    Ok(field.text().await?)
}

/// A file part without a file name is treated as no file at all.
async fn read_document(field: Field<'_>) -> Result<Option<UploadedDocument>, WebError> {
    let Some(file_name) = field
        .file_name()
        .map(str::to_string)
        .filter(|name| !name.is_empty())
    else {
        return Ok(None);
    };

    let bytes = field.bytes().await?;

    Ok(Some(UploadedDocument {
        file_name,
        bytes: bytes.to_vec(),
    }))
}
