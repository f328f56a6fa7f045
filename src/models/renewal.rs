use sea_orm::FromQueryResult;
use std::fmt;

use crate::entities::renewal_requests;

/// The statuses the administrator normally assigns.
///
/// Stored statuses are free text; this enum is used for the default value
/// and for the dashboard's action links, never to validate updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenewalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RenewalStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for RenewalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file received with a renewal submission.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Renewal form contents.
#[derive(Debug, Clone)]
pub struct RenewalSubmission {
    pub name: String,
    pub old_pass_number: String,
    pub id_proof: UploadedDocument,
    pub old_pass_copy: Option<UploadedDocument>,
}

/// Row to insert once the owning user is resolved and the files are saved.
#[derive(Debug, Clone)]
pub struct NewRenewalRequest {
    pub user_id: i32,
    pub old_pass_number: String,
    pub id_proof_path: String,
    pub old_pass_copy_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenewalRequest {
    pub id: i32,
    pub user_id: i32,
    pub old_pass_number: String,
    pub id_proof_path: String,
    pub old_pass_copy_path: Option<String>,
    pub status: String,
    pub created_at: String,
}

impl From<renewal_requests::Model> for RenewalRequest {
    fn from(model: renewal_requests::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            old_pass_number: model.old_pass_number,
            id_proof_path: model.id_proof_path,
            old_pass_copy_path: Some(model.old_pass_copy_path).filter(|p| !p.is_empty()),
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// Admin dashboard row: a request joined with its owner's name.
#[derive(Debug, Clone, FromQueryResult)]
pub struct DashboardRow {
    pub id: i32,
    pub name: String,
    pub old_pass_number: String,
    pub status: String,
}

/// Outcome of a status check by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLookup {
    EmailNotRegistered,
    NoApplication,
    Latest(String),
}

impl StatusLookup {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::EmailNotRegistered => "Email not registered.".to_string(),
            Self::NoApplication => "No application found.".to_string(),
            Self::Latest(status) => format!("Your latest application status: {status}"),
        }
    }
}
