//! Domain service for bus-pass renewal requests.

use thiserror::Error;

use crate::models::renewal::{DashboardRow, RenewalRequest, RenewalSubmission, StatusLookup};

/// Errors specific to renewal operations.
#[derive(Debug, Error)]
pub enum RenewalError {
    #[error("No user named '{0}'")]
    UserNotFound(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for RenewalError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for RenewalError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Domain service trait for renewal requests.
#[async_trait::async_trait]
pub trait RenewalService: Send + Sync {
    /// Resolves the applicant by name, stores the documents and records a
    /// pending request.
    ///
    /// # Errors
    ///
    /// Returns [`RenewalError::UserNotFound`] when no user has that name; in
    /// that case nothing is written.
    async fn submit(&self, submission: RenewalSubmission) -> Result<RenewalRequest, RenewalError>;

    /// Status of the most recent request of the user registered with `email`.
    async fn check_status(&self, email: &str) -> Result<StatusLookup, RenewalError>;

    /// All requests with their owners' names.
    async fn dashboard(&self) -> Result<Vec<DashboardRow>, RenewalError>;

    /// Stores `status` verbatim on the request. Returns the number of rows
    /// changed, which is zero for an unknown id.
    async fn update_status(&self, request_id: i32, status: &str) -> Result<u64, RenewalError>;
}
