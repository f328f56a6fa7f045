//! `SeaORM` implementation of the `RenewalService` trait.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::db::Store;
use crate::models::renewal::{
    DashboardRow, NewRenewalRequest, RenewalRequest, RenewalSubmission, StatusLookup,
};
use crate::services::renewal_service::{RenewalError, RenewalService};
use crate::uploads::UploadStore;

pub struct SeaOrmRenewalService {
    store: Store,
    uploads: UploadStore,
}

impl SeaOrmRenewalService {
    #[must_use]
    pub const fn new(store: Store, uploads: UploadStore) -> Self {
        Self { store, uploads }
    }
}

#[async_trait]
impl RenewalService for SeaOrmRenewalService {
    async fn submit(&self, submission: RenewalSubmission) -> Result<RenewalRequest, RenewalError> {
        let Some(user) = self.store.get_user_by_name(&submission.name).await? else {
            warn!("Renewal discarded: no user named {:?}", submission.name);
            return Err(RenewalError::UserNotFound(submission.name));
        };

        // Files already written stay on disk if a later step fails.
        let id_proof_path = self
            .uploads
            .save(&submission.id_proof)
            .await
            .map_err(|e| RenewalError::Upload(e.to_string()))?;

        let old_pass_copy_path = match &submission.old_pass_copy {
            Some(copy) => Some(
                self.uploads
                    .save(copy)
                    .await
                    .map_err(|e| RenewalError::Upload(e.to_string()))?,
            ),
            None => None,
        };

        let request = self
            .store
            .create_renewal_request(&NewRenewalRequest {
                user_id: user.id,
                old_pass_number: submission.old_pass_number,
                id_proof_path,
                old_pass_copy_path,
            })
            .await?;

        info!(
            request_id = request.id,
            user_id = user.id,
            "Renewal request submitted"
        );

        Ok(request)
    }

    async fn check_status(&self, email: &str) -> Result<StatusLookup, RenewalError> {
        let Some(user) = self.store.get_user_by_email(email).await? else {
            return Ok(StatusLookup::EmailNotRegistered);
        };

        Ok(self
            .store
            .latest_renewal_request(user.id)
            .await?
            .map_or(StatusLookup::NoApplication, |request| {
                StatusLookup::Latest(request.status)
            }))
    }

    async fn dashboard(&self) -> Result<Vec<DashboardRow>, RenewalError> {
        Ok(self.store.dashboard_rows().await?)
    }

    async fn update_status(&self, request_id: i32, status: &str) -> Result<u64, RenewalError> {
        let updated = self.store.update_renewal_status(request_id, status).await?;

        if updated == 0 {
            warn!(request_id, "Status update matched no renewal request");
        } else {
            info!(request_id, status, "Renewal status updated");
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::CreateUser;
    use crate::models::renewal::UploadedDocument;
    use crate::models::user::NewUser;
    use chrono::SubsecRound;

    struct Fixture {
        service: SeaOrmRenewalService,
        store: Store,
        upload_dir: std::path::PathBuf,
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            std::fs::remove_dir_all(&self.upload_dir).ok();
        }
    }

    async fn fixture() -> Fixture {
        let store = Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .expect("in-memory store");
        let upload_dir =
            std::env::temp_dir().join(format!("buspass-renewals-{}", uuid::Uuid::new_v4()));
        let service = SeaOrmRenewalService::new(store.clone(), UploadStore::new(&upload_dir));
        Fixture {
            service,
            store,
            upload_dir,
        }
    }

    async fn register(store: &Store, name: &str, email: &str) -> i32 {
        let created = store
            .create_user(&NewUser {
                name: name.to_string(),
                email: email.to_string(),
                phone: "555-0102".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();
        match created {
            CreateUser::Created(user) => user.id,
            CreateUser::EmailTaken => panic!("email already taken"),
        }
    }

    fn submission(name: &str, copy: bool) -> RenewalSubmission {
        RenewalSubmission {
            name: name.to_string(),
            old_pass_number: "BP-2041".to_string(),
            id_proof: UploadedDocument {
                file_name: "aadhaar.pdf".to_string(),
                bytes: b"%PDF-1.4".to_vec(),
            },
            old_pass_copy: copy.then(|| UploadedDocument {
                file_name: "old-pass.jpg".to_string(),
                bytes: vec![0xff, 0xd8, 0xff],
            }),
        }
    }

    #[tokio::test]
    async fn unknown_name_creates_nothing() {
        let fx = fixture().await;

        let err = fx.service.submit(submission("Ghost", true)).await.unwrap_err();
        assert!(matches!(err, RenewalError::UserNotFound(name) if name == "Ghost"));

        assert_eq!(fx.store.renewal_request_count().await.unwrap(), 0);
        assert!(!fx.upload_dir.join("aadhaar.pdf").exists());
    }

    #[tokio::test]
    async fn valid_name_creates_one_pending_request() {
        let fx = fixture().await;
        let user_id = register(&fx.store, "Kiran", "kiran@example.com").await;

        let before = chrono::Utc::now();
        let request = fx.service.submit(submission("Kiran", false)).await.unwrap();

        assert_eq!(fx.store.renewal_request_count().await.unwrap(), 1);
        assert_eq!(request.user_id, user_id);
        assert_eq!(request.status, "Pending");
        assert_eq!(request.old_pass_copy_path, None);

        let created = chrono::DateTime::parse_from_rfc3339(&request.created_at).unwrap();
        assert!(created >= before.trunc_subsecs(6));

        let stored = fx.store.get_renewal_request(request.id).await.unwrap().unwrap();
        assert_eq!(stored, request);
        assert_eq!(std::fs::read(&stored.id_proof_path).unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn shared_name_resolves_to_earliest_user() {
        let fx = fixture().await;
        let first = register(&fx.store, "Sam", "sam.one@example.com").await;
        let second = register(&fx.store, "Sam", "sam.two@example.com").await;
        assert!(first < second);

        let request = fx.service.submit(submission("Sam", false)).await.unwrap();
        assert_eq!(request.user_id, first);

        assert_eq!(
            fx.service.check_status("sam.two@example.com").await.unwrap(),
            StatusLookup::NoApplication
        );
    }

    #[tokio::test]
    async fn optional_copy_is_saved_when_present() {
        let fx = fixture().await;
        register(&fx.store, "Kiran", "kiran@example.com").await;

        let request = fx.service.submit(submission("Kiran", true)).await.unwrap();
        let copy_path = request.old_pass_copy_path.expect("copy path recorded");
        assert!(copy_path.ends_with("old-pass.jpg"));
        assert!(std::path::Path::new(&copy_path).exists());
    }

    #[tokio::test]
    async fn status_check_reports_latest_request() {
        let fx = fixture().await;
        register(&fx.store, "Kiran", "kiran@example.com").await;

        assert_eq!(
            fx.service.check_status("nobody@example.com").await.unwrap(),
            StatusLookup::EmailNotRegistered
        );
        assert_eq!(
            fx.service.check_status("kiran@example.com").await.unwrap(),
            StatusLookup::NoApplication
        );

        let first = fx.service.submit(submission("Kiran", false)).await.unwrap();
        fx.service.update_status(first.id, "Rejected").await.unwrap();
        fx.service.submit(submission("Kiran", false)).await.unwrap();

        assert_eq!(
            fx.service.check_status("kiran@example.com").await.unwrap(),
            StatusLookup::Latest("Pending".to_string())
        );
    }

    #[tokio::test]
    async fn update_stores_arbitrary_status_verbatim() {
        let fx = fixture().await;
        register(&fx.store, "Kiran", "kiran@example.com").await;
        let request = fx.service.submit(submission("Kiran", false)).await.unwrap();

        let updated = fx
            .service
            .update_status(request.id, "lost in the mail")
            .await
            .unwrap();
        assert_eq!(updated, 1);

        let stored = fx.store.get_renewal_request(request.id).await.unwrap().unwrap();
        assert_eq!(stored.status, "lost in the mail");

        let rows = fx.service.dashboard().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Kiran");
        assert_eq!(rows[0].status, "lost in the mail");
    }
}
