use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::models::renewal::{DashboardRow, NewRenewalRequest, RenewalRequest};
use crate::models::user::{NewUser, User};

pub mod migrator;
pub mod repositories;

pub use repositories::user::CreateUser;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn renewal_repo(&self) -> repositories::renewal::RenewalRepository {
        repositories::renewal::RenewalRepository::new(self.conn.clone())
    }

    fn admin_repo(&self) -> repositories::admin::AdminRepository {
        repositories::admin::AdminRepository::new(self.conn.clone())
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<CreateUser> {
        self.user_repo().create(user).await
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.user_repo().get_by_email(email).await
    }

    pub async fn get_user_by_name(&self, name: &str) -> Result<Option<User>> {
        self.user_repo().get_by_name(name).await
    }

    pub async fn get_user_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>> {
        self.user_repo().get_by_credentials(email, password).await
    }

    pub async fn user_count(&self) -> Result<u64> {
        self.user_repo().count().await
    }

    pub async fn create_renewal_request(
        &self,
        request: &NewRenewalRequest,
    ) -> Result<RenewalRequest> {
        self.renewal_repo().create(request).await
    }

    pub async fn get_renewal_request(&self, id: i32) -> Result<Option<RenewalRequest>> {
        self.renewal_repo().get(id).await
    }

    pub async fn latest_renewal_request(&self, user_id: i32) -> Result<Option<RenewalRequest>> {
        self.renewal_repo().latest_for_user(user_id).await
    }

    pub async fn renewal_requests_for_user(&self, user_id: i32) -> Result<Vec<RenewalRequest>> {
        self.renewal_repo().list_for_user(user_id).await
    }

    pub async fn dashboard_rows(&self) -> Result<Vec<DashboardRow>> {
        self.renewal_repo().list_with_owner().await
    }

    pub async fn update_renewal_status(&self, id: i32, status: &str) -> Result<u64> {
        self.renewal_repo().update_status(id, status).await
    }

    pub async fn renewal_request_count(&self) -> Result<u64> {
        self.renewal_repo().count().await
    }

    pub async fn verify_admin(&self, username: &str, password: &str) -> Result<bool> {
        self.admin_repo().verify_credentials(username, password).await
    }

    pub async fn admin_count(&self) -> Result<u64> {
        self.admin_repo().count().await
    }
}
