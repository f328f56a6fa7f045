use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use crate::entities::{admins, prelude::*};

pub struct AdminRepository {
    conn: DatabaseConnection,
}

impl AdminRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Exact match on username and password.
    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<bool> {
        let admin = Admins::find()
            .filter(admins::Column::Username.eq(username))
            .filter(admins::Column::Password.eq(password))
            .one(&self.conn)
            .await
            .context("Failed to query admin credentials")?;

        Ok(admin.is_some())
    }

    pub async fn count(&self) -> Result<u64> {
        Admins::find()
            .count(&self.conn)
            .await
            .context("Failed to count admins")
    }
}
