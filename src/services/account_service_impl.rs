//! `SeaORM` implementation of the `AccountService` trait.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::db::{CreateUser, Store};
use crate::models::user::{NewUser, User};
use crate::services::account_service::{AccountError, AccountService};

pub struct SeaOrmAccountService {
    store: Store,
}

impl SeaOrmAccountService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AccountService for SeaOrmAccountService {
    async fn register(&self, user: NewUser) -> Result<User, AccountError> {
        match self.store.create_user(&user).await? {
            CreateUser::Created(user) => {
                info!(user_id = user.id, "Registered user");
                Ok(user)
            }
            CreateUser::EmailTaken => {
                warn!("Registration rejected: email already registered");
                Err(AccountError::DuplicateEmail)
            }
        }
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, AccountError> {
        self.store
            .get_user_by_credentials(email, password)
            .await?
            .ok_or(AccountError::InvalidCredentials)
    }

    async fn admin_login(&self, username: &str, password: &str) -> Result<(), AccountError> {
        if self.store.verify_admin(username, password).await? {
            info!(username, "Admin logged in");
            Ok(())
        } else {
            Err(AccountError::InvalidCredentials)
        }
    }
}
