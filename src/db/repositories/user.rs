use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use crate::entities::{prelude::*, users};
use crate::models::user::{NewUser, User};

/// Result of inserting a user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateUser {
    Created(User),
    EmailTaken,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Insert a user, reporting a duplicate email instead of failing.
    pub async fn create(&self, user: &NewUser) -> Result<CreateUser> {
        let active_model = users::ActiveModel {
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            phone: Set(user.phone.clone()),
            password: Set(user.password.clone()),
            ..Default::default()
        };

        match Users::insert(active_model).exec(&self.conn).await {
            Ok(res) => Ok(CreateUser::Created(User {
                id: res.last_insert_id,
                name: user.name.clone(),
                email: user.email.clone(),
                phone: user.phone.clone(),
            })),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Ok(CreateUser::EmailTaken),
                _ => Err(err).context("Failed to insert user"),
            },
        }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>> {
        let user = Users::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        Ok(user.map(User::from))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = Users::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("Failed to query user by email")?;

        Ok(user.map(User::from))
    }

    /// Names are not unique; the earliest registered match wins.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<User>> {
        let user = Users::find()
            .filter(users::Column::Name.eq(name))
            .order_by_asc(users::Column::Id)
            .one(&self.conn)
            .await
            .context("Failed to query user by name")?;

        Ok(user.map(User::from))
    }

    /// Exact match on email and password.
    pub async fn get_by_credentials(&self, email: &str, password: &str) -> Result<Option<User>> {
        let user = Users::find()
            .filter(users::Column::Email.eq(email))
            .filter(users::Column::Password.eq(password))
            .one(&self.conn)
            .await
            .context("Failed to query user by credentials")?;

        Ok(user.map(User::from))
    }

    pub async fn count(&self) -> Result<u64> {
        Users::find()
            .count(&self.conn)
            .await
            .context("Failed to count users")
    }
}
