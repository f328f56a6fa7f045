use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::entities::{prelude::*, renewal_requests, users};
use crate::models::renewal::{DashboardRow, NewRenewalRequest, RenewalRequest, RenewalStatus};

pub struct RenewalRepository {
    conn: DatabaseConnection,
}

impl RenewalRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn create(&self, request: &NewRenewalRequest) -> Result<RenewalRequest> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let active_model = renewal_requests::ActiveModel {
            user_id: Set(request.user_id),
            old_pass_number: Set(request.old_pass_number.clone()),
            id_proof_path: Set(request.id_proof_path.clone()),
            old_pass_copy_path: Set(request.old_pass_copy_path.clone().unwrap_or_default()),
            status: Set(RenewalStatus::default().to_string()),
            created_at: Set(now.clone()),
            ..Default::default()
        };

        let res = RenewalRequests::insert(active_model)
            .exec(&self.conn)
            .await
            .context("Failed to insert renewal request")?;

        Ok(RenewalRequest {
            id: res.last_insert_id,
            user_id: request.user_id,
            old_pass_number: request.old_pass_number.clone(),
            id_proof_path: request.id_proof_path.clone(),
            old_pass_copy_path: request.old_pass_copy_path.clone(),
            status: RenewalStatus::default().to_string(),
            created_at: now,
        })
    }

    pub async fn get(&self, id: i32) -> Result<Option<RenewalRequest>> {
        let request = RenewalRequests::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query renewal request")?;

        Ok(request.map(RenewalRequest::from))
    }

    /// Most recent request for a user. Requests created within the same
    /// microsecond fall back to insertion order.
    pub async fn latest_for_user(&self, user_id: i32) -> Result<Option<RenewalRequest>> {
        let request = RenewalRequests::find()
            .filter(renewal_requests::Column::UserId.eq(user_id))
            .order_by_desc(renewal_requests::Column::CreatedAt)
            .order_by_desc(renewal_requests::Column::Id)
            .one(&self.conn)
            .await
            .context("Failed to query latest renewal request")?;

        Ok(request.map(RenewalRequest::from))
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<RenewalRequest>> {
        let requests = RenewalRequests::find()
            .filter(renewal_requests::Column::UserId.eq(user_id))
            .order_by_asc(renewal_requests::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list renewal requests for user")?;

        Ok(requests.into_iter().map(RenewalRequest::from).collect())
    }

    /// Every request joined with its owner's name. Requests whose owner no
    /// longer exists are left out.
    pub async fn list_with_owner(&self) -> Result<Vec<DashboardRow>> {
        let rows = RenewalRequests::find()
            .select_only()
            .column_as(renewal_requests::Column::Id, "id")
            .column_as(users::Column::Name, "name")
            .column_as(renewal_requests::Column::OldPassNumber, "old_pass_number")
            .column_as(renewal_requests::Column::Status, "status")
            .join(JoinType::InnerJoin, renewal_requests::Relation::Users.def())
            .order_by_asc(renewal_requests::Column::Id)
            .into_model::<DashboardRow>()
            .all(&self.conn)
            .await
            .context("Failed to list renewal requests")?;

        Ok(rows)
    }

    /// Overwrite the status verbatim. Returns the number of rows touched.
    pub async fn update_status(&self, id: i32, status: &str) -> Result<u64> {
        let res = RenewalRequests::update_many()
            .col_expr(renewal_requests::Column::Status, Expr::value(status))
            .filter(renewal_requests::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .context("Failed to update renewal status")?;

        Ok(res.rows_affected)
    }

    pub async fn count(&self) -> Result<u64> {
        RenewalRequests::find()
            .count(&self.conn)
            .await
            .context("Failed to count renewal requests")
    }
}
