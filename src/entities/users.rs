use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(unique)]
    pub email: String,

    pub phone: String,

    /// Stored as submitted.
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::renewal_requests::Entity")]
    RenewalRequests,
}

impl Related<super::renewal_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RenewalRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
