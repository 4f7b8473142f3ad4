use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    ToSchema,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[default]
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "engineer")]
    Engineer,
    #[sea_orm(string_value = "operator")]
    Operator,
    #[sea_orm(string_value = "supervisor")]
    Supervisor,
    #[sea_orm(string_value = "analyst")]
    Analyst,
    #[sea_orm(string_value = "viewer")]
    Viewer,
}

// This entity deliberately skips the crudcrate router generation: the stored
// password hash must never appear in an API struct, so the wire models below
// are written by hand and the handlers live in views.rs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text", unique)]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::contracts::models::Entity")]
    Contracts,
    #[sea_orm(has_many = "crate::wells::models::Entity")]
    Wells,
    #[sea_orm(has_many = "crate::reports::models::Entity")]
    Reports,
}

impl Related<crate::contracts::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contracts.def()
    }
}

impl Related<crate::wells::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wells.def()
    }
}

impl Related<crate::reports::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Public representation of an account.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            role: model.role,
            created_at: model.created_at,
            last_updated: model.last_updated,
        }
    }
}

/// Registration payload. The plaintext password is hashed in the handler and
/// dropped.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserCreate {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
}
