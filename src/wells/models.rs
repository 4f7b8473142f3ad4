use chrono::{DateTime, Utc};
use crudcrate::EntityToModels;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "well_type")]
#[serde(rename_all = "snake_case")]
pub enum WellType {
    #[sea_orm(string_value = "vertical")]
    Vertical,
    #[sea_orm(string_value = "horizontal")]
    Horizontal,
    // Spelling carried over from the upstream dataset.
    #[sea_orm(string_value = "direccional")]
    Direccional,
}

#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "well_operation")]
#[serde(rename_all = "snake_case")]
pub enum WellOperation {
    #[sea_orm(string_value = "drilling")]
    Drilling,
    #[sea_orm(string_value = "completion")]
    Completion,
    #[sea_orm(string_value = "testing")]
    Testing,
    #[sea_orm(string_value = "production")]
    Production,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "wells")]
#[crudcrate(
    generate_router,
    api_struct = "Well",
    name_singular = "well",
    name_plural = "wells",
    description = "Wellbores drilled for a contract field. Carries the static well sheet; daily trajectories live in the drilling plan and progress series.",
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    #[crudcrate(sortable, filterable, fulltext)]
    pub location: String,
    // Free-form operational state, unlike the typed well_type/operation pair.
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(sortable, filterable)]
    pub status: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub depth: Option<f64>,
    pub diameter: Option<f64>,
    #[crudcrate(sortable, filterable, enum_field)]
    pub well_type: Option<WellType>,
    #[crudcrate(sortable, filterable, enum_field)]
    pub operation: Option<WellOperation>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[crudcrate(sortable, filterable)]
    pub initial_date: Option<DateTime<Utc>>,
    pub final_depth: Option<f64>,
    pub rop_average: Option<f64>,
    pub elapsed_days: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub formation: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub hole_section: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub lithology: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub budget_afe: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub actual_cost: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub daily_rate: Option<Decimal>,
    #[crudcrate(sortable, filterable)]
    pub user_id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub field_id: Option<Uuid>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable, list_model=false)]
    pub created_at: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::users::models::Entity",
        from = "Column::UserId",
        to = "crate::users::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Users,
    #[sea_orm(
        belongs_to = "crate::fields::models::Entity",
        from = "Column::FieldId",
        to = "crate::fields::models::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Fields,
    #[sea_orm(has_many = "crate::wells::plans::models::Entity")]
    DrillingPlans,
    #[sea_orm(has_many = "crate::wells::progress::models::Entity")]
    DrillingData,
    #[sea_orm(has_many = "crate::wells::production::models::Entity")]
    ProductionData,
}

impl Related<crate::users::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<crate::fields::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fields.def()
    }
}

impl Related<crate::wells::plans::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DrillingPlans.def()
    }
}

impl Related<crate::wells::progress::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DrillingData.def()
    }
}

impl Related<crate::wells::production::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductionData.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
