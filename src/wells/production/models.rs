use chrono::{DateTime, Utc};
use crudcrate::EntityToModels;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "production_data")]
#[crudcrate(
    generate_router,
    api_struct = "ProductionData",
    name_singular = "production_data",
    name_plural = "production_data",
    description = "Daily production figures reported for a well once it flows. Rows are timestamped rather than day-numbered because production runs on calendar dates, not drilling days.",
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub well_id: Uuid,
    #[crudcrate(sortable)]
    pub production: f64,
    pub pressure: Option<f64>,
    pub temperature: Option<f64>,
    #[crudcrate(sortable, filterable)]
    pub record_date: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable, list_model=false)]
    pub created_at: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::wells::models::Entity",
        from = "Column::WellId",
        to = "crate::wells::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Wells,
}

impl Related<crate::wells::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wells.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
