use chrono::{DateTime, Utc};
use crudcrate::EntityToModels;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "contract_activities")]
#[crudcrate(
    generate_router,
    api_struct = "ContractActivity",
    name_singular = "contract_activity",
    name_plural = "contract_activities",
    description = "Activity templates attached to a contract: the unit of work, its target value and the acceptable rate band used by reporting.",
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub contract_id: Uuid,
    #[sea_orm(column_type = "Text")]
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(fulltext)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text")]
    #[crudcrate(sortable, filterable)]
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub unit: String,
    pub target_value: Option<f64>,
    #[crudcrate(sortable, filterable)]
    pub priority: i32,
    #[crudcrate(filterable)]
    pub is_active: bool,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
    pub optimal_rate: Option<f64>,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable, list_model=false)]
    pub created_at: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::contracts::models::Entity",
        from = "Column::ContractId",
        to = "crate::contracts::models::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Contracts,
}

impl Related<crate::contracts::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contracts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
