use crate::provisioning::validator::progress_numbers_valid;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels, traits::MergeIntoActiveModel};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, entity::prelude::*,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "drilling_status")]
#[serde(rename_all = "snake_case")]
pub enum DrillingStatus {
    #[sea_orm(string_value = "drilling")]
    Drilling,
    #[sea_orm(string_value = "tripping")]
    Tripping,
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
    #[sea_orm(string_value = "waiting")]
    Waiting,
}

#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "work_shift")]
#[serde(rename_all = "snake_case")]
pub enum WorkShift {
    #[sea_orm(string_value = "day")]
    Day,
    #[sea_orm(string_value = "night")]
    Night,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "drilling_data")]
#[crudcrate(
    api_struct = "DrillingData",
    name_singular = "drilling_data",
    name_plural = "drilling_data",
    description = "Reported drilling progress, one row per well day: the depth reached plus operational readings from the rig.",
    fn_create = create_one_drilling_data,
    fn_update = update_one_drilling_data,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub well_id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub day: i32,
    #[crudcrate(sortable, filterable)]
    pub date: DateTime<Utc>,
    pub depth: f64,
    pub rop: Option<f64>,
    pub drilling_time: Option<f64>,
    #[crudcrate(sortable, filterable, enum_field)]
    pub status: Option<DrillingStatus>,
    #[crudcrate(sortable, filterable, enum_field)]
    pub shift: Option<WorkShift>,
    #[sea_orm(column_type = "Text", nullable)]
    pub crew: Option<String>,
    pub mud_density: Option<f64>,
    pub pressure: Option<f64>,
    pub temperature: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable)]
    pub formation: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable)]
    pub hole_section: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub operation: Option<String>,
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

async fn create_one_drilling_data(
    db: &DatabaseConnection,
    create_data: DrillingDataCreate,
) -> Result<DrillingData, DbErr> {
    progress_numbers_valid(create_data.day, create_data.depth)?;

    let active_model: ActiveModel = create_data.into();
    let inserted = active_model.insert(db).await?;

    DrillingData::get_one(db, inserted.id).await
}

async fn update_one_drilling_data(
    db: &DatabaseConnection,
    id: Uuid,
    update_data: DrillingDataUpdate,
) -> Result<DrillingData, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Drilling data not found".to_string()))?;

    // Range rules apply to the merged row, not just the supplied fields.
    let day = update_data.day.flatten().unwrap_or(existing.day);
    let depth = update_data.depth.flatten().unwrap_or(existing.depth);
    progress_numbers_valid(day, depth)?;

    let updated = update_data
        .merge_into_activemodel(existing.into_active_model())?
        .update(db)
        .await?;

    DrillingData::get_one(db, updated.id).await
}
