use crate::provisioning::validator::plan_numbers_valid;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels, traits::MergeIntoActiveModel};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, entity::prelude::*,
};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "drilling_plans")]
#[crudcrate(
    api_struct = "DrillingPlan",
    name_singular = "drilling_plan",
    name_plural = "drilling_plans",
    description = "Planned drilling trajectory, one row per well day: the depth interval to cover and the expected rate of penetration and rotating hours.",
    fn_create = create_one_drilling_plan,
    fn_update = update_one_drilling_plan,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub well_id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub day: i32,
    pub depth_from: f64,
    pub depth_to: f64,
    pub planned_rop: f64,
    pub planned_hours: f64,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable)]
    pub formation: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(filterable)]
    pub hole_section: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub operation: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub mud_type: Option<String>,
    pub mud_density: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bit_type: Option<String>,
    pub bit_size: Option<f64>,
    pub flow_rate: Option<f64>,
    pub rotary_speed: Option<f64>,
    pub weight_on_bit: Option<f64>,
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

async fn create_one_drilling_plan(
    db: &DatabaseConnection,
    create_data: DrillingPlanCreate,
) -> Result<DrillingPlan, DbErr> {
    plan_numbers_valid(
        create_data.day,
        create_data.depth_from,
        create_data.depth_to,
        create_data.planned_rop,
        create_data.planned_hours,
    )?;

    let active_model: ActiveModel = create_data.into();
    let inserted = active_model.insert(db).await?;

    DrillingPlan::get_one(db, inserted.id).await
}

async fn update_one_drilling_plan(
    db: &DatabaseConnection,
    id: Uuid,
    update_data: DrillingPlanUpdate,
) -> Result<DrillingPlan, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Drilling plan not found".to_string()))?;

    // Range rules apply to the merged row, not just the supplied fields.
    let day = update_data.day.flatten().unwrap_or(existing.day);
    let depth_from = update_data.depth_from.flatten().unwrap_or(existing.depth_from);
    let depth_to = update_data.depth_to.flatten().unwrap_or(existing.depth_to);
    let planned_rop = update_data
        .planned_rop
        .flatten()
        .unwrap_or(existing.planned_rop);
    let planned_hours = update_data
        .planned_hours
        .flatten()
        .unwrap_or(existing.planned_hours);
    plan_numbers_valid(day, depth_from, depth_to, planned_rop, planned_hours)?;

    let updated = update_data
        .merge_into_activemodel(existing.into_active_model())?
        .update(db)
        .await?;

    DrillingPlan::get_one(db, updated.id).await
}
