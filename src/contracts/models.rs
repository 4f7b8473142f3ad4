use crate::provisioning::validator::contract_dates_valid;
use chrono::{DateTime, Utc};
use crudcrate::{CRUDResource, EntityToModels, traits::MergeIntoActiveModel};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    entity::prelude::*,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "contract_status")]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "suspended")]
    Suspended,
}

#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, ToSchema, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "contract_type")]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    #[sea_orm(string_value = "drilling")]
    Drilling,
    #[sea_orm(string_value = "completion")]
    Completion,
    #[sea_orm(string_value = "workover")]
    Workover,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, EntityToModels)]
#[sea_orm(table_name = "contracts")]
#[crudcrate(
    api_struct = "Contract",
    name_singular = "contract",
    name_plural = "contracts",
    description = "Drilling contracts agreed between a client and a responsible user. The validity window must satisfy endDate > startDate on every write.",
    fn_get_one = get_one_contract,
    fn_create = create_one_contract,
    fn_update = update_one_contract,
)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[crudcrate(primary_key, update_model = false, create_model = false, on_create = Uuid::new_v4())]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    #[crudcrate(sortable, filterable, fulltext)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    #[crudcrate(fulltext)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable, unique)]
    #[crudcrate(sortable, filterable)]
    pub contract_number: Option<String>,
    #[crudcrate(sortable, filterable)]
    pub start_date: DateTime<Utc>,
    #[crudcrate(sortable, filterable)]
    pub end_date: DateTime<Utc>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    #[crudcrate(sortable, filterable)]
    pub value: Decimal,
    #[sea_orm(column_type = "Text", nullable)]
    pub currency: Option<String>,
    #[crudcrate(sortable, filterable, enum_field)]
    pub status: ContractStatus,
    #[crudcrate(sortable, filterable, enum_field)]
    pub contract_type: Option<ContractType>,
    #[crudcrate(sortable, filterable)]
    pub target_depth: Option<f64>,
    #[crudcrate(sortable, filterable)]
    pub expected_days: Option<i32>,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))", nullable)]
    pub daily_rate: Option<Decimal>,
    #[crudcrate(sortable, filterable)]
    pub client_id: Uuid,
    #[crudcrate(sortable, filterable)]
    pub user_id: Uuid,
    #[crudcrate(update_model = false, create_model = false, on_create = chrono::Utc::now(), sortable, list_model=false)]
    pub created_at: DateTime<Utc>,
    #[crudcrate(update_model = false, create_model = false, on_update = chrono::Utc::now(), on_create = chrono::Utc::now(), sortable)]
    pub last_updated: DateTime<Utc>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, list_model = false, create_model = false, update_model = false)]
    pub client_name: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, list_model = false, create_model = false, update_model = false)]
    pub user_name: Option<String>,
    #[sea_orm(ignore)]
    #[crudcrate(non_db_attr = true, default = None, list_model = false, create_model = false, update_model = false)]
    pub fields: Option<Vec<crate::fields::models::Field>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::clients::models::Entity",
        from = "Column::ClientId",
        to = "crate::clients::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Clients,
    #[sea_orm(
        belongs_to = "crate::users::models::Entity",
        from = "Column::UserId",
        to = "crate::users::models::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Users,
    #[sea_orm(has_many = "crate::fields::models::Entity")]
    Fields,
    #[sea_orm(has_many = "crate::contracts::activities::models::Entity")]
    Activities,
}

impl Related<crate::clients::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clients.def()
    }
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

impl Related<crate::contracts::activities::models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Activities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Custom `get_one` that resolves the client and user names and loads the
/// owned fields.
async fn get_one_contract(db: &DatabaseConnection, id: Uuid) -> Result<Contract, DbErr> {
    let model = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Contract not found".to_string()))?;

    let client = crate::clients::models::Entity::find_by_id(model.client_id)
        .one(db)
        .await?;
    let user = crate::users::models::Entity::find_by_id(model.user_id)
        .one(db)
        .await?;
    let field_models = model
        .find_related(crate::fields::models::Entity)
        .all(db)
        .await?;

    let mut contract: Contract = model.into();
    contract.client_name = client.map(|c| c.name);
    contract.user_name = user.map(|u| u.name);
    contract.fields = Some(field_models.into_iter().map(Into::into).collect());

    Ok(contract)
}

async fn create_one_contract(
    db: &DatabaseConnection,
    create_data: ContractCreate,
) -> Result<Contract, DbErr> {
    contract_dates_valid(create_data.start_date, create_data.end_date)?;

    let active_model: ActiveModel = create_data.into();
    let inserted = active_model.insert(db).await?;

    Contract::get_one(db, inserted.id).await
}

async fn update_one_contract(
    db: &DatabaseConnection,
    id: Uuid,
    update_data: ContractUpdate,
) -> Result<Contract, DbErr> {
    let existing = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Contract not found".to_string()))?;

    // The window rule holds for the merged row, not just the patch.
    let start_date = update_data.start_date.flatten().unwrap_or(existing.start_date);
    let end_date = update_data.end_date.flatten().unwrap_or(existing.end_date);
    contract_dates_valid(start_date, end_date)?;

    let updated = update_data
        .merge_into_activemodel(existing.into_active_model())?
        .update(db)
        .await?;

    Contract::get_one(db, updated.id).await
}
