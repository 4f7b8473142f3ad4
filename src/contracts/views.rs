use super::models::{Contract, ContractCreate, ContractUpdate};
use crate::common::auth::Role;
use crate::common::errors::{BusinessError, DbErrorExt};
use crate::common::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, post, put};
use axum_keycloak_auth::{PassthroughMode, layer::KeycloakAuthLayer};
use crudcrate::{CRUDResource, crud_handlers};
use sea_orm::{EntityTrait, ModelTrait, PaginatorTrait};
use serde_json::{Value, json};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

crud_handlers!(Contract, ContractUpdate, ContractCreate);

pub fn router(state: &AppState) -> OpenApiRouter
where
    Contract: CRUDResource,
{
    // Reads come from the generated handlers. Writes are registered by hand
    // so date-window violations surface as 400s and deletion can refuse to
    // orphan fields.
    let mut mutating_router = OpenApiRouter::new()
        .routes(routes!(get_one_handler))
        .routes(routes!(get_all_handler))
        .with_state(state.db.clone())
        .route("/", post(create_contract).with_state(state.clone()))
        .route(
            "/{id}",
            put(update_contract)
                .delete(delete_contract)
                .with_state(state.clone()),
        );

    if let Some(instance) = state.keycloak_auth_instance.clone() {
        mutating_router = mutating_router.layer(
            KeycloakAuthLayer::<Role>::builder()
                .instance(instance)
                .passthrough_mode(PassthroughMode::Block)
                .persist_raw_claims(false)
                .expected_audiences(vec![String::from("account")])
                .required_roles(vec![Role::Administrator])
                .build(),
        );
    } else if !state.config.tests_running {
        println!(
            "Warning: Mutating routes of {} router are not protected",
            Contract::RESOURCE_NAME_PLURAL
        );
    }

    mutating_router
}

/// Create a contract after checking the validity window
#[utoipa::path(
    post,
    path = "/contracts",
    request_body = ContractCreate,
    responses(
        (status = 201, description = "Contract created successfully", body = Contract),
        (status = 400, description = "Validation failed, e.g. endDate not after startDate"),
        (status = 500, description = "Internal server error")
    ),
    tag = "contracts",
    summary = "Create a contract",
    description = "Creates a contract. The validity window must satisfy endDate > startDate."
)]
pub async fn create_contract(
    State(app_state): State<AppState>,
    Json(payload): Json<ContractCreate>,
) -> Result<(StatusCode, Json<Contract>), BusinessError> {
    let contract = Contract::create(&app_state.db, payload)
        .await
        .map_err(|e| e.to_business_error("contract"))?;

    Ok((StatusCode::CREATED, Json(contract)))
}

/// Update a contract, re-checking the validity window on the merged row
#[utoipa::path(
    put,
    path = "/contracts/{id}",
    params(
        ("id" = Uuid, Path, description = "Contract ID")
    ),
    request_body = ContractUpdate,
    responses(
        (status = 200, description = "Contract updated successfully", body = Contract),
        (status = 400, description = "Validation failed, e.g. endDate not after startDate"),
        (status = 404, description = "Contract not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "contracts",
    summary = "Update a contract",
    description = "Applies a partial update. Date changes are validated against the stored values they merge with."
)]
pub async fn update_contract(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ContractUpdate>,
) -> Result<Json<Contract>, BusinessError> {
    let contract = Contract::update(&app_state.db, id, payload)
        .await
        .map_err(|e| e.to_business_error("contract"))?;

    Ok(Json(contract))
}

/// Delete a contract that no longer owns fields
#[utoipa::path(
    delete,
    path = "/contracts/{id}",
    params(
        ("id" = Uuid, Path, description = "Contract ID")
    ),
    responses(
        (status = 204, description = "Contract deleted successfully"),
        (status = 400, description = "Contract still owns fields"),
        (status = 404, description = "Contract not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "contracts",
    summary = "Delete a contract",
    description = "Deletes a contract unless fields still reference it. Fields must be removed or reassigned first."
)]
pub async fn delete_contract(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    let db = &app_state.db;

    let contract = super::models::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Database error: {e}") })),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Contract not found" })),
        ))?;

    let field_count = contract
        .find_related(crate::fields::models::Entity)
        .count(db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": format!("Database error: {e}") })),
            )
        })?;

    if field_count > 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Cannot delete contract with associated fields/wells" })),
        ));
    }

    contract.delete(db).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Database error: {e}") })),
        )
    })?;

    Ok(StatusCode::NO_CONTENT)
}
