use super::models::{DrillingData, DrillingDataCreate, DrillingDataUpdate};
use crate::common::auth::Role;
use crate::common::errors::{BusinessError, DbErrorExt};
use crate::common::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{post, put};
use axum_keycloak_auth::{PassthroughMode, layer::KeycloakAuthLayer};
use crudcrate::{CRUDResource, crud_handlers};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

crud_handlers!(DrillingData, DrillingDataUpdate, DrillingDataCreate);

pub fn router(state: &AppState) -> OpenApiRouter
where
    DrillingData: CRUDResource,
{
    // Create and update are registered by hand so range-rule violations
    // come back as 400s with the rule text.
    let mut mutating_router = OpenApiRouter::new()
        .routes(routes!(get_one_handler))
        .routes(routes!(get_all_handler))
        .routes(routes!(delete_one_handler))
        .routes(routes!(delete_many_handler))
        .with_state(state.db.clone())
        .route("/", post(create_drilling_data).with_state(state.clone()))
        .route("/{id}", put(update_drilling_data).with_state(state.clone()));

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
            DrillingData::RESOURCE_NAME_PLURAL
        );
    }

    mutating_router
}

/// Record one day of drilling progress after checking the range rules
#[utoipa::path(
    post,
    path = "/drilling_data",
    request_body = DrillingDataCreate,
    responses(
        (status = 201, description = "Drilling data created successfully", body = DrillingData),
        (status = 400, description = "Range rule violated"),
        (status = 409, description = "A progress row for this well and day already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "drilling_data",
    summary = "Create a drilling data row",
    description = "Creates one reported day. The day must be positive and the reached depth non-negative; a depth of zero is a legitimate report."
)]
pub async fn create_drilling_data(
    State(app_state): State<AppState>,
    Json(payload): Json<DrillingDataCreate>,
) -> Result<(StatusCode, Json<DrillingData>), BusinessError> {
    let row = DrillingData::create(&app_state.db, payload)
        .await
        .map_err(|e| e.to_business_error("drilling data"))?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// Update a drilling data row, re-checking the range rules on the merged row
#[utoipa::path(
    put,
    path = "/drilling_data/{id}",
    params(
        ("id" = Uuid, Path, description = "Drilling data ID")
    ),
    request_body = DrillingDataUpdate,
    responses(
        (status = 200, description = "Drilling data updated successfully", body = DrillingData),
        (status = 400, description = "Range rule violated"),
        (status = 404, description = "Drilling data not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "drilling_data",
    summary = "Update a drilling data row",
    description = "Applies a partial update. Range rules are validated against the values the patch merges with."
)]
pub async fn update_drilling_data(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DrillingDataUpdate>,
) -> Result<Json<DrillingData>, BusinessError> {
    let row = DrillingData::update(&app_state.db, id, payload)
        .await
        .map_err(|e| e.to_business_error("drilling data"))?;

    Ok(Json(row))
}
