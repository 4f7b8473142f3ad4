use super::models::{Well, router as crudrouter};
use super::services::{PlanVsActual, plan_vs_actual};
use crate::common::auth::Role;
use crate::common::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum_keycloak_auth::{PassthroughMode, layer::KeycloakAuthLayer};
use crudcrate::CRUDResource;
use sea_orm::DbErr;
use serde_json::{Value, json};
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

pub fn router(state: &AppState) -> OpenApiRouter {
    let mut mutating_router = crudrouter(&state.db.clone()).route(
        "/{id}/plan_vs_actual",
        get(get_well_plan_vs_actual).with_state(state.clone()),
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
            Well::RESOURCE_NAME_PLURAL
        );
    }

    mutating_router
}

/// Reconcile a well's drilling plan against its reported progress
#[utoipa::path(
    get,
    path = "/wells/{id}/plan_vs_actual",
    params(
        ("id" = Uuid, Path, description = "Well ID to reconcile")
    ),
    responses(
        (status = 200, description = "Merged plan/actual series with summary statistics", body = PlanVsActual),
        (status = 404, description = "Well not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "wells",
    summary = "Plan vs actual",
    description = "Merges the planned trajectory with the reported drilling progress day by day and computes variance, efficiency and summary statistics."
)]
pub async fn get_well_plan_vs_actual(
    Path(well_id): Path<Uuid>,
    State(app_state): State<AppState>,
) -> Result<Json<PlanVsActual>, (StatusCode, Json<Value>)> {
    match plan_vs_actual(&app_state.db, well_id).await {
        Ok(report) => Ok(Json(report)),
        Err(DbErr::RecordNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Well not found" })),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Database error: {e}") })),
        )),
    }
}
