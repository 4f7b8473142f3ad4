use super::models::{ActiveModel, Column, Entity, User, UserCreate, UserUpdate};
use crate::common::auth::Role;
use crate::common::errors::{BusinessError, DbErrorExt};
use crate::common::state::AppState;
use crate::provisioning::validator::user_email_valid;
use crate::{duplicate_resource, not_found, validation_error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum_keycloak_auth::{PassthroughMode, layer::KeycloakAuthLayer};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

pub fn router(state: &AppState) -> OpenApiRouter {
    let mut mutating_router = OpenApiRouter::new()
        .routes(routes!(create_user))
        .routes(routes!(get_all_users))
        .routes(routes!(get_one_user))
        .routes(routes!(update_user))
        .routes(routes!(delete_user))
        .with_state(state.clone());

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
        println!("Warning: Mutating routes of users router are not protected");
    }

    mutating_router
}

#[utoipa::path(
    post,
    path = "",
    request_body = UserCreate,
    responses(
        (status = 201, description = "User registered successfully", body = User),
        (status = 400, description = "Invalid email or password"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    ),
    operation_id = "create_user",
    summary = "Register a user",
    description = "Registers an account. The password is hashed with bcrypt before storage and never returned by any endpoint."
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> Result<(StatusCode, Json<User>), BusinessError> {
    let UserCreate {
        email,
        name,
        password,
        role,
    } = payload;

    user_email_valid(&email).map_err(|err| validation_error!("email", err.message()))?;
    if password.len() < 6 {
        return Err(validation_error!(
            "password",
            "User password must be at least 6 characters"
        ));
    }
    if name.trim().is_empty() {
        return Err(validation_error!("name", "User name must not be empty"));
    }

    let existing = Entity::find()
        .filter(Column::Email.eq(&email))
        .one(&state.db)
        .await
        .map_err(|e| e.to_business_error("user"))?;
    if existing.is_some() {
        return Err(duplicate_resource!("user", "email"));
    }

    let password_hash =
        bcrypt::hash(&password, bcrypt::DEFAULT_COST).map_err(|e| BusinessError::InternalError {
            message: format!("Password hashing failed: {e}"),
        })?;

    let created = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        name: Set(name),
        password_hash: Set(password_hash),
        role: Set(role.unwrap_or_default()),
        created_at: Set(Utc::now()),
        last_updated: Set(Utc::now()),
    }
    .insert(&state.db)
    .await
    .map_err(|e| e.to_business_error("user"))?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    get,
    path = "",
    responses(
        (status = 200, description = "All registered users", body = Vec<User>),
        (status = 500, description = "Internal server error")
    ),
    operation_id = "get_all_users",
    summary = "List users",
    description = "Returns every account, oldest first, without password material."
)]
pub async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, BusinessError> {
    let users = Entity::find()
        .order_by_asc(Column::CreatedAt)
        .all(&state.db)
        .await
        .map_err(|e| e.to_business_error("user"))?;

    Ok(Json(users.into_iter().map(User::from).collect()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "The requested user", body = User),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    operation_id = "get_one_user",
    summary = "Get a user",
    description = "Returns one account by ID, without password material."
)]
pub async fn get_one_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, BusinessError> {
    let user = Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(|e| e.to_business_error("user"))?
        .ok_or_else(|| not_found!("user", id))?;

    Ok(Json(user.into()))
}

#[utoipa::path(
    put,
    path = "/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, description = "Invalid email or password"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    ),
    operation_id = "update_user",
    summary = "Update a user",
    description = "Updates profile fields; a supplied password is re-hashed, an omitted one is kept."
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<User>, BusinessError> {
    let existing = Entity::find_by_id(id)
        .one(&state.db)
        .await
        .map_err(|e| e.to_business_error("user"))?
        .ok_or_else(|| not_found!("user", id))?;

    let mut user = existing.into_active_model();

    if let Some(email) = payload.email {
        user_email_valid(&email).map_err(|err| validation_error!("email", err.message()))?;
        let taken = Entity::find()
            .filter(Column::Email.eq(&email))
            .filter(Column::Id.ne(id))
            .one(&state.db)
            .await
            .map_err(|e| e.to_business_error("user"))?;
        if taken.is_some() {
            return Err(duplicate_resource!("user", "email"));
        }
        user.email = Set(email);
    }
    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(validation_error!("name", "User name must not be empty"));
        }
        user.name = Set(name);
    }
    if let Some(password) = payload.password {
        if password.len() < 6 {
            return Err(validation_error!(
                "password",
                "User password must be at least 6 characters"
            ));
        }
        let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST).map_err(|e| {
            BusinessError::InternalError {
                message: format!("Password hashing failed: {e}"),
            }
        })?;
        user.password_hash = Set(password_hash);
    }
    if let Some(role) = payload.role {
        user.role = Set(role);
    }
    user.last_updated = Set(Utc::now());

    let updated = user
        .update(&state.db)
        .await
        .map_err(|e| e.to_business_error("user"))?;

    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    operation_id = "delete_user",
    summary = "Delete a user",
    description = "Removes an account. Contracts and wells attributed to it keep their rows and block the delete at the database level."
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, BusinessError> {
    let result = Entity::delete_by_id(id)
        .exec(&state.db)
        .await
        .map_err(|e| e.to_business_error("user"))?;

    if result.rows_affected == 0 {
        return Err(not_found!("user", id));
    }

    Ok(StatusCode::NO_CONTENT)
}
