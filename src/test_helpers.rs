/// Shared test helper functions for creating test objects across the test suite
///
/// This module provides standardized builders for creating test entities that follow
/// the object hierarchy: Users → Clients → Contracts → Fields → Wells
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

/// Extract response body as JSON for testing
pub async fn extract_response_body(response: axum::response::Response) -> (StatusCode, Value) {
    use axum::body::to_bytes;

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: Value =
        serde_json::from_slice(&bytes).unwrap_or_else(|_| json!({"error": "Invalid JSON response"}));
    (status, body)
}

async fn post_resource(
    app: &axum::Router,
    uri: &str,
    payload: &Value,
    what: &str,
) -> Result<(String, Value), String> {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = extract_response_body(response).await;

    if status == StatusCode::CREATED {
        let id = body["id"].as_str().unwrap().to_string();
        Ok((id, body))
    } else {
        Err(format!("Failed to create {what}: Status {status}, Body: {body}"))
    }
}

/// Create a test user with default parameters
pub async fn create_test_user(app: &axum::Router) -> Result<(String, Value), String> {
    create_test_user_with_params(
        app,
        &format!("test-user-{}@wellops.example", Uuid::new_v4()),
        "Test User",
        "engineer",
    )
    .await
}

/// Create a test user with customizable parameters
pub async fn create_test_user_with_params(
    app: &axum::Router,
    email: &str,
    name: &str,
    role: &str,
) -> Result<(String, Value), String> {
    let user_data = json!({
        "email": email,
        "name": name,
        "password": "test-password-2024",
        "role": role
    });

    post_resource(app, "/api/users", &user_data, "user").await
}

/// Create a test client with default parameters
pub async fn create_test_client(app: &axum::Router) -> Result<(String, Value), String> {
    create_test_client_with_params(
        app,
        &format!("Test Client {}", Uuid::new_v4()),
        Some("Test contact created by helper"),
    )
    .await
}

/// Create a test client with customizable parameters
pub async fn create_test_client_with_params(
    app: &axum::Router,
    name: &str,
    contact_name: Option<&str>,
) -> Result<(String, Value), String> {
    let mut client_data = json!({
        "name": name
    });

    if let Some(contact) = contact_name {
        client_data["contact_name"] = json!(contact);
    }

    post_resource(app, "/api/clients", &client_data, "client").await
}

/// Create a test contract with default parameters
pub async fn create_test_contract(
    app: &axum::Router,
    client_id: &str,
    user_id: &str,
) -> Result<(String, Value), String> {
    create_test_contract_with_params(
        app,
        &format!("Test Contract {}", Uuid::new_v4()),
        "2024-01-01T00:00:00Z",
        "2024-12-31T00:00:00Z",
        client_id,
        user_id,
    )
    .await
}

/// Create a test contract with customizable parameters
pub async fn create_test_contract_with_params(
    app: &axum::Router,
    name: &str,
    start_date: &str,
    end_date: &str,
    client_id: &str,
    user_id: &str,
) -> Result<(String, Value), String> {
    let contract_data = json!({
        "name": name,
        "start_date": start_date,
        "end_date": end_date,
        "value": 1_000_000.0,
        "status": "active",
        "client_id": client_id,
        "user_id": user_id
    });

    post_resource(app, "/api/contracts", &contract_data, "contract").await
}

/// Create a test field with default parameters
pub async fn create_test_field(
    app: &axum::Router,
    contract_id: &str,
) -> Result<(String, Value), String> {
    create_test_field_with_params(
        app,
        &format!("Test Field {}", Uuid::new_v4()),
        "Llanos Orientales",
        contract_id,
    )
    .await
}

/// Create a test field with customizable parameters
pub async fn create_test_field_with_params(
    app: &axum::Router,
    name: &str,
    location: &str,
    contract_id: &str,
) -> Result<(String, Value), String> {
    let field_data = json!({
        "name": name,
        "location": location,
        "contract_id": contract_id
    });

    post_resource(app, "/api/fields", &field_data, "field").await
}

/// Create a test well with default parameters
pub async fn create_test_well(
    app: &axum::Router,
    user_id: &str,
    field_id: Option<&str>,
) -> Result<(String, Value), String> {
    create_test_well_with_params(
        app,
        &format!("Test Well {}", Uuid::new_v4()),
        "Llanos Orientales",
        user_id,
        field_id,
    )
    .await
}

/// Create a test well with customizable parameters
pub async fn create_test_well_with_params(
    app: &axum::Router,
    name: &str,
    location: &str,
    user_id: &str,
    field_id: Option<&str>,
) -> Result<(String, Value), String> {
    let mut well_data = json!({
        "name": name,
        "location": location,
        "user_id": user_id
    });

    if let Some(field) = field_id {
        well_data["field_id"] = json!(field);
    }

    post_resource(app, "/api/wells", &well_data, "well").await
}

/// Create a complete object hierarchy: User → Client → Contract → Field → Well
pub async fn create_full_object_hierarchy(
    app: &axum::Router,
) -> Result<FullObjectHierarchy, String> {
    // Create user
    let (user_id, user) = create_test_user(app).await?;

    // Create client
    let (client_id, client) = create_test_client(app).await?;

    // Create contract
    let (contract_id, contract) = create_test_contract(app, &client_id, &user_id).await?;

    // Create field
    let (field_id, field) = create_test_field(app, &contract_id).await?;

    // Create well
    let (well_id, well) = create_test_well(app, &user_id, Some(&field_id)).await?;

    Ok(FullObjectHierarchy {
        user_id,
        user,
        client_id,
        client,
        contract_id,
        contract,
        field_id,
        field,
        well_id,
        well,
    })
}

/// Represents a complete object hierarchy for testing
pub struct FullObjectHierarchy {
    pub user_id: String,
    pub user: Value,
    pub client_id: String,
    pub client: Value,
    pub contract_id: String,
    pub contract: Value,
    pub field_id: String,
    pub field: Value,
    pub well_id: String,
    pub well: Value,
}
