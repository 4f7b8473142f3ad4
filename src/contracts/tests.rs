use crate::config::test_helpers::setup_test_app;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

async fn extract_response_body(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body: Value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        let raw_text = String::from_utf8_lossy(&bytes);
        json!({"error": raw_text})
    });
    (status, body)
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    payload: Option<&Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match payload {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    extract_response_body(response).await
}

async fn create_user_and_client(app: &axum::Router) -> (String, String) {
    let (status, user) = send(
        app,
        "POST",
        "/api/users",
        Some(&json!({
            "email": format!("supervisor-{}@wellops.example", Uuid::new_v4()),
            "name": "Ing. Carlos Mendoza",
            "password": "perforar2024",
            "role": "supervisor"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "user setup failed: {user:?}");

    let (status, client) = send(
        app,
        "POST",
        "/api/clients",
        Some(&json!({
            "name": format!("Ecopetrol Regional {}", Uuid::new_v4()),
            "contact_name": "Laura Jiménez"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "client setup failed: {client:?}");

    (
        user["id"].as_str().unwrap().to_string(),
        client["id"].as_str().unwrap().to_string(),
    )
}

fn contract_payload(user_id: &str, client_id: &str) -> Value {
    json!({
        "name": format!("Perforación Campo Tibú {}", Uuid::new_v4()),
        "description": "Campaña de perforación de desarrollo, bloque Catatumbo",
        "contract_number": format!("CT-{}", Uuid::new_v4()),
        "start_date": "2024-01-01T00:00:00Z",
        "end_date": "2024-12-31T00:00:00Z",
        "value": 12_500_000.0,
        "currency": "USD",
        "status": "active",
        "contract_type": "drilling",
        "target_depth": 3800.0,
        "expected_days": 45,
        "client_id": client_id,
        "user_id": user_id
    })
}

#[tokio::test]
async fn contract_create_and_fetch_include_related_names() {
    let app = setup_test_app().await;
    let (user_id, client_id) = create_user_and_client(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/contracts",
        Some(&contract_payload(&user_id, &client_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body:?}");
    assert_eq!(body["status"], "active");
    assert_eq!(body["contract_type"], "drilling");
    assert_eq!(body["user_name"], "Ing. Carlos Mendoza");
    assert!(
        body["client_name"]
            .as_str()
            .unwrap()
            .starts_with("Ecopetrol Regional")
    );
    assert_eq!(body["fields"], json!([]));

    let id = body["id"].as_str().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/api/contracts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], body["id"]);
    assert_eq!(fetched["user_name"], "Ing. Carlos Mendoza");

    let (status, list) = send(&app, "GET", "/api/contracts", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = list.as_array().expect("list response is an array");
    let row = rows
        .iter()
        .find(|c| c["id"] == body["id"])
        .expect("created contract is listed");
    // Related names are resolved on single fetches only.
    assert!(row.get("client_name").is_none());
}

#[tokio::test]
async fn rejects_windows_that_do_not_move_forward() {
    let app = setup_test_app().await;
    let (user_id, client_id) = create_user_and_client(&app).await;

    let mut same_day = contract_payload(&user_id, &client_id);
    same_day["end_date"] = json!("2024-01-01T00:00:00Z");
    let (status, body) = send(&app, "POST", "/api/contracts", Some(&same_day)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "equal dates accepted: {body:?}");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Contract endDate must be after startDate")
    );

    let mut reversed = contract_payload(&user_id, &client_id);
    reversed["end_date"] = json!("2023-06-30T00:00:00Z");
    let (status, body) = send(&app, "POST", "/api/contracts", Some(&reversed)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "reversed dates accepted: {body:?}");
}

#[tokio::test]
async fn update_window_checks_the_merged_row() {
    let app = setup_test_app().await;
    let (user_id, client_id) = create_user_and_client(&app).await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/contracts",
        Some(&contract_payload(&user_id, &client_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created:?}");
    let id = created["id"].as_str().unwrap().to_string();

    // Moving end_date behind the stored start_date must fail even though the
    // patch alone carries only one of the two dates.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/contracts/{id}"),
        Some(&json!({ "end_date": "2023-12-31T00:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "merged window accepted: {body:?}");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Contract endDate must be after startDate")
    );

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/contracts/{id}"),
        Some(&json!({ "start_date": "2023-06-01T00:00:00Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "valid patch rejected: {updated:?}");
    assert!(
        updated["start_date"]
            .as_str()
            .unwrap()
            .starts_with("2023-06-01")
    );
}

#[tokio::test]
async fn duplicate_contract_numbers_conflict() {
    let app = setup_test_app().await;
    let (user_id, client_id) = create_user_and_client(&app).await;

    let mut first = contract_payload(&user_id, &client_id);
    let shared_number = format!("CT-2024-{}", Uuid::new_v4());
    first["contract_number"] = json!(shared_number);
    let (status, body) = send(&app, "POST", "/api/contracts", Some(&first)).await;
    assert_eq!(status, StatusCode::CREATED, "first create failed: {body:?}");

    let mut second = contract_payload(&user_id, &client_id);
    second["contract_number"] = json!(shared_number);
    let (status, body) = send(&app, "POST", "/api/contracts", Some(&second)).await;
    assert_eq!(status, StatusCode::CONFLICT, "duplicate accepted: {body:?}");
    assert_eq!(body["error"]["code"], "DUPLICATE_RESOURCE");
}

#[tokio::test]
async fn deleting_a_contract_with_fields_is_refused_until_fields_go() {
    let app = setup_test_app().await;
    let (user_id, client_id) = create_user_and_client(&app).await;

    let (status, contract) = send(
        &app,
        "POST",
        "/api/contracts",
        Some(&contract_payload(&user_id, &client_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {contract:?}");
    let contract_id = contract["id"].as_str().unwrap().to_string();

    let (status, field) = send(
        &app,
        "POST",
        "/api/fields",
        Some(&json!({
            "name": format!("Bloque Catatumbo {}", Uuid::new_v4()),
            "location": "Norte de Santander",
            "contract_id": contract_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "field setup failed: {field:?}");
    let field_id = field["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/contracts/{contract_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Cannot delete contract with associated fields/wells"
    );

    let (status, _) = send(&app, "DELETE", &format!("/api/fields/{field_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/contracts/{contract_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/api/contracts/{contract_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_missing_contract_returns_not_found() {
    let app = setup_test_app().await;

    let (status, body) = send(
        &app,
        "DELETE",
        &format!("/api/contracts/{}", Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Contract not found");
}
