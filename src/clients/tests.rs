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

#[tokio::test]
async fn client_crud_roundtrip() {
    let app = setup_test_app().await;

    let client_data = json!({
        "name": format!("Petróleo Nacional {}", Uuid::new_v4()),
        "email": "contacto@petroleonacional.example",
        "phone": "+57 1 234 5678",
        "address": "Carrera 7 #32-16, Bogotá",
        "contact_name": "Roberto Martínez",
        "contact_email": "roberto.martinez@petroleonacional.example"
    });

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/clients")
                .header("content-type", "application/json")
                .body(Body::from(client_data.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::CREATED, "Create failed: {body:?}");
    assert_eq!(body["contact_name"], json!("Roberto Martínez"));
    let id = body["id"].as_str().expect("Client ID missing").to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/clients/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, fetched) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], body["name"]);

    let update = json!({ "contact_name": "María González" });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/api/clients/{id}"))
                .header("content-type", "application/json")
                .body(Body::from(update.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, updated) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK, "Update failed: {updated:?}");
    assert_eq!(updated["contact_name"], json!("María González"));
}

#[tokio::test]
async fn client_list_returns_created_rows() {
    let app = setup_test_app().await;

    let name = format!("Energía Verde {}", Uuid::new_v4());
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/clients")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "name": name }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::CREATED, "Create failed: {body:?}");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/clients")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().expect("Expected a JSON array");
    assert!(
        listed.iter().any(|client| client["name"] == json!(name)),
        "Created client missing from list"
    );
}

#[tokio::test]
async fn duplicate_client_names_are_rejected() {
    let app = setup_test_app().await;

    let payload = json!({ "name": format!("Campos del Sur {}", Uuid::new_v4()) });

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/clients")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = extract_response_body(response).await;
    assert_eq!(status, StatusCode::CREATED, "First create failed: {body:?}");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/clients")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, _) = extract_response_body(response).await;
    assert!(
        status.is_client_error() || status.is_server_error(),
        "Duplicate name must not succeed"
    );
}
