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
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    extract_response_body(response).await
}

async fn create_user(app: &axum::Router) -> String {
    let (status, user) = send(
        app,
        "POST",
        "/api/users",
        Some(&json!({
            "email": format!("operaciones-{}@wellops.example", Uuid::new_v4()),
            "name": "Ricardo Salazar",
            "password": "taladro2024",
            "role": "engineer"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "user setup failed: {user:?}");
    user["id"].as_str().unwrap().to_string()
}

async fn create_well(app: &axum::Router) -> String {
    let user_id = create_user(app).await;
    let (status, well) = send(
        app,
        "POST",
        "/api/wells",
        Some(&json!({
            "name": format!("Pozo Capachos {}", Uuid::new_v4()),
            "location": "Tame, Arauca",
            "user_id": user_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "well setup failed: {well:?}");
    well["id"].as_str().unwrap().to_string()
}

async fn post_plan_day(app: &axum::Router, payload: &Value) {
    let (status, body) = send(app, "POST", "/api/drilling_plans", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "plan setup failed: {body:?}");
}

async fn post_actual_day(app: &axum::Router, payload: &Value) {
    let (status, body) = send(app, "POST", "/api/drilling_data", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "progress setup failed: {body:?}");
}

#[tokio::test]
async fn plan_vs_actual_merges_by_day() {
    let app = setup_test_app().await;
    let well_id = create_well(&app).await;

    post_plan_day(
        &app,
        &json!({
            "well_id": well_id,
            "day": 1,
            "depth_from": 0.0,
            "depth_to": 500.0,
            "planned_rop": 250.0,
            "planned_hours": 18.0,
            "formation": "Carbonera",
            "hole_section": "12 1/4\""
        }),
    )
    .await;
    post_plan_day(
        &app,
        &json!({
            "well_id": well_id,
            "day": 2,
            "depth_from": 500.0,
            "depth_to": 950.0,
            "planned_rop": 225.0,
            "planned_hours": 20.0
        }),
    )
    .await;
    post_actual_day(
        &app,
        &json!({
            "well_id": well_id,
            "day": 1,
            "date": "2024-03-01T06:00:00Z",
            "depth": 480.0,
            "rop": 240.0,
            "drilling_time": 17.5,
            "formation": "Mirador"
        }),
    )
    .await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/wells/{well_id}/plan_vs_actual"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "reconciliation failed: {body:?}");

    assert_eq!(body["well"]["id"], json!(well_id));
    assert_eq!(body["plan"].as_array().unwrap().len(), 2);
    assert_eq!(body["actual"].as_array().unwrap().len(), 1);

    let combined = body["combined"].as_array().unwrap();
    assert_eq!(combined.len(), 2);

    let day_one = &combined[0];
    assert_eq!(day_one["day"], 1);
    assert_eq!(day_one["planDepth"], 500.0);
    assert_eq!(day_one["actualDepth"], 480.0);
    assert_eq!(day_one["planROP"], 250.0);
    assert_eq!(day_one["actualROP"], 240.0);
    assert_eq!(day_one["planHours"], 18.0);
    assert_eq!(day_one["actualHours"], 17.5);
    // The planned formation wins over the one reported from the rig floor.
    assert_eq!(day_one["formation"], "Carbonera");
    assert_eq!(day_one["holeSection"], "12 1/4\"");
    assert_eq!(day_one["variance"], -4.0);
    assert_eq!(day_one["efficiency"], 96.0);

    let day_two = &combined[1];
    assert_eq!(day_two["day"], 2);
    assert_eq!(day_two["planDepth"], 950.0);
    assert_eq!(day_two["planROP"], 225.0);
    assert_eq!(day_two["planHours"], 20.0);
    assert_eq!(day_two["actualDepth"], Value::Null);
    assert_eq!(day_two["actualROP"], Value::Null);
    assert_eq!(day_two["actualHours"], Value::Null);
    assert_eq!(day_two["variance"], Value::Null);
    assert_eq!(day_two["efficiency"], Value::Null);

    let stats = &body["stats"];
    assert_eq!(stats["totalPlanDays"], 2);
    assert_eq!(stats["totalActualDays"], 1);
    assert_eq!(stats["planTargetDepth"], 950.0);
    assert_eq!(stats["actualFinalDepth"], 480.0);
    assert_eq!(stats["avgPlanROP"], 237.5);
    assert_eq!(stats["avgActualROP"], 240.0);
    assert_eq!(stats["overallEfficiency"], json!(240.0 / 237.5 * 100.0));
    assert_eq!(stats["daysAheadBehind"], -1);
}

#[tokio::test]
async fn plan_only_wells_read_as_behind() {
    let app = setup_test_app().await;
    let well_id = create_well(&app).await;

    for day in 1..=5 {
        post_plan_day(
            &app,
            &json!({
                "well_id": well_id,
                "day": day,
                "depth_from": f64::from(day - 1) * 450.0,
                "depth_to": f64::from(day) * 450.0,
                "planned_rop": 250.0,
                "planned_hours": 18.0
            }),
        )
        .await;
    }

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/wells/{well_id}/plan_vs_actual"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "reconciliation failed: {body:?}");

    let combined = body["combined"].as_array().unwrap();
    assert_eq!(combined.len(), 5);
    assert!(
        combined
            .iter()
            .all(|day| day["actualDepth"] == Value::Null && day["variance"] == Value::Null)
    );

    let stats = &body["stats"];
    assert_eq!(stats["totalPlanDays"], 5);
    assert_eq!(stats["totalActualDays"], 0);
    assert_eq!(stats["planTargetDepth"], 2250.0);
    assert_eq!(stats["actualFinalDepth"], 0.0);
    assert_eq!(stats["avgActualROP"], 0.0);
    assert_eq!(stats["overallEfficiency"], 0.0);
    assert_eq!(stats["daysAheadBehind"], -5);
}

#[tokio::test]
async fn reconciliation_is_idempotent() {
    let app = setup_test_app().await;
    let well_id = create_well(&app).await;

    post_plan_day(
        &app,
        &json!({
            "well_id": well_id,
            "day": 1,
            "depth_from": 0.0,
            "depth_to": 420.0,
            "planned_rop": 210.0,
            "planned_hours": 19.0
        }),
    )
    .await;
    post_actual_day(
        &app,
        &json!({
            "well_id": well_id,
            "day": 1,
            "date": "2024-04-10T06:00:00Z",
            "depth": 433.0,
            "rop": 217.0,
            "drilling_time": 19.5
        }),
    )
    .await;

    let uri = format!("/api/wells/{well_id}/plan_vs_actual");
    let (first_status, first_body) = send(&app, "GET", &uri, None).await;
    let (second_status, second_body) = send(&app, "GET", &uri, None).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first_body, second_body);
}

#[tokio::test]
async fn missing_wells_return_not_found() {
    let app = setup_test_app().await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/wells/{}/plan_vs_actual", Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Well not found");
}

#[tokio::test]
async fn empty_series_reconcile_to_zero_stats() {
    let app = setup_test_app().await;
    let well_id = create_well(&app).await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/wells/{well_id}/plan_vs_actual"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "reconciliation failed: {body:?}");

    assert_eq!(body["combined"], json!([]));

    let stats = &body["stats"];
    assert_eq!(stats["totalPlanDays"], 0);
    assert_eq!(stats["totalActualDays"], 0);
    assert_eq!(stats["planTargetDepth"], 0.0);
    assert_eq!(stats["actualFinalDepth"], 0.0);
    assert_eq!(stats["avgPlanROP"], 0.0);
    assert_eq!(stats["avgActualROP"], 0.0);
    assert_eq!(stats["overallEfficiency"], 0.0);
    assert_eq!(stats["daysAheadBehind"], 0);
}

#[tokio::test]
async fn well_type_rejects_labels_outside_the_catalogue() {
    let app = setup_test_app().await;
    let user_id = create_user(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/wells",
        Some(&json!({
            "name": format!("Pozo Cusiana {}", Uuid::new_v4()),
            "location": "Tauramena, Casanare",
            "user_id": user_id,
            "well_type": "diagonal"
        })),
    )
    .await;
    assert!(status.is_client_error(), "off-catalogue label got through");

    let (status, body) = send(
        &app,
        "POST",
        "/api/wells",
        Some(&json!({
            "name": format!("Pozo Cusiana {}", Uuid::new_v4()),
            "location": "Tauramena, Casanare",
            "user_id": user_id,
            "well_type": "direccional",
            "operation": "drilling"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body:?}");
    assert_eq!(body["well_type"], "direccional");
}
