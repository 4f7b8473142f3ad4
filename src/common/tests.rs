use super::models::{HealthCheck, UIConfiguration};

#[test]
fn health_check_serializes_status() {
    let check = HealthCheck {
        status: "ok".to_string(),
    };
    let json = serde_json::to_string(&check).unwrap();
    assert_eq!(json, r#"{"status":"ok"}"#);
}

#[test]
fn ui_configuration_uses_wire_field_names() {
    let config = UIConfiguration {
        client_id: "wellops-ui".to_string(),
        realm: "wellops".to_string(),
        url: "http://localhost:8080".to_string(),
        deployment: "local".to_string(),
    };

    let json = serde_json::to_value(&config).unwrap();
    // The UI reads camelCase clientId; the rest stay as-is
    assert_eq!(json["clientId"], "wellops-ui");
    assert_eq!(json["realm"], "wellops");
    assert_eq!(json["deployment"], "local");
}

#[test]
fn ui_configuration_default_is_empty() {
    let config = UIConfiguration::default();
    assert!(config.client_id.is_empty());
    assert!(config.realm.is_empty());
    assert!(config.url.is_empty());
}
