use std::collections::HashSet;

use rstest::rstest;
use sea_orm::DbErr;
use serde_json::{Map, Value, json};

use super::order::{check_dependencies, dependencies};
use super::validator::{EntityKind, validate};

fn record(payload: Value) -> Map<String, Value> {
    payload.as_object().cloned().expect("payload must be an object")
}

fn valid_user() -> Value {
    json!({
        "id": "u-100",
        "email": "engineer@wellops.example",
        "name": "Field Engineer",
        "password": "$2b$12$abcdefghijklmnopqrstuv"
    })
}

fn valid_contract() -> Value {
    json!({
        "id": "c-100",
        "name": "Drilling Services 2024",
        "startDate": "2024-01-01",
        "endDate": "2024-12-31",
        "value": 1_500_000.0,
        "clientId": "cl-1",
        "userId": "u-1"
    })
}

fn valid_well() -> Value {
    json!({
        "id": "w-100",
        "name": "Pozo Aguila Norte A-1",
        "location": "Campo Aguila Norte",
        "userId": "u-1"
    })
}

fn valid_plan() -> Value {
    json!({
        "wellId": "w-100",
        "day": 1,
        "depthFrom": 0.0,
        "depthTo": 500.0,
        "plannedROP": 250.0,
        "plannedHours": 18.0
    })
}

fn valid_progress() -> Value {
    json!({
        "wellId": "w-100",
        "day": 1,
        "date": "2024-03-01",
        "depth": 480.0
    })
}

#[test]
fn accepts_complete_records() {
    assert!(validate(EntityKind::User, &record(valid_user())).is_ok());
    assert!(validate(EntityKind::Contract, &record(valid_contract())).is_ok());
    assert!(validate(EntityKind::Well, &record(valid_well())).is_ok());
    assert!(validate(EntityKind::DrillingPlan, &record(valid_plan())).is_ok());
    assert!(validate(EntityKind::DrillingData, &record(valid_progress())).is_ok());
}

#[test]
fn missing_fields_are_cited_in_declaration_order() {
    let payload = json!({ "id": "c-100", "name": "Drilling Services 2024" });
    let err = validate(EntityKind::Contract, &record(payload)).unwrap_err();
    assert_eq!(
        err.message(),
        "Contract validation failed. Missing fields: startDate, endDate, value, clientId, userId"
    );
}

#[test]
fn presence_check_runs_before_every_other_rule() {
    // endDate is absent and startDate is garbage; the missing field wins.
    let payload = json!({
        "id": "c-100",
        "name": "Drilling Services 2024",
        "startDate": "not a date",
        "value": 10.0,
        "clientId": "cl-1",
        "userId": "u-1"
    });
    let err = validate(EntityKind::Contract, &record(payload)).unwrap_err();
    assert_eq!(
        err.message(),
        "Contract validation failed. Missing fields: endDate"
    );
}

#[test]
fn empty_strings_and_nulls_count_as_missing() {
    let mut payload = record(valid_user());
    payload.insert("password".into(), json!(""));
    payload.insert("name".into(), Value::Null);
    let err = validate(EntityKind::User, &payload).unwrap_err();
    assert_eq!(
        err.message(),
        "User validation failed. Missing fields: name, password"
    );
}

#[test]
fn zero_day_is_range_checked_not_reported_missing() {
    let mut payload = record(valid_plan());
    payload.insert("day".into(), json!(0));
    let err = validate(EntityKind::DrillingPlan, &payload).unwrap_err();
    assert_eq!(err.message(), "DrillingPlan day must be greater than 0");
}

#[test]
fn zero_depth_progress_is_accepted() {
    let mut payload = record(valid_progress());
    payload.insert("depth".into(), json!(0.0));
    assert!(validate(EntityKind::DrillingData, &payload).is_ok());
}

#[rstest]
#[case::user_role(
    EntityKind::User,
    valid_user(),
    "role",
    "superadmin",
    "User role must be one of: admin, user, engineer, operator, supervisor, analyst, viewer"
)]
#[case::contract_status(
    EntityKind::Contract,
    valid_contract(),
    "status",
    "paused",
    "Contract status must be one of: active, completed, cancelled, suspended"
)]
#[case::contract_type(
    EntityKind::Contract,
    valid_contract(),
    "contractType",
    "exploration",
    "Contract type must be one of: drilling, completion, workover"
)]
#[case::well_type(
    EntityKind::Well,
    valid_well(),
    "wellType",
    "diagonal",
    "Well type must be one of: vertical, horizontal, direccional"
)]
#[case::well_operation(
    EntityKind::Well,
    valid_well(),
    "operation",
    "fracking",
    "Well operation must be one of: drilling, completion, testing, production"
)]
#[case::progress_status(
    EntityKind::DrillingData,
    valid_progress(),
    "status",
    "idle",
    "DrillingData status must be one of: drilling, tripping, maintenance, waiting"
)]
#[case::progress_shift(
    EntityKind::DrillingData,
    valid_progress(),
    "shift",
    "evening",
    "DrillingData shift must be one of: day, night"
)]
fn rejects_values_outside_the_enum_domain(
    #[case] kind: EntityKind,
    #[case] payload: Value,
    #[case] field: &str,
    #[case] value: &str,
    #[case] expected: &str,
) {
    let mut payload = record(payload);
    payload.insert(field.into(), json!(value));
    let err = validate(kind, &payload).unwrap_err();
    assert_eq!(err.message(), expected);
}

#[test]
fn accepts_enum_values_inside_the_domain() {
    let mut payload = record(valid_well());
    payload.insert("wellType".into(), json!("horizontal"));
    payload.insert("operation".into(), json!("drilling"));
    assert!(validate(EntityKind::Well, &payload).is_ok());
}

#[test]
fn null_enum_fields_are_skipped() {
    let mut payload = record(valid_well());
    payload.insert("wellType".into(), Value::Null);
    assert!(validate(EntityKind::Well, &payload).is_ok());
}

#[test]
fn contract_dates_equal_is_rejected_next_day_accepted() {
    let mut payload = record(valid_contract());
    payload.insert("startDate".into(), json!("2024-01-01"));
    payload.insert("endDate".into(), json!("2024-01-01"));
    let err = validate(EntityKind::Contract, &payload).unwrap_err();
    assert_eq!(err.message(), "Contract endDate must be after startDate");

    payload.insert("endDate".into(), json!("2024-01-02"));
    assert!(validate(EntityKind::Contract, &payload).is_ok());
}

#[test]
fn contract_dates_accept_full_timestamps() {
    let mut payload = record(valid_contract());
    payload.insert("startDate".into(), json!("2024-01-01T08:00:00Z"));
    payload.insert("endDate".into(), json!("2024-01-01T09:00:00Z"));
    assert!(validate(EntityKind::Contract, &payload).is_ok());
}

#[test]
fn plan_depth_boundary_is_strict() {
    let mut payload = record(valid_plan());
    payload.insert("depthFrom".into(), json!(500.0));
    payload.insert("depthTo".into(), json!(500.0));
    let err = validate(EntityKind::DrillingPlan, &payload).unwrap_err();
    assert_eq!(
        err.message(),
        "DrillingPlan depthTo must be greater than depthFrom"
    );

    payload.insert("depthTo".into(), json!(501.0));
    assert!(validate(EntityKind::DrillingPlan, &payload).is_ok());
}

#[test]
fn negative_plan_rates_are_rejected() {
    let mut payload = record(valid_plan());
    payload.insert("plannedROP".into(), json!(-5.0));
    let err = validate(EntityKind::DrillingPlan, &payload).unwrap_err();
    assert_eq!(
        err.message(),
        "DrillingPlan plannedROP and plannedHours must be positive numbers"
    );
}

#[test]
fn zero_plan_rate_reads_as_missing() {
    // Zero is falsy for plannedROP; only the surveyed depth fields get the
    // range-check exemption.
    let mut payload = record(valid_plan());
    payload.insert("plannedROP".into(), json!(0));
    let err = validate(EntityKind::DrillingPlan, &payload).unwrap_err();
    assert_eq!(
        err.message(),
        "DrillingPlan validation failed. Missing fields: plannedROP"
    );
}

#[test]
fn negative_progress_depth_is_rejected() {
    let mut payload = record(valid_progress());
    payload.insert("depth".into(), json!(-1.0));
    let err = validate(EntityKind::DrillingData, &payload).unwrap_err();
    assert_eq!(err.message(), "DrillingData depth must be non-negative");
}

#[test]
fn email_needs_an_at_sign() {
    let mut payload = record(valid_user());
    payload.insert("email".into(), json!("engineer.example.com"));
    let err = validate(EntityKind::User, &payload).unwrap_err();
    assert_eq!(err.message(), "User email must be valid email address");
}

#[rstest]
#[case::production(
    EntityKind::ProductionData,
    json!({ "wellId": "w-100" }),
    "ProductionData validation failed. Missing fields: production, recordDate"
)]
#[case::activity(
    EntityKind::ContractActivity,
    json!({ "name": "Perforación", "unit": "m" }),
    "ContractActivity validation failed. Missing fields: contractId, category"
)]
#[case::report(
    EntityKind::Report,
    json!({}),
    "Report validation failed. Missing fields: userId, title"
)]
fn reporting_records_follow_the_same_presence_rules(
    #[case] kind: EntityKind,
    #[case] payload: Value,
    #[case] expected: &str,
) {
    let err = validate(kind, &record(payload)).unwrap_err();
    assert_eq!(err.message(), expected);
}

#[test]
fn validation_errors_carry_a_database_framing() {
    let err = validate(EntityKind::Client, &record(json!({ "id": "cl-1" }))).unwrap_err();
    let db_err: DbErr = err.into();
    assert_eq!(
        db_err.to_string(),
        "Custom Error: Validation failed: Client validation failed. Missing fields: name"
    );
}

#[test]
fn root_types_have_no_prerequisites() {
    assert!(dependencies(EntityKind::User).is_empty());
    assert!(dependencies(EntityKind::Client).is_empty());
    assert!(check_dependencies(EntityKind::User, &HashSet::new()).is_ok());
}

#[test]
fn field_requires_a_contract() {
    let err = check_dependencies(EntityKind::Field, &HashSet::new()).unwrap_err();
    assert_eq!(
        err.message(),
        "Cannot insert Field. Missing dependencies: Contract"
    );

    let available = HashSet::from([EntityKind::Contract]);
    assert!(check_dependencies(EntityKind::Field, &available).is_ok());
}

#[test]
fn satisfied_prerequisites_are_not_cited() {
    let available = HashSet::from([EntityKind::Field]);
    let err = check_dependencies(EntityKind::Well, &available).unwrap_err();
    assert_eq!(
        err.message(),
        "Cannot insert Well. Missing dependencies: User"
    );
}

#[test]
fn contract_needs_both_user_and_client() {
    let err = check_dependencies(EntityKind::Contract, &HashSet::new()).unwrap_err();
    assert_eq!(
        err.message(),
        "Cannot insert Contract. Missing dependencies: User, Client"
    );
}
