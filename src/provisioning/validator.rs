//! Write-path validation for provisioning payloads
//!
//! Candidate records arrive as wire-format JSON maps (camelCase keys). Checks
//! run in a fixed order per entity type and stop at the first failure:
//! required-field presence, then enum membership, then the type's numeric and
//! date rules. The range rules are also exposed as typed functions so the
//! HTTP create/update paths enforce the same messages without building a map.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::DbErr;
use serde_json::{Map, Value};

/// Allowed values for `User.role`.
pub const USER_ROLES: &[&str] = &[
    "admin",
    "user",
    "engineer",
    "operator",
    "supervisor",
    "analyst",
    "viewer",
];

/// Allowed values for `Contract.status`.
pub const CONTRACT_STATUSES: &[&str] = &["active", "completed", "cancelled", "suspended"];

/// Allowed values for `Contract.contractType`.
pub const CONTRACT_TYPES: &[&str] = &["drilling", "completion", "workover"];

/// Allowed values for `Well.wellType`.
pub const WELL_TYPES: &[&str] = &["vertical", "horizontal", "direccional"];

/// Allowed values for `Well.operation`.
pub const WELL_OPERATIONS: &[&str] = &["drilling", "completion", "testing", "production"];

/// Allowed values for `DrillingData.status`.
pub const DRILLING_STATUSES: &[&str] = &["drilling", "tripping", "maintenance", "waiting"];

/// Allowed values for `DrillingData.shift`.
pub const WORK_SHIFTS: &[&str] = &["day", "night"];

const CONTRACT_DATES_RULE: &str = "Contract endDate must be after startDate";
const PLAN_DAY_RULE: &str = "DrillingPlan day must be greater than 0";
const PLAN_DEPTH_RULE: &str = "DrillingPlan depthTo must be greater than depthFrom";
const PLAN_POSITIVE_RULE: &str = "DrillingPlan plannedROP and plannedHours must be positive numbers";
const PROGRESS_DAY_RULE: &str = "DrillingData day must be greater than 0";
const PROGRESS_DEPTH_RULE: &str = "DrillingData depth must be non-negative";
const USER_EMAIL_RULE: &str = "User email must be valid email address";

// Numeric fields where zero is a legitimate value. Presence only requires a
// non-null entry; the range rules below do the real checking.
const RANGE_CHECKED: &[&str] = &["day", "depthFrom", "depthTo", "depth"];

/// Entity types that move through the provisioning pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Client,
    Contract,
    Field,
    Well,
    DrillingPlan,
    DrillingData,
    ProductionData,
    ContractActivity,
    Report,
}

impl EntityKind {
    pub const ALL: [Self; 10] = [
        Self::User,
        Self::Client,
        Self::Contract,
        Self::Field,
        Self::Well,
        Self::DrillingPlan,
        Self::DrillingData,
        Self::ProductionData,
        Self::ContractActivity,
        Self::Report,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Client => "Client",
            Self::Contract => "Contract",
            Self::Field => "Field",
            Self::Well => "Well",
            Self::DrillingPlan => "DrillingPlan",
            Self::DrillingData => "DrillingData",
            Self::ProductionData => "ProductionData",
            Self::ContractActivity => "ContractActivity",
            Self::Report => "Report",
        }
    }

    /// Wire-format keys that must be present on a candidate record, in the
    /// order they are reported when missing.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            Self::User => &["id", "email", "name", "password"],
            Self::Client => &["id", "name"],
            Self::Contract => &[
                "id",
                "name",
                "startDate",
                "endDate",
                "value",
                "clientId",
                "userId",
            ],
            Self::Field => &["id", "name", "location", "contractId"],
            Self::Well => &["id", "name", "location", "userId"],
            Self::DrillingPlan => &[
                "wellId",
                "day",
                "depthFrom",
                "depthTo",
                "plannedROP",
                "plannedHours",
            ],
            Self::DrillingData => &["wellId", "day", "date", "depth"],
            Self::ProductionData => &["wellId", "production", "recordDate"],
            Self::ContractActivity => &["contractId", "name", "category", "unit"],
            Self::Report => &["userId", "title"],
        }
    }

    // (wire key, label used in the failure message, allowed values)
    fn enum_checks(self) -> &'static [(&'static str, &'static str, &'static [&'static str])] {
        match self {
            Self::User => &[("role", "role", USER_ROLES)],
            Self::Contract => &[
                ("status", "status", CONTRACT_STATUSES),
                ("contractType", "type", CONTRACT_TYPES),
            ],
            Self::Well => &[
                ("wellType", "type", WELL_TYPES),
                ("operation", "operation", WELL_OPERATIONS),
            ],
            Self::DrillingData => &[
                ("status", "status", DRILLING_STATUSES),
                ("shift", "shift", WORK_SHIFTS),
            ],
            _ => &[],
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejection produced by the validator. The message is the wire-facing rule
/// text, without any transport framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for DbErr {
    fn from(err: ValidationError) -> Self {
        DbErr::Custom(format!("Validation failed: {err}"))
    }
}

/// Validate a candidate record before it reaches storage.
///
/// Pure and fail-fast: checks run in a fixed order (presence, enums, range
/// and date rules) and the first violation is returned alone, never an
/// aggregate.
pub fn validate(kind: EntityKind, record: &Map<String, Value>) -> Result<(), ValidationError> {
    let missing: Vec<&str> = kind
        .required_fields()
        .iter()
        .copied()
        .filter(|field| is_missing(field, record.get(*field)))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::new(format!(
            "{kind} validation failed. Missing fields: {}",
            missing.join(", ")
        )));
    }

    for (field, label, allowed) in kind.enum_checks() {
        let Some(value) = record.get(*field) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        if !value.as_str().is_some_and(|v| allowed.contains(&v)) {
            return Err(ValidationError::new(format!(
                "{kind} {label} must be one of: {}",
                allowed.join(", ")
            )));
        }
    }

    match kind {
        EntityKind::User => user_rules(record),
        EntityKind::Contract => contract_rules(record),
        EntityKind::DrillingPlan => plan_rules(record),
        EntityKind::DrillingData => progress_rules(record),
        _ => Ok(()),
    }
}

/// Contract validity window must be a real interval.
pub fn contract_dates_valid(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if end_date <= start_date {
        return Err(ValidationError::new(CONTRACT_DATES_RULE));
    }
    Ok(())
}

/// Range rules for a drilling plan row, shared with the typed create/update
/// paths.
pub fn plan_numbers_valid(
    day: i32,
    depth_from: f64,
    depth_to: f64,
    planned_rop: f64,
    planned_hours: f64,
) -> Result<(), ValidationError> {
    if day <= 0 {
        return Err(ValidationError::new(PLAN_DAY_RULE));
    }
    if depth_to <= depth_from {
        return Err(ValidationError::new(PLAN_DEPTH_RULE));
    }
    if planned_rop <= 0.0 || planned_hours <= 0.0 {
        return Err(ValidationError::new(PLAN_POSITIVE_RULE));
    }
    Ok(())
}

/// Range rules for a daily progress row, shared with the typed create/update
/// paths.
pub fn progress_numbers_valid(day: i32, depth: f64) -> Result<(), ValidationError> {
    if day <= 0 {
        return Err(ValidationError::new(PROGRESS_DAY_RULE));
    }
    if depth < 0.0 {
        return Err(ValidationError::new(PROGRESS_DEPTH_RULE));
    }
    Ok(())
}

/// Minimal address shape check, shared with user registration.
pub fn user_email_valid(email: &str) -> Result<(), ValidationError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(ValidationError::new(USER_EMAIL_RULE))
    }
}

fn user_rules(record: &Map<String, Value>) -> Result<(), ValidationError> {
    let email = record.get("email").and_then(Value::as_str).unwrap_or_default();
    user_email_valid(email)
}

fn contract_rules(record: &Map<String, Value>) -> Result<(), ValidationError> {
    match (
        record.get("startDate").and_then(parse_record_date),
        record.get("endDate").and_then(parse_record_date),
    ) {
        (Some(start), Some(end)) => contract_dates_valid(start, end),
        // An unreadable date can never satisfy the ordering rule.
        _ => Err(ValidationError::new(CONTRACT_DATES_RULE)),
    }
}

fn plan_rules(record: &Map<String, Value>) -> Result<(), ValidationError> {
    let Some(day) = int_field(record, "day") else {
        return Err(ValidationError::new(PLAN_DAY_RULE));
    };
    let (Some(depth_from), Some(depth_to)) = (
        float_field(record, "depthFrom"),
        float_field(record, "depthTo"),
    ) else {
        return Err(ValidationError::new(PLAN_DEPTH_RULE));
    };
    let (Some(rop), Some(hours)) = (
        float_field(record, "plannedROP"),
        float_field(record, "plannedHours"),
    ) else {
        return Err(ValidationError::new(PLAN_POSITIVE_RULE));
    };
    plan_numbers_valid(day, depth_from, depth_to, rop, hours)
}

fn progress_rules(record: &Map<String, Value>) -> Result<(), ValidationError> {
    let Some(day) = int_field(record, "day") else {
        return Err(ValidationError::new(PROGRESS_DAY_RULE));
    };
    let Some(depth) = float_field(record, "depth") else {
        return Err(ValidationError::new(PROGRESS_DEPTH_RULE));
    };
    progress_numbers_valid(day, depth)
}

fn is_missing(field: &str, value: Option<&Value>) -> bool {
    let Some(value) = value else {
        return true;
    };
    if RANGE_CHECKED.contains(&field) {
        return value.is_null();
    }
    match value {
        Value::Null => true,
        Value::Bool(truthy) => !truthy,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn int_field(record: &Map<String, Value>, field: &str) -> Option<i32> {
    record
        .get(field)
        .and_then(Value::as_i64)
        .and_then(|value| i32::try_from(value).ok())
}

fn float_field(record: &Map<String, Value>, field: &str) -> Option<f64> {
    record.get(field).and_then(Value::as_f64)
}

// Provisioning payloads carry either full RFC 3339 timestamps or bare dates.
fn parse_record_date(value: &Value) -> Option<DateTime<Utc>> {
    let raw = value.as_str()?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
