//! Drilling plan-vs-actual reconciliation.
//!
//! Merges the planned trajectory (drilling plan rows) with reported progress
//! (drilling data rows) into one day-indexed series plus summary statistics.
//! Pure function of the stored rows: repeated calls over the same data
//! produce identical output.

use super::models::Well;
use super::plans::models as plans;
use super::plans::models::DrillingPlan;
use super::progress::models as progress;
use super::progress::models::DrillingData;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

/// One merged day of the plan and actual series. Either side may be absent.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MergedDay {
    pub day: i32,
    pub plan_depth: Option<f64>,
    pub actual_depth: Option<f64>,
    #[serde(rename = "planROP")]
    pub plan_rop: Option<f64>,
    #[serde(rename = "actualROP")]
    pub actual_rop: Option<f64>,
    pub plan_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub formation: Option<String>,
    pub hole_section: Option<String>,
    pub operation: Option<String>,
    /// Signed depth deviation in percent; positive means ahead of plan.
    pub variance: Option<f64>,
    /// Actual ROP as a percentage of the planned ROP.
    pub efficiency: Option<f64>,
}

/// Aggregates over the full, unmerged series.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_plan_days: i64,
    pub total_actual_days: i64,
    pub plan_target_depth: f64,
    pub actual_final_depth: f64,
    #[serde(rename = "avgPlanROP")]
    pub avg_plan_rop: f64,
    #[serde(rename = "avgActualROP")]
    pub avg_actual_rop: f64,
    pub overall_efficiency: f64,
    pub days_ahead_behind: i64,
}

/// Response payload for the plan-vs-actual route. The `combined` and `stats`
/// field names are fixed wire names consumed by the dashboard.
#[derive(Debug, Serialize, ToSchema)]
pub struct PlanVsActual {
    pub well: Well,
    pub plan: Vec<DrillingPlan>,
    pub actual: Vec<DrillingData>,
    pub combined: Vec<MergedDay>,
    pub stats: SummaryStats,
}

/// Load a well's plan and progress series and reconcile them day by day.
///
/// The only error condition besides database failures is an unknown well;
/// empty series reconcile to an empty `combined` list and zeroed stats.
pub async fn plan_vs_actual(
    db: &impl ConnectionTrait,
    well_id: Uuid,
) -> Result<PlanVsActual, DbErr> {
    let well = super::models::Entity::find_by_id(well_id)
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Well not found".to_string()))?;

    let plan_rows = plans::Entity::find()
        .filter(plans::Column::WellId.eq(well_id))
        .order_by_asc(plans::Column::Day)
        .all(db)
        .await?;
    let actual_rows = progress::Entity::find()
        .filter(progress::Column::WellId.eq(well_id))
        .order_by_asc(progress::Column::Day)
        .all(db)
        .await?;

    let combined = merge_series(&plan_rows, &actual_rows);
    let stats = summarize(&plan_rows, &actual_rows);

    Ok(PlanVsActual {
        well: well.into(),
        plan: plan_rows.into_iter().map(Into::into).collect(),
        actual: actual_rows.into_iter().map(Into::into).collect(),
        combined,
        stats,
    })
}

fn merge_series(plan_rows: &[plans::Model], actual_rows: &[progress::Model]) -> Vec<MergedDay> {
    let max_day = plan_rows
        .iter()
        .map(|row| row.day)
        .chain(actual_rows.iter().map(|row| row.day))
        .max()
        .unwrap_or(0);

    // Lookup maps by day; (well_id, day) is unique so each day has at most
    // one row per series.
    let plan_by_day: HashMap<i32, &plans::Model> =
        plan_rows.iter().map(|row| (row.day, row)).collect();
    let actual_by_day: HashMap<i32, &progress::Model> =
        actual_rows.iter().map(|row| (row.day, row)).collect();

    (1..=max_day)
        .map(|day| {
            merge_day(
                day,
                plan_by_day.get(&day).copied(),
                actual_by_day.get(&day).copied(),
            )
        })
        .collect()
}

fn merge_day(
    day: i32,
    plan: Option<&plans::Model>,
    actual: Option<&progress::Model>,
) -> MergedDay {
    let plan_depth = plan.map(|row| row.depth_to);
    let actual_depth = actual.map(|row| row.depth);
    let plan_rop = plan.map(|row| row.planned_rop);
    let actual_rop = actual.and_then(|row| row.rop);

    let variance = match (actual_depth, plan_depth) {
        (Some(actual), Some(plan)) if plan != 0.0 => Some((actual - plan) / plan * 100.0),
        _ => None,
    };
    let efficiency = match (actual_rop, plan_rop) {
        (Some(actual), Some(plan)) if plan != 0.0 => Some(actual / plan * 100.0),
        _ => None,
    };

    // Descriptive columns prefer the planned value over the reported one.
    MergedDay {
        day,
        plan_depth,
        actual_depth,
        plan_rop,
        actual_rop,
        plan_hours: plan.map(|row| row.planned_hours),
        actual_hours: actual.and_then(|row| row.drilling_time),
        formation: plan
            .and_then(|row| row.formation.clone())
            .or_else(|| actual.and_then(|row| row.formation.clone())),
        hole_section: plan
            .and_then(|row| row.hole_section.clone())
            .or_else(|| actual.and_then(|row| row.hole_section.clone())),
        operation: plan
            .and_then(|row| row.operation.clone())
            .or_else(|| actual.and_then(|row| row.operation.clone())),
        variance,
        efficiency,
    }
}

fn summarize(plan_rows: &[plans::Model], actual_rows: &[progress::Model]) -> SummaryStats {
    let total_plan_days = plan_rows.len() as i64;
    let total_actual_days = actual_rows.len() as i64;

    let plan_target_depth = plan_rows
        .iter()
        .map(|row| row.depth_to)
        .fold(0.0_f64, f64::max);
    let actual_final_depth = actual_rows
        .iter()
        .map(|row| row.depth)
        .fold(0.0_f64, f64::max);

    // Rows without a reported ROP still count towards the average.
    let avg_plan_rop = if plan_rows.is_empty() {
        0.0
    } else {
        plan_rows.iter().map(|row| row.planned_rop).sum::<f64>() / plan_rows.len() as f64
    };
    let avg_actual_rop = if actual_rows.is_empty() {
        0.0
    } else {
        actual_rows
            .iter()
            .map(|row| row.rop.unwrap_or(0.0))
            .sum::<f64>()
            / actual_rows.len() as f64
    };

    let overall_efficiency = if avg_plan_rop > 0.0 {
        avg_actual_rop / avg_plan_rop * 100.0
    } else {
        0.0
    };

    SummaryStats {
        total_plan_days,
        total_actual_days,
        plan_target_depth,
        actual_final_depth,
        avg_plan_rop,
        avg_actual_rop,
        overall_efficiency,
        days_ahead_behind: total_actual_days - total_plan_days,
    }
}
