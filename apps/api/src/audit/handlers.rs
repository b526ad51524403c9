//! Axum route handlers for the Audit API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::audit::report::AuditReport;
use crate::audit::snapshot::ProfileSnapshot;
use crate::errors::AppError;
use crate::models::audit::ProfileAuditRow;
use crate::state::AppState;

const DEFAULT_HISTORY_LIMIT: i64 = 20;
const MAX_HISTORY_LIMIT: i64 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RunAuditResponse {
    pub audit: ProfileAuditRow,
    /// Change in completeness since the previous stored audit, if any.
    pub completeness_delta: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<i64>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/audits/preview
///
/// Scores a caller-supplied snapshot without persisting anything.
pub async fn handle_preview_audit(
    State(state): State<AppState>,
    Json(snapshot): Json<ProfileSnapshot>,
) -> Json<AuditReport> {
    Json(state.engine.assemble(&snapshot))
}

/// POST /api/v1/athletes/:athlete_id/audits
///
/// Full recomputation: gather snapshot → score → persist.
pub async fn handle_run_audit(
    State(state): State<AppState>,
    Path(athlete_id): Path<Uuid>,
) -> Result<Json<RunAuditResponse>, AppError> {
    let snapshot = state.snapshots.load(athlete_id).await?;
    let report = state.engine.assemble(&snapshot);

    // A failed read only loses the delta.
    let previous = match state.store.load_latest(athlete_id).await {
        Ok(previous) => previous,
        Err(e) => {
            warn!("Could not read previous audit for athlete {athlete_id}: {e}");
            None
        }
    };
    let audit = state.store.save(athlete_id, &report).await?;
    let completeness_delta = previous.map(|p| audit.completeness_score - p.completeness_score);

    info!(
        "Audit {} for athlete {athlete_id} ({} tier): completeness={} content={} seo={} social={}",
        audit.id,
        snapshot.subscription_tier.as_str(),
        audit.completeness_score,
        audit.content_score,
        audit.seo_score,
        audit.social_score
    );

    Ok(Json(RunAuditResponse {
        audit,
        completeness_delta,
    }))
}

/// GET /api/v1/athletes/:athlete_id/audits/latest
pub async fn handle_latest_audit(
    State(state): State<AppState>,
    Path(athlete_id): Path<Uuid>,
) -> Result<Json<ProfileAuditRow>, AppError> {
    let audit = state
        .store
        .load_latest(athlete_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No audit found for athlete {athlete_id}")))?;
    Ok(Json(audit))
}

/// GET /api/v1/athletes/:athlete_id/audits?limit=N
pub async fn handle_audit_history(
    State(state): State<AppState>,
    Path(athlete_id): Path<Uuid>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<ProfileAuditRow>>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    if !(1..=MAX_HISTORY_LIMIT).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_HISTORY_LIMIT}"
        )));
    }
    Ok(Json(state.store.history(athlete_id, limit).await?))
}
