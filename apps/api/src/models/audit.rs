use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted audit. Rows are append-only; the newest `audit_date` wins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileAuditRow {
    pub id: Uuid,
    pub athlete_id: Uuid,
    pub completeness_score: i32,
    pub seo_score: i32,
    pub social_score: i32,
    pub content_score: i32,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub missing_fields: Vec<String>,
    pub audit_data: Value,
    pub audit_date: DateTime<Utc>,
}
