use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::audit::report::AuditReport;
use crate::models::audit::ProfileAuditRow;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("could not encode audit data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Where finished audits live. Saving never mutates an earlier audit.
#[async_trait]
pub trait AuditStore: Send + Sync {
    async fn save(&self, athlete_id: Uuid, report: &AuditReport)
        -> Result<ProfileAuditRow, StoreError>;

    async fn load_latest(&self, athlete_id: Uuid) -> Result<Option<ProfileAuditRow>, StoreError>;

    /// Newest first.
    async fn history(&self, athlete_id: Uuid, limit: i64)
        -> Result<Vec<ProfileAuditRow>, StoreError>;
}

#[derive(Clone)]
pub struct PgAuditStore {
    pool: PgPool,
}

impl PgAuditStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditStore for PgAuditStore {
    async fn save(
        &self,
        athlete_id: Uuid,
        report: &AuditReport,
    ) -> Result<ProfileAuditRow, StoreError> {
        let audit_data = serde_json::to_value(&report.audit_data)?;

        // Append-only: every audit is a new row
        let row = sqlx::query_as::<_, ProfileAuditRow>(
            r#"
            INSERT INTO profile_audits
                (id, athlete_id, completeness_score, seo_score, social_score, content_score,
                 recommendations, strengths, missing_fields, audit_data)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(athlete_id)
        .bind(report.completeness_score)
        .bind(report.seo_score)
        .bind(report.social_score)
        .bind(report.content_score)
        .bind(&report.recommendations)
        .bind(&report.strengths)
        .bind(&report.missing_fields)
        .bind(audit_data)
        .fetch_one(&self.pool)
        .await?;

        info!("Stored audit {} for athlete {athlete_id}", row.id);
        Ok(row)
    }

    async fn load_latest(&self, athlete_id: Uuid) -> Result<Option<ProfileAuditRow>, StoreError> {
        Ok(sqlx::query_as::<_, ProfileAuditRow>(
            "SELECT * FROM profile_audits WHERE athlete_id = $1 ORDER BY audit_date DESC LIMIT 1",
        )
        .bind(athlete_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn history(
        &self,
        athlete_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ProfileAuditRow>, StoreError> {
        Ok(sqlx::query_as::<_, ProfileAuditRow>(
            "SELECT * FROM profile_audits WHERE athlete_id = $1 ORDER BY audit_date DESC LIMIT $2",
        )
        .bind(athlete_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
}
