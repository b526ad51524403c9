//! Snapshot gathering: loads the profile row and its related counts.
//!
//! The counts are independent reads and run concurrently. A failed count is
//! logged and read as zero so one broken collection cannot block an audit.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::audit::snapshot::{ProfileSnapshot, RelatedCounts};
use crate::errors::AppError;
use crate::models::athlete::AthleteRow;

#[derive(Debug, Error)]
#[error("failed to count {collection}: {source}")]
pub struct DataFetchError {
    pub collection: &'static str,
    #[source]
    pub source: sqlx::Error,
}

#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn load(&self, athlete_id: Uuid) -> Result<ProfileSnapshot, AppError>;
}

const PHOTO_COUNT_SQL: &str = "SELECT COUNT(*) FROM athlete_photos WHERE athlete_id = $1";
const VIDEO_COUNT_SQL: &str = "SELECT COUNT(*) FROM athlete_videos WHERE athlete_id = $1";
const AWARD_COUNT_SQL: &str = "SELECT COUNT(*) FROM athlete_awards WHERE athlete_id = $1";
const TEAM_COUNT_SQL: &str = "SELECT COUNT(*) FROM athlete_teams WHERE athlete_id = $1";
const REVIEW_COUNT_SQL: &str = "SELECT COUNT(*) FROM athlete_reviews WHERE athlete_id = $1";
const VERIFIED_REVIEW_COUNT_SQL: &str =
    "SELECT COUNT(*) FROM athlete_reviews WHERE athlete_id = $1 AND is_verified";
const UPCOMING_EVENT_COUNT_SQL: &str =
    "SELECT COUNT(*) FROM athlete_schedule WHERE athlete_id = $1 AND event_date >= $2";

pub struct PgSnapshotSource {
    pool: PgPool,
}

impl PgSnapshotSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn gather(&self, athlete_id: Uuid) -> Result<ProfileSnapshot, AppError> {
        let athlete = sqlx::query_as::<_, AthleteRow>("SELECT * FROM athletes WHERE id = $1")
            .bind(athlete_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Athlete {athlete_id} not found")))?;

        let today = Utc::now().date_naive();
        let (photos, videos, awards, teams, reviews, verified, upcoming) = tokio::join!(
            self.count("photos", PHOTO_COUNT_SQL, athlete_id),
            self.count("videos", VIDEO_COUNT_SQL, athlete_id),
            self.count("awards", AWARD_COUNT_SQL, athlete_id),
            self.count("teams", TEAM_COUNT_SQL, athlete_id),
            self.count("reviews", REVIEW_COUNT_SQL, athlete_id),
            self.count("verified reviews", VERIFIED_REVIEW_COUNT_SQL, athlete_id),
            self.count_upcoming(athlete_id, today),
        );

        let counts = RelatedCounts {
            photo_count: or_zero(photos, athlete_id),
            video_count: or_zero(videos, athlete_id),
            award_count: or_zero(awards, athlete_id),
            team_count: or_zero(teams, athlete_id),
            total_reviews: or_zero(reviews, athlete_id),
            verified_review_count: or_zero(verified, athlete_id),
            upcoming_event_count: or_zero(upcoming, athlete_id),
        };
        debug!("Gathered counts for athlete {athlete_id}: {counts:?}");

        Ok(athlete.into_snapshot(counts))
    }

    async fn count(
        &self,
        collection: &'static str,
        sql: &'static str,
        athlete_id: Uuid,
    ) -> Result<i64, DataFetchError> {
        sqlx::query_scalar::<_, i64>(sql)
            .bind(athlete_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|source| DataFetchError { collection, source })
    }

    async fn count_upcoming(
        &self,
        athlete_id: Uuid,
        today: NaiveDate,
    ) -> Result<i64, DataFetchError> {
        sqlx::query_scalar::<_, i64>(UPCOMING_EVENT_COUNT_SQL)
            .bind(athlete_id)
            .bind(today)
            .fetch_one(&self.pool)
            .await
            .map_err(|source| DataFetchError {
                collection: "upcoming events",
                source,
            })
    }
}

#[async_trait]
impl SnapshotSource for PgSnapshotSource {
    async fn load(&self, athlete_id: Uuid) -> Result<ProfileSnapshot, AppError> {
        self.gather(athlete_id).await
    }
}

/// Bounds the whole gather of any inner source by one deadline.
pub struct TimedSnapshotSource<S> {
    inner: S,
    timeout: Duration,
}

impl<S: SnapshotSource> TimedSnapshotSource<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<S: SnapshotSource> SnapshotSource for TimedSnapshotSource<S> {
    async fn load(&self, athlete_id: Uuid) -> Result<ProfileSnapshot, AppError> {
        tokio::time::timeout(self.timeout, self.inner.load(athlete_id))
            .await
            .map_err(|_| {
                AppError::Timeout(format!(
                    "Gathering profile data for athlete {athlete_id} exceeded {}s",
                    self.timeout.as_secs()
                ))
            })?
    }
}

/// Degrades a failed or out-of-range count to zero.
fn or_zero(result: Result<i64, DataFetchError>, athlete_id: Uuid) -> u32 {
    match result {
        Ok(n) => u32::try_from(n).unwrap_or(if n < 0 { 0 } else { u32::MAX }),
        Err(e) => {
            warn!("{e} (athlete {athlete_id}); scoring it as 0");
            0
        }
    }
}
