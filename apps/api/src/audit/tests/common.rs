use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::audit::gathering::SnapshotSource;
use crate::audit::snapshot::{ProfileFields, ProfileSnapshot, RelatedCounts, SubscriptionTier};
use crate::audit::store::{AuditStore, StoreError};
use crate::audit::{AuditEngine, AuditReport, StandardTierPolicy};
use crate::errors::AppError;
use crate::models::audit::ProfileAuditRow;
use crate::state::AppState;

pub(super) fn engine() -> AuditEngine {
    AuditEngine::new(Arc::new(StandardTierPolicy))
}

/// Only name and sport filled in, nothing attached, free tier.
pub(super) fn floor_snapshot() -> ProfileSnapshot {
    ProfileSnapshot {
        profile_fields: ProfileFields {
            athlete_name: Some("Jordan Reyes".to_string()),
            sport: Some("Basketball".to_string()),
            ..Default::default()
        },
        related_counts: RelatedCounts::default(),
        subscription_tier: SubscriptionTier::Free,
    }
}

pub(super) fn complete_fields() -> ProfileFields {
    ProfileFields {
        athlete_name: Some("Jordan Reyes".to_string()),
        sport: Some("Basketball".to_string()),
        bio: Some(
            "Three-year varsity starter at point guard. Led the conference in assists as a \
             junior, captain of my AAU program, and a film-room regular who loves running \
             the pick and roll. Looking for a program that values defense and unselfish play."
                .to_string(),
        ),
        school: Some("Westlake High School".to_string()),
        location: Some("Austin, TX".to_string()),
        graduation_year: Some(2027),
        profile_picture_url: Some("https://cdn.example/photos/jordan.jpg".to_string()),
        grade: Some("11".to_string()),
        positions: vec!["Point Guard".to_string(), "Shooting Guard".to_string()],
        height: Some("6'1\"".to_string()),
        weight: Some(175),
        gpa: Some(3.8),
        sat_score: Some(1340),
        act_score: Some(29),
        jersey_number: Some("3".to_string()),
        dominant_hand: Some("Right".to_string()),
        twitter_url: Some("https://twitter.example/jreyes".to_string()),
        instagram_url: Some("https://instagram.example/jreyes".to_string()),
        facebook_url: Some("https://facebook.example/jreyes".to_string()),
        tiktok_url: Some("https://tiktok.example/@jreyes".to_string()),
        youtube_url: Some("https://youtube.example/@jreyes".to_string()),
        hudl_url: Some("https://hudl.example/profile/jreyes".to_string()),
        website_url: Some("https://jordanreyes.example".to_string()),
        social_sharing_enabled: true,
    }
}

/// Everything filled in, every collection well stocked, pro tier.
pub(super) fn ceiling_snapshot() -> ProfileSnapshot {
    ProfileSnapshot {
        profile_fields: complete_fields(),
        related_counts: RelatedCounts {
            photo_count: 12,
            video_count: 4,
            award_count: 3,
            team_count: 2,
            total_reviews: 5,
            verified_review_count: 3,
            upcoming_event_count: 1,
        },
        subscription_tier: SubscriptionTier::Pro,
    }
}

#[derive(Default)]
pub(super) struct MemoryAuditStore {
    rows: Mutex<Vec<ProfileAuditRow>>,
}

impl MemoryAuditStore {
    pub(super) fn is_empty(&self) -> bool {
        self.rows.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl AuditStore for MemoryAuditStore {
    async fn save(
        &self,
        athlete_id: Uuid,
        report: &AuditReport,
    ) -> Result<ProfileAuditRow, StoreError> {
        let row = ProfileAuditRow {
            id: Uuid::new_v4(),
            athlete_id,
            completeness_score: report.completeness_score,
            seo_score: report.seo_score,
            social_score: report.social_score,
            content_score: report.content_score,
            recommendations: report.recommendations.clone(),
            strengths: report.strengths.clone(),
            missing_fields: report.missing_fields.clone(),
            audit_data: serde_json::to_value(&report.audit_data)?,
            audit_date: Utc::now(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn load_latest(&self, athlete_id: Uuid) -> Result<Option<ProfileAuditRow>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.athlete_id == athlete_id)
            .cloned())
    }

    async fn history(
        &self,
        athlete_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ProfileAuditRow>, StoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| r.athlete_id == athlete_id)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Store whose backing database is down.
pub(super) struct UnavailableAuditStore;

#[async_trait]
impl AuditStore for UnavailableAuditStore {
    async fn save(&self, _: Uuid, _: &AuditReport) -> Result<ProfileAuditRow, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn load_latest(&self, _: Uuid) -> Result<Option<ProfileAuditRow>, StoreError> {
        Ok(None)
    }

    async fn history(&self, _: Uuid, _: i64) -> Result<Vec<ProfileAuditRow>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[derive(Default)]
pub(super) struct MemorySnapshots {
    snapshots: HashMap<Uuid, ProfileSnapshot>,
}

impl MemorySnapshots {
    pub(super) fn with(mut self, athlete_id: Uuid, snapshot: ProfileSnapshot) -> Self {
        self.snapshots.insert(athlete_id, snapshot);
        self
    }
}

#[async_trait]
impl SnapshotSource for MemorySnapshots {
    async fn load(&self, athlete_id: Uuid) -> Result<ProfileSnapshot, AppError> {
        self.snapshots
            .get(&athlete_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Athlete {athlete_id} not found")))
    }
}

/// Source that takes `delay` to produce a floor snapshot.
pub(super) struct SlowSnapshots {
    pub(super) delay: Duration,
}

#[async_trait]
impl SnapshotSource for SlowSnapshots {
    async fn load(&self, _: Uuid) -> Result<ProfileSnapshot, AppError> {
        tokio::time::sleep(self.delay).await;
        Ok(floor_snapshot())
    }
}

/// Saves normally but cannot read back earlier audits.
#[derive(Default)]
pub(super) struct UnreadableLatestStore {
    inner: MemoryAuditStore,
}

impl UnreadableLatestStore {
    pub(super) fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl AuditStore for UnreadableLatestStore {
    async fn save(
        &self,
        athlete_id: Uuid,
        report: &AuditReport,
    ) -> Result<ProfileAuditRow, StoreError> {
        self.inner.save(athlete_id, report).await
    }

    async fn load_latest(&self, _: Uuid) -> Result<Option<ProfileAuditRow>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn history(
        &self,
        athlete_id: Uuid,
        limit: i64,
    ) -> Result<Vec<ProfileAuditRow>, StoreError> {
        self.inner.history(athlete_id, limit).await
    }
}

pub(super) fn app_state(snapshots: MemorySnapshots, store: Arc<dyn AuditStore>) -> AppState {
    app_state_with(Arc::new(snapshots), store)
}

pub(super) fn app_state_with(
    snapshots: Arc<dyn SnapshotSource>,
    store: Arc<dyn AuditStore>,
) -> AppState {
    AppState {
        engine: engine(),
        snapshots,
        store,
    }
}
