use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::audit::snapshot::{ProfileFields, ProfileSnapshot, RelatedCounts, SubscriptionTier};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AthleteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub athlete_name: Option<String>,
    pub sport: Option<String>,
    pub bio: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
    pub graduation_year: Option<i32>,
    pub profile_picture_url: Option<String>,
    pub grade: Option<String>,
    pub positions: Option<Vec<String>>,
    pub height: Option<String>,
    pub weight: Option<i32>,
    pub gpa: Option<f64>,
    pub sat_score: Option<i32>,
    pub act_score: Option<i32>,
    pub jersey_number: Option<String>,
    pub dominant_hand: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub facebook_url: Option<String>,
    pub tiktok_url: Option<String>,
    pub youtube_url: Option<String>,
    pub hudl_url: Option<String>,
    pub website_url: Option<String>,
    pub social_sharing_enabled: Option<bool>,
    pub subscription_tier: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AthleteRow {
    /// Combines the stored profile with separately fetched counts.
    pub fn into_snapshot(self, related_counts: RelatedCounts) -> ProfileSnapshot {
        let subscription_tier = self
            .subscription_tier
            .as_deref()
            .map(SubscriptionTier::parse)
            .unwrap_or_default();

        ProfileSnapshot {
            profile_fields: ProfileFields {
                athlete_name: self.athlete_name,
                sport: self.sport,
                bio: self.bio,
                school: self.school,
                location: self.location,
                graduation_year: self.graduation_year,
                profile_picture_url: self.profile_picture_url,
                grade: self.grade,
                positions: self.positions.unwrap_or_default(),
                height: self.height,
                weight: self.weight,
                gpa: self.gpa,
                sat_score: self.sat_score,
                act_score: self.act_score,
                jersey_number: self.jersey_number,
                dominant_hand: self.dominant_hand,
                twitter_url: self.twitter_url,
                instagram_url: self.instagram_url,
                facebook_url: self.facebook_url,
                tiktok_url: self.tiktok_url,
                youtube_url: self.youtube_url,
                hudl_url: self.hudl_url,
                website_url: self.website_url,
                social_sharing_enabled: self.social_sharing_enabled.unwrap_or(false),
            },
            related_counts,
            subscription_tier,
        }
    }
}
