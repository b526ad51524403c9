//! Tier gating: which scoring categories apply at each subscription level.
//!
//! Scorers only ever ask `is_feature_enabled`; they never compare tiers
//! directly. `AppState` carries an `Arc<dyn TierPolicy>`.

use serde::{Deserialize, Serialize};

use crate::audit::snapshot::SubscriptionTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Videos,
    Awards,
    Reviews,
    Schedule,
}

pub trait TierPolicy: Send + Sync {
    fn is_feature_enabled(&self, tier: SubscriptionTier, feature: Feature) -> bool;
}

/// The published plan matrix: free gets photos only, premium unlocks media
/// and reviews, pro adds the schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTierPolicy;

impl TierPolicy for StandardTierPolicy {
    fn is_feature_enabled(&self, tier: SubscriptionTier, feature: Feature) -> bool {
        match tier {
            SubscriptionTier::Free => false,
            SubscriptionTier::Premium => !matches!(feature, Feature::Schedule),
            SubscriptionTier::Pro => true,
        }
    }
}
