//! Content richness: photos, videos, awards, reviews and schedule.
//!
//! Each rule is capped on its own and the caps sum to 100. Videos, awards and
//! reviews contribute nothing (no points, strengths or recommendations) when
//! the tier policy disables them.

use crate::audit::report::ScoreCard;
use crate::audit::snapshot::ProfileSnapshot;
use crate::audit::tier::{Feature, TierPolicy};

pub const PHOTO_POINTS: i32 = 20;
pub const VIDEO_POINTS: i32 = 25;
pub const AWARD_POINTS: i32 = 15;
pub const VERIFIED_REVIEW_POINTS: i32 = 20;
pub const UNVERIFIED_REVIEW_POINTS: i32 = 10;
pub const SCHEDULE_POINTS: i32 = 20;

const STRONG_GALLERY_PHOTOS: u32 = 5;
const STRONG_VIDEO_COUNT: u32 = 3;
const STRONG_AWARD_COUNT: u32 = 3;
const STRONG_VERIFIED_REVIEWS: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct EngagementOutcome {
    pub card: ScoreCard,
    pub videos_enabled: bool,
    pub awards_enabled: bool,
}

pub fn score_engagement(snapshot: &ProfileSnapshot, policy: &dyn TierPolicy) -> EngagementOutcome {
    let counts = &snapshot.related_counts;
    let tier = snapshot.subscription_tier;
    let videos_enabled = policy.is_feature_enabled(tier, Feature::Videos);
    let awards_enabled = policy.is_feature_enabled(tier, Feature::Awards);
    let reviews_enabled = policy.is_feature_enabled(tier, Feature::Reviews);
    let schedule_enabled = policy.is_feature_enabled(tier, Feature::Schedule);

    let mut card = ScoreCard::new(0);

    let photos = counts.photo_count;
    if photos == 0 {
        card.recommend("Add photos to showcase your athletic ability");
    } else {
        card.score += PHOTO_POINTS;
        if photos >= STRONG_GALLERY_PHOTOS {
            card.strength(format!("Strong photo gallery with {photos} photos"));
        } else {
            card.recommend(format!(
                "Add more photos ({STRONG_GALLERY_PHOTOS}+ recommended) to build a strong gallery"
            ));
        }
    }

    if videos_enabled {
        let videos = counts.video_count;
        if videos == 0 {
            card.recommend("Upload highlight videos so coaches can see you in action");
        } else {
            card.score += VIDEO_POINTS;
            if videos >= STRONG_VIDEO_COUNT {
                card.strength(format!("Highlight reel with {videos} videos"));
            } else {
                card.recommend(format!(
                    "Add more highlight videos ({STRONG_VIDEO_COUNT}+ recommended)"
                ));
            }
        }
    }

    if awards_enabled {
        let awards = counts.award_count;
        if awards == 0 {
            card.recommend("List your awards and honors to stand out");
        } else {
            card.score += AWARD_POINTS;
            if awards >= STRONG_AWARD_COUNT {
                card.strength(format!("{awards} awards showcase your achievements"));
            }
        }
    }

    if reviews_enabled {
        score_reviews(&mut card, counts.total_reviews, counts.verified_review_count);
    }

    if counts.upcoming_event_count > 0 {
        card.score += SCHEDULE_POINTS;
        card.strength("Upcoming schedule keeps recruiters informed");
    } else if schedule_enabled {
        card.recommend("Add your upcoming games and events so recruiters can watch you play");
    }

    card.score = card.score.min(100);

    EngagementOutcome {
        card,
        videos_enabled,
        awards_enabled,
    }
}

fn score_reviews(card: &mut ScoreCard, total: u32, verified: u32) {
    if verified > 0 {
        card.score += VERIFIED_REVIEW_POINTS;
        if verified >= STRONG_VERIFIED_REVIEWS {
            card.strength(format!(
                "{verified} verified reviews demonstrate strong coach endorsement"
            ));
        } else {
            card.strength(format!(
                "{verified} verified review{} on your profile",
                if verified == 1 { "" } else { "s" }
            ));
            card.recommend(format!(
                "Collect more verified reviews ({STRONG_VERIFIED_REVIEWS}+ recommended)"
            ));
        }
    } else if total > 0 {
        card.score += UNVERIFIED_REVIEW_POINTS;
        card.recommend("Request verification for existing reviews to earn full credit");
    } else {
        card.recommend("Request reviews from coaches who have seen you compete");
    }
}
