use crate::audit::field_table::SOCIAL_PLATFORMS;
use crate::audit::report::ScoreCard;
use crate::audit::snapshot::{ProfileField, ProfileSnapshot};

/// Share of the score carried by platform coverage; the rest is bonus room.
const PLATFORM_BUDGET: f64 = 70.0;
const WEBSITE_BONUS: i32 = 20;
const SHARING_BONUS: i32 = 15;
const STRONG_PRESENCE_PLATFORMS: usize = 3;

pub fn active_platforms(snapshot: &ProfileSnapshot) -> usize {
    SOCIAL_PLATFORMS
        .iter()
        .filter(|(field, _)| snapshot.profile_fields.is_present(*field))
        .count()
}

/// Platform coverage scaled into a 70 point budget, plus website and sharing
/// bonuses. Bonuses can push the raw total past 100; the result is clamped.
pub fn score_social(snapshot: &ProfileSnapshot) -> ScoreCard {
    let fields = &snapshot.profile_fields;
    let active = active_platforms(snapshot);
    let base = (PLATFORM_BUDGET * active as f64 / SOCIAL_PLATFORMS.len() as f64).round() as i32;

    let mut card = ScoreCard::new(base);
    match active {
        0 => card.recommend("Add your social media links to extend your reach"),
        n if n < STRONG_PRESENCE_PLATFORMS => {
            let missing: Vec<&str> = SOCIAL_PLATFORMS
                .iter()
                .filter(|(field, _)| !fields.is_present(*field))
                .map(|(_, name)| *name)
                .collect();
            card.recommend(format!(
                "Connect more social platforms such as {}",
                missing.join(", ")
            ));
        }
        n => card.strength(format!("Strong social media presence across {n} platforms")),
    }

    if fields.is_present(ProfileField::WebsiteUrl) {
        card.score += WEBSITE_BONUS;
        card.strength("Personal website adds credibility");
    }
    if fields.social_sharing_enabled {
        card.score += SHARING_BONUS;
        card.strength("Social sharing is enabled for your profile");
    }

    card.score = card.score.min(100);
    card
}
