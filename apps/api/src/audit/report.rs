use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::audit::completeness::score_completeness;
use crate::audit::engagement::score_engagement;
use crate::audit::field_table::SOCIAL_PLATFORMS;
use crate::audit::seo::{bio_length, score_seo};
use crate::audit::snapshot::{ProfileField, ProfileSnapshot, RelatedCounts, SubscriptionTier};
use crate::audit::social::{active_platforms, score_social};
use crate::audit::tier::TierPolicy;

/// Output of one scorer: its score plus the findings it emitted, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreCard {
    pub score: i32,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ScoreCard {
    pub fn new(score: i32) -> Self {
        Self {
            score,
            ..Default::default()
        }
    }

    pub fn strength(&mut self, text: impl Into<String>) {
        self.strengths.push(text.into());
    }

    pub fn recommend(&mut self, text: impl Into<String>) {
        self.recommendations.push(text.into());
    }
}

/// `earned / total` as a whole percentage in [0, 100].
pub fn percentage(earned: f64, total: f64) -> i32 {
    if total <= 0.0 {
        return 0;
    }
    ((earned / total) * 100.0).round().clamp(0.0, 100.0) as i32
}

/// Per-category percentages, each readable on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessBreakdown {
    pub core_profile: i32,
    pub athletic_details: i32,
    pub teams: i32,
    pub content_media: i32,
    pub social_contact: i32,
}

/// Traceability data stored alongside the scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditData {
    pub completeness_breakdown: CompletenessBreakdown,
    pub counts: RelatedCounts,
    pub subscription_tier: SubscriptionTier,
    pub active_social_platforms: usize,
    pub bio_length: usize,
}

/// Immutable result of one audit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub completeness_score: i32,
    pub seo_score: i32,
    pub social_score: i32,
    pub content_score: i32,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub missing_fields: Vec<String>,
    pub audit_data: AuditData,
}

/// Ordered, duplicate-free collection of findings across scorers.
#[derive(Debug, Default)]
struct Findings {
    recommendations: Vec<String>,
    strengths: Vec<String>,
}

impl Findings {
    fn absorb(&mut self, card: &ScoreCard) {
        push_unique(&mut self.recommendations, &card.recommendations);
        push_unique(&mut self.strengths, &card.strengths);
    }
}

fn push_unique(into: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !into.contains(item) {
            into.push(item.clone());
        }
    }
}

const PHOTO_MEDIA_WEIGHT: f64 = 40.0;
const VIDEO_MEDIA_WEIGHT: f64 = 30.0;
const AWARD_MEDIA_WEIGHT: f64 = 30.0;

fn content_media_percentage(
    counts: &RelatedCounts,
    videos_enabled: bool,
    awards_enabled: bool,
) -> i32 {
    let mut earned = 0.0;
    if counts.photo_count > 0 {
        earned += PHOTO_MEDIA_WEIGHT;
    }
    if videos_enabled && counts.video_count > 0 {
        earned += VIDEO_MEDIA_WEIGHT;
    }
    if awards_enabled && counts.award_count > 0 {
        earned += AWARD_MEDIA_WEIGHT;
    }
    percentage(earned, PHOTO_MEDIA_WEIGHT + VIDEO_MEDIA_WEIGHT + AWARD_MEDIA_WEIGHT)
}

fn social_contact_percentage(snapshot: &ProfileSnapshot, active: usize) -> i32 {
    let website = usize::from(snapshot.profile_fields.is_present(ProfileField::WebsiteUrl));
    percentage((active + website) as f64, (SOCIAL_PLATFORMS.len() + 1) as f64)
}

/// Runs every scorer over the snapshot and merges their output.
///
/// Findings are merged completeness, content, SEO, social, so identical
/// snapshots always give identical reports.
pub fn assemble(snapshot: &ProfileSnapshot, policy: &dyn TierPolicy) -> AuditReport {
    let completeness = score_completeness(snapshot);
    let engagement = score_engagement(snapshot, policy);
    let seo = score_seo(snapshot);
    let social = score_social(snapshot);

    let mut findings = Findings::default();
    for card in [&completeness.card, &engagement.card, &seo, &social] {
        findings.absorb(card);
    }

    let active = active_platforms(snapshot);
    let breakdown = CompletenessBreakdown {
        core_profile: completeness.core_percentage,
        athletic_details: completeness.athletic_percentage,
        teams: completeness.teams_percentage,
        content_media: content_media_percentage(
            &snapshot.related_counts,
            engagement.videos_enabled,
            engagement.awards_enabled,
        ),
        social_contact: social_contact_percentage(snapshot, active),
    };

    let report = AuditReport {
        completeness_score: completeness.card.score.clamp(0, 100),
        seo_score: seo.score.clamp(0, 100),
        social_score: social.score.clamp(0, 100),
        content_score: engagement.card.score.clamp(0, 100),
        recommendations: findings.recommendations,
        strengths: findings.strengths,
        missing_fields: completeness.missing_fields,
        audit_data: AuditData {
            completeness_breakdown: breakdown,
            counts: snapshot.related_counts,
            subscription_tier: snapshot.subscription_tier,
            active_social_platforms: active,
            bio_length: bio_length(snapshot),
        },
    };

    debug!(
        "Assembled audit: completeness={} content={} seo={} social={} ({} recommendations)",
        report.completeness_score,
        report.content_score,
        report.seo_score,
        report.social_score,
        report.recommendations.len()
    );

    report
}
