//! Profile snapshot: the immutable input to one audit run.
//!
//! Built by a `SnapshotSource` (or deserialized from a preview request) and
//! never mutated by the engine. Field presence follows one rule everywhere:
//! blank text and empty lists are absent, numbers are present when set.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Reads an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Subscription level of the profile owner. Unknown values collapse to `Free`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
    Pro,
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Premium => "premium",
            SubscriptionTier::Pro => "pro",
        }
    }

    /// Parses a stored tier value. Anything unrecognised is treated as the
    /// most restrictive tier rather than failing the audit.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "free" => SubscriptionTier::Free,
            "premium" => SubscriptionTier::Premium,
            "pro" => SubscriptionTier::Pro,
            other => {
                warn!("Unrecognised subscription tier '{other}', defaulting to free");
                SubscriptionTier::Free
            }
        }
    }
}

impl From<Option<String>> for SubscriptionTier {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(raw) => SubscriptionTier::parse(&raw),
            None => {
                warn!("Subscription tier is null, defaulting to free");
                SubscriptionTier::Free
            }
        }
    }
}

/// Every profile field the audit reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    AthleteName,
    Sport,
    Bio,
    School,
    Location,
    GraduationYear,
    ProfilePicture,
    Grade,
    Positions,
    Height,
    Weight,
    Gpa,
    SatScore,
    ActScore,
    JerseyNumber,
    DominantHand,
    TwitterUrl,
    InstagramUrl,
    FacebookUrl,
    TiktokUrl,
    YoutubeUrl,
    HudlUrl,
    WebsiteUrl,
}

/// A present field value. `None` from [`ProfileFields::value`] means absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i32),
    Decimal(f64),
    List(&'a [String]),
}

/// Scalar and array fields of an athlete profile, as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileFields {
    pub athlete_name: Option<String>,
    pub sport: Option<String>,
    pub bio: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
    pub graduation_year: Option<i32>,
    pub profile_picture_url: Option<String>,
    pub grade: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub positions: Vec<String>,
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
    #[serde(deserialize_with = "null_as_default")]
    pub social_sharing_enabled: bool,
}

impl ProfileFields {
    pub fn value(&self, field: ProfileField) -> Option<FieldValue<'_>> {
        match field {
            ProfileField::AthleteName => text(&self.athlete_name),
            ProfileField::Sport => text(&self.sport),
            ProfileField::Bio => text(&self.bio),
            ProfileField::School => text(&self.school),
            ProfileField::Location => text(&self.location),
            ProfileField::GraduationYear => self.graduation_year.map(FieldValue::Integer),
            ProfileField::ProfilePicture => text(&self.profile_picture_url),
            ProfileField::Grade => text(&self.grade),
            ProfileField::Positions => list(&self.positions),
            ProfileField::Height => text(&self.height),
            ProfileField::Weight => self.weight.map(FieldValue::Integer),
            ProfileField::Gpa => self.gpa.map(FieldValue::Decimal),
            ProfileField::SatScore => self.sat_score.map(FieldValue::Integer),
            ProfileField::ActScore => self.act_score.map(FieldValue::Integer),
            ProfileField::JerseyNumber => text(&self.jersey_number),
            ProfileField::DominantHand => text(&self.dominant_hand),
            ProfileField::TwitterUrl => text(&self.twitter_url),
            ProfileField::InstagramUrl => text(&self.instagram_url),
            ProfileField::FacebookUrl => text(&self.facebook_url),
            ProfileField::TiktokUrl => text(&self.tiktok_url),
            ProfileField::YoutubeUrl => text(&self.youtube_url),
            ProfileField::HudlUrl => text(&self.hudl_url),
            ProfileField::WebsiteUrl => text(&self.website_url),
        }
    }

    pub fn is_present(&self, field: ProfileField) -> bool {
        self.value(field).is_some()
    }

    /// Trimmed text of a present text field.
    pub fn text(&self, field: ProfileField) -> Option<&str> {
        match self.value(field) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }
}

fn text(value: &Option<String>) -> Option<FieldValue<'_>> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(FieldValue::Text)
}

fn list(values: &[String]) -> Option<FieldValue<'_>> {
    (!values.is_empty()).then_some(FieldValue::List(values))
}

/// Sizes of the profile's related collections. Unsigned so negative counts
/// cannot reach the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub photo_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub video_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub award_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub team_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_reviews: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub verified_review_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub upcoming_event_count: u32,
}

/// Everything one audit run needs, fully populated before invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_fields: ProfileFields,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_counts: RelatedCounts,
    #[serde(default)]
    pub subscription_tier: SubscriptionTier,
}
