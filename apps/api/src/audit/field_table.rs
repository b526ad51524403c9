use serde::{Deserialize, Serialize};

use crate::audit::snapshot::ProfileField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    CoreProfile,
    AthleticDetails,
}

/// One row of the completeness policy. Weights are policy, not state:
/// changing one changes the scoring contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: ProfileField,
    pub weight: f64,
    pub category: FieldCategory,
    pub label: &'static str,
    pub required: bool,
}

const fn rule(
    field: ProfileField,
    weight: f64,
    category: FieldCategory,
    label: &'static str,
    required: bool,
) -> FieldRule {
    FieldRule {
        field,
        weight,
        category,
        label,
        required,
    }
}

pub const FIELD_RULES: &[FieldRule] = &[
    rule(ProfileField::AthleteName, 5.0, FieldCategory::CoreProfile, "Athlete Name", true),
    rule(ProfileField::Sport, 5.0, FieldCategory::CoreProfile, "Sport", true),
    rule(ProfileField::Bio, 10.0, FieldCategory::CoreProfile, "Bio", true),
    rule(ProfileField::School, 7.5, FieldCategory::CoreProfile, "School", true),
    rule(ProfileField::Location, 7.5, FieldCategory::CoreProfile, "Location", true),
    rule(ProfileField::GraduationYear, 5.0, FieldCategory::CoreProfile, "Graduation Year", true),
    rule(ProfileField::ProfilePicture, 5.0, FieldCategory::CoreProfile, "Profile Picture", true),
    rule(ProfileField::Grade, 5.0, FieldCategory::CoreProfile, "Grade", true),
    rule(ProfileField::Positions, 10.0, FieldCategory::AthleticDetails, "Positions", false),
    rule(ProfileField::Height, 7.5, FieldCategory::AthleticDetails, "Height", false),
    rule(ProfileField::Weight, 5.0, FieldCategory::AthleticDetails, "Weight", false),
    rule(ProfileField::Gpa, 7.5, FieldCategory::AthleticDetails, "GPA", false),
    rule(ProfileField::SatScore, 2.5, FieldCategory::AthleticDetails, "SAT Score", false),
    rule(ProfileField::ActScore, 2.5, FieldCategory::AthleticDetails, "ACT Score", false),
    rule(ProfileField::JerseyNumber, 2.5, FieldCategory::AthleticDetails, "Jersey Number", false),
    rule(ProfileField::DominantHand, 2.5, FieldCategory::AthleticDetails, "Dominant Hand", false),
];

/// Awarded when at least one team is on record.
pub const TEAM_HISTORY_WEIGHT: f64 = 10.0;

/// Absent optional fields heavier than this are reported as missing.
pub const MATERIAL_WEIGHT: f64 = 5.0;

/// Social platforms counted by the social scorer, in report order.
pub const SOCIAL_PLATFORMS: &[(ProfileField, &str)] = &[
    (ProfileField::TwitterUrl, "Twitter"),
    (ProfileField::InstagramUrl, "Instagram"),
    (ProfileField::FacebookUrl, "Facebook"),
    (ProfileField::TiktokUrl, "TikTok"),
    (ProfileField::YoutubeUrl, "YouTube"),
    (ProfileField::HudlUrl, "Hudl"),
];

pub fn rules_in(category: FieldCategory) -> impl Iterator<Item = &'static FieldRule> {
    FIELD_RULES.iter().filter(move |r| r.category == category)
}

pub fn category_weight(category: FieldCategory) -> f64 {
    rules_in(category).map(|r| r.weight).sum()
}
