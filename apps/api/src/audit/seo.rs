//! Search discoverability. Every rule awards the points of the single tier it
//! matches, evaluated top-down; the rule maxima sum to 100.

use crate::audit::report::ScoreCard;
use crate::audit::snapshot::{ProfileField, ProfileSnapshot};

const BIO_DETAILED_POINTS: i32 = 30;
const BIO_MODERATE_POINTS: i32 = 20;
const BIO_SHORT_POINTS: i32 = 10;
const BIO_MINIMAL_POINTS: i32 = 5;
const LOCALITY_POINTS: i32 = 20;
const LOCALITY_PARTIAL_POINTS: i32 = 10;
const SPORT_POINTS: i32 = 10;
const POSITION_BONUS_POINTS: i32 = 10;
const ACADEMIC_POINTS: i32 = 15;
const GRADUATION_YEAR_POINTS: i32 = 15;

pub fn score_seo(snapshot: &ProfileSnapshot) -> ScoreCard {
    let fields = &snapshot.profile_fields;
    let mut card = ScoreCard::new(0);

    let bio_len = bio_length(snapshot);
    match bio_len {
        n if n > 200 => {
            card.score += BIO_DETAILED_POINTS;
            card.strength("Detailed bio helps recruiters find and understand you");
        }
        n if n >= 100 => {
            card.score += BIO_MODERATE_POINTS;
            card.recommend("Expand your bio to over 200 characters to improve search visibility");
        }
        n if n > 50 => {
            card.score += BIO_SHORT_POINTS;
            card.recommend("Add more detail to your bio: goals, achievements and playing style");
        }
        n => {
            if n > 0 {
                card.score += BIO_MINIMAL_POINTS;
            }
            card.recommend("Write a bio that tells recruiters who you are as an athlete");
        }
    }

    let has_location = fields.is_present(ProfileField::Location);
    let has_school = fields.is_present(ProfileField::School);
    match (has_location, has_school) {
        (true, true) => {
            card.score += LOCALITY_POINTS;
            card.strength("Location and school make you easy to find in local searches");
        }
        (true, false) => {
            card.score += LOCALITY_PARTIAL_POINTS;
            card.recommend("Add your school to appear in school-based searches");
        }
        (false, true) => {
            card.score += LOCALITY_PARTIAL_POINTS;
            card.recommend("Add your location to appear in local searches");
        }
        (false, false) => {
            card.recommend("Add your school and location so recruiters can find you");
        }
    }

    if let Some(sport) = fields.text(ProfileField::Sport) {
        card.score += SPORT_POINTS;
        if fields.is_present(ProfileField::Positions) {
            card.score += POSITION_BONUS_POINTS;
            card.strength(format!(
                "Specific {sport} positions improve search relevance"
            ));
        } else {
            card.recommend("Add the positions you play to match position-specific searches");
        }
    } else {
        card.recommend("Add your sport so recruiters can find you");
    }

    let has_academics = [ProfileField::Gpa, ProfileField::SatScore, ProfileField::ActScore]
        .iter()
        .any(|f| fields.is_present(*f));
    if has_academics {
        card.score += ACADEMIC_POINTS;
        card.strength("Academic information signals college readiness");
    } else {
        card.recommend("Add your GPA or test scores to attract academic-minded programs");
    }

    if fields.is_present(ProfileField::GraduationYear) {
        card.score += GRADUATION_YEAR_POINTS;
    } else {
        card.recommend("Add your graduation year so recruiters can match you to their class");
    }

    card.score = card.score.min(100);
    card
}

/// Character count of the trimmed bio, 0 when absent.
pub fn bio_length(snapshot: &ProfileSnapshot) -> usize {
    snapshot
        .profile_fields
        .text(ProfileField::Bio)
        .map(|bio| bio.chars().count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::snapshot::ProfileFields;

    fn with_fields(fields: ProfileFields) -> ProfileSnapshot {
        ProfileSnapshot {
            profile_fields: fields,
            ..Default::default()
        }
    }

    fn with_bio(len: usize) -> ProfileSnapshot {
        with_fields(ProfileFields {
            bio: Some("a".repeat(len)),
            ..Default::default()
        })
    }

    #[test]
    fn test_bio_tiers() {
        assert_eq!(score_seo(&with_bio(201)).score, BIO_DETAILED_POINTS);
        assert_eq!(score_seo(&with_bio(200)).score, BIO_MODERATE_POINTS);
        assert_eq!(score_seo(&with_bio(100)).score, BIO_MODERATE_POINTS);
        assert_eq!(score_seo(&with_bio(99)).score, BIO_SHORT_POINTS);
        assert_eq!(score_seo(&with_bio(51)).score, BIO_SHORT_POINTS);
        assert_eq!(score_seo(&with_bio(50)).score, BIO_MINIMAL_POINTS);
        assert_eq!(score_seo(&ProfileSnapshot::default()).score, 0);
    }

    #[test]
    fn test_150_char_bio_is_mid_tier() {
        let card = score_seo(&with_bio(150));
        assert_eq!(card.score, BIO_MODERATE_POINTS);
        assert!(card.recommendations[0].starts_with("Expand your bio"));
        assert!(!card.strengths.iter().any(|s| s.starts_with("Detailed bio")));
    }

    #[test]
    fn test_bio_length_counts_characters_not_bytes() {
        let snapshot = with_fields(ProfileFields {
            bio: Some("é".repeat(120)),
            ..Default::default()
        });
        assert_eq!(bio_length(&snapshot), 120);
    }

    #[test]
    fn test_one_of_location_and_school_names_the_other() {
        let card = score_seo(&with_fields(ProfileFields {
            location: Some("Austin, TX".to_string()),
            ..Default::default()
        }));
        assert_eq!(card.score, LOCALITY_PARTIAL_POINTS);
        assert!(card.recommendations.iter().any(|r| r.starts_with("Add your school")));
    }

    #[test]
    fn test_sport_with_position_gets_bonus() {
        let without = score_seo(&with_fields(ProfileFields {
            sport: Some("Volleyball".to_string()),
            ..Default::default()
        }));
        let with = score_seo(&with_fields(ProfileFields {
            sport: Some("Volleyball".to_string()),
            positions: vec!["Setter".to_string()],
            ..Default::default()
        }));
        assert_eq!(without.score, SPORT_POINTS);
        assert_eq!(with.score, SPORT_POINTS + POSITION_BONUS_POINTS);
        assert!(without
            .recommendations
            .iter()
            .any(|r| r.starts_with("Add the positions")));
        assert!(with.strengths.iter().any(|s| s.contains("Volleyball")));
    }

    #[test]
    fn test_any_single_academic_field_counts() {
        let card = score_seo(&with_fields(ProfileFields {
            act_score: Some(28),
            ..Default::default()
        }));
        assert_eq!(card.score, ACADEMIC_POINTS);
    }

    #[test]
    fn test_full_profile_is_100() {
        let card = score_seo(&with_fields(ProfileFields {
            bio: Some("x".repeat(250)),
            location: Some("Denver, CO".to_string()),
            school: Some("East High".to_string()),
            sport: Some("Baseball".to_string()),
            positions: vec!["Shortstop".to_string()],
            gpa: Some(3.7),
            graduation_year: Some(2027),
            ..Default::default()
        }));
        assert_eq!(card.score, 100);
        assert!(card.recommendations.is_empty());
    }
}
