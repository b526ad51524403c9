use crate::audit::field_table::{
    category_weight, rules_in, FieldCategory, MATERIAL_WEIGHT, TEAM_HISTORY_WEIGHT,
};
use crate::audit::report::{percentage, ScoreCard};
use crate::audit::snapshot::ProfileSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletenessOutcome {
    pub card: ScoreCard,
    pub missing_fields: Vec<String>,
    pub core_percentage: i32,
    pub athletic_percentage: i32,
    pub teams_percentage: i32,
}

struct CategoryFold {
    earned: f64,
    missing_required: Vec<&'static str>,
    missing_optional: Vec<&'static str>,
}

fn fold_category(snapshot: &ProfileSnapshot, category: FieldCategory) -> CategoryFold {
    let fields = &snapshot.profile_fields;
    rules_in(category).fold(
        CategoryFold {
            earned: 0.0,
            missing_required: Vec::new(),
            missing_optional: Vec::new(),
        },
        |mut acc, rule| {
            if fields.is_present(rule.field) {
                acc.earned += rule.weight;
            } else if rule.required {
                acc.missing_required.push(rule.label);
            } else {
                acc.missing_optional.push(rule.label);
            }
            acc
        },
    )
}

/// Weighted presence of core and athletic fields plus team history.
///
/// `missing_fields` lists every absent required field, then absent optional
/// fields whose weight is material, both in table order.
pub fn score_completeness(snapshot: &ProfileSnapshot) -> CompletenessOutcome {
    let core = fold_category(snapshot, FieldCategory::CoreProfile);
    let athletic = fold_category(snapshot, FieldCategory::AthleticDetails);
    let team_count = snapshot.related_counts.team_count;
    let has_teams = team_count > 0;

    let mut total = core.earned + athletic.earned;
    if has_teams {
        total += TEAM_HISTORY_WEIGHT;
    }
    let score = (total.round() as i32).min(100);

    let mut missing_fields: Vec<String> = core
        .missing_required
        .iter()
        .chain(athletic.missing_required.iter())
        .map(|label| label.to_string())
        .collect();
    missing_fields.extend(
        rules_in(FieldCategory::CoreProfile)
            .chain(rules_in(FieldCategory::AthleticDetails))
            .filter(|r| !r.required && r.weight > MATERIAL_WEIGHT)
            .filter(|r| !snapshot.profile_fields.is_present(r.field))
            .map(|r| r.label.to_string()),
    );

    let mut card = ScoreCard::new(score);
    if core.missing_required.is_empty() {
        card.strength("Core profile information is complete");
    } else {
        card.recommend(format!(
            "Complete your required profile fields: {}",
            core.missing_required.join(", ")
        ));
    }

    if !athletic.missing_optional.is_empty() {
        card.recommend(format!(
            "Add athletic details recruiters look for: {}",
            athletic.missing_optional.join(", ")
        ));
    }
    if has_teams {
        card.strength(format!(
            "Team history documented ({team_count} team{})",
            if team_count == 1 { "" } else { "s" }
        ));
    } else {
        card.recommend("Add your team history to show your competitive experience");
    }

    CompletenessOutcome {
        card,
        missing_fields,
        core_percentage: percentage(core.earned, category_weight(FieldCategory::CoreProfile)),
        athletic_percentage: percentage(
            athletic.earned,
            category_weight(FieldCategory::AthleticDetails),
        ),
        teams_percentage: if has_teams { 100 } else { 0 },
    }
}
