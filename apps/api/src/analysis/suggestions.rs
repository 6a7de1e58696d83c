//! Turns per-category match results into suggestions, strengths, and a
//! one-line recommendation. Output order follows category display order and
//! the requirement order inside each category.

use std::collections::BTreeMap;

use crate::models::analysis::{ImprovementSuggestions, MatchResult, RequirementCategory};

/// Categories scoring below this get an immediate action.
pub const ACTION_THRESHOLD: u8 = 70;

pub fn generate_suggestions(
    analysis: &BTreeMap<RequirementCategory, MatchResult>,
) -> ImprovementSuggestions {
    let skill_development = analysis
        .get(&RequirementCategory::TechnicalSkills)
        .map(|r| {
            r.missing
                .iter()
                .map(|skill| format!("Develop proficiency in {skill}."))
                .collect()
        })
        .unwrap_or_default();

    let immediate_actions = analysis
        .iter()
        .filter(|(_, result)| result.score < ACTION_THRESHOLD)
        .map(|(category, _)| format!("Add evidence of {} to resume.", category.label()))
        .collect();

    ImprovementSuggestions {
        immediate_actions,
        skill_development,
    }
}

/// Matched technical and soft skills, technical first.
pub fn collect_strengths(analysis: &BTreeMap<RequirementCategory, MatchResult>) -> Vec<String> {
    [
        RequirementCategory::TechnicalSkills,
        RequirementCategory::SoftSkills,
    ]
    .iter()
    .filter_map(|category| analysis.get(category))
    .flat_map(|result| result.matched.iter().cloned())
    .collect()
}

/// Human-readable verdict naming up to three missing technical skills.
pub fn build_recommendation(score: u8, missing_skills: &[String]) -> String {
    let top_gaps: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();

    if score >= 80 {
        "Strong match. The résumé covers the key requirements of this role.".to_string()
    } else if top_gaps.is_empty() {
        format!("Partial match ({score}/100). Strengthen experience and education evidence.")
    } else if score >= 60 {
        format!(
            "Moderate match ({score}/100). Consider adding evidence for: {}.",
            top_gaps.join(", ")
        )
    } else {
        format!(
            "Low match ({score}/100). Significant gaps: {}. Tailor the résumé before applying.",
            top_gaps.join(", ")
        )
    }
}
