use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Requirement categories, declared in display order. `Ord` follows
/// declaration order, so a `BTreeMap` keyed by category iterates the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementCategory {
    TechnicalSkills,
    SoftSkills,
    Experience,
    Education,
    Certifications,
}

impl RequirementCategory {
    pub const ALL: [RequirementCategory; 5] = [
        RequirementCategory::TechnicalSkills,
        RequirementCategory::SoftSkills,
        RequirementCategory::Experience,
        RequirementCategory::Education,
        RequirementCategory::Certifications,
    ];

    /// Human-readable label used in suggestion text.
    pub fn label(self) -> &'static str {
        match self {
            RequirementCategory::TechnicalSkills => "technical skills",
            RequirementCategory::SoftSkills => "soft skills",
            RequirementCategory::Experience => "experience",
            RequirementCategory::Education => "education",
            RequirementCategory::Certifications => "certifications",
        }
    }
}

/// Outcome of matching one requirement category.
///
/// `matched` and `missing` partition the requirement list; both keep the
/// requirement's original order and spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub score: u8, // 0 – 100
}

impl MatchResult {
    /// Nothing required, nothing missing.
    pub fn vacuous() -> Self {
        Self {
            matched: vec![],
            missing: vec![],
            score: 100,
        }
    }
}

/// The four ATS sub-scores, each rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsBreakdown {
    pub keyword_match: u8,
    pub experience_relevance: u8,
    pub education_match: u8,
    pub format_score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Strong,
    Moderate,
    Low,
}

impl MatchLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => MatchLevel::Strong,
            s if s >= 60 => MatchLevel::Moderate,
            _ => MatchLevel::Low,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementSuggestions {
    pub immediate_actions: Vec<String>,
    pub skill_development: Vec<String>,
}

/// Final aggregate for one résumé/job pair. Contains no ids or timestamps,
/// so identical inputs serialize to identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub overall_match_score: u8,
    pub match_level: MatchLevel,
    pub ats_score: u8,
    pub ats_breakdown: AtsBreakdown,
    pub requirement_analysis: BTreeMap<RequirementCategory, MatchResult>,
    pub strengths: Vec<String>,
    pub improvement_suggestions: ImprovementSuggestions,
    pub recommendation: String,
}
