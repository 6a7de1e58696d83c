//! Single entry point: résumé + job → `ScoreBreakdown`.
//!
//! Pure and synchronous. No state survives a call, so independent requests
//! can run concurrently without coordination.

use tracing::info;

use crate::analysis::matcher::analyze_requirements;
use crate::analysis::scorer::{compute_ats_score, compute_overall_match, AtsWeights};
use crate::analysis::suggestions::{build_recommendation, collect_strengths, generate_suggestions};
use crate::models::analysis::{MatchLevel, RequirementCategory, ScoreBreakdown};
use crate::models::job::JobDocument;
use crate::models::resume::ResumeDocument;

pub fn analyze(resume: &ResumeDocument, job: &JobDocument) -> ScoreBreakdown {
    let requirement_analysis = analyze_requirements(resume, job);

    let score_of = |category: RequirementCategory| {
        requirement_analysis
            .get(&category)
            .map(|r| r.score)
            .unwrap_or(100)
    };
    // Soft skills and certifications are reported but stay out of the headline.
    let overall_match_score = compute_overall_match(
        score_of(RequirementCategory::TechnicalSkills),
        score_of(RequirementCategory::Experience),
        score_of(RequirementCategory::Education),
    );

    let (ats_score, ats_breakdown) = compute_ats_score(resume, job, &AtsWeights::default());

    let missing_technical = requirement_analysis
        .get(&RequirementCategory::TechnicalSkills)
        .map(|r| r.missing.as_slice())
        .unwrap_or_default();
    let recommendation = build_recommendation(overall_match_score, missing_technical);

    info!(
        overall_match_score,
        ats_score,
        job_title = %job.title,
        "analysis complete"
    );

    ScoreBreakdown {
        overall_match_score,
        match_level: MatchLevel::from_score(overall_match_score),
        ats_score,
        ats_breakdown,
        strengths: collect_strengths(&requirement_analysis),
        improvement_suggestions: generate_suggestions(&requirement_analysis),
        requirement_analysis,
        recommendation,
    }
}
