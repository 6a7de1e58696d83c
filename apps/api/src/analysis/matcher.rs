//! Requirement matcher: decides which requirement statements of one category
//! the résumé satisfies.
//!
//! Matching is tolerant because posting phrasing ("5+ years of experience")
//! and résumé phrasing ("5 years experience") rarely agree verbatim. A
//! requirement is satisfied when any candidate item
//!   - contains it as a substring (both lowercased and trimmed), or
//!   - shares at least one significant token with it.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::analysis::tokenizer::{normalize, significant_tokens};
use crate::models::analysis::{MatchResult, RequirementCategory};
use crate::models::job::JobDocument;
use crate::models::resume::ResumeDocument;

struct Candidate {
    normalized: String,
    tokens: BTreeSet<String>,
}

impl Candidate {
    fn new(text: &str) -> Self {
        Self {
            normalized: normalize(text),
            tokens: significant_tokens(text),
        }
    }

    fn satisfies(&self, requirement: &str, requirement_tokens: &BTreeSet<String>) -> bool {
        self.normalized.contains(requirement) || !self.tokens.is_disjoint(requirement_tokens)
    }
}

/// Splits `required` into matched and missing against `candidates`.
///
/// Empty `required` is a vacuous match with score 100.
pub fn match_category<S: AsRef<str>>(required: &[String], candidates: &[S]) -> MatchResult {
    if required.is_empty() {
        return MatchResult::vacuous();
    }

    let candidates: Vec<Candidate> = candidates
        .iter()
        .map(|c| AsRef::<str>::as_ref(c))
        .filter(|c| !c.trim().is_empty())
        .map(Candidate::new)
        .collect();

    let (matched, missing): (Vec<String>, Vec<String>) =
        required.iter().cloned().partition(|requirement| {
            let normalized = normalize(requirement);
            let tokens = significant_tokens(requirement);
            candidates.iter().any(|c| c.satisfies(&normalized, &tokens))
        });

    let score = category_score(matched.len(), required.len());
    MatchResult {
        matched,
        missing,
        score,
    }
}

/// round(100 * matched / max(1, total)), computed in integers with
/// half-up rounding.
pub fn category_score(matched: usize, total: usize) -> u8 {
    let total = total.max(1);
    let matched = matched.min(total);
    ((200 * matched + total) / (2 * total)) as u8
}

/// Résumé items that can satisfy requirements of `category`.
pub fn candidate_signals(resume: &ResumeDocument, category: RequirementCategory) -> Vec<&str> {
    match category {
        RequirementCategory::TechnicalSkills => {
            resume.skills.technical.iter().map(String::as_str).collect()
        }
        RequirementCategory::SoftSkills => resume.skills.soft.iter().map(String::as_str).collect(),
        RequirementCategory::Experience => {
            let mut signals = Vec::new();
            for entry in &resume.experience {
                signals.push(entry.title.as_str());
                signals.push(entry.company.as_str());
                signals.extend(entry.responsibilities.iter().map(String::as_str));
                if let Some(duration) = entry.duration.as_deref() {
                    signals.push(duration);
                }
            }
            if let Some(summary) = resume.summary.as_deref() {
                signals.push(summary);
            }
            signals
        }
        RequirementCategory::Education => resume
            .education
            .iter()
            .flat_map(|e| {
                [e.degree.as_str(), e.institution.as_str()]
                    .into_iter()
                    .chain(e.year.as_deref())
            })
            .collect(),
        RequirementCategory::Certifications => {
            resume.certifications.iter().map(String::as_str).collect()
        }
    }
}

/// Requirement statements of `category` in the posting.
pub fn requirements_for(job: &JobDocument, category: RequirementCategory) -> &[String] {
    let reqs = &job.requirements;
    match category {
        RequirementCategory::TechnicalSkills => &reqs.technical_skills,
        RequirementCategory::SoftSkills => &reqs.soft_skills,
        RequirementCategory::Experience => &reqs.experience,
        RequirementCategory::Education => &reqs.education,
        RequirementCategory::Certifications => &reqs.certifications,
    }
}

/// Runs the matcher for every category.
pub fn analyze_requirements(
    resume: &ResumeDocument,
    job: &JobDocument,
) -> BTreeMap<RequirementCategory, MatchResult> {
    RequirementCategory::ALL
        .into_iter()
        .map(|category| {
            let signals = candidate_signals(resume, category);
            let result = match_category(requirements_for(job, category), signals.as_slice());
            debug!(
                category = category.label(),
                matched = result.matched.len(),
                missing = result.missing.len(),
                score = result.score,
                "category matched"
            );
            (category, result)
        })
        .collect()
}
