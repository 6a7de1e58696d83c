//! Headline scores.
//!
//! The overall match score is the plain mean of three category scores. The
//! ATS score is computed from raw signals (keyword overlap, structure,
//! completeness) and deliberately ignores the category scores, so the two
//! numbers can diverge.

use tracing::debug;

use crate::analysis::tokenizer::token_set;
use crate::models::analysis::AtsBreakdown;
use crate::models::job::JobDocument;
use crate::models::resume::ResumeDocument;

#[derive(Debug, Clone)]
pub struct AtsWeights {
    pub keyword_match: f64,
    pub experience_relevance: f64,
    pub education_match: f64,
    pub format: f64,
}

impl Default for AtsWeights {
    fn default() -> Self {
        Self {
            keyword_match: 0.40,
            experience_relevance: 0.30,
            education_match: 0.15,
            format: 0.15,
        }
    }
}

/// Completeness points; they sum to 100.
const FORMAT_NAME_POINTS: f64 = 20.0;
const FORMAT_SUMMARY_POINTS: f64 = 20.0;
const FORMAT_EXPERIENCE_POINTS: f64 = 30.0;
const FORMAT_SKILLS_POINTS: f64 = 20.0;
const FORMAT_EDUCATION_POINTS: f64 = 10.0;

/// Education credit when entries exist but none names a degree.
const PARTIAL_EDUCATION_CREDIT: f64 = 50.0;

fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// round(mean(technical, experience, education)), clamped to [0, 100].
pub fn compute_overall_match(technical: u8, experience: u8, education: u8) -> u8 {
    let sum = f64::from(technical) + f64::from(experience) + f64::from(education);
    to_percent(sum / 3.0)
}

/// Share of the posting's words that also appear in the résumé, 0 – 100.
pub fn keyword_match(resume: &ResumeDocument, job: &JobDocument) -> f64 {
    let job_tokens = token_set(job.text_fragments());
    if job_tokens.is_empty() {
        return 0.0;
    }
    let resume_tokens = token_set(resume.text_fragments());
    let shared = job_tokens.intersection(&resume_tokens).count();
    100.0 * shared as f64 / job_tokens.len() as f64
}

/// Share of experience entries that have a title and at least one
/// responsibility. Zero when there is no experience at all.
pub fn experience_relevance(resume: &ResumeDocument) -> f64 {
    if resume.experience.is_empty() {
        return 0.0;
    }
    let substantive = resume
        .experience
        .iter()
        .filter(|e| e.is_substantive())
        .count();
    100.0 * substantive as f64 / resume.experience.len() as f64
}

pub fn education_match(resume: &ResumeDocument, job: &JobDocument) -> f64 {
    if job.requirements.education.is_empty() {
        return 100.0;
    }
    if resume.education.is_empty() {
        return 0.0;
    }
    if resume.education.iter().any(|e| !e.degree.trim().is_empty()) {
        100.0
    } else {
        PARTIAL_EDUCATION_CREDIT
    }
}

/// Additive structural completeness, capped at 100.
pub fn format_score(resume: &ResumeDocument) -> f64 {
    let mut score = 0.0;
    if resume.has_name() {
        score += FORMAT_NAME_POINTS;
    }
    if resume.has_summary() {
        score += FORMAT_SUMMARY_POINTS;
    }
    if !resume.experience.is_empty() {
        score += FORMAT_EXPERIENCE_POINTS;
    }
    if !resume.skills.is_empty() {
        score += FORMAT_SKILLS_POINTS;
    }
    if !resume.education.is_empty() {
        score += FORMAT_EDUCATION_POINTS;
    }
    f64::min(score, 100.0)
}

/// Weighted ATS score plus its rounded sub-scores.
pub fn compute_ats_score(
    resume: &ResumeDocument,
    job: &JobDocument,
    weights: &AtsWeights,
) -> (u8, AtsBreakdown) {
    let keyword = keyword_match(resume, job);
    let experience = experience_relevance(resume);
    let education = education_match(resume, job);
    let format = format_score(resume);

    let combined = weights.keyword_match * keyword
        + weights.experience_relevance * experience
        + weights.education_match * education
        + weights.format * format;

    debug!(keyword, experience, education, format, combined, "ats sub-scores");

    let breakdown = AtsBreakdown {
        keyword_match: to_percent(keyword),
        experience_relevance: to_percent(experience),
        education_match: to_percent(education),
        format_score: to_percent(format),
    };
    (to_percent(combined), breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobRequirements;
    use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, Skills};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn experience(title: &str, responsibilities: &[&str]) -> ExperienceEntry {
        ExperienceEntry {
            title: title.to_string(),
            company: "Acme".to_string(),
            duration: None,
            responsibilities: strings(responsibilities),
            is_current_role: false,
        }
    }

    fn education(degree: &str) -> EducationEntry {
        EducationEntry {
            degree: degree.to_string(),
            institution: "State University".to_string(),
            year: None,
        }
    }

    fn job_requiring_education() -> JobDocument {
        JobDocument {
            requirements: JobRequirements {
                education: strings(&["Bachelor's degree"]),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_overall_is_rounded_mean() {
        assert_eq!(compute_overall_match(67, 100, 100), 89);
        assert_eq!(compute_overall_match(67, 100, 0), 56); // 55.67
        assert_eq!(compute_overall_match(0, 0, 0), 0);
        assert_eq!(compute_overall_match(100, 100, 100), 100);
        assert_eq!(compute_overall_match(50, 50, 51), 50); // 50.33
    }

    #[test]
    fn test_keyword_match_three_of_five_is_60() {
        let job = JobDocument {
            requirements: JobRequirements {
                technical_skills: strings(&["JavaScript", "React", "Node", "PostgreSQL", "AWS"]),
                ..Default::default()
            },
            ..Default::default()
        };
        let resume = ResumeDocument {
            skills: Skills {
                technical: strings(&["javascript", "react", "aws"]),
                soft: vec![],
            },
            ..Default::default()
        };
        assert!((keyword_match(&resume, &job) - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_keyword_match_empty_job_is_zero() {
        let resume = ResumeDocument {
            summary: Some("Seasoned engineer".to_string()),
            ..Default::default()
        };
        assert_eq!(keyword_match(&resume, &JobDocument::default()), 0.0);
    }

    #[test]
    fn test_experience_relevance_zero_without_entries() {
        assert_eq!(experience_relevance(&ResumeDocument::default()), 0.0);
    }

    #[test]
    fn test_experience_relevance_counts_substantive_entries() {
        let resume = ResumeDocument {
            experience: vec![
                experience("Engineer", &["Shipped billing service"]),
                experience("", &["Untitled work"]),
                experience("Intern", &[]),
                experience("Lead", &["   "]),
            ],
            ..Default::default()
        };
        assert!((experience_relevance(&resume) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_education_match_no_requirement_is_full() {
        assert_eq!(
            education_match(&ResumeDocument::default(), &JobDocument::default()),
            100.0
        );
    }

    #[test]
    fn test_education_match_with_degree_is_full() {
        let resume = ResumeDocument {
            education: vec![education("BSc Computer Science")],
            ..Default::default()
        };
        assert_eq!(education_match(&resume, &job_requiring_education()), 100.0);
    }

    #[test]
    fn test_education_match_without_degree_is_partial() {
        let resume = ResumeDocument {
            education: vec![education("")],
            ..Default::default()
        };
        assert_eq!(education_match(&resume, &job_requiring_education()), 50.0);
    }

    #[test]
    fn test_education_match_without_entries_is_zero() {
        assert_eq!(
            education_match(&ResumeDocument::default(), &job_requiring_education()),
            0.0
        );
    }

    #[test]
    fn test_format_score_name_experience_skills_is_70() {
        let resume = ResumeDocument {
            personal_info: PersonalInfo {
                full_name: Some("Ada Lovelace".to_string()),
                ..Default::default()
            },
            skills: Skills {
                technical: strings(&["Rust"]),
                soft: vec![],
            },
            experience: vec![experience("Engineer", &["Built the engine"])],
            ..Default::default()
        };
        assert_eq!(format_score(&resume), 70.0);
    }

    #[test]
    fn test_format_score_complete_resume_is_100() {
        let resume = ResumeDocument {
            personal_info: PersonalInfo {
                full_name: Some("Ada Lovelace".to_string()),
                ..Default::default()
            },
            summary: Some("Analyst".to_string()),
            skills: Skills {
                technical: vec![],
                soft: strings(&["Communication"]),
            },
            experience: vec![experience("Engineer", &[])],
            education: vec![education("BSc")],
            certifications: vec![],
        };
        assert_eq!(format_score(&resume), 100.0);
    }

    #[test]
    fn test_blank_name_and_summary_earn_nothing() {
        let resume = ResumeDocument {
            personal_info: PersonalInfo {
                full_name: Some("  ".to_string()),
                ..Default::default()
            },
            summary: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(format_score(&resume), 0.0);
    }

    #[test]
    fn test_no_experience_contributes_nothing_to_ats() {
        let resume = ResumeDocument {
            personal_info: PersonalInfo {
                full_name: Some("Ada".to_string()),
                ..Default::default()
            },
            summary: Some("Rust engineer".to_string()),
            skills: Skills {
                technical: strings(&["Rust"]),
                soft: vec![],
            },
            education: vec![education("BSc")],
            ..Default::default()
        };
        let job = JobDocument {
            title: "Rust engineer".to_string(),
            ..Default::default()
        };
        let (score, breakdown) = compute_ats_score(&resume, &job, &AtsWeights::default());
        assert_eq!(breakdown.experience_relevance, 0);
        assert_eq!(breakdown.keyword_match, 100);
        assert_eq!(breakdown.education_match, 100);
        assert_eq!(breakdown.format_score, 70);
        // 0.40*100 + 0.30*0 + 0.15*100 + 0.15*70 = 65.5
        assert_eq!(score, 66);
    }

    #[test]
    fn test_ats_score_bounded() {
        let (score, _) = compute_ats_score(
            &ResumeDocument::default(),
            &JobDocument::default(),
            &AtsWeights::default(),
        );
        // only the vacuous education term contributes: 0.15 * 100
        assert_eq!(score, 15);

        let heavy = AtsWeights {
            keyword_match: 2.0,
            experience_relevance: 2.0,
            education_match: 2.0,
            format: 2.0,
        };
        let (score, _) = compute_ats_score(&ResumeDocument::default(), &JobDocument::default(), &heavy);
        assert!(score <= 100);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = AtsWeights::default();
        let sum = w.keyword_match + w.experience_relevance + w.education_match + w.format;
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
