use serde::{Deserialize, Serialize};

/// Requirement statements extracted from a job posting, grouped by category.
/// Any category may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirements {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    /// Free-text statements such as "5+ years of backend experience".
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
}

/// Structured extraction of a job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "serde_json::Value")]
pub struct JobDocument {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub seniority_level: String,
    pub salary_range: Option<String>,
    pub requirements: JobRequirements,
    pub responsibilities: Vec<String>,
}

impl JobDocument {
    /// Every free-text fragment an ATS would search the résumé for.
    pub fn text_fragments(&self) -> Vec<&str> {
        let reqs = &self.requirements;
        let mut fragments = vec![self.title.as_str(), self.seniority_level.as_str()];
        for list in [
            &reqs.technical_skills,
            &reqs.soft_skills,
            &reqs.experience,
            &reqs.education,
            &reqs.certifications,
            &self.responsibilities,
        ] {
            fragments.extend(list.iter().map(String::as_str));
        }
        fragments
    }
}
