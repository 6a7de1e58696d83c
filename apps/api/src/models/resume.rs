use serde::{Deserialize, Serialize};

/// Contact block at the top of a résumé. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Skill sets. Each list is unique under case-insensitive comparison;
/// the first spelling seen is the one kept for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: Option<String>,
    pub responsibilities: Vec<String>,
    pub is_current_role: bool,
}

impl ExperienceEntry {
    /// A titled role with at least one written-out responsibility.
    pub fn is_substantive(&self) -> bool {
        !self.title.trim().is_empty() && self.responsibilities.iter().any(|r| !r.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: Option<String>,
}

/// Structured extraction of a résumé.
///
/// Deserialization goes through `analysis::ingest`, which never fails on
/// sub-fields: absent or mistyped fields become empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "serde_json::Value")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub skills: Skills,
    /// Resume order; most recent first by convention only.
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
}

impl ResumeDocument {
    pub fn has_name(&self) -> bool {
        self.personal_info
            .full_name
            .as_deref()
            .is_some_and(|n| !n.trim().is_empty())
    }

    pub fn has_summary(&self) -> bool {
        self.summary.as_deref().is_some_and(|s| !s.trim().is_empty())
    }

    /// Every free-text fragment an ATS would index from this résumé.
    pub fn text_fragments(&self) -> Vec<&str> {
        let mut fragments = Vec::new();
        if let Some(summary) = self.summary.as_deref() {
            fragments.push(summary);
        }
        fragments.extend(self.skills.technical.iter().map(String::as_str));
        fragments.extend(self.skills.soft.iter().map(String::as_str));
        for entry in &self.experience {
            fragments.push(entry.title.as_str());
            fragments.push(entry.company.as_str());
            fragments.extend(entry.responsibilities.iter().map(String::as_str));
        }
        for entry in &self.education {
            fragments.push(entry.degree.as_str());
            fragments.push(entry.institution.as_str());
        }
        fragments.extend(self.certifications.iter().map(String::as_str));
        fragments
    }
}
