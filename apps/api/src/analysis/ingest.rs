//! Boundary validation for untyped JSON coming from the extractor or an
//! HTTP client.
//!
//! Only the outer shape is strict: the payload must be an object carrying
//! `resume` and `job`. Everything below that is coerced. Missing or mistyped
//! fields become empty values, so partial documents still score.

use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::AppError;
use crate::models::job::{JobDocument, JobRequirements};
use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument, Skills};

const RESUME_KEYS: &[&str] = &["resume"];
const JOB_KEYS: &[&str] = &["job", "jobDescription", "job_description"];

/// Splits an analysis payload into typed documents.
pub fn parse_analysis_request(payload: &Value) -> Result<(ResumeDocument, JobDocument), AppError> {
    let object = payload.as_object().ok_or_else(|| {
        AppError::InvalidInputShape("request body must be a JSON object".to_string())
    })?;

    let resume = lookup(object, RESUME_KEYS)
        .ok_or_else(|| AppError::InvalidInputShape("missing top-level `resume`".to_string()))?;
    let job = lookup(object, JOB_KEYS)
        .ok_or_else(|| AppError::InvalidInputShape("missing top-level `job`".to_string()))?;

    Ok((resume_from_value(resume), job_from_value(job)))
}

/// Present-key lookup: a key set to `null` still counts as present.
fn lookup<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| object.get(*k))
}

/// First non-null value under any of `keys`.
fn field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let object = value.as_object()?;
    keys.iter()
        .filter_map(|k| object.get(*k))
        .find(|v| !v.is_null())
}

fn coerce_string(value: Option<&Value>) -> Option<String> {
    let text = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // LLMs sometimes wrap a skill as {"name": "Rust", "level": "expert"}
        Value::Object(_) => return coerce_string(field(value?, &["name", "text", "value"])),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

fn string_field(value: &Value, keys: &[&str]) -> String {
    coerce_string(field(value, keys)).unwrap_or_default()
}

/// Arrays keep their order; a bare string is split on commas, semicolons,
/// and newlines. Blanks are dropped and duplicates (case-insensitive) keep
/// the first spelling.
fn coerce_string_list(value: Option<&Value>) -> Vec<String> {
    coerce_list(value, true)
}

/// Like `coerce_string_list`, but a bare string is one statement:
/// "Bachelor's degree in CS, Math, or related" must not become three.
fn coerce_statement_list(value: Option<&Value>) -> Vec<String> {
    coerce_list(value, false)
}

fn coerce_list(value: Option<&Value>, split_bare_string: bool) -> Vec<String> {
    let raw: Vec<String> = match value {
        Some(Value::Array(items)) => items.iter().filter_map(|v| coerce_string(Some(v))).collect(),
        Some(Value::String(s)) if split_bare_string => s
            .split([',', ';', '\n'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(v @ Value::String(_)) => coerce_string(Some(v)).into_iter().collect(),
        Some(Value::Null) | None => vec![],
        Some(other) => {
            warn!("ignoring non-list value where a list was expected: {other}");
            vec![]
        }
    };
    dedup_case_insensitive(raw)
}

fn list_field(value: &Value, keys: &[&str]) -> Vec<String> {
    coerce_string_list(field(value, keys))
}

fn statement_list_field(value: &Value, keys: &[&str]) -> Vec<String> {
    coerce_statement_list(field(value, keys))
}

fn dedup_case_insensitive(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}

fn coerce_bool(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes"),
        _ => false,
    }
}

/// Object entries of an array; anything else is skipped.
fn objects<'a>(value: Option<&'a Value>, section: &str) -> Vec<&'a Value> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| {
                let keep = item.is_object();
                if !keep {
                    warn!("skipping non-object {section} entry");
                }
                keep
            })
            .collect(),
        // a single entry given without the surrounding array
        Some(v @ Value::Object(_)) => vec![v],
        _ => vec![],
    }
}

pub fn resume_from_value(value: &Value) -> ResumeDocument {
    if !value.is_object() {
        warn!("resume is not a JSON object; scoring it as empty");
        return ResumeDocument::default();
    }

    let info = field(value, &["personalInfo", "personal_info"]);
    let info_field = |keys: &[&str]| info.and_then(|i| coerce_string(field(i, keys)));
    let personal_info = PersonalInfo {
        full_name: info_field(&["fullName", "full_name", "name"])
            .or_else(|| coerce_string(field(value, &["fullName", "full_name", "name"]))),
        email: info_field(&["email"]),
        phone: info_field(&["phone"]),
        location: info_field(&["location"]),
    };

    let skills = match field(value, &["skills"]) {
        Some(skills @ Value::Object(_)) => Skills {
            technical: list_field(skills, &["technical", "technicalSkills", "technical_skills"]),
            soft: list_field(skills, &["soft", "softSkills", "soft_skills"]),
        },
        // a flat skill list is read as technical skills
        flat => Skills {
            technical: coerce_string_list(flat),
            soft: vec![],
        },
    };

    let experience = objects(
        field(value, &["experience", "workExperience", "work_experience"]),
        "experience",
    )
    .into_iter()
    .map(|entry| ExperienceEntry {
        title: string_field(entry, &["title", "position", "role"]),
        company: string_field(entry, &["company", "employer", "organization"]),
        duration: coerce_string(field(entry, &["duration", "dates", "period"])),
        responsibilities: list_field(
            entry,
            &["responsibilities", "bullets", "achievements", "highlights"],
        ),
        is_current_role: coerce_bool(field(
            entry,
            &["isCurrentRole", "is_current_role", "current"],
        )),
    })
    .collect();

    let education = objects(field(value, &["education"]), "education")
        .into_iter()
        .map(|entry| EducationEntry {
            degree: string_field(entry, &["degree", "qualification"]),
            institution: string_field(entry, &["institution", "school", "university"]),
            year: coerce_string(field(entry, &["year", "graduationYear", "graduation_year"])),
        })
        .collect();

    ResumeDocument {
        personal_info,
        summary: coerce_string(field(
            value,
            &["summary", "professionalSummary", "professional_summary"],
        )),
        skills,
        experience,
        education,
        certifications: list_field(value, &["certifications"]),
    }
}

pub fn job_from_value(value: &Value) -> JobDocument {
    if !value.is_object() {
        warn!("job is not a JSON object; scoring it as empty");
        return JobDocument::default();
    }

    let requirements = match field(value, &["requirements"]) {
        Some(reqs @ Value::Object(_)) => JobRequirements {
            technical_skills: list_field(reqs, &["technicalSkills", "technical_skills"]),
            soft_skills: list_field(reqs, &["softSkills", "soft_skills"]),
            experience: statement_list_field(reqs, &["experience"]),
            education: statement_list_field(reqs, &["education"]),
            certifications: list_field(reqs, &["certifications"]),
        },
        None => JobRequirements::default(),
        // an uncategorized requirement list is read as technical skills
        flat => {
            warn!("job requirements are not grouped by category; reading them as technical skills");
            JobRequirements {
                technical_skills: coerce_string_list(flat),
                ..Default::default()
            }
        }
    };

    JobDocument {
        title: string_field(value, &["title", "jobTitle", "job_title"]),
        company: string_field(value, &["company"]),
        location: string_field(value, &["location"]),
        job_type: string_field(value, &["jobType", "job_type"]),
        seniority_level: string_field(value, &["seniorityLevel", "seniority_level", "seniority"]),
        salary_range: coerce_string(field(value, &["salaryRange", "salary_range"])),
        requirements,
        responsibilities: list_field(value, &["responsibilities"]),
    }
}

impl From<Value> for ResumeDocument {
    fn from(value: Value) -> Self {
        resume_from_value(&value)
    }
}

impl From<Value> for JobDocument {
    fn from(value: Value) -> Self {
        job_from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_payload_is_invalid_shape() {
        let err = parse_analysis_request(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, AppError::InvalidInputShape(_)));
    }

    #[test]
    fn test_missing_resume_is_invalid_shape() {
        let err = parse_analysis_request(&json!({ "job": {} })).unwrap_err();
        assert!(matches!(err, AppError::InvalidInputShape(ref m) if m.contains("resume")));
    }

    #[test]
    fn test_missing_job_is_invalid_shape() {
        let err = parse_analysis_request(&json!({ "resume": {} })).unwrap_err();
        assert!(matches!(err, AppError::InvalidInputShape(ref m) if m.contains("job")));
    }

    #[test]
    fn test_empty_documents_are_accepted() {
        let (resume, job) = parse_analysis_request(&json!({ "resume": {}, "job": {} })).unwrap();
        assert_eq!(resume, ResumeDocument::default());
        assert_eq!(job, JobDocument::default());
    }

    #[test]
    fn test_job_description_alias_is_accepted() {
        let payload = json!({ "resume": {}, "jobDescription": { "title": "SRE" } });
        let (_, job) = parse_analysis_request(&payload).unwrap();
        assert_eq!(job.title, "SRE");
    }

    #[test]
    fn test_full_camel_case_resume() {
        let resume = resume_from_value(&json!({
            "personalInfo": {
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "555-0100",
                "location": "London"
            },
            "summary": "Analytical engineer",
            "skills": { "technical": ["Rust", "rust", " ", "Go"], "soft": ["Leadership"] },
            "experience": [{
                "title": "Engineer",
                "company": "Analytical Engines Ltd",
                "duration": "1842 - 1843",
                "responsibilities": ["Wrote the first program"],
                "isCurrentRole": true
            }],
            "education": [{ "degree": "Mathematics", "institution": "Home", "year": 1835 }],
            "certifications": ["AWS Solutions Architect"]
        }));

        assert_eq!(resume.personal_info.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(resume.personal_info.location.as_deref(), Some("London"));
        assert_eq!(resume.skills.technical, vec!["Rust", "Go"]);
        assert_eq!(resume.skills.soft, vec!["Leadership"]);
        assert_eq!(resume.experience.len(), 1);
        assert!(resume.experience[0].is_current_role);
        assert_eq!(resume.experience[0].duration.as_deref(), Some("1842 - 1843"));
        assert_eq!(resume.education[0].year.as_deref(), Some("1835"));
        assert_eq!(resume.certifications, vec!["AWS Solutions Architect"]);
    }

    #[test]
    fn test_snake_case_and_aliases() {
        let resume = resume_from_value(&json!({
            "personal_info": { "name": "Grace" },
            "professional_summary": "Compiler pioneer",
            "work_experience": [{ "position": "Rear Admiral", "employer": "US Navy", "bullets": "COBOL; Debugging" }],
            "education": [{ "qualification": "PhD", "school": "Yale" }]
        }));

        assert_eq!(resume.personal_info.full_name.as_deref(), Some("Grace"));
        assert_eq!(resume.summary.as_deref(), Some("Compiler pioneer"));
        assert_eq!(resume.experience[0].title, "Rear Admiral");
        assert_eq!(resume.experience[0].responsibilities, vec!["COBOL", "Debugging"]);
        assert_eq!(resume.education[0].degree, "PhD");
        assert_eq!(resume.education[0].institution, "Yale");
    }

    #[test]
    fn test_flat_skill_list_is_technical() {
        let resume = resume_from_value(&json!({ "skills": "React, Node.js, AWS" }));
        assert_eq!(resume.skills.technical, vec!["React", "Node.js", "AWS"]);
        assert!(resume.skills.soft.is_empty());
    }

    #[test]
    fn test_skill_objects_use_name() {
        let resume = resume_from_value(&json!({
            "skills": { "technical": [{ "name": "Kotlin", "level": "expert" }, 42] }
        }));
        assert_eq!(resume.skills.technical, vec!["Kotlin", "42"]);
    }

    #[test]
    fn test_mistyped_fields_degrade_to_empty() {
        let resume = resume_from_value(&json!({
            "personalInfo": "not an object",
            "skills": 17,
            "experience": ["just a string", { "title": "Dev" }],
            "education": null,
            "certifications": { "unexpected": true }
        }));

        assert_eq!(resume.personal_info, PersonalInfo::default());
        assert!(resume.skills.is_empty());
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].title, "Dev");
        assert!(resume.experience[0].responsibilities.is_empty());
        assert!(resume.education.is_empty());
        assert!(resume.certifications.is_empty());
    }

    #[test]
    fn test_non_object_resume_is_empty() {
        assert_eq!(resume_from_value(&json!("text")), ResumeDocument::default());
        assert_eq!(job_from_value(&json!(null)), JobDocument::default());
    }

    #[test]
    fn test_job_requirements_are_coerced() {
        let job = job_from_value(&json!({
            "title": "Frontend Engineer",
            "company": "Acme",
            "jobType": "full-time",
            "seniority_level": "senior",
            "salaryRange": "$120k - $150k",
            "requirements": {
                "technicalSkills": ["React", "Node.js", "AWS"],
                "soft_skills": ["Communication"],
                "experience": "5+ years of frontend experience",
                "education": [],
                "certifications": null
            },
            "responsibilities": ["Build UI"]
        }));

        assert_eq!(job.title, "Frontend Engineer");
        assert_eq!(job.job_type, "full-time");
        assert_eq!(job.seniority_level, "senior");
        assert_eq!(job.salary_range.as_deref(), Some("$120k - $150k"));
        assert_eq!(job.requirements.technical_skills.len(), 3);
        assert_eq!(job.requirements.soft_skills, vec!["Communication"]);
        assert_eq!(
            job.requirements.experience,
            vec!["5+ years of frontend experience"]
        );
        assert!(job.requirements.education.is_empty());
        assert!(job.requirements.certifications.is_empty());
        assert_eq!(job.responsibilities, vec!["Build UI"]);
    }

    #[test]
    fn test_documents_deserialize_through_coercion() {
        let resume: ResumeDocument =
            serde_json::from_str(r#"{"skills": {"technical": ["Rust"]}, "experience": 5}"#).unwrap();
        assert_eq!(resume.skills.technical, vec!["Rust"]);
        assert!(resume.experience.is_empty());

        let job: JobDocument = serde_json::from_str(r#"{"title": "SRE"}"#).unwrap();
        assert_eq!(job.title, "SRE");
    }

    #[test]
    fn test_bare_requirement_statement_is_not_split() {
        let job = job_from_value(&json!({
            "requirements": {
                "education": "Bachelor's degree in Computer Science, Mathematics, or a related field",
                "experience": "3+ years of backend work; on-call experience"
            }
        }));
        assert_eq!(
            job.requirements.education,
            vec!["Bachelor's degree in Computer Science, Mathematics, or a related field"]
        );
        assert_eq!(
            job.requirements.experience,
            vec!["3+ years of backend work; on-call experience"]
        );
    }

    #[test]
    fn test_bare_skill_string_is_still_split() {
        let job = job_from_value(&json!({
            "requirements": { "technicalSkills": "React, AWS", "certifications": "CKA; CKAD" }
        }));
        assert_eq!(job.requirements.technical_skills, vec!["React", "AWS"]);
        assert_eq!(job.requirements.certifications, vec!["CKA", "CKAD"]);
    }

    #[test]
    fn test_flat_requirement_list_is_technical() {
        let job = job_from_value(&json!({
            "requirements": ["React", "AWS", "Bachelor's degree"]
        }));
        assert_eq!(
            job.requirements.technical_skills,
            vec!["React", "AWS", "Bachelor's degree"]
        );
        assert!(job.requirements.education.is_empty());
    }

    #[test]
    fn test_flat_requirement_string_is_technical() {
        let job = job_from_value(&json!({ "requirements": "Rust, Kafka" }));
        assert_eq!(job.requirements.technical_skills, vec!["Rust", "Kafka"]);
    }
}
