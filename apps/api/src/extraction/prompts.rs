// Extraction prompt constants. Only the output schema is load-bearing:
// whatever comes back is coerced by analysis::ingest.

pub const RESUME_EXTRACT_SYSTEM: &str = "\
You are a precise resume data extractor. \
You MUST respond with valid JSON only. \
Do NOT use markdown code fences. \
Do NOT include explanations or apologies. \
Never invent facts that are not in the input text.";

/// Replace `{resume_text}` before sending.
pub const RESUME_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract the following resume into JSON.

INPUT TEXT:
{resume_text}

OUTPUT SCHEMA (return exactly this structure; use "" or [] when absent):
{
  "personalInfo": { "fullName": "", "email": "", "phone": "", "location": "" },
  "summary": "",
  "skills": { "technical": ["..."], "soft": ["..."] },
  "experience": [
    {
      "title": "",
      "company": "",
      "duration": "",
      "responsibilities": ["..."],
      "isCurrentRole": false
    }
  ],
  "education": [ { "degree": "", "institution": "", "year": "" } ],
  "certifications": ["..."]
}

List experience in the order it appears. Do not repeat a skill."#;

pub const JOB_EXTRACT_SYSTEM: &str = "\
You are an expert job description analyst. \
You MUST respond with valid JSON only. \
Do NOT use markdown code fences. \
Do NOT include explanations or apologies.";

/// Replace `{job_text}` before sending.
pub const JOB_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract the following job description into JSON.

INPUT TEXT:
{job_text}

OUTPUT SCHEMA (return exactly this structure; use "" or [] when absent):
{
  "title": "",
  "company": "",
  "location": "",
  "jobType": "",
  "seniorityLevel": "",
  "salaryRange": "",
  "requirements": {
    "technicalSkills": ["..."],
    "softSkills": ["..."],
    "experience": ["5+ years of backend experience"],
    "education": ["Bachelor's degree in Computer Science"],
    "certifications": ["..."]
  },
  "responsibilities": ["..."]
}

Each requirement must be one atomic statement."#;
