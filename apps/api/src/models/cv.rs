use serde::{Deserialize, Serialize};

/// Inbound CV generation request: free-text career narrative plus contact
/// fields. Validation (generation::validation) normalizes fields in place
/// and enforces the contact-method invariant before anything else runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvRequest {
    pub full_name: String,
    pub desired_role: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub professional_experience: String,
    pub education: String,
    pub skills: String,
    /// Presence triggers the job-compatibility analysis downstream.
    pub target_job_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

/// Structured CV produced by either the LLM path or the template fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCv {
    pub personal_info: PersonalInfo,
    pub professional_summary: String,
    pub experience_entries: Vec<ExperienceEntry>,
    pub education_entries: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Option<Vec<String>>,
    pub languages: Option<Vec<LanguageEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillStatus {
    pub name: String,
    pub has_skill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub platform: String,
    pub description: String,
}

/// Scored comparison between the candidate's skills and a target job.
/// Only present when the request carried a `target_job_description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCompatibilityAnalysis {
    /// Bounded to [0, 100].
    pub compatibility_score: f32,
    pub skills: Vec<SkillStatus>,
    pub improvement_suggestions: Vec<String>,
    pub learning_resources: Vec<LearningResource>,
}

/// Outbound response body.
///
/// `suggestions` is always server-derived (generation::suggestions) and is
/// never requested from the LLM, so it defaults to empty on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvResponse {
    pub generated_cv: GeneratedCv,
    pub job_compatibility: Option<JobCompatibilityAnalysis>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}
