//! Deterministic template-based CV assembly.
//!
//! Used whenever the LLM path is unavailable or returns unusable output.
//! Pure string/structure assembly over the validated request; must never
//! fail for input that passed validation.

use crate::generation::compatibility::analyze_compatibility;
use crate::models::cv::{
    CvRequest, CvResponse, EducationEntry, ExperienceEntry, GeneratedCv, PersonalInfo,
};

const UNSPECIFIED: &str = "Not specified";

/// Assembles a minimally formatted CV directly from the request fields.
/// When a target job description is present, attaches the deterministic
/// keyword compatibility analysis.
pub fn generate_fallback_cv(request: &CvRequest) -> CvResponse {
    let skills = split_skills(&request.skills);

    let generated_cv = GeneratedCv {
        personal_info: PersonalInfo {
            name: request.full_name.clone(),
            title: request.desired_role.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
        },
        professional_summary: build_summary(request, &skills),
        experience_entries: vec![ExperienceEntry {
            title: request.desired_role.clone(),
            company: UNSPECIFIED.to_string(),
            period: UNSPECIFIED.to_string(),
            achievements: split_sentences(&request.professional_experience),
        }],
        education_entries: split_sentences(&request.education)
            .into_iter()
            .map(|sentence| EducationEntry {
                degree: sentence,
                institution: UNSPECIFIED.to_string(),
                period: UNSPECIFIED.to_string(),
            })
            .collect(),
        skills,
        certifications: None,
        languages: None,
    };

    let job_compatibility = request
        .target_job_description
        .as_deref()
        .map(|job_description| analyze_compatibility(&request.skills, job_description));

    CvResponse {
        generated_cv,
        job_compatibility,
        suggestions: Vec::new(),
    }
}

fn build_summary(request: &CvRequest, skills: &[String]) -> String {
    let mut summary = format!(
        "{} with hands-on professional experience.",
        request.desired_role
    );
    if !skills.is_empty() {
        let top: Vec<&str> = skills.iter().take(3).map(String::as_str).collect();
        summary.push_str(&format!(" Key competencies include {}.", top.join(", ")));
    }
    summary.push_str(" Motivated to keep growing and to deliver measurable results.");
    summary
}

/// Splits free text into sentence-like fragments. Guarantees at least one
/// fragment for any non-blank input.
fn split_sentences(text: &str) -> Vec<String> {
    let fragments: Vec<String> = text
        .split(['.', ';', '\n'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(ToString::to_string)
        .collect();
    if fragments.is_empty() {
        vec![text.trim().to_string()]
    } else {
        fragments
    }
}

/// Splits a free-text skill description on commas, semicolons and newlines.
fn split_skills(text: &str) -> Vec<String> {
    text.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(with_job: bool) -> CvRequest {
        CvRequest {
            full_name: "Maria Silva".to_string(),
            desired_role: "Backend Developer".to_string(),
            email: Some("maria@gmail.com".to_string()),
            phone: Some("11999999999".to_string()),
            professional_experience:
                "Built REST APIs in Python. Led the migration to PostgreSQL; cut costs by 30%."
                    .to_string(),
            education: "BSc in Computer Science, UFMG, 2017-2021.".to_string(),
            skills: "Python, Django; PostgreSQL\nDocker".to_string(),
            target_job_description: with_job
                .then(|| "Python engineer with Kubernetes experience.".to_string()),
        }
    }

    #[test]
    fn test_fallback_carries_contact_and_identity_through() {
        let response = generate_fallback_cv(&request(false));
        let info = &response.generated_cv.personal_info;
        assert_eq!(info.name, "Maria Silva");
        assert_eq!(info.title, "Backend Developer");
        assert_eq!(info.email.as_deref(), Some("maria@gmail.com"));
        assert_eq!(info.phone.as_deref(), Some("11999999999"));
    }

    #[test]
    fn test_fallback_cv_is_never_empty() {
        let response = generate_fallback_cv(&request(false));
        let cv = &response.generated_cv;
        assert!(!cv.professional_summary.is_empty());
        assert!(!cv.experience_entries.is_empty());
        assert!(!cv.experience_entries[0].achievements.is_empty());
        assert!(!cv.education_entries.is_empty());
        assert!(!cv.skills.is_empty());
    }

    #[test]
    fn test_experience_text_splits_into_achievements() {
        let response = generate_fallback_cv(&request(false));
        let achievements = &response.generated_cv.experience_entries[0].achievements;
        assert_eq!(
            achievements,
            &vec![
                "Built REST APIs in Python".to_string(),
                "Led the migration to PostgreSQL".to_string(),
                "cut costs by 30%".to_string(),
            ]
        );
    }

    #[test]
    fn test_skills_split_on_commas_semicolons_and_newlines() {
        let response = generate_fallback_cv(&request(false));
        assert_eq!(
            response.generated_cv.skills,
            vec!["Python", "Django", "PostgreSQL", "Docker"]
        );
    }

    #[test]
    fn test_summary_mentions_role_and_top_skills() {
        let response = generate_fallback_cv(&request(false));
        let summary = &response.generated_cv.professional_summary;
        assert!(summary.contains("Backend Developer"));
        assert!(summary.contains("Python"));
    }

    #[test]
    fn test_compatibility_attached_only_with_target_job() {
        assert!(generate_fallback_cv(&request(false))
            .job_compatibility
            .is_none());
        let with_job = generate_fallback_cv(&request(true));
        let analysis = with_job.job_compatibility.unwrap();
        assert!(analysis.compatibility_score >= 0.0);
        assert!(analysis.compatibility_score <= 100.0);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(
            generate_fallback_cv(&request(true)),
            generate_fallback_cv(&request(true))
        );
    }

    #[test]
    fn test_single_fragment_text_yields_one_achievement() {
        let mut req = request(false);
        req.professional_experience = "twenty chars of work".to_string();
        let response = generate_fallback_cv(&req);
        assert_eq!(
            response.generated_cv.experience_entries[0].achievements,
            vec!["twenty chars of work".to_string()]
        );
    }
}
