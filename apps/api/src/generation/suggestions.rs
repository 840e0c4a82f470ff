//! Rule-based improvement suggestions derived from the final CV content.
//!
//! Applied to both the LLM and the fallback output, after normalization.
//! Pure string checks; no LLM call.

use crate::models::cv::GeneratedCv;

/// Summaries shorter than this read as placeholders, not summaries.
const MIN_SUMMARY_LEN: usize = 40;
const MIN_SKILL_COUNT: usize = 3;

/// Inspects a generated CV and returns ordered, deduplicated advice.
pub fn derive_suggestions(cv: &GeneratedCv) -> Vec<String> {
    let mut suggestions = Vec::new();

    if cv.professional_summary.trim().chars().count() < MIN_SUMMARY_LEN {
        suggestions.push(
            "Add a professional summary of two or three sentences highlighting your strongest selling points."
                .to_string(),
        );
    }

    let unquantified = cv
        .experience_entries
        .iter()
        .flat_map(|entry| entry.achievements.iter())
        .filter(|achievement| !is_quantified(achievement))
        .count();
    if unquantified > 0 {
        suggestions.push(format!(
            "Quantify your achievements: {unquantified} of them carry no number, percentage or time metric."
        ));
    }

    if cv.skills.len() < MIN_SKILL_COUNT {
        suggestions.push(
            "List more skills: include languages, frameworks, tools and relevant soft skills."
                .to_string(),
        );
    }

    if cv.education_entries.is_empty() {
        suggestions.push("Include your education: course, institution and period.".to_string());
    }

    if cv.certifications.as_ref().map_or(true, Vec::is_empty) {
        suggestions
            .push("Consider adding relevant certifications to strengthen your profile.".to_string());
    }

    suggestions.dedup();
    suggestions
}

/// An achievement counts as quantified when it carries a digit, a
/// percentage, or a currency amount.
fn is_quantified(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        || text.contains('%')
        || ['$', '€', '£'].iter().any(|c| text.contains(*c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn complete_cv() -> GeneratedCv {
        GeneratedCv {
            personal_info: PersonalInfo {
                name: "Maria Silva".to_string(),
                title: "Backend Developer".to_string(),
                email: Some("maria@gmail.com".to_string()),
                phone: None,
            },
            professional_summary:
                "Backend developer with five years of experience shipping Python services."
                    .to_string(),
            experience_entries: vec![ExperienceEntry {
                title: "Backend Developer".to_string(),
                company: "TechBR".to_string(),
                period: "2021 - Present".to_string(),
                achievements: vec!["Cut API latency by 40% through caching".to_string()],
            }],
            education_entries: vec![EducationEntry {
                degree: "BSc in Computer Science".to_string(),
                institution: "UFMG".to_string(),
                period: "2017 - 2021".to_string(),
            }],
            skills: vec![
                "Python".to_string(),
                "Django".to_string(),
                "PostgreSQL".to_string(),
            ],
            certifications: Some(vec!["AWS Solutions Architect".to_string()]),
            languages: None,
        }
    }

    #[test]
    fn test_complete_cv_yields_no_suggestions() {
        assert!(derive_suggestions(&complete_cv()).is_empty());
    }

    #[test]
    fn test_short_summary_is_flagged() {
        let mut cv = complete_cv();
        cv.professional_summary = "Developer.".to_string();
        let suggestions = derive_suggestions(&cv);
        assert!(suggestions.iter().any(|s| s.contains("professional summary")));
    }

    #[test]
    fn test_unquantified_achievements_are_counted() {
        let mut cv = complete_cv();
        cv.experience_entries[0].achievements = vec![
            "Improved the user experience".to_string(),
            "Cut API latency by 40%".to_string(),
            "Helped the team deliver projects".to_string(),
        ];
        let suggestions = derive_suggestions(&cv);
        assert!(suggestions.iter().any(|s| s.contains("2 of them")));
    }

    #[test]
    fn test_few_skills_are_flagged() {
        let mut cv = complete_cv();
        cv.skills = vec!["Python".to_string()];
        let suggestions = derive_suggestions(&cv);
        assert!(suggestions.iter().any(|s| s.contains("List more skills")));
    }

    #[test]
    fn test_missing_education_is_flagged() {
        let mut cv = complete_cv();
        cv.education_entries.clear();
        let suggestions = derive_suggestions(&cv);
        assert!(suggestions.iter().any(|s| s.contains("education")));
    }

    #[test]
    fn test_missing_certifications_are_flagged() {
        let mut cv = complete_cv();
        cv.certifications = None;
        let suggestions = derive_suggestions(&cv);
        assert!(suggestions.iter().any(|s| s.contains("certifications")));

        cv.certifications = Some(vec![]);
        let suggestions = derive_suggestions(&cv);
        assert!(suggestions.iter().any(|s| s.contains("certifications")));
    }

    #[test]
    fn test_quantified_detection() {
        assert!(is_quantified("Reduced latency by 40%"));
        assert!(is_quantified("Saved $50,000 annually"));
        assert!(is_quantified("Generated €200k in revenue"));
        assert!(is_quantified("Built 3 microservices"));
        assert!(!is_quantified("Improved the user experience"));
        assert!(!is_quantified("Led major improvements"));
    }
}
