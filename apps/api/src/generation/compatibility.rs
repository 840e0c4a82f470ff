//! Deterministic job-compatibility analysis for the fallback path.
//!
//! Pure keyword overlap, no LLM call: scan the job description for known
//! technical skills, tag each one present/absent against the candidate's
//! skills text, and score the coverage. Bounded and fully testable.

use crate::models::cv::{JobCompatibilityAnalysis, LearningResource, SkillStatus};

/// Common technical skills scanned for in job descriptions.
/// Display casing is kept for output; matching is case-insensitive.
const SKILL_LEXICON: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "Rust",
    "Go",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "React",
    "Angular",
    "Vue",
    "Node",
    "Django",
    "Flask",
    "FastAPI",
    "Spring",
    "SQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Git",
    "CI/CD",
    "Linux",
    "GraphQL",
    "REST",
    "Kafka",
    "Spark",
    "Agile",
    "Scrum",
];

const MAX_SUGGESTIONS: usize = 5;
/// Learning resources are produced for at most this many missing skills.
const MAX_RESOURCES: usize = 3;

/// Compares the candidate's free-text skills against a target job
/// description. Score = covered/required × 100, clamped to [0, 100].
///
/// When the lexicon finds nothing in the JD, falls back to scoring how many
/// of the candidate's own listed skills the JD text mentions.
pub fn analyze_compatibility(skills_text: &str, job_description: &str) -> JobCompatibilityAnalysis {
    let jd_lower = job_description.to_lowercase();
    let skills_lower = skills_text.to_lowercase();

    let required: Vec<&str> = SKILL_LEXICON
        .iter()
        .copied()
        .filter(|skill| contains_term(&jd_lower, &skill.to_lowercase()))
        .collect();

    let skills: Vec<SkillStatus> = if required.is_empty() {
        candidate_skill_overlap(skills_text, &jd_lower)
    } else {
        required
            .iter()
            .map(|skill| SkillStatus {
                name: (*skill).to_string(),
                has_skill: contains_term(&skills_lower, &skill.to_lowercase()),
            })
            .collect()
    };

    let present = skills.iter().filter(|s| s.has_skill).count();
    let compatibility_score = if skills.is_empty() {
        0.0
    } else {
        (present as f32 / skills.len() as f32 * 100.0).round()
    }
    .clamp(0.0, 100.0);

    let missing: Vec<String> = skills
        .iter()
        .filter(|s| !s.has_skill)
        .map(|s| s.name.clone())
        .collect();

    JobCompatibilityAnalysis {
        compatibility_score,
        improvement_suggestions: build_suggestions(&missing),
        learning_resources: build_resources(&missing),
        skills,
    }
}

/// Fallback scoring when the lexicon finds nothing: every candidate skill
/// the JD text mentions counts as a match.
fn candidate_skill_overlap(skills_text: &str, jd_lower: &str) -> Vec<SkillStatus> {
    skills_text
        .split(|c| matches!(c, ',' | ';' | '\n'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|skill| SkillStatus {
            name: skill.to_string(),
            has_skill: contains_term(jd_lower, &skill.to_lowercase()),
        })
        .collect()
}

fn build_suggestions(missing: &[String]) -> Vec<String> {
    if missing.is_empty() {
        return vec![
            "Strong skill coverage for this job. Tailor your summary and achievements to the job description wording.".to_string(),
        ];
    }
    missing
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|skill| {
            format!("Build hands-on experience with {skill}; the job description calls for it.")
        })
        .collect()
}

fn build_resources(missing: &[String]) -> Vec<LearningResource> {
    missing
        .iter()
        .take(MAX_RESOURCES)
        .enumerate()
        .map(|(index, skill)| {
            let query = encode_query(skill);
            // Rotate platforms so the list does not read as one vendor.
            match index % 3 {
                0 => LearningResource {
                    title: format!("{skill} courses"),
                    url: format!("https://www.coursera.org/search?query={query}"),
                    resource_type: "course".to_string(),
                    platform: "Coursera".to_string(),
                    description: format!("Structured courses covering {skill} fundamentals."),
                },
                1 => LearningResource {
                    title: format!("{skill} tutorials"),
                    url: format!("https://www.youtube.com/results?search_query={query}+tutorial"),
                    resource_type: "tutorial".to_string(),
                    platform: "YouTube".to_string(),
                    description: format!("Hands-on video tutorials for {skill}."),
                },
                _ => LearningResource {
                    title: format!("{skill} documentation"),
                    url: format!("https://devdocs.io/#q={query}"),
                    resource_type: "documentation".to_string(),
                    platform: "DevDocs".to_string(),
                    description: format!("Reference documentation for {skill}."),
                },
            }
        })
        .collect()
}

/// Substring match with word boundaries: neighbors of the hit must not be
/// alphanumeric, so "Go" does not match inside "Google".
fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(term) {
        let hit = start + pos;
        let end = hit + term.len();
        let before_ok = haystack[..hit]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = end;
    }
    false
}

/// Percent-encodes a lexicon term for use in a search URL. Terms are ASCII.
fn encode_query(term: &str) -> String {
    term.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_string()
            } else {
                format!("%{:02X}", c as u32)
            }
        })
        .collect()
}
