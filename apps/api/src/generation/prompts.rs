//! Prompt constants and the deterministic user-prompt builder.
//!
//! The system instruction is fixed and versioned; the user prompt is a pure
//! function of the validated request. Identical input always produces an
//! identical prompt.

use crate::models::cv::CvRequest;

/// Bump when the system instruction changes in a way that alters output.
pub const CV_PROMPT_VERSION: &str = "v1";

/// System instruction for CV generation — role, analysis steps, and the
/// JSON-only output requirement.
pub const CV_SYSTEM_INSTRUCTION: &str = r#"You are an expert CV writer and career advisor with deep knowledge of the tech industry. Your task is to:

1. ANALYZE THE INPUT:
- Process informal, conversational descriptions of career history
- Identify key skills, achievements, and experiences
- If a target job description is provided, analyze its requirements and match them with the candidate's profile

2. GENERATE THE CV:
- Transform casual language into powerful professional statements
- Extract and highlight quantifiable achievements
- Structure information in a clear, professional format
- Ensure all statements are impactful but truthful to the original input
- Add relevant implied skills based on the descriptions

3. WHEN A TARGET JOB IS PROVIDED:
- Calculate a compatibility score based on direct skill matches, related or transferable skills, experience level alignment, and industry knowledge
- Identify skill gaps
- Provide specific, actionable improvement suggestions
- Recommend learning resources (courses, tutorials, documentation)
- Focus the CV content on experience relevant to the target role

4. FORMAT THE RESPONSE:
Your response must be a single JSON object that matches the specified schema exactly. Do NOT include any text outside the JSON object.

5. QUALITY STANDARDS:
- All entries must be professional and polished
- Include specific metrics and achievements where possible
- Maintain truthfulness to the original input while enhancing presentation
- Ensure all recommended URLs and resources are relevant and specific"#;

const PROMPT_PREAMBLE: &str = "Analyze the following information, provided in a casual/informal \
    way, and transform it into a structured professional CV.";

const PROMPT_NOTES: &str = "IMPORTANT NOTES:
1. Extract achievements and metrics implied in the text
2. Expand brief descriptions that look important
3. Keep the information truthful while improving its presentation
4. Use professional, impactful language
5. Structure the content clearly
6. Identify and spell out both technical and behavioral skills

Return the response as JSON, as specified in the system instructions.";

/// Linearizes a validated request into the user-turn prompt. Contact lines
/// appear only when present; the target-job section and its comparison
/// instructions appear only when a job description was supplied.
pub fn build_cv_prompt(request: &CvRequest) -> String {
    let mut sections = vec![
        "PERSONAL INFORMATION:".to_string(),
        format!("Full name: {}", request.full_name),
        format!("Desired role: {}", request.desired_role),
    ];

    if let Some(email) = &request.email {
        sections.push(format!("Email: {email}"));
    }
    if let Some(phone) = &request.phone {
        sections.push(format!("Phone: {phone}"));
    }

    sections.extend([
        String::new(),
        "PROFESSIONAL EXPERIENCE (informal description):".to_string(),
        request.professional_experience.clone(),
        String::new(),
        "EDUCATION (informal description):".to_string(),
        request.education.clone(),
        String::new(),
        "SKILLS AND COMPETENCIES (informal description):".to_string(),
        request.skills.clone(),
    ]);

    if let Some(job_description) = &request.target_job_description {
        sections.extend([
            String::new(),
            "TARGET JOB DESCRIPTION:".to_string(),
            job_description.clone(),
            String::new(),
            "SPECIAL INSTRUCTIONS:".to_string(),
            "- Compare the candidate's skills and experience with the job requirements".to_string(),
            "- Calculate the compatibility score and identify skill gaps".to_string(),
            "- Provide specific development suggestions".to_string(),
            "- Recommend relevant learning resources".to_string(),
            "- Structure the CV to highlight what matters for this job".to_string(),
        ]);
    }

    let cv_data = sections.join("\n");

    format!("{PROMPT_PREAMBLE}\n\n{cv_data}\n\n{PROMPT_NOTES}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(with_job: bool) -> CvRequest {
        CvRequest {
            full_name: "Maria Silva".to_string(),
            desired_role: "Backend Developer".to_string(),
            email: Some("maria@gmail.com".to_string()),
            phone: None,
            professional_experience: "Three years building REST APIs in Python.".to_string(),
            education: "BSc in Computer Science, UFMG.".to_string(),
            skills: "Python, Django, PostgreSQL".to_string(),
            target_job_description: with_job
                .then(|| "Senior Python engineer, Kubernetes required.".to_string()),
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_cv_prompt(&request(true)), build_cv_prompt(&request(true)));
    }

    #[test]
    fn test_prompt_linearizes_sections_under_headings() {
        let prompt = build_cv_prompt(&request(false));
        assert!(prompt.contains("PERSONAL INFORMATION:"));
        assert!(prompt.contains("Full name: Maria Silva"));
        assert!(prompt.contains("PROFESSIONAL EXPERIENCE (informal description):"));
        assert!(prompt.contains("Three years building REST APIs in Python."));
        assert!(prompt.contains("EDUCATION (informal description):"));
        assert!(prompt.contains("SKILLS AND COMPETENCIES (informal description):"));
    }

    #[test]
    fn test_prompt_with_job_description_contains_comparison_block() {
        let prompt = build_cv_prompt(&request(true));
        assert!(prompt.contains("TARGET JOB DESCRIPTION:"));
        assert!(prompt.contains("Senior Python engineer, Kubernetes required."));
        assert!(prompt.contains("SPECIAL INSTRUCTIONS:"));
        assert!(prompt.contains("Compare the candidate's skills"));
    }

    #[test]
    fn test_prompt_without_job_description_has_no_comparison_block() {
        let prompt = build_cv_prompt(&request(false));
        assert!(!prompt.contains("TARGET JOB DESCRIPTION:"));
        assert!(!prompt.contains("SPECIAL INSTRUCTIONS:"));
    }

    #[test]
    fn test_contact_lines_only_when_present() {
        let prompt = build_cv_prompt(&request(false));
        assert!(prompt.contains("Email: maria@gmail.com"));
        assert!(!prompt.contains("Phone:"));

        let mut with_phone = request(false);
        with_phone.email = None;
        with_phone.phone = Some("11999999999".to_string());
        let prompt = build_cv_prompt(&with_phone);
        assert!(!prompt.contains("Email:"));
        assert!(prompt.contains("Phone: 11999999999"));
    }

    #[test]
    fn test_system_instruction_demands_json_only_output() {
        assert!(CV_SYSTEM_INSTRUCTION.contains("JSON object"));
        assert!(CV_SYSTEM_INSTRUCTION.contains("Do NOT include any text outside"));
        assert_eq!(CV_PROMPT_VERSION, "v1");
    }
}
