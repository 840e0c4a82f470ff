//! Request validation — the single place where the CV request rule set lives.
//!
//! Pure transform: a raw `CvRequest` either becomes a normalized record or
//! fails with the COMPLETE set of per-field violations. Errors are collected
//! field by field, never short-circuited, so the caller sees every problem
//! in one round trip.

use std::collections::HashSet;

use crate::models::cv::CvRequest;

/// Free-text minimum lengths (characters, after trim).
const MIN_EXPERIENCE_LEN: usize = 20;
const MIN_EDUCATION_LEN: usize = 10;
const MIN_SKILLS_LEN: usize = 10;

/// Placeholder domains that are never accepted as a real contact address.
const REJECTED_EMAIL_DOMAINS: &[&str] = &["example.com", "test.com", "temp.com", "fake.com"];

/// Validates and normalizes a CV request.
///
/// On failure returns every violation as a `"field: reason"` message, in
/// field order, with the cross-field contact check reported first.
pub fn validate_cv_request(request: CvRequest) -> Result<CvRequest, Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    // Cross-field invariant, independent of the per-field checks below.
    let email_input = non_empty(request.email.as_deref());
    let phone_input = non_empty(request.phone.as_deref());
    if email_input.is_none() && phone_input.is_none() {
        errors.push(
            "contact: at least one contact method must be provided; add a valid email or phone number"
                .to_string(),
        );
    }

    let full_name = checked(normalize_name(&request.full_name), "full_name", &mut errors);
    let desired_role = checked(
        normalize_role(&request.desired_role),
        "desired_role",
        &mut errors,
    );

    let email = match email_input {
        Some(raw) => checked(normalize_email(raw), "email", &mut errors).map(Some),
        None => Some(None),
    };
    let phone = match phone_input {
        Some(raw) => checked(normalize_phone(raw), "phone", &mut errors).map(Some),
        None => Some(None),
    };

    let professional_experience = checked(
        require_detail(
            &request.professional_experience,
            MIN_EXPERIENCE_LEN,
            "describe your roles, projects and achievements in more detail",
        ),
        "professional_experience",
        &mut errors,
    );
    let education = checked(
        require_detail(
            &request.education,
            MIN_EDUCATION_LEN,
            "include course, institution and period",
        ),
        "education",
        &mut errors,
    );
    let skills = checked(
        require_detail(
            &request.skills,
            MIN_SKILLS_LEN,
            "list technologies, tools and competencies",
        ),
        "skills",
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CvRequest {
        full_name: full_name.unwrap_or_default(),
        desired_role: desired_role.unwrap_or_default(),
        email: email.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        professional_experience: professional_experience.unwrap_or_default(),
        education: education.unwrap_or_default(),
        skills: skills.unwrap_or_default(),
        target_job_description: non_empty(request.target_job_description.as_deref())
            .map(ToString::to_string),
    })
}

/// Records a failed check under its field name; returns the value otherwise.
fn checked<T>(result: Result<T, String>, field: &str, errors: &mut Vec<String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(reason) => {
            errors.push(format!("{field}: {reason}"));
            None
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Name rules: ≥2 tokens after collapsing internal whitespace, letters and
/// spaces only, normalized to title case.
fn normalize_name(raw: &str) -> Result<String, String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return Err("cannot be empty".to_string());
    }
    if collapsed.split_whitespace().count() < 2 {
        return Err("provide both first and last name, e.g. 'Maria Silva Santos'".to_string());
    }
    if collapsed.chars().any(|c| !c.is_alphabetic() && c != ' ') {
        return Err("must contain only letters and spaces; digits and symbols are not allowed"
            .to_string());
    }
    Ok(title_case(&collapsed))
}

fn normalize_role(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("cannot be empty".to_string());
    }
    if trimmed.chars().count() < 3 {
        return Err("must have at least 3 characters, e.g. 'Backend Developer'".to_string());
    }
    Ok(title_case(trimmed))
}

/// Structural email check plus the placeholder-domain rejection list.
/// Lowercases the address on success.
fn normalize_email(raw: &str) -> Result<String, String> {
    let email = raw.trim().to_lowercase();
    if email.chars().any(char::is_whitespace) {
        return Err("is not a valid email address".to_string());
    }
    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| "is not a valid email address".to_string())?;
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return Err("is not a valid email address".to_string());
    }
    if REJECTED_EMAIL_DOMAINS.contains(&domain) {
        return Err(format!(
            "the domain '{domain}' is not accepted; provide a real email address"
        ));
    }
    Ok(email)
}

/// Phone rules: strip everything but digits, require 10 or 11 of them, and
/// reject degenerate sequences built from ≤2 distinct digits.
fn normalize_phone(raw: &str) -> Result<String, String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if !(10..=11).contains(&digits.len()) {
        return Err(
            "must have 10 or 11 digits, e.g. (11) 99999-9999, 11999999999 or 1199999999"
                .to_string(),
        );
    }
    let distinct: HashSet<char> = digits.chars().collect();
    if distinct.len() <= 2 {
        return Err("looks invalid; provide a real phone number".to_string());
    }
    Ok(digits)
}

fn require_detail(raw: &str, min_len: usize, hint: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("cannot be empty; {hint}"));
    }
    if trimmed.chars().count() < min_len {
        return Err(format!(
            "needs more detail; {hint} (at least {min_len} characters)"
        ));
    }
    Ok(trimmed.to_string())
}

/// Uppercases the first letter of each whitespace-separated token and
/// lowercases the rest. Unicode-aware.
fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
