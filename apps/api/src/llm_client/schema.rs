//! Response-schema construction and provider-compatibility cleaning.
//!
//! The schema is authored strict (`additionalProperties: false` everywhere,
//! mirroring the wire types in models::cv). Gemini rejects that marker, so
//! `clean_schema` strips it recursively right before submission.

use serde_json::{json, Value};

/// Strict JSON schema for the structured payload the LLM must return:
/// the generated CV plus the optional job-compatibility analysis.
/// `suggestions` is not part of the schema; it is derived server-side.
pub fn cv_response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "generated_cv": {
                "type": "object",
                "properties": {
                    "personal_info": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "title": { "type": "string" },
                            "email": { "type": "string" },
                            "phone": { "type": "string" }
                        },
                        "required": ["name", "title"],
                        "additionalProperties": false
                    },
                    "professional_summary": { "type": "string" },
                    "experience_entries": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "title": { "type": "string" },
                                "company": { "type": "string" },
                                "period": { "type": "string" },
                                "achievements": {
                                    "type": "array",
                                    "items": { "type": "string" }
                                }
                            },
                            "required": ["title", "company", "period", "achievements"],
                            "additionalProperties": false
                        }
                    },
                    "education_entries": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "degree": { "type": "string" },
                                "institution": { "type": "string" },
                                "period": { "type": "string" }
                            },
                            "required": ["degree", "institution", "period"],
                            "additionalProperties": false
                        }
                    },
                    "skills": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "certifications": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "languages": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "level": { "type": "string" }
                            },
                            "required": ["name", "level"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": [
                    "personal_info",
                    "professional_summary",
                    "experience_entries",
                    "education_entries",
                    "skills"
                ],
                "additionalProperties": false
            },
            "job_compatibility": {
                "type": "object",
                "properties": {
                    "compatibility_score": {
                        "type": "number",
                        "minimum": 0,
                        "maximum": 100
                    },
                    "skills": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "has_skill": { "type": "boolean" }
                            },
                            "required": ["name", "has_skill"],
                            "additionalProperties": false
                        }
                    },
                    "improvement_suggestions": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "learning_resources": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "title": { "type": "string" },
                                "url": { "type": "string" },
                                "type": { "type": "string" },
                                "platform": { "type": "string" },
                                "description": { "type": "string" }
                            },
                            "required": ["title", "url", "type", "platform", "description"],
                            "additionalProperties": false
                        }
                    }
                },
                "required": [
                    "compatibility_score",
                    "skills",
                    "improvement_suggestions",
                    "learning_resources"
                ],
                "additionalProperties": false
            }
        },
        "required": ["generated_cv"],
        "additionalProperties": false
    })
}

/// Recursively removes `additionalProperties` markers, which Gemini's
/// structured-output endpoint rejects. Everything else passes through.
pub fn clean_schema(schema: Value) -> Value {
    match schema {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| key != "additionalProperties")
                .map(|(key, value)| (key, clean_schema(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(clean_schema).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_occurrences(value: &Value, key: &str) -> usize {
        match value {
            Value::Object(map) => {
                let here = usize::from(map.contains_key(key));
                here + map.values().map(|v| count_occurrences(v, key)).sum::<usize>()
            }
            Value::Array(items) => items.iter().map(|v| count_occurrences(v, key)).sum(),
            _ => 0,
        }
    }

    #[test]
    fn test_cv_response_schema_is_strict_before_cleaning() {
        let schema = cv_response_schema();
        assert!(count_occurrences(&schema, "additionalProperties") > 5);
        assert_eq!(schema["required"][0], "generated_cv");
    }

    #[test]
    fn test_clean_schema_strips_all_additional_properties_markers() {
        let cleaned = clean_schema(cv_response_schema());
        assert_eq!(count_occurrences(&cleaned, "additionalProperties"), 0);
    }

    #[test]
    fn test_clean_schema_strips_markers_nested_inside_arrays() {
        let schema = json!({
            "type": "array",
            "items": [
                { "type": "object", "additionalProperties": false, "properties": {
                    "inner": { "type": "object", "additionalProperties": false }
                }}
            ]
        });
        let cleaned = clean_schema(schema);
        assert_eq!(count_occurrences(&cleaned, "additionalProperties"), 0);
        // Structure other than the marker survives untouched.
        assert_eq!(cleaned["items"][0]["properties"]["inner"]["type"], "object");
    }

    #[test]
    fn test_clean_schema_passes_scalars_through() {
        assert_eq!(clean_schema(json!(42)), json!(42));
        assert_eq!(clean_schema(json!("string")), json!("string"));
    }
}
