//! CV generation — orchestrates the pipeline for a validated request.
//!
//! Flow: build prompt → single LLM call → normalize, with the deterministic
//! template fallback absorbing every LLM-side failure. Validation errors are
//! the only failures a caller ever sees; this stage cannot fail.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::generation::compatibility::analyze_compatibility;
use crate::generation::fallback::generate_fallback_cv;
use crate::generation::prompts::{build_cv_prompt, CV_PROMPT_VERSION, CV_SYSTEM_INSTRUCTION};
use crate::generation::suggestions::derive_suggestions;
use crate::llm_client::schema::cv_response_schema;
use crate::llm_client::{GeminiClient, LlmError};
use crate::models::cv::{CvRequest, CvResponse};

/// Backend seam for CV generation. `GeminiClient` is the production
/// implementation; tests substitute failing or canned backends.
///
/// Carried in `AppState` as `Arc<dyn CvBackend>`.
#[async_trait]
pub trait CvBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<CvResponse, LlmError>;
}

#[async_trait]
impl CvBackend for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<CvResponse, LlmError> {
        self.generate_json(prompt, CV_SYSTEM_INSTRUCTION, &cv_response_schema())
            .await
    }
}

/// Runs the generation pipeline for an already-validated request.
///
/// Any `LlmError` — missing credential, transport failure, empty or
/// malformed output — is absorbed by the template fallback, so the result
/// is always a complete response.
pub async fn generate_cv(backend: &dyn CvBackend, request: &CvRequest) -> CvResponse {
    let prompt = build_cv_prompt(request);
    debug!(
        "Prompt built (instruction {CV_PROMPT_VERSION}, {} chars)",
        prompt.len()
    );

    let mut response = match backend.generate(&prompt).await {
        Ok(payload) => {
            info!("LLM generation succeeded");
            normalize_payload(payload, request)
        }
        Err(e) => {
            warn!("LLM generation failed, using template fallback: {e}");
            generate_fallback_cv(request)
        }
    };

    // Rule-based advice is derived from the final content, whichever path
    // produced it.
    response.suggestions = derive_suggestions(&response.generated_cv);
    response
}

/// Reconciles an LLM payload with the validated request: identity and
/// contact fields are backfilled from the request, the compatibility block
/// is gated on whether a target job was actually supplied, and its score is
/// clamped to [0, 100].
fn normalize_payload(mut response: CvResponse, request: &CvRequest) -> CvResponse {
    {
        let info = &mut response.generated_cv.personal_info;
        if info.name.trim().is_empty() {
            info.name = request.full_name.clone();
        }
        if info.title.trim().is_empty() {
            info.title = request.desired_role.clone();
        }
        if info.email.is_none() {
            info.email = request.email.clone();
        }
        if info.phone.is_none() {
            info.phone = request.phone.clone();
        }
    }

    response.job_compatibility = match (
        request.target_job_description.as_deref(),
        response.job_compatibility.take(),
    ) {
        // No target job was requested — drop anything the LLM volunteered.
        (None, _) => None,
        (Some(_), Some(mut analysis)) => {
            analysis.compatibility_score = analysis.compatibility_score.clamp(0.0, 100.0);
            Some(analysis)
        }
        // The LLM omitted a requested analysis; derive it deterministically.
        (Some(job_description), None) => {
            Some(analyze_compatibility(&request.skills, job_description))
        }
    };

    response
}
