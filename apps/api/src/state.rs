use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::CvBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable generation backend. Production: GeminiClient; tests swap in stubs.
    pub backend: Arc<dyn CvBackend>,
}
