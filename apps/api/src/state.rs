use std::sync::Arc;

use crate::config::Config;
use crate::generation::text_generator::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Collaborator used by auto-fixes. Default: `LlmTextGenerator`.
    pub text_generator: Arc<dyn TextGenerator>,
}
