use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionService;
use crate::mailer::EmailSender;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Rendered once from the resume profile at startup.
    pub system_prompt: Arc<str>,
    /// Completion backend. Default: GroqClient.
    pub llm: Arc<dyn CompletionService>,
    /// Email backend. Default: ResendClient.
    pub mailer: Arc<dyn EmailSender>,
}
