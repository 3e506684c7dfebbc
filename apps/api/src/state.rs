use std::sync::Arc;

use crate::generation::strategy::PromptStrategy;
use crate::knowledge::store::KnowledgeStore;
use crate::llm_client::GenerationClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The external generation capability. One long-lived client per
    /// process, constructed at startup; tests swap in a stub.
    pub llm: Arc<dyn GenerationClient>,
    /// The deployment's prompt strategy, selected once from `PROMPT_STRATEGY`.
    pub strategy: Arc<dyn PromptStrategy>,
    pub store: KnowledgeStore,
}
