use std::sync::Arc;

use sqlx::PgPool;

use crate::capture::sessions::CaptureSessions;
use crate::config::Config;
use crate::feedback::evaluator::AnswerEvaluator;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable answer scorer. Default: GeminiEvaluator over `llm`.
    pub evaluator: Arc<dyn AnswerEvaluator>,
    /// In-memory capture sessions, one per interview question.
    /// Process-local: sessions do not survive a restart, answer rows do.
    pub captures: CaptureSessions,
}
