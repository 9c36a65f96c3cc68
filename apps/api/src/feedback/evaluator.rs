//! Answer evaluation behind a pluggable, trait-based seam.
//!
//! Default: `GeminiEvaluator`, one `call_json` per finished answer.
//! `AppState` holds an `Arc<dyn AnswerEvaluator>` so the backend can be
//! swapped without touching handlers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::feedback::prompts::{build_feedback_prompt, FEEDBACK_SYSTEM};
use crate::llm_client::LlmClient;

/// Inclusive rating bounds the model must stay within.
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Message shown to the user for any failed submission attempt. The user
/// keeps their dashboard and simply re-records the answer.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to save answer. Please try again.";

/// Parsed model verdict for one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub rating: i32,
    pub feedback: String,
}

impl AnswerFeedback {
    /// Whether the model kept its rating inside the declared range.
    /// Out-of-range ratings are treated the same as a malformed reply.
    pub fn rating_in_bounds(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }
}

/// The answer evaluator trait. Implement this to swap scoring backends
/// without touching the capture handlers.
///
/// Carried in `AppState` as `Arc<dyn AnswerEvaluator>`.
#[async_trait]
pub trait AnswerEvaluator: Send + Sync {
    async fn evaluate(&self, question: &str, transcript: &str)
        -> Result<AnswerFeedback, AppError>;
}

/// Default evaluator: one Gemini call per answer through `LlmClient`.
pub struct GeminiEvaluator(pub LlmClient);

#[async_trait]
impl AnswerEvaluator for GeminiEvaluator {
    async fn evaluate(
        &self,
        question: &str,
        transcript: &str,
    ) -> Result<AnswerFeedback, AppError> {
        let prompt = build_feedback_prompt(question, transcript);

        let verdict: AnswerFeedback = self
            .0
            .call_json(&prompt, FEEDBACK_SYSTEM)
            .await
            .map_err(|e| {
                error!("Answer evaluation failed: {e}");
                AppError::Ai(SUBMISSION_FAILED_MESSAGE.to_string())
            })?;

        if !verdict.rating_in_bounds() {
            error!("Model returned out-of-range rating {}", verdict.rating);
            return Err(AppError::Ai(SUBMISSION_FAILED_MESSAGE.to_string()));
        }

        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_model_verdict() {
        let verdict: AnswerFeedback =
            serde_json::from_str(r#"{"rating": 4, "feedback": "Good"}"#).unwrap();
        assert_eq!(
            verdict,
            AnswerFeedback {
                rating: 4,
                feedback: "Good".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_missing_rating() {
        let result: Result<AnswerFeedback, _> =
            serde_json::from_str(r#"{"feedback": "no rating here"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_rating_bounds_are_inclusive() {
        let at = |rating| AnswerFeedback {
            rating,
            feedback: String::new(),
        };
        assert!(at(MIN_RATING).rating_in_bounds());
        assert!(at(MAX_RATING).rating_in_bounds());
        assert!(!at(0).rating_in_bounds());
        assert!(!at(6).rating_in_bounds());
        assert!(!at(-3).rating_in_bounds());
    }
}
