// Feedback submission: turns a finished transcript into exactly one
// persisted, AI-scored answer record.
// All LLM calls go through llm_client.

pub mod evaluator;
pub mod prompts;
pub mod submit;
