// Dashboard interviews: create a session (question generation via the LLM),
// list a user's sessions, fetch one session for the practice screen.

pub mod handlers;
pub mod prompts;
