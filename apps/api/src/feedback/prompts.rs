// Answer evaluation prompt templates.
// All prompts for the feedback module are defined here.

pub const FEEDBACK_SYSTEM: &str = "\
You are an experienced interviewer rating a candidate's spoken answer \
to one interview question. \
Judge only what the candidate actually said, not what they might know. \
You MUST respond with valid JSON only. No markdown fences, no explanations.";

pub const FEEDBACK_PROMPT: &str = r#"Question: {question}

User Answer: {transcript}

Please give a rating (1-5) and feedback for this interview answer.

OUTPUT SCHEMA (return exactly this structure):
{
  "rating": 3,
  "feedback": "3-5 lines on what was strong and what to improve"
}

RULES:
1. "rating" is an integer from 1 (poor) to 5 (excellent)
2. "feedback" is short, concrete, and addressed to the candidate
3. Return ONLY the JSON object — nothing else, no code fences"#;

/// Fills the evaluation prompt for one answer.
pub fn build_feedback_prompt(question: &str, transcript: &str) -> String {
    FEEDBACK_PROMPT
        .replace("{question}", question)
        .replace("{transcript}", transcript)
}
