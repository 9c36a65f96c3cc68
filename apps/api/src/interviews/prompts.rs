// Question generation prompt templates.
// All prompts for the interviews module are defined here.

pub const QUESTION_GEN_SYSTEM: &str = "\
You are a technical interviewer preparing a mock interview. \
You write questions a real interviewer would ask for the given role, \
stack and experience level, each with the reference answer a strong \
candidate would give. \
You MUST respond with valid JSON only. No markdown fences, no explanations.";

pub const QUESTION_GEN_PROMPT: &str = r#"Job position: {job_position}
Job description / tech stack: {job_description}
Years of experience: {years_of_experience}

Based on this information, give me {count} interview questions with answers.

OUTPUT SCHEMA (return exactly this structure):
[
  {
    "question": "string",
    "answer": "string"
  }
]

RULES:
1. Questions must fit the position, the stated stack and the experience level
2. "answer" is the reference answer, 2-4 sentences, concrete
3. Return ONLY the JSON array — nothing else, no code fences"#;

/// Fills the generation prompt for one new interview session.
pub fn build_question_prompt(
    job_position: &str,
    job_description: &str,
    years_of_experience: i32,
    count: u32,
) -> String {
    QUESTION_GEN_PROMPT
        .replace("{job_position}", job_position)
        .replace("{job_description}", job_description)
        .replace("{years_of_experience}", &years_of_experience.to_string())
        .replace("{count}", &count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_role_details() {
        let prompt = build_question_prompt("Backend Engineer", "Rust, Postgres, Axum", 4, 5);
        assert!(prompt.contains("Job position: Backend Engineer"));
        assert!(prompt.contains("Rust, Postgres, Axum"));
        assert!(prompt.contains("Years of experience: 4"));
        assert!(prompt.contains("give me 5 interview questions"));
    }
}
