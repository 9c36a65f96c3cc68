use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One recorded, AI-scored answer as stored in the `user_answers` table.
/// Exactly one row is written per successful submission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserAnswerRow {
    pub id: i64,
    pub interview_id: Uuid,
    pub question: String,
    pub correct_answer: String,
    pub user_answer: String,
    pub rating: i32,
    pub feedback: String,
    pub user_email: String,
    pub created_at: String,
}
