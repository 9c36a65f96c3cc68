use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One generated question together with the reference answer the model
/// considers strong for this role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    pub answer: String,
}

/// A mock interview session as stored in the `interviews` table.
/// `interview_id` is the public identifier used in URLs; `id` is internal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewRow {
    pub id: i64,
    pub interview_id: Uuid,
    pub job_position: String,
    pub job_description: String,
    pub years_of_experience: i32,
    pub questions: Json<Vec<InterviewQuestion>>,
    pub created_by: String,
    pub created_at: String,
}
