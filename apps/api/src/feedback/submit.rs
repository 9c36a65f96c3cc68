use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::feedback::evaluator::AnswerEvaluator;
use crate::models::answer::UserAnswerRow;
use crate::models::record_date_now;

/// Everything a submission needs besides the evaluator and the pool.
#[derive(Debug)]
pub struct SubmissionInput<'a> {
    pub interview_id: Uuid,
    pub question: &'a str,
    pub correct_answer: &'a str,
    pub transcript: &'a str,
    pub user_email: &'a str,
}

/// Runs the submission contract for one finished answer: evaluate, then
/// insert exactly one row. The steps are strictly sequential; when the
/// evaluation fails nothing is written and the error propagates to the
/// caller, who still settles the capture session.
pub async fn submit_answer(
    pool: &PgPool,
    evaluator: &dyn AnswerEvaluator,
    input: SubmissionInput<'_>,
) -> Result<UserAnswerRow, AppError> {
    let verdict = evaluator.evaluate(input.question, input.transcript).await?;

    let row = sqlx::query_as::<_, UserAnswerRow>(
        r#"
        INSERT INTO user_answers
            (interview_id, question, correct_answer, user_answer, rating, feedback, user_email, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(input.interview_id)
    .bind(input.question)
    .bind(input.correct_answer)
    .bind(input.transcript)
    .bind(verdict.rating)
    .bind(&verdict.feedback)
    .bind(input.user_email)
    .bind(record_date_now())
    .fetch_one(pool)
    .await?;

    info!(
        "Recorded answer {} for interview {} (rating {})",
        row.id, input.interview_id, row.rating
    );

    Ok(row)
}
