use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::types::Json as Jsonb;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::identity::CurrentUser;
use crate::interviews::prompts::{build_question_prompt, QUESTION_GEN_SYSTEM};
use crate::models::interview::{InterviewQuestion, InterviewRow};
use crate::models::record_date_now;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateInterviewRequest {
    pub job_position: String,
    pub job_description: String,
    pub years_of_experience: i32,
}

/// GET /api/v1/interviews
///
/// The dashboard list: the caller's sessions, newest first.
pub async fn handle_list_interviews(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Vec<InterviewRow>>, AppError> {
    let rows = sqlx::query_as::<_, InterviewRow>(
        "SELECT * FROM interviews WHERE created_by = $1 ORDER BY id DESC",
    )
    .bind(&user.email)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// POST /api/v1/interviews
///
/// Creates a session: generates the question set via the LLM, then persists
/// one row keyed by a fresh public id.
pub async fn handle_create_interview(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateInterviewRequest>,
) -> Result<(StatusCode, Json<InterviewRow>), AppError> {
    if req.job_position.trim().is_empty() {
        return Err(AppError::Validation("job_position must not be empty".to_string()));
    }
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description must not be empty".to_string(),
        ));
    }
    if req.years_of_experience < 0 {
        return Err(AppError::Validation(
            "years_of_experience must not be negative".to_string(),
        ));
    }

    let prompt = build_question_prompt(
        req.job_position.trim(),
        req.job_description.trim(),
        req.years_of_experience,
        state.config.question_count,
    );

    let questions: Vec<InterviewQuestion> = state
        .llm
        .call_json(&prompt, QUESTION_GEN_SYSTEM)
        .await
        .map_err(|e| {
            error!("Question generation failed: {e}");
            AppError::Ai("Failed to generate interview questions. Please try again.".to_string())
        })?;

    if questions.is_empty() {
        error!("Question generation returned an empty set");
        return Err(AppError::Ai(
            "Failed to generate interview questions. Please try again.".to_string(),
        ));
    }

    let interview_id = Uuid::new_v4();
    let row = sqlx::query_as::<_, InterviewRow>(
        r#"
        INSERT INTO interviews
            (interview_id, job_position, job_description, years_of_experience,
             questions, created_by, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(interview_id)
    .bind(req.job_position.trim())
    .bind(req.job_description.trim())
    .bind(req.years_of_experience)
    .bind(Jsonb(&questions))
    .bind(&user.email)
    .bind(record_date_now())
    .fetch_one(&state.db)
    .await?;

    info!(
        "Created interview {} for {} ({} questions)",
        interview_id,
        user.email,
        questions.len()
    );

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
) -> Result<Json<InterviewRow>, AppError> {
    let row = fetch_interview(&state.db, interview_id).await?;
    Ok(Json(row))
}

/// Loads one interview by its public id. Shared with the capture handlers,
/// which validate the question index against the stored question set.
pub async fn fetch_interview(pool: &PgPool, interview_id: Uuid) -> Result<InterviewRow, AppError> {
    sqlx::query_as::<_, InterviewRow>("SELECT * FROM interviews WHERE interview_id = $1")
        .bind(interview_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {interview_id} not found")))
}
