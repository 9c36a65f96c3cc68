use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capture::controller::{CaptureState, ToggleOutcome};
use crate::capture::sessions::QuestionKey;
use crate::errors::AppError;
use crate::feedback::submit::{submit_answer, SubmissionInput};
use crate::identity::CurrentUser;
use crate::interviews::handlers::fetch_interview;
use crate::models::answer::UserAnswerRow;
use crate::state::AppState;

/// User-visible transient notification; the client renders these as toasts.
#[derive(Debug, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ToggleResponse {
    pub state: CaptureState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    /// Present only when this toggle completed a submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<UserAnswerRow>,
}

#[derive(Deserialize)]
pub struct FragmentRequest {
    pub transcript: String,
}

#[derive(Serialize)]
pub struct FragmentResponse {
    pub state: CaptureState,
    pub accepted: bool,
    pub transcript_chars: usize,
}

#[derive(Serialize)]
pub struct CaptureStatusResponse {
    pub state: CaptureState,
    pub transcript_chars: usize,
    pub speech_supported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

/// POST /api/v1/interviews/:id/questions/:q/capture/toggle
///
/// The single start/stop entry point for recording one answer. A stop at or
/// above the length guard runs the whole submission in a spawned task and
/// reports its outcome; the task settles the session whether or not the
/// submission succeeded, and keeps running if the request is dropped.
pub async fn handle_toggle_capture(
    State(state): State<AppState>,
    Path((interview_id, question_index)): Path<(Uuid, usize)>,
    user: CurrentUser,
) -> Result<Json<ToggleResponse>, AppError> {
    let interview = fetch_interview(&state.db, interview_id).await?;
    let question = interview.questions.get(question_index).ok_or_else(|| {
        AppError::UnprocessableEntity(format!(
            "Question index {question_index} out of range (interview has {} questions)",
            interview.questions.len()
        ))
    })?;

    let key = QuestionKey {
        interview_id,
        question_index,
    };

    match state.captures.toggle(key).await {
        ToggleOutcome::Started => Ok(Json(ToggleResponse {
            state: CaptureState::Recording,
            notice: None,
            answer: None,
        })),
        ToggleOutcome::TooShort => Ok(Json(ToggleResponse {
            state: CaptureState::Idle,
            notice: None,
            answer: None,
        })),
        ToggleOutcome::Unsupported => Ok(Json(ToggleResponse {
            state: CaptureState::Idle,
            notice: state.captures.capability().warning().map(Notice::warning),
            answer: None,
        })),
        ToggleOutcome::InFlight => Err(AppError::Conflict(
            "A submission for this question is already in progress".to_string(),
        )),
        ToggleOutcome::Submit { transcript } => {
            // The registry lock is not held here; the session sits in the
            // submitting state and refuses toggles until settled.
            //
            // The submission owns its data and settles the session itself.
            // Disconnecting mid-call drops this handler future, which
            // detaches the task rather than cancelling it.
            let task_state = state.clone();
            let question = question.clone();
            let user_email = user.email;
            let submission = tokio::spawn(async move {
                let result = submit_answer(
                    &task_state.db,
                    task_state.evaluator.as_ref(),
                    SubmissionInput {
                        interview_id,
                        question: &question.question,
                        correct_answer: &question.answer,
                        transcript: &transcript,
                        user_email: &user_email,
                    },
                )
                .await;

                // Settle unconditionally so the next take starts clean.
                task_state.captures.finish_submission(key).await;

                result
            });

            let row = submission.await.map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Submission task failed: {e}"))
            })??;
            Ok(Json(ToggleResponse {
                state: CaptureState::Idle,
                notice: Some(Notice::success("User answer recorded successfully")),
                answer: Some(row),
            }))
        }
    }
}

/// POST /api/v1/interviews/:id/questions/:q/capture/fragments
///
/// Relays one speech-to-text result from the client. Fragments arriving
/// while the session is not recording are dropped, not buffered.
pub async fn handle_push_fragment(
    State(state): State<AppState>,
    Path((interview_id, question_index)): Path<(Uuid, usize)>,
    _user: CurrentUser,
    Json(req): Json<FragmentRequest>,
) -> Result<Json<FragmentResponse>, AppError> {
    let key = QuestionKey {
        interview_id,
        question_index,
    };

    let (accepted, snapshot) = state.captures.push_fragment(key, &req.transcript).await;

    Ok(Json(FragmentResponse {
        state: snapshot.state,
        accepted,
        transcript_chars: snapshot.transcript_chars,
    }))
}

/// GET /api/v1/interviews/:id/questions/:q/capture
pub async fn handle_capture_status(
    State(state): State<AppState>,
    Path((interview_id, question_index)): Path<(Uuid, usize)>,
    _user: CurrentUser,
) -> Result<Json<CaptureStatusResponse>, AppError> {
    let key = QuestionKey {
        interview_id,
        question_index,
    };

    let snapshot = state.captures.status(key).await;
    let capability = state.captures.capability();

    Ok(Json(CaptureStatusResponse {
        state: snapshot.state,
        transcript_chars: snapshot.transcript_chars,
        speech_supported: capability.is_supported(),
        warning: capability.warning(),
    }))
}
