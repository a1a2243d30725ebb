//! Handlers for questions and their answers.
//!
//! Each handler coordinates a resolved handle, one change to the question
//! aggregate, and at most one write through [`QuestionRepo`]. The response
//! is always the question as stored, so callers see the new answer order.
//!
//! [`QuestionRepo`]: qa_db::repositories::QuestionRepo

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use qa_core::error::CoreError;
use qa_core::question::{AnswerMutation, AnswerUpdate, CreateQuestion, NewAnswer, Question};
use qa_core::vote::VoteDirection;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::json::JsonOrDefault;
use crate::middleware::path::AppPath;
use crate::middleware::resolve::{ResolvedAnswer, ResolvedQuestion};
use crate::state::AppState;

/// Trailing path segment of an answer action, e.g. `vote-up`.
#[derive(Debug, Deserialize)]
pub struct AnswerActionPath {
    pub action: String,
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// GET /questions
///
/// All questions, newest first.
pub async fn list_questions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let questions = state.questions.list_recent().await?;

    Ok(Json(questions))
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    JsonOrDefault(input): JsonOrDefault<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    let question = Question::from_request(input)?;
    let created = state.questions.create(question).await?;

    tracing::info!(question_id = %created.id, answers = created.answers.len(), "Question created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /questions/{question_id}
pub async fn get_question(ResolvedQuestion(question): ResolvedQuestion) -> Json<Question> {
    Json(question)
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// POST /questions/{question_id}/answers
///
/// Append an answer and save the question; responds with the re-sorted
/// question.
pub async fn add_answer(
    State(state): State<AppState>,
    ResolvedQuestion(mut question): ResolvedQuestion,
    JsonOrDefault(input): JsonOrDefault<NewAnswer>,
) -> AppResult<impl IntoResponse> {
    let answer_id = question.push_answer(input);
    let saved = state.questions.save(question).await?;

    tracing::info!(question_id = %saved.id, answer_id = %answer_id, "Answer added");

    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /questions/{question_id}/answers/{answer_id}
///
/// Merge the editable fields and refresh the answer's `updatedAt`.
pub async fn edit_answer(
    State(state): State<AppState>,
    resolved: ResolvedAnswer,
    JsonOrDefault(update): JsonOrDefault<AnswerUpdate>,
) -> AppResult<impl IntoResponse> {
    let saved = apply_and_save(&state, resolved, AnswerMutation::Edit(update)).await?;

    Ok(Json(saved))
}

/// DELETE /questions/{question_id}/answers/{answer_id}
pub async fn delete_answer(
    State(state): State<AppState>,
    resolved: ResolvedAnswer,
) -> AppResult<impl IntoResponse> {
    let saved = apply_and_save(&state, resolved, AnswerMutation::Remove).await?;

    Ok(Json(saved))
}

/// POST /questions/{question_id}/answers/{answer_id}/{action}
///
/// Only `vote-up` and `vote-down` exist; any other action is 404.
pub async fn answer_action(
    State(state): State<AppState>,
    resolved: ResolvedAnswer,
    AppPath(path): AppPath<AnswerActionPath>,
) -> AppResult<impl IntoResponse> {
    let direction = VoteDirection::from_segment(&path.action)
        .map_err(|_| CoreError::not_found("Answer action", &path.action))?;

    let saved = apply_and_save(&state, resolved, AnswerMutation::Vote(direction)).await?;

    Ok(Json(saved))
}

/// Apply `mutation` to the resolved answer and save its question.
///
/// Nothing is reported as done unless the save succeeds.
async fn apply_and_save(
    state: &AppState,
    resolved: ResolvedAnswer,
    mutation: AnswerMutation,
) -> AppResult<Question> {
    let ResolvedAnswer {
        mut question,
        answer_id,
    } = resolved;

    let kind = match &mutation {
        AnswerMutation::Edit(_) => "edit",
        AnswerMutation::Vote(VoteDirection::Up) => "vote-up",
        AnswerMutation::Vote(VoteDirection::Down) => "vote-down",
        AnswerMutation::Remove => "remove",
    };

    question.apply(answer_id, mutation)?;
    let saved = state.questions.save(question).await?;

    tracing::info!(question_id = %saved.id, answer_id = %answer_id, kind, "Answer updated");

    Ok(saved)
}
