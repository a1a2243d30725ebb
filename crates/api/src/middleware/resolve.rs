//! Path-parameter resolution into live question/answer handles.
//!
//! Handlers take [`ResolvedQuestion`] or [`ResolvedAnswer`] as arguments, so
//! a missing or malformed id is answered with 404 before the handler body
//! runs. The question is loaded at most once per request: the first
//! resolution is cached in the request extensions and reused by any later
//! extractor on the same request.

use std::collections::HashMap;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use qa_core::error::CoreError;
use qa_core::question::Question;
use qa_core::types::EntityId;
use qa_db::repositories::QuestionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::path::AppPath;
use crate::state::AppState;

/// Route parameter naming the question.
pub const QUESTION_PARAM: &str = "question_id";

/// Route parameter naming the answer within the question.
pub const ANSWER_PARAM: &str = "answer_id";

/// The question named by `{question_id}`, loaded from the store.
#[derive(Debug, Clone)]
pub struct ResolvedQuestion(pub Question);

/// An answer located by `{answer_id}` inside its resolved question.
///
/// Answers are not addressable on their own, so the handle carries the
/// owning question; changes go through it and are saved with it.
#[derive(Debug, Clone)]
pub struct ResolvedAnswer {
    pub question: Question,
    pub answer_id: EntityId,
}

/// Parse an id from a path segment. Malformed ids are reported as missing.
fn parse_id(entity: &'static str, raw: &str) -> Result<EntityId, CoreError> {
    raw.parse().map_err(|_| CoreError::not_found(entity, raw))
}

/// Load the question with the given raw id.
pub async fn resolve_question(repo: &QuestionRepo, raw_id: &str) -> AppResult<Question> {
    let id = parse_id("Question", raw_id)?;
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| CoreError::not_found("Question", id).into())
}

/// Locate the answer with the given raw id inside `question`.
pub fn resolve_answer(question: &Question, raw_id: &str) -> AppResult<EntityId> {
    let id = parse_id("Answer", raw_id)?;
    question
        .answer(id)
        .map(|a| a.id)
        .ok_or_else(|| CoreError::not_found("Answer", id).into())
}

async fn path_param(parts: &mut Parts, state: &AppState, name: &str) -> AppResult<String> {
    let AppPath(mut params) =
        AppPath::<HashMap<String, String>>::from_request_parts(parts, state).await?;
    params
        .remove(name)
        .ok_or_else(|| AppError::InternalError(format!("route is missing the {{{name}}} parameter")))
}

impl FromRequestParts<AppState> for ResolvedQuestion {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(resolved) = parts.extensions.get::<ResolvedQuestion>() {
            return Ok(resolved.clone());
        }

        let raw_id = path_param(parts, state, QUESTION_PARAM).await?;
        let question = resolve_question(&state.questions, &raw_id).await?;

        let resolved = ResolvedQuestion(question);
        parts.extensions.insert(resolved.clone());
        Ok(resolved)
    }
}

impl FromRequestParts<AppState> for ResolvedAnswer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The question resolves first; its failure short-circuits this one.
        let ResolvedQuestion(question) = ResolvedQuestion::from_request_parts(parts, state).await?;

        let raw_id = path_param(parts, state, ANSWER_PARAM).await?;
        let answer_id = resolve_answer(&question, &raw_id)?;

        Ok(ResolvedAnswer {
            question,
            answer_id,
        })
    }
}
