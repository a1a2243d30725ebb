//! Route definitions for questions and answers.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Question routes, mounted at the root.
///
/// ```text
/// GET    /questions                                          -> list_questions
/// POST   /questions                                          -> create_question
/// GET    /questions/{question_id}                            -> get_question
/// POST   /questions/{question_id}/answers                    -> add_answer
/// PUT    /questions/{question_id}/answers/{answer_id}        -> edit_answer
/// DELETE /questions/{question_id}/answers/{answer_id}        -> delete_answer
/// POST   /questions/{question_id}/answers/{answer_id}/{action} -> answer_action
/// ```
///
/// `{action}` is a whole segment (`vote-up` / `vote-down`); the handler
/// rejects anything else with 404.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{question_id}", get(questions::get_question))
        .route(
            "/questions/{question_id}/answers",
            post(questions::add_answer),
        )
        .route(
            "/questions/{question_id}/answers/{answer_id}",
            put(questions::edit_answer).delete(questions::delete_answer),
        )
        .route(
            "/questions/{question_id}/answers/{answer_id}/{action}",
            post(questions::answer_action),
        )
}
