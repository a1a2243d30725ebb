pub mod health;
pub mod questions;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /questions                                            list, create
/// /questions/{question_id}                              get
/// /questions/{question_id}/answers                      add answer (POST)
/// /questions/{question_id}/answers/{answer_id}          edit (PUT), delete
/// /questions/{question_id}/answers/{answer_id}/vote-up    vote (POST)
/// /questions/{question_id}/answers/{answer_id}/vote-down  vote (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(questions::router())
}
