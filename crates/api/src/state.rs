use qa_db::repositories::QuestionRepo;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the repository shares its store behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Question repository; the only path to durable writes.
    pub questions: QuestionRepo,
}
