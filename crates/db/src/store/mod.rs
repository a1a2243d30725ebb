//! Storage backends for the question aggregate.
//!
//! A backend persists whole documents: a question together with all of its
//! answers. Each write is atomic per question. Backends never reorder
//! answers; callers go through [`crate::repositories::QuestionRepo`], which
//! does that first.

mod memory;
mod postgres;

pub use memory::MemoryQuestionStore;
pub use postgres::PgQuestionStore;

use async_trait::async_trait;
use qa_core::question::Question;
use qa_core::types::EntityId;

/// Errors raised by a [`QuestionStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The question was deleted between load and save.
    #[error("Question {0} no longer exists")]
    Missing(EntityId),

    #[error("Question {0} already exists")]
    Duplicate(EntityId),
}

/// Document storage for questions.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Short backend name for logs (`"postgres"`, `"memory"`).
    fn kind(&self) -> &'static str;

    /// Load a question with its answers in stored order.
    async fn load(&self, id: EntityId) -> Result<Option<Question>, StoreError>;

    /// All questions, newest `created_at` first.
    async fn list_recent(&self) -> Result<Vec<Question>, StoreError>;

    /// Persist a new question.
    async fn insert(&self, question: &Question) -> Result<(), StoreError>;

    /// Overwrite an existing question and its full answer set.
    async fn replace(&self, question: &Question) -> Result<(), StoreError>;

    /// Cheap reachability probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
