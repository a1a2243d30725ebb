//! Repository for the question aggregate.
//!
//! Every durable write of a question passes through [`QuestionRepo::create`]
//! or [`QuestionRepo::save`]; both restore answer display order immediately
//! before the backend commits. Nothing else may assume the answers are sorted.

use std::sync::Arc;

use qa_core::question::Question;
use qa_core::types::EntityId;

use crate::store::{MemoryQuestionStore, PgQuestionStore, QuestionStore, StoreError};
use crate::DbPool;

/// Cheaply cloneable handle over a shared [`QuestionStore`].
#[derive(Clone)]
pub struct QuestionRepo {
    store: Arc<dyn QuestionStore>,
}

impl QuestionRepo {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Repository backed by PostgreSQL.
    pub fn postgres(pool: DbPool) -> Self {
        Self::new(Arc::new(PgQuestionStore::new(pool)))
    }

    /// Repository backed by a fresh, empty in-process store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryQuestionStore::new()))
    }

    pub fn backend(&self) -> &'static str {
        self.store.kind()
    }

    /// Find a question by id.
    pub async fn find_by_id(&self, id: EntityId) -> Result<Option<Question>, StoreError> {
        self.store.load(id).await
    }

    /// List all questions, most recently created first.
    pub async fn list_recent(&self) -> Result<Vec<Question>, StoreError> {
        self.store.list_recent().await
    }

    /// Persist a new question and return it as stored.
    pub async fn create(&self, mut question: Question) -> Result<Question, StoreError> {
        question.restore_answer_order();
        self.store.insert(&question).await?;
        tracing::debug!(question_id = %question.id, answers = question.answers.len(), "Question inserted");
        Ok(question)
    }

    /// Persist an existing question (and therefore every answer change made
    /// to it) and return it as stored.
    pub async fn save(&self, mut question: Question) -> Result<Question, StoreError> {
        question.restore_answer_order();
        self.store.replace(&question).await?;
        tracing::debug!(question_id = %question.id, answers = question.answers.len(), "Question saved");
        Ok(question)
    }

    /// Probe the backing store.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
