use std::collections::HashMap;

use async_trait::async_trait;
use qa_core::question::Question;
use qa_core::types::EntityId;
use tokio::sync::RwLock;

use super::{QuestionStore, StoreError};

/// In-process store keyed by question id.
///
/// Documents are cloned in and out, so callers never share state with the
/// stored copy. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryQuestionStore {
    questions: RwLock<HashMap<EntityId, Question>>,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn load(&self, id: EntityId) -> Result<Option<Question>, StoreError> {
        Ok(self.questions.read().await.get(&id).cloned())
    }

    async fn list_recent(&self) -> Result<Vec<Question>, StoreError> {
        let mut questions: Vec<Question> = self.questions.read().await.values().cloned().collect();
        questions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(questions)
    }

    async fn insert(&self, question: &Question) -> Result<(), StoreError> {
        let mut questions = self.questions.write().await;
        if questions.contains_key(&question.id) {
            return Err(StoreError::Duplicate(question.id));
        }
        questions.insert(question.id, question.clone());
        Ok(())
    }

    async fn replace(&self, question: &Question) -> Result<(), StoreError> {
        let mut questions = self.questions.write().await;
        let slot = questions
            .get_mut(&question.id)
            .ok_or(StoreError::Missing(question.id))?;
        *slot = question.clone();
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
