//! Row types for the `questions` and `answers` tables.

use qa_core::question::{Answer, Question};
use qa_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionRow {
    pub id: EntityId,
    pub text: String,
    pub created_at: Timestamp,
}

/// A row from the `answers` table.
#[derive(Debug, Clone, FromRow)]
pub struct AnswerRow {
    pub id: EntityId,
    pub question_id: EntityId,
    pub text: String,
    pub votes: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AnswerRow> for Answer {
    fn from(row: AnswerRow) -> Self {
        Answer {
            id: row.id,
            text: row.text,
            votes: row.votes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl QuestionRow {
    /// Assemble the aggregate. `answers` must already be in stored order.
    pub fn into_question(self, answers: Vec<AnswerRow>) -> Question {
        Question {
            id: self.id,
            text: self.text,
            created_at: self.created_at,
            answers: answers.into_iter().map(Answer::from).collect(),
        }
    }
}
