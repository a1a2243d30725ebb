use std::collections::HashMap;

use async_trait::async_trait;
use qa_core::question::Question;
use qa_core::types::EntityId;
use sqlx::{Postgres, Transaction};

use super::{QuestionStore, StoreError};
use crate::models::question::{AnswerRow, QuestionRow};
use crate::DbPool;

/// Column list for `questions` queries.
const QUESTION_COLUMNS: &str = "id, text, created_at";

/// Column list for `answers` queries.
const ANSWER_COLUMNS: &str = "id, question_id, text, votes, created_at, updated_at";

/// PostgreSQL-backed store. Answers live in their own table, ordered by
/// `position`, and are rewritten wholesale on every save.
#[derive(Clone)]
pub struct PgQuestionStore {
    pool: DbPool,
}

impl PgQuestionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Insert every answer of `question` with its current index as `position`.
async fn write_answers(
    tx: &mut Transaction<'_, Postgres>,
    question: &Question,
) -> Result<(), sqlx::Error> {
    for (position, answer) in question.answers.iter().enumerate() {
        sqlx::query(
            "INSERT INTO answers \
                 (id, question_id, position, text, votes, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(answer.id)
        .bind(question.id)
        .bind(position as i32)
        .bind(&answer.text)
        .bind(answer.votes)
        .bind(answer.created_at)
        .bind(answer.updated_at)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    fn kind(&self) -> &'static str {
        "postgres"
    }

    async fn load(&self, id: EntityId) -> Result<Option<Question>, StoreError> {
        // Both reads see one snapshot so a concurrent save cannot tear them.
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let query = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1");
        let Some(row) = sqlx::query_as::<_, QuestionRow>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {ANSWER_COLUMNS} FROM answers WHERE question_id = $1 ORDER BY position"
        );
        let answers = sqlx::query_as::<_, AnswerRow>(&query)
            .bind(id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(row.into_question(answers)))
    }

    async fn list_recent(&self) -> Result<Vec<Question>, StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let query =
            format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY created_at DESC, id DESC");
        let rows = sqlx::query_as::<_, QuestionRow>(&query)
            .fetch_all(&mut *tx)
            .await?;

        let ids: Vec<EntityId> = rows.iter().map(|r| r.id).collect();
        let query = format!(
            "SELECT {ANSWER_COLUMNS} FROM answers \
             WHERE question_id = ANY($1) \
             ORDER BY question_id, position"
        );
        let answer_rows = sqlx::query_as::<_, AnswerRow>(&query)
            .bind(&ids)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        let mut by_question: HashMap<EntityId, Vec<AnswerRow>> = HashMap::new();
        for answer in answer_rows {
            by_question.entry(answer.question_id).or_default().push(answer);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let answers = by_question.remove(&row.id).unwrap_or_default();
                row.into_question(answers)
            })
            .collect())
    }

    async fn insert(&self, question: &Question) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO questions (id, text, created_at) VALUES ($1, $2, $3)")
            .bind(question.id)
            .bind(&question.text)
            .bind(question.created_at)
            .execute(&mut *tx)
            .await?;
        write_answers(&mut tx, question).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn replace(&self, question: &Question) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        // Row lock on the question serialises concurrent saves of one document.
        let updated = sqlx::query("UPDATE questions SET text = $2 WHERE id = $1")
            .bind(question.id)
            .bind(&question.text)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(StoreError::Missing(question.id));
        }

        sqlx::query("DELETE FROM answers WHERE question_id = $1")
            .bind(question.id)
            .execute(&mut *tx)
            .await?;
        write_answers(&mut tx, question).await?;

        tx.commit().await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
