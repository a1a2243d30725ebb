//! Question aggregate and the answers it owns.
//!
//! Answers have no identity outside their question. Every change to an
//! answer goes through [`Question::apply`] and only becomes durable when the
//! question itself is saved.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::ordering::rank_answers;
use crate::types::{new_id, now, EntityId, Timestamp};
use crate::vote::VoteDirection;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A single answer, owned by exactly one [`Question`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: EntityId,
    pub text: String,
    pub votes: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Answer {
    /// Build a fresh answer with zero votes, stamped at `at`.
    pub fn new_at(text: impl Into<String>, at: Timestamp) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            votes: 0,
            created_at: at,
            updated_at: at,
        }
    }

    fn edit(&mut self, update: AnswerUpdate, at: Timestamp) {
        if let Some(text) = update.text {
            self.text = text;
        }
        self.touch(at);
    }

    fn vote(&mut self, direction: VoteDirection) {
        self.votes = self.votes.saturating_add(direction.delta());
    }

    /// Refresh `updated_at`, always moving it strictly forward.
    fn touch(&mut self, at: Timestamp) {
        self.updated_at = if at > self.updated_at {
            at
        } else {
            self.updated_at + chrono::Duration::microseconds(1)
        };
    }
}

/// A question and its answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: EntityId,
    pub text: String,
    pub created_at: Timestamp,
    pub answers: Vec<Answer>,
}

/// A change to one answer, applied through its owning question.
#[derive(Debug, Clone)]
pub enum AnswerMutation {
    Edit(AnswerUpdate),
    Vote(VoteDirection),
    Remove,
}

impl Question {
    /// Validate a create request and build the (not yet persisted) question.
    pub fn from_request(input: CreateQuestion) -> Result<Self, CoreError> {
        input.validate()?;
        let text = input
            .text
            .ok_or_else(|| CoreError::Validation("text is required".into()))?;
        Ok(Self::new_at(text, input.answers, now()))
    }

    pub fn new_at(text: impl Into<String>, answers: Vec<NewAnswer>, at: Timestamp) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            created_at: at,
            answers: answers
                .into_iter()
                .map(|a| Answer::new_at(a.text, at))
                .collect(),
        }
    }

    /// Look up an answer by id.
    pub fn answer(&self, answer_id: EntityId) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }

    /// Append a new answer and return its id.
    ///
    /// The answer lands at the end; display order is restored on save.
    pub fn push_answer(&mut self, input: NewAnswer) -> EntityId {
        self.push_answer_at(input, now())
    }

    pub fn push_answer_at(&mut self, input: NewAnswer, at: Timestamp) -> EntityId {
        let answer = Answer::new_at(input.text, at);
        let id = answer.id;
        self.answers.push(answer);
        id
    }

    /// Apply `mutation` to the answer with `answer_id`.
    pub fn apply(&mut self, answer_id: EntityId, mutation: AnswerMutation) -> Result<(), CoreError> {
        self.apply_at(answer_id, mutation, now())
    }

    pub fn apply_at(
        &mut self,
        answer_id: EntityId,
        mutation: AnswerMutation,
        at: Timestamp,
    ) -> Result<(), CoreError> {
        let index = self
            .answers
            .iter()
            .position(|a| a.id == answer_id)
            .ok_or_else(|| CoreError::not_found("Answer", answer_id))?;

        match mutation {
            AnswerMutation::Edit(update) => self.answers[index].edit(update, at),
            // Votes leave `updated_at` alone; only edits count as activity.
            AnswerMutation::Vote(direction) => self.answers[index].vote(direction),
            AnswerMutation::Remove => {
                self.answers.remove(index);
            }
        }
        Ok(())
    }

    /// Re-establish display order of the answers. Runs before every write.
    pub fn restore_answer_order(&mut self) {
        rank_answers(&mut self.answers);
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /questions`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(required(message = "is required"))]
    pub text: Option<String>,
    #[serde(default)]
    pub answers: Vec<NewAnswer>,
}

/// Body of `POST /questions/{id}/answers`, and each initial answer on create.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAnswer {
    #[serde(default)]
    pub text: String,
}

/// Body of `PUT /questions/{id}/answers/{id}`. Only `text` is editable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerUpdate {
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
