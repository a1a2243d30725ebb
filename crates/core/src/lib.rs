//! Domain model for the question-and-answer store.
//!
//! Pure logic only; storage lives in `qa_db` and HTTP in `qa_api`.

pub mod error;
pub mod ordering;
pub mod question;
pub mod types;
pub mod vote;
