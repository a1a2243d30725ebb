//! Repository layer. Each repository is the sole write path for its aggregate.

pub mod question_repo;

pub use question_repo::QuestionRepo;
