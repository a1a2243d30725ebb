//! Request extractors that run before handler bodies.
//!
//! - [`resolve::ResolvedQuestion`] -- Loads the question named by `{question_id}`.
//! - [`resolve::ResolvedAnswer`] -- Additionally locates `{answer_id}` inside it.
//! - [`json::JsonOrDefault`] -- JSON body; absent means `T::default()`, errors use the API format.
//! - [`path::AppPath`] -- Path parameters; undecodable segments are 404s.

pub mod json;
pub mod path;
pub mod resolve;
