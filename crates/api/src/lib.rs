//! Question-and-answer HTTP API library.
//!
//! Exposes the building blocks (config, state, error handling, resolvers,
//! routes) so integration tests and the binary entrypoint can both use them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
