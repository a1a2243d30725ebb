use axum::extract::FromRequestParts;

use crate::error::AppError;

/// `axum::extract::Path`, but segments that fail to decode are reported as
/// a JSON 404 through [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
