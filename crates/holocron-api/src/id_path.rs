//! Typed id path segments.
//!
//! [`IdPath`] wraps axum's [`Path`] so a segment that is not a valid id (not
//! an integer, or out of `i64` range) is answered like an unknown route: a 404
//! in the usual `{"error": ...}` envelope.

use axum::{
  extract::{FromRequestParts, Path, rejection::PathRejection},
  http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A single id captured from the route, e.g. `/planets/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
  T: DeserializeOwned + Send,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    match Path::<T>::from_request_parts(parts, state).await {
      Ok(Path(id)) => Ok(IdPath(id)),
      Err(PathRejection::FailedToDeserializePathParams(e)) => {
        tracing::debug!(error = %e.body_text(), "unparseable id segment");
        Err(ApiError::NotFound(format!("no resource at {}", parts.uri.path())))
      }
      Err(other) => Err(ApiError::Internal(other.body_text())),
    }
  }
}
