//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure is rendered as `{"error": "<message>"}`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use holocron_core::{Error as CoreError, store::DomainError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Required input is missing or malformed.
  #[error("{0}")]
  Validation(String),

  #[error("email already registered")]
  DuplicateEmail,

  #[error("{0}")]
  DuplicateUid(String),

  #[error("{0}")]
  NotFound(String),

  #[error("internal error: {0}")]
  Internal(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Map a store error onto the HTTP error it stands for. Errors without a
  /// domain meaning become [`ApiError::Store`].
  pub fn from_store<E>(err: E) -> Self
  where
    E: std::error::Error + DomainError + Send + Sync + 'static,
  {
    let mapped = match err.domain() {
      Some(CoreError::Validation(m)) => Some(ApiError::Validation(m.clone())),
      Some(CoreError::DuplicateEmail(_)) => Some(ApiError::DuplicateEmail),
      Some(e @ CoreError::DuplicateUid { .. }) => {
        Some(ApiError::DuplicateUid(e.to_string()))
      }
      Some(e) if e.is_not_found() => Some(ApiError::NotFound(e.to_string())),
      _ => None,
    };
    mapped.unwrap_or_else(|| ApiError::Store(Box::new(err)))
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Validation(_)
      | ApiError::DuplicateEmail
      | ApiError::DuplicateUid(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Internal(_) | ApiError::Store(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    } else {
      tracing::warn!(%status, error = %self, "request rejected");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
