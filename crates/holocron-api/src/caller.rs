//! Caller identity.
//!
//! There is no authentication: every request acts as the implicit user
//! configured on [`ApiState`]. Handlers still take an explicit [`Caller`] and
//! pass its id down, so swapping this extractor for a real session lookup
//! touches nothing else.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use holocron_core::{id::UserId, store::CatalogStore};

use crate::ApiState;

/// The user on whose behalf a request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller(pub UserId);

impl<S> FromRequestParts<ApiState<S>> for Caller
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  type Rejection = Infallible;

  async fn from_request_parts(
    _parts: &mut Parts,
    state: &ApiState<S>,
  ) -> Result<Self, Self::Rejection> {
    Ok(Caller(state.implicit_user))
  }
}
