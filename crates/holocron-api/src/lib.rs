//! JSON REST API for Holocron.
//!
//! Exposes an axum [`Router`] backed by any [`holocron_core::store::CatalogStore`].
//! Transport concerns (binding, TLS, request tracing) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", holocron_api::api_router(ApiState::new(store)))
//! ```

pub mod body;
pub mod caller;
pub mod error;
pub mod favorites;
pub mod id_path;
pub mod password;
pub mod people;
pub mod planets;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use holocron_core::{id::UserId, store::CatalogStore};

pub use caller::Caller;
pub use error::ApiError;

/// User id every request acts as until real authentication exists.
pub const IMPLICIT_USER_ID: UserId = UserId(1);

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct ApiState<S> {
  pub store:         Arc<S>,
  /// Identity resolved by the [`Caller`] extractor.
  pub implicit_user: UserId,
}

impl<S> ApiState<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store, implicit_user: IMPLICIT_USER_ID }
  }

  pub fn with_implicit_user(mut self, user: UserId) -> Self {
    self.implicit_user = user;
    self
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Users
    .route("/users", get(users::list::<S>).post(users::create::<S>))
    .route("/users/favorites", get(favorites::list::<S>))
    // Planets
    .route("/planets", get(planets::list::<S>).post(planets::create::<S>))
    .route("/planets/{id}", get(planets::get_one::<S>))
    // Characters
    .route("/characters", post(people::create::<S>))
    .route("/people", get(people::list::<S>))
    .route("/people/{id}", get(people::get_one::<S>))
    // Favorites
    .route(
      "/favorite/planet/{id}",
      post(favorites::add_planet::<S>).delete(favorites::remove_planet::<S>),
    )
    .route(
      "/favorite/people/{id}",
      post(favorites::add_person::<S>).delete(favorites::remove_person::<S>),
    )
    .with_state(state)
}
