//! The `CatalogStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `holocron-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  Error,
  catalog::{Character, NewCharacter, NewPlanet, Planet},
  favorite::{Favorite, FavoriteTarget},
  id::{CharacterId, FavoriteId, PlanetId, UserId},
  user::{NewUser, User},
};

// ─── Error classification ────────────────────────────────────────────────────

/// Lets callers see the domain meaning of a backend error without knowing the
/// backend. Infrastructure failures return `None`.
pub trait DomainError {
  fn domain(&self) -> Option<&Error>;
}

impl DomainError for Error {
  fn domain(&self) -> Option<&Error> { Some(self) }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Holocron catalog backend.
///
/// Reads return `Ok(None)` (or an empty list) when nothing matches; turning
/// absence into an HTTP error is the caller's job.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait CatalogStore: Send + Sync {
  type Error: std::error::Error + DomainError + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Persist a new, active user. Fails with [`Error::DuplicateEmail`] if the
  /// email is taken.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    id: UserId,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn find_user_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  // ── Planets ───────────────────────────────────────────────────────────

  /// Fails with [`Error::DuplicateUid`] if the uid is taken.
  fn create_planet(
    &self,
    input: NewPlanet,
  ) -> impl Future<Output = Result<Planet, Self::Error>> + Send + '_;

  fn get_planet(
    &self,
    id: PlanetId,
  ) -> impl Future<Output = Result<Option<Planet>, Self::Error>> + Send + '_;

  fn list_planets(
    &self,
  ) -> impl Future<Output = Result<Vec<Planet>, Self::Error>> + Send + '_;

  // ── Characters ────────────────────────────────────────────────────────

  /// Fails with [`Error::DuplicateUid`] if the uid is taken.
  fn create_character(
    &self,
    input: NewCharacter,
  ) -> impl Future<Output = Result<Character, Self::Error>> + Send + '_;

  fn get_character(
    &self,
    id: CharacterId,
  ) -> impl Future<Output = Result<Option<Character>, Self::Error>> + Send + '_;

  fn list_characters(
    &self,
  ) -> impl Future<Output = Result<Vec<Character>, Self::Error>> + Send + '_;

  // ── Favorites ─────────────────────────────────────────────────────────

  /// Link `user_id` to `target`.
  ///
  /// Both the user and the target must exist, otherwise the matching
  /// `*NotFound` error is returned. Identical favorites are not merged: each
  /// call inserts a new row.
  fn add_favorite(
    &self,
    user_id: UserId,
    target: FavoriteTarget,
  ) -> impl Future<Output = Result<Favorite, Self::Error>> + Send + '_;

  /// All favorites owned by `user_id`, oldest first.
  fn list_favorites(
    &self,
    user_id: UserId,
  ) -> impl Future<Output = Result<Vec<Favorite>, Self::Error>> + Send + '_;

  /// The oldest favorite of `user_id` pointing at `target`, if any.
  fn find_favorite(
    &self,
    user_id: UserId,
    target: FavoriteTarget,
  ) -> impl Future<Output = Result<Option<Favorite>, Self::Error>> + Send + '_;

  /// Remove one favorite row. Returns `false` if no such row existed.
  fn delete_favorite(
    &self,
    id: FavoriteId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
