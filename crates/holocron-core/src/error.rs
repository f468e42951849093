//! Error types for `holocron-core`.

use thiserror::Error;

use crate::{
  favorite::FavoriteTarget,
  id::{CharacterId, PlanetId, UserId},
};

#[derive(Debug, Error)]
pub enum Error {
  #[error("{0}")]
  Validation(String),

  #[error("email already registered: {0}")]
  DuplicateEmail(String),

  #[error("{kind} uid already exists: {uid}")]
  DuplicateUid { kind: &'static str, uid: String },

  #[error("user not found: {0}")]
  UserNotFound(UserId),

  #[error("planet not found: {0}")]
  PlanetNotFound(PlanetId),

  #[error("character not found: {0}")]
  CharacterNotFound(CharacterId),

  #[error("favorite not found: {0}")]
  FavoriteNotFound(FavoriteTarget),

  #[error("favorite must reference exactly one planet or character")]
  InvalidFavoriteTarget,
}

impl Error {
  /// `true` for the variants that mean "the referenced record is absent".
  pub fn is_not_found(&self) -> bool {
    matches!(
      self,
      Self::UserNotFound(_)
        | Self::PlanetNotFound(_)
        | Self::CharacterNotFound(_)
        | Self::FavoriteNotFound(_)
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
