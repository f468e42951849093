//! Favorites — the association between a user and one catalog entry.
//!
//! The domain models the target as a tagged [`FavoriteTarget`] so a favorite
//! always points at exactly one planet or one character. Storage and the
//! JSON projection flatten it back into two nullable columns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  Error,
  id::{CharacterId, FavoriteId, PlanetId, UserId},
};

// ─── Target ──────────────────────────────────────────────────────────────────

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
  Planet(PlanetId),
  Character(CharacterId),
}

impl FavoriteTarget {
  /// Rebuild a target from the two nullable columns. Exactly one must be set.
  pub fn from_columns(
    planet_id: Option<PlanetId>,
    character_id: Option<CharacterId>,
  ) -> Result<Self, Error> {
    match (planet_id, character_id) {
      (Some(p), None) => Ok(Self::Planet(p)),
      (None, Some(c)) => Ok(Self::Character(c)),
      _ => Err(Error::InvalidFavoriteTarget),
    }
  }

  pub fn planet_id(&self) -> Option<PlanetId> {
    match self {
      Self::Planet(id) => Some(*id),
      Self::Character(_) => None,
    }
  }

  pub fn character_id(&self) -> Option<CharacterId> {
    match self {
      Self::Character(id) => Some(*id),
      Self::Planet(_) => None,
    }
  }
}

impl fmt::Display for FavoriteTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Planet(id) => write!(f, "planet {id}"),
      Self::Character(id) => write!(f, "character {id}"),
    }
  }
}

// ─── Favorite ────────────────────────────────────────────────────────────────

/// A stored favorite. Serialises as the flat [`FavoriteRecord`] projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FavoriteRecord", try_from = "FavoriteRecord")]
pub struct Favorite {
  pub id:      FavoriteId,
  pub user_id: UserId,
  pub target:  FavoriteTarget,
}

/// Column-shaped view of a [`Favorite`]: one of `planet_id` and
/// `character_id` is always `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
  pub id:           FavoriteId,
  pub user_id:      UserId,
  pub planet_id:    Option<PlanetId>,
  pub character_id: Option<CharacterId>,
}

impl From<Favorite> for FavoriteRecord {
  fn from(f: Favorite) -> Self {
    FavoriteRecord {
      id:           f.id,
      user_id:      f.user_id,
      planet_id:    f.target.planet_id(),
      character_id: f.target.character_id(),
    }
  }
}

impl TryFrom<FavoriteRecord> for Favorite {
  type Error = Error;

  fn try_from(r: FavoriteRecord) -> Result<Self, Self::Error> {
    Ok(Favorite {
      id:      r.id,
      user_id: r.user_id,
      target:  FavoriteTarget::from_columns(r.planet_id, r.character_id)?,
    })
  }
}
