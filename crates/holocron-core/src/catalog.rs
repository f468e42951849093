//! Catalog entries: planets and characters.
//!
//! Both carry a store-assigned `id` plus an external `uid` that must be unique
//! within its table. Entries are immutable once created.

use serde::Serialize;

use crate::id::{CharacterId, PlanetId};

// ─── Planet ──────────────────────────────────────────────────────────────────

/// A planet. Absent descriptive fields serialise as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
  pub id:         PlanetId,
  pub uid:        String,
  pub name:       String,
  pub population: Option<String>,
  pub terrain:    Option<String>,
  pub url:        Option<String>,
}

/// Input to [`crate::store::CatalogStore::create_planet`].
#[derive(Debug, Clone)]
pub struct NewPlanet {
  pub uid:        String,
  pub name:       String,
  pub population: Option<String>,
  pub terrain:    Option<String>,
  pub url:        Option<String>,
}

// ─── Character ───────────────────────────────────────────────────────────────

/// A character, exposed over HTTP under `/people`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
  pub id:     CharacterId,
  pub uid:    String,
  pub name:   String,
  pub gender: Option<String>,
  pub url:    Option<String>,
}

/// Input to [`crate::store::CatalogStore::create_character`].
#[derive(Debug, Clone)]
pub struct NewCharacter {
  pub uid:    String,
  pub name:   String,
  pub gender: Option<String>,
  pub url:    Option<String>,
}
