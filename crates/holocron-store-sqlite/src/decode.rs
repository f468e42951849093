//! Row decoding between SQLite rows and `holocron-core` types.
//!
//! Each `*_COLUMNS` constant lists the select order its `*_from_row` function
//! expects.

use holocron_core::{
  catalog::{Character, Planet},
  favorite::FavoriteRecord,
  id::{CharacterId, FavoriteId, PlanetId, UserId},
  user::User,
};
use rusqlite::Row;

pub const USER_COLUMNS: &str = "id, email, password, is_active";

pub fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    id:            UserId(row.get(0)?),
    email:         row.get(1)?,
    password_hash: row.get(2)?,
    is_active:     row.get(3)?,
  })
}

pub const PLANET_COLUMNS: &str = "id, uid, name, population, terrain, url";

pub fn planet_from_row(row: &Row<'_>) -> rusqlite::Result<Planet> {
  Ok(Planet {
    id:         PlanetId(row.get(0)?),
    uid:        row.get(1)?,
    name:       row.get(2)?,
    population: row.get(3)?,
    terrain:    row.get(4)?,
    url:        row.get(5)?,
  })
}

pub const CHARACTER_COLUMNS: &str = "id, uid, name, gender, url";

pub fn character_from_row(row: &Row<'_>) -> rusqlite::Result<Character> {
  Ok(Character {
    id:     CharacterId(row.get(0)?),
    uid:    row.get(1)?,
    name:   row.get(2)?,
    gender: row.get(3)?,
    url:    row.get(4)?,
  })
}

pub const FAVORITE_COLUMNS: &str = "id, user_id, planet_id, character_id";

/// Favorites decode to the flat record; the caller converts it into a
/// [`holocron_core::favorite::Favorite`], which validates the target columns.
pub fn favorite_from_row(row: &Row<'_>) -> rusqlite::Result<FavoriteRecord> {
  Ok(FavoriteRecord {
    id:           FavoriteId(row.get(0)?),
    user_id:      UserId(row.get(1)?),
    planet_id:    row.get::<_, Option<i64>>(2)?.map(PlanetId),
    character_id: row.get::<_, Option<i64>>(3)?.map(CharacterId),
  })
}
