//! [`SqliteStore`] — the SQLite implementation of [`CatalogStore`].

use std::path::Path;

use holocron_core::{
  Error as CoreError,
  catalog::{Character, NewCharacter, NewPlanet, Planet},
  favorite::{Favorite, FavoriteTarget},
  id::{CharacterId, FavoriteId, PlanetId, UserId},
  store::CatalogStore,
  user::{NewUser, User},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Result,
  decode::{
    CHARACTER_COLUMNS, FAVORITE_COLUMNS, PLANET_COLUMNS, USER_COLUMNS,
    character_from_row, favorite_from_row, planet_from_row, user_from_row,
  },
  error::map_unique,
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Holocron catalog backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  pub(crate) async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a single-row `SELECT <columns> FROM <table> WHERE id = ?1`.
  async fn get_by_id<T, F>(
    &self,
    table: &'static str,
    columns: &'static str,
    id: i64,
    decode: F,
  ) -> Result<Option<T>>
  where
    T: Send + 'static,
    F: Fn(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let row = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {columns} FROM {table} WHERE id = ?1"),
            rusqlite::params![id],
            |row| decode(row),
          )
          .optional()?)
      })
      .await?;
    Ok(row)
  }

  /// Run `SELECT <columns> FROM <table> ORDER BY id`.
  async fn list_all<T, F>(
    &self,
    table: &'static str,
    columns: &'static str,
    decode: F,
  ) -> Result<Vec<T>>
  where
    T: Send + 'static,
    F: Fn(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {columns} FROM {table} ORDER BY id"))?;
        let rows = stmt
          .query_map([], |row| decode(row))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}

/// `true` if `sql` (a `SELECT 1 ... WHERE id = ?1`) matches a row.
fn row_exists(
  conn: &rusqlite::Connection,
  sql: &str,
  id: i64,
) -> rusqlite::Result<bool> {
  Ok(conn.query_row(sql, [id], |_| Ok(())).optional()?.is_some())
}

/// The favorite column a target is stored in, and its raw id.
fn target_column(target: FavoriteTarget) -> (&'static str, i64) {
  match target {
    FavoriteTarget::Planet(id) => ("planet_id", id.0),
    FavoriteTarget::Character(id) => ("character_id", id.0),
  }
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for SqliteStore {
  type Error = crate::Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn create_user(&self, input: NewUser) -> Result<User> {
    let email_str = input.email.clone();
    let hash_str  = input.password_hash.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO user (email, password, is_active) VALUES (?1, ?2, 1)",
          rusqlite::params![email_str, hash_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| map_unique(e, || CoreError::DuplicateEmail(input.email.clone())))?;

    Ok(User {
      id:            UserId(id),
      email:         input.email,
      password_hash: input.password_hash,
      is_active:     true,
    })
  }

  async fn get_user(&self, id: UserId) -> Result<Option<User>> {
    self.get_by_id("user", USER_COLUMNS, id.0, user_from_row).await
  }

  async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
    let email_str = email.to_owned();

    let user = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!("SELECT {USER_COLUMNS} FROM user WHERE email = ?1"),
            rusqlite::params![email_str],
            user_from_row,
          )
          .optional()?)
      })
      .await?;
    Ok(user)
  }

  async fn list_users(&self) -> Result<Vec<User>> {
    self.list_all("user", USER_COLUMNS, user_from_row).await
  }

  // ── Planets ───────────────────────────────────────────────────────────────

  async fn create_planet(&self, input: NewPlanet) -> Result<Planet> {
    let row = input.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO planet (uid, name, population, terrain, url)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![row.uid, row.name, row.population, row.terrain, row.url],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| {
        map_unique(e, || CoreError::DuplicateUid {
          kind: "planet",
          uid:  input.uid.clone(),
        })
      })?;

    Ok(Planet {
      id:         PlanetId(id),
      uid:        input.uid,
      name:       input.name,
      population: input.population,
      terrain:    input.terrain,
      url:        input.url,
    })
  }

  async fn get_planet(&self, id: PlanetId) -> Result<Option<Planet>> {
    self.get_by_id("planet", PLANET_COLUMNS, id.0, planet_from_row).await
  }

  async fn list_planets(&self) -> Result<Vec<Planet>> {
    self.list_all("planet", PLANET_COLUMNS, planet_from_row).await
  }

  // ── Characters ────────────────────────────────────────────────────────────

  async fn create_character(&self, input: NewCharacter) -> Result<Character> {
    let row = input.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO character (uid, name, gender, url) VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![row.uid, row.name, row.gender, row.url],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| {
        map_unique(e, || CoreError::DuplicateUid {
          kind: "character",
          uid:  input.uid.clone(),
        })
      })?;

    Ok(Character {
      id:     CharacterId(id),
      uid:    input.uid,
      name:   input.name,
      gender: input.gender,
      url:    input.url,
    })
  }

  async fn get_character(&self, id: CharacterId) -> Result<Option<Character>> {
    self
      .get_by_id("character", CHARACTER_COLUMNS, id.0, character_from_row)
      .await
  }

  async fn list_characters(&self) -> Result<Vec<Character>> {
    self.list_all("character", CHARACTER_COLUMNS, character_from_row).await
  }

  // ── Favorites ─────────────────────────────────────────────────────────────

  async fn add_favorite(
    &self,
    user_id: UserId,
    target:  FavoriteTarget,
  ) -> Result<Favorite> {
    let planet_id    = target.planet_id().map(i64::from);
    let character_id = target.character_id().map(i64::from);

    // Existence checks and the insert share one transaction so a concurrent
    // request cannot slip in between them.
    let id = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        if !row_exists(&tx, "SELECT 1 FROM user WHERE id = ?1", user_id.0)? {
          return Ok(Err(CoreError::UserNotFound(user_id)));
        }

        let target_missing = match target {
          FavoriteTarget::Planet(id) => {
            (!row_exists(&tx, "SELECT 1 FROM planet WHERE id = ?1", id.0)?)
              .then_some(CoreError::PlanetNotFound(id))
          }
          FavoriteTarget::Character(id) => {
            (!row_exists(&tx, "SELECT 1 FROM character WHERE id = ?1", id.0)?)
              .then_some(CoreError::CharacterNotFound(id))
          }
        };
        if let Some(err) = target_missing {
          return Ok(Err(err));
        }

        tx.execute(
          "INSERT INTO favorite (user_id, planet_id, character_id)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![user_id.0, planet_id, character_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        Ok(Ok(id))
      })
      .await??;

    Ok(Favorite { id: FavoriteId(id), user_id, target })
  }

  async fn list_favorites(&self, user_id: UserId) -> Result<Vec<Favorite>> {
    let records = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {FAVORITE_COLUMNS} FROM favorite WHERE user_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![user_id.0], favorite_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    records
      .into_iter()
      .map(|r| Favorite::try_from(r).map_err(crate::Error::from))
      .collect()
  }

  async fn find_favorite(
    &self,
    user_id: UserId,
    target:  FavoriteTarget,
  ) -> Result<Option<Favorite>> {
    let (column, target_id) = target_column(target);

    let record = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            &format!(
              "SELECT {FAVORITE_COLUMNS} FROM favorite
               WHERE user_id = ?1 AND {column} = ?2
               ORDER BY id LIMIT 1"
            ),
            rusqlite::params![user_id.0, target_id],
            favorite_from_row,
          )
          .optional()?)
      })
      .await?;

    Ok(record.map(Favorite::try_from).transpose()?)
  }

  async fn delete_favorite(&self, id: FavoriteId) -> Result<bool> {
    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM favorite WHERE id = ?1",
          rusqlite::params![id.0],
        )?)
      })
      .await?;
    Ok(removed > 0)
  }
}
