//! Error type for `holocron-store-sqlite`.

use holocron_core::store::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] holocron_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl DomainError for Error {
  fn domain(&self) -> Option<&holocron_core::Error> {
    match self {
      Error::Core(e) => Some(e),
      Error::Database(_) => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Translate a `UNIQUE` constraint failure into the domain error built by
/// `on_unique`; anything else stays a database error.
pub(crate) fn map_unique(
  err: tokio_rusqlite::Error,
  on_unique: impl FnOnce() -> holocron_core::Error,
) -> Error {
  let unique_violation = matches!(
    &err,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
      if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  );
  if unique_violation {
    Error::Core(on_unique())
  } else {
    Error::Database(err)
  }
}
