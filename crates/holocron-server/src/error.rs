//! Startup errors for `holocron-server`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("unsupported database url {0:?}: only sqlite is available")]
  UnsupportedDatabaseUrl(String),

  #[error("store error: {0}")]
  Store(#[from] holocron_store_sqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
