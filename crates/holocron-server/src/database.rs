//! Selecting and opening the backing store from a connection string.

use std::path::{Path, PathBuf};

use holocron_store_sqlite::SqliteStore;

use crate::{Error, Result};

/// Used when no `database_url` is configured.
pub const FALLBACK_DATABASE_PATH: &str = "/tmp/holocron.db";

/// Where the SQLite store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
  File(PathBuf),
  Memory,
}

impl DatabaseTarget {
  /// Interpret a connection string.
  ///
  /// Accepts `sqlite://<path>`, `sqlite:<path>`, a bare path, and
  /// `sqlite::memory:` / `:memory:`. Any other `scheme://` is rejected.
  pub fn from_url(url: Option<&str>) -> Result<Self> {
    let url = match url.map(str::trim) {
      None | Some("") => return Ok(Self::File(PathBuf::from(FALLBACK_DATABASE_PATH))),
      Some(url) => url,
    };

    if matches!(url, "sqlite::memory:" | ":memory:" | "sqlite://:memory:") {
      return Ok(Self::Memory);
    }

    let path = if let Some(rest) = url.strip_prefix("sqlite://") {
      rest
    } else if let Some(rest) = url.strip_prefix("sqlite:") {
      rest
    } else if url.contains("://") {
      return Err(Error::UnsupportedDatabaseUrl(url.to_owned()));
    } else {
      url
    };

    if path.is_empty() {
      return Err(Error::UnsupportedDatabaseUrl(url.to_owned()));
    }
    Ok(Self::File(expand_tilde(Path::new(path))))
  }

  pub async fn open(&self) -> Result<SqliteStore> {
    let store = match self {
      Self::File(path) => SqliteStore::open(path).await?,
      Self::Memory => SqliteStore::open_in_memory().await?,
    };
    Ok(store)
  }
}

/// Resolve a leading `~` component against `home`. `~user/...` forms are
/// left alone.
fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
  match (path.strip_prefix("~"), home) {
    (Ok(rest), Some(home)) => home.join(rest),
    _ => path.to_path_buf(),
  }
}

fn expand_tilde(path: &Path) -> PathBuf {
  let home = std::env::var_os("HOME").map(PathBuf::from);
  expand_home(path, home.as_deref())
}
