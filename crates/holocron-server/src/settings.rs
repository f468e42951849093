//! Runtime configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file,
//! `HOLOCRON_*` environment variables, then the conventional `DATABASE_URL`
//! and `PORT` variables.

use std::path::Path;

use holocron_core::id::UserId;
use serde::Deserialize;

use crate::Result;

/// Runtime server configuration.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  /// Backing store; see [`crate::database::DatabaseTarget::from_url`].
  pub database_url:     Option<String>,
  /// The user every request acts as. There is no authentication.
  pub implicit_user_id: i64,
}

impl ServerConfig {
  pub fn implicit_user(&self) -> UserId { UserId(self.implicit_user_id) }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Load configuration from `path` (optional) and the process environment.
pub fn load(path: &Path) -> Result<ServerConfig> {
  load_with(
    path,
    std::env::var("DATABASE_URL").ok(),
    std::env::var("PORT").ok(),
  )
}

/// [`load`] with the two conventional variables passed in explicitly.
pub fn load_with(
  path: &Path,
  database_url: Option<String>,
  port: Option<String>,
) -> Result<ServerConfig> {
  let settings = config::Config::builder()
    .set_default("host", "0.0.0.0")?
    .set_default("port", 3000)?
    .set_default("implicit_user_id", 1)?
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("HOLOCRON"))
    .set_override_option("database_url", database_url)?
    .set_override_option("port", port)?
    .build()?;

  Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn missing_file() -> std::path::PathBuf {
    std::env::temp_dir().join("holocron-config-that-does-not-exist.toml")
  }

  #[test]
  fn defaults_apply_without_a_file() {
    let cfg = load_with(&missing_file(), None, None).unwrap();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.database_url, None);
    assert_eq!(cfg.implicit_user(), UserId(1));
    assert_eq!(cfg.address(), "0.0.0.0:3000");
  }

  #[test]
  fn conventional_variables_override_the_file() {
    let path = std::env::temp_dir()
      .join(format!("holocron-config-{}.toml", std::process::id()));
    std::fs::write(
      &path,
      "host = \"127.0.0.1\"\nport = 8080\ndatabase_url = \"sqlite://file.db\"\nimplicit_user_id = 7\n",
    )
    .unwrap();

    let from_file = load_with(&path, None, None).unwrap();
    assert_eq!(from_file.port, 8080);
    assert_eq!(from_file.database_url.as_deref(), Some("sqlite://file.db"));
    assert_eq!(from_file.implicit_user(), UserId(7));

    let overridden = load_with(
      &path,
      Some("sqlite::memory:".to_owned()),
      Some("9000".to_owned()),
    )
    .unwrap();
    assert_eq!(overridden.host, "127.0.0.1");
    assert_eq!(overridden.port, 9000);
    assert_eq!(overridden.database_url.as_deref(), Some("sqlite::memory:"));

    std::fs::remove_file(&path).ok();
  }
}
