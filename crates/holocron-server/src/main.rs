//! holocron server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus the
//! environment, opens the SQLite store named by `database_url`, and serves the
//! JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use axum::{ServiceExt, extract::Request};
use clap::Parser;
use holocron_api::ApiState;
use holocron_server::{database::DatabaseTarget, settings};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Holocron favorites API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = settings::load(&cli.config).context("failed to load configuration")?;

  let target = DatabaseTarget::from_url(server_cfg.database_url.as_deref())
    .context("invalid database_url")?;
  let store = target
    .open()
    .await
    .with_context(|| format!("failed to open store {target:?}"))?;
  tracing::info!(?target, "store ready");

  let state = ApiState::new(Arc::new(store))
    .with_implicit_user(server_cfg.implicit_user());
  tracing::warn!(
    user_id = %state.implicit_user,
    "no authentication configured; all requests act as the implicit user"
  );

  let app = holocron_server::app(state);
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
    .await
    .context("server error")?;

  Ok(())
}
