//! HTTP server assembly for Holocron.
//!
//! Wraps the `/api` router from `holocron-api` with request tracing and the
//! greeting endpoint, and resolves configuration and the backing store.
//! A trailing slash on any path is ignored, so `/api/planets/` and
//! `/api/planets` are the same route.

pub mod database;
pub mod error;
pub mod settings;

pub use error::{Error, Result};

use axum::{Json, Router, routing::get};
use holocron_api::{ApiState, api_router};
use holocron_core::store::CatalogStore;
use serde_json::{Value, json};
use tower_http::{normalize_path::NormalizePath, trace::TraceLayer};

/// The assembled service. Path normalisation has to run before routing, so
/// it wraps the router instead of being one of its layers.
pub type App = NormalizePath<Router>;

/// Build the full application service.
pub fn app<S>(state: ApiState<S>) -> App
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let router = Router::new()
    .route("/user", get(hello))
    .nest("/api", api_router(state))
    .layer(TraceLayer::new_for_http());
  NormalizePath::trim_trailing_slash(router)
}

/// `GET /user`
async fn hello() -> Json<Value> {
  Json(json!({ "msg": "Hello, this is your GET /user response" }))
}
