//! Handlers for `/planets` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/planets` | All planets |
//! | `POST` | `/planets` | Body: `name`, `uid` required; `population`, `terrain`, `url` optional |
//! | `GET`  | `/planets/:id` | 404 if not found |

use axum::{
  Json,
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use holocron_core::{
  catalog::{NewPlanet, Planet},
  id::PlanetId,
  store::CatalogStore,
};
use serde::Deserialize;

use crate::{
  ApiState,
  body::{non_empty, parse_json_body},
  error::ApiError,
  id_path::IdPath,
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /planets`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Planet>>, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let planets = state.store.list_planets().await.map_err(ApiError::from_store)?;
  Ok(Json(planets))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /planets/:id`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  IdPath(id): IdPath<PlanetId>,
) -> Result<Json<Planet>, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let planet = state
    .store
    .get_planet(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("planet {id} not found")))?;
  Ok(Json(planet))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name:       Option<String>,
  pub uid:        Option<String>,
  pub population: Option<String>,
  pub terrain:    Option<String>,
  pub url:        Option<String>,
}

/// `POST /planets` — returns 201 + the stored planet.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let body: CreateBody = parse_json_body(&body)?
    .ok_or_else(|| ApiError::Validation("request body is empty".to_owned()))?;

  let (Some(name), Some(uid)) = (non_empty(body.name), non_empty(body.uid))
  else {
    return Err(ApiError::Validation("name and uid are required".to_owned()));
  };

  let planet = state
    .store
    .create_planet(NewPlanet {
      uid,
      name,
      population: body.population,
      terrain: body.terrain,
      url: body.url,
    })
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(planet_id = %planet.id, uid = %planet.uid, "planet created");
  Ok((StatusCode::CREATED, Json(planet)))
}
