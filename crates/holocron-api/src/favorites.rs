//! Handlers for the caller's favorites.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/users/favorites` | The caller's favorites, oldest first |
//! | `POST`   | `/favorite/planet/:id` | 201; 404 if the planet does not exist |
//! | `POST`   | `/favorite/people/:id` | 201; 404 if the character does not exist |
//! | `DELETE` | `/favorite/planet/:id` | Removes one matching favorite; 404 if none |
//! | `DELETE` | `/favorite/people/:id` | Removes one matching favorite; 404 if none |
//!
//! Adding the same target twice stores two favorites; each `DELETE` removes
//! the oldest one.

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use holocron_core::{
  Error as CoreError,
  favorite::{Favorite, FavoriteTarget},
  id::{CharacterId, PlanetId},
  store::CatalogStore,
};
use serde_json::{Value, json};

use crate::{ApiState, Caller, error::ApiError, id_path::IdPath};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users/favorites`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  Caller(user_id): Caller,
) -> Result<Json<Vec<Favorite>>, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let favorites = state
    .store
    .list_favorites(user_id)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(favorites))
}

// ─── Add ──────────────────────────────────────────────────────────────────────

/// `POST /favorite/planet/:id`
pub async fn add_planet<S>(
  State(state): State<ApiState<S>>,
  caller: Caller,
  IdPath(id): IdPath<PlanetId>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  add(&state, caller, FavoriteTarget::Planet(id)).await
}

/// `POST /favorite/people/:id`
pub async fn add_person<S>(
  State(state): State<ApiState<S>>,
  caller: Caller,
  IdPath(id): IdPath<CharacterId>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  add(&state, caller, FavoriteTarget::Character(id)).await
}

async fn add<S>(
  state: &ApiState<S>,
  Caller(user_id): Caller,
  target: FavoriteTarget,
) -> Result<(StatusCode, Json<Favorite>), ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let favorite = state
    .store
    .add_favorite(user_id, target)
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(%user_id, %target, favorite_id = %favorite.id, "favorite added");
  Ok((StatusCode::CREATED, Json(favorite)))
}

// ─── Remove ───────────────────────────────────────────────────────────────────

/// `DELETE /favorite/planet/:id`
pub async fn remove_planet<S>(
  State(state): State<ApiState<S>>,
  caller: Caller,
  IdPath(id): IdPath<PlanetId>,
) -> Result<Json<Value>, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  remove(&state, caller, FavoriteTarget::Planet(id)).await?;
  Ok(Json(json!({ "msg": "planet removed from favorites" })))
}

/// `DELETE /favorite/people/:id`
pub async fn remove_person<S>(
  State(state): State<ApiState<S>>,
  caller: Caller,
  IdPath(id): IdPath<CharacterId>,
) -> Result<Json<Value>, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  remove(&state, caller, FavoriteTarget::Character(id)).await?;
  Ok(Json(json!({ "msg": "character removed from favorites" })))
}

async fn remove<S>(
  state: &ApiState<S>,
  Caller(user_id): Caller,
  target: FavoriteTarget,
) -> Result<(), ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let not_found = || ApiError::NotFound(CoreError::FavoriteNotFound(target).to_string());

  let favorite = state
    .store
    .find_favorite(user_id, target)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(not_found)?;

  // Another request may have removed it between the lookup and here.
  let removed = state
    .store
    .delete_favorite(favorite.id)
    .await
    .map_err(ApiError::from_store)?;
  if !removed {
    return Err(not_found());
  }

  tracing::info!(%user_id, %target, favorite_id = %favorite.id, "favorite removed");
  Ok(())
}
