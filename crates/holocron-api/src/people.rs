//! Handlers for characters.
//!
//! Characters are created under `/characters` but read under `/people`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/characters` | Body: `name`, `uid` required; `gender`, `url` optional |
//! | `GET`  | `/people` | All characters |
//! | `GET`  | `/people/:id` | 404 if not found |

use axum::{
  Json,
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use holocron_core::{
  catalog::{Character, NewCharacter},
  id::CharacterId,
  store::CatalogStore,
};
use serde::Deserialize;

use crate::{
  ApiState,
  body::{non_empty, parse_json_body},
  error::ApiError,
  id_path::IdPath,
};

/// `GET /people`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Character>>, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let people = state
    .store
    .list_characters()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(people))
}

/// `GET /people/:id`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  IdPath(id): IdPath<CharacterId>,
) -> Result<Json<Character>, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let character = state
    .store
    .get_character(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("character {id} not found")))?;
  Ok(Json(character))
}

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name:   Option<String>,
  pub uid:    Option<String>,
  pub gender: Option<String>,
  pub url:    Option<String>,
}

/// `POST /characters` — returns 201 + the stored character.
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

  let character = state
    .store
    .create_character(NewCharacter {
      uid,
      name,
      gender: body.gender,
      url: body.url,
    })
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(character_id = %character.id, uid = %character.uid, "character created");
  Ok((StatusCode::CREATED, Json(character)))
}
