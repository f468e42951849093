//! Handlers for `/users` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/users` | All users, public projection only |
//! | `POST` | `/users` | Body: `{"email":"...","password":"..."}`; returns 201 |

use axum::{
  Json,
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use holocron_core::{
  store::CatalogStore,
  user::{NewUser, User},
};
use serde::Deserialize;

use crate::{
  ApiState,
  body::{non_empty, parse_json_body},
  error::ApiError,
  password::hash_password,
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /users`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<User>>, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let users = state.store.list_users().await.map_err(ApiError::from_store)?;
  Ok(Json(users))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateBody {
  pub email:    Option<String>,
  pub password: Option<String>,
}

/// `POST /users` — new users are always active.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
{
  let body: CreateBody = parse_json_body(&body)?.unwrap_or_default();

  let (Some(email), Some(password)) =
    (non_empty(body.email), non_empty(body.password))
  else {
    return Err(ApiError::Validation(
      "email and password are required".to_owned(),
    ));
  };

  // The store maps the UNIQUE violation too; checking first keeps the common
  // case off the error path.
  let existing = state
    .store
    .find_user_by_email(&email)
    .await
    .map_err(ApiError::from_store)?;
  if existing.is_some() {
    return Err(ApiError::DuplicateEmail);
  }

  // argon2 blocks for tens of milliseconds; run it on the blocking pool.
  let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
    .await
    .map_err(|e| ApiError::Internal(format!("password hashing task failed: {e}")))??;
  let user = state
    .store
    .create_user(NewUser { email, password_hash })
    .await
    .map_err(ApiError::from_store)?;

  tracing::info!(user_id = %user.id, "user created");
  Ok((StatusCode::CREATED, Json(user)))
}
