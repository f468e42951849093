//! User accounts.

use serde::Serialize;

use crate::id::UserId;

/// A registered user.
///
/// The serialised form is the public projection `{"id", "email"}`: the
/// password hash and the active flag never leave the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
  pub id:            UserId,
  pub email:         String,
  #[serde(skip)]
  pub password_hash: String,
  #[serde(skip)]
  pub is_active:     bool,
}

/// Input to [`crate::store::CatalogStore::create_user`].
/// Users are always created active; there is no way to pass the flag in.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub email:         String,
  /// PHC-format hash produced by the caller. Plain passwords are never stored.
  pub password_hash: String,
}
