//! Integration tests for `SqliteStore` against an in-memory database.

use holocron_core::{
  Error as CoreError,
  catalog::{NewCharacter, NewPlanet},
  favorite::FavoriteTarget,
  id::{CharacterId, PlanetId, UserId},
  store::{CatalogStore, DomainError},
  user::NewUser,
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_user(email: &str) -> NewUser {
  NewUser {
    email:         email.into(),
    password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".into(),
  }
}

fn new_planet(uid: &str, name: &str) -> NewPlanet {
  NewPlanet {
    uid:        uid.into(),
    name:       name.into(),
    population: None,
    terrain:    None,
    url:        None,
  }
}

fn new_character(uid: &str, name: &str) -> NewCharacter {
  NewCharacter {
    uid:    uid.into(),
    name:   name.into(),
    gender: None,
    url:    None,
  }
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_user() {
  let s = store().await;

  let user = s.create_user(new_user("luke@tatooine.net")).await.unwrap();
  assert!(user.is_active);

  let fetched = s.get_user(user.id).await.unwrap().unwrap();
  assert_eq!(fetched, user);
}

#[tokio::test]
async fn get_user_missing_returns_none() {
  let s = store().await;
  assert!(s.get_user(UserId(42)).await.unwrap().is_none());
}

#[tokio::test]
async fn find_user_by_email() {
  let s = store().await;
  let user = s.create_user(new_user("han@falcon.io")).await.unwrap();

  let found = s.find_user_by_email("han@falcon.io").await.unwrap();
  assert_eq!(found.map(|u| u.id), Some(user.id));
  assert!(s.find_user_by_email("chewie@falcon.io").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_email_is_a_domain_error() {
  let s = store().await;
  s.create_user(new_user("leia@alderaan.gov")).await.unwrap();

  let err = s.create_user(new_user("leia@alderaan.gov")).await.unwrap_err();
  assert!(matches!(err.domain(), Some(CoreError::DuplicateEmail(e)) if e == "leia@alderaan.gov"));
  assert_eq!(s.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn list_users_in_creation_order() {
  let s = store().await;
  s.create_user(new_user("a@example.com")).await.unwrap();
  s.create_user(new_user("b@example.com")).await.unwrap();

  let emails: Vec<String> =
    s.list_users().await.unwrap().into_iter().map(|u| u.email).collect();
  assert_eq!(emails, ["a@example.com", "b@example.com"]);
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn planet_optional_fields_roundtrip() {
  let s = store().await;
  let mut input = new_planet("p-1", "Tatooine");
  input.terrain = Some("desert".into());

  let planet = s.create_planet(input).await.unwrap();
  let fetched = s.get_planet(planet.id).await.unwrap().unwrap();
  assert_eq!(fetched, planet);
  assert_eq!(fetched.terrain.as_deref(), Some("desert"));
  assert!(fetched.population.is_none());
}

#[tokio::test]
async fn duplicate_planet_uid_is_a_domain_error() {
  let s = store().await;
  s.create_planet(new_planet("p-1", "Tatooine")).await.unwrap();

  let err = s.create_planet(new_planet("p-1", "Hoth")).await.unwrap_err();
  assert!(matches!(
    err,
    Error::Core(CoreError::DuplicateUid { kind: "planet", ref uid }) if uid == "p-1"
  ));
}

#[tokio::test]
async fn character_uid_namespace_is_separate_from_planets() {
  let s = store().await;
  s.create_planet(new_planet("shared", "Naboo")).await.unwrap();
  s.create_character(new_character("shared", "Padmé")).await.unwrap();

  let err = s
    .create_character(new_character("shared", "Jar Jar"))
    .await
    .unwrap_err();
  assert!(matches!(err.domain(), Some(CoreError::DuplicateUid { kind: "character", .. })));
  assert_eq!(s.list_characters().await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_missing_catalog_entries_returns_none() {
  let s = store().await;
  assert!(s.get_planet(PlanetId(1)).await.unwrap().is_none());
  assert!(s.get_character(CharacterId(1)).await.unwrap().is_none());
}

// ─── Favorites ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_list_favorites() {
  let s = store().await;
  let user = s.create_user(new_user("luke@tatooine.net")).await.unwrap();
  let planet = s.create_planet(new_planet("p-1", "Dagobah")).await.unwrap();
  let character = s.create_character(new_character("c-1", "Yoda")).await.unwrap();

  let a = s
    .add_favorite(user.id, FavoriteTarget::Planet(planet.id))
    .await
    .unwrap();
  let b = s
    .add_favorite(user.id, FavoriteTarget::Character(character.id))
    .await
    .unwrap();

  let favorites = s.list_favorites(user.id).await.unwrap();
  assert_eq!(favorites, vec![a, b]);
}

#[tokio::test]
async fn favorites_are_scoped_to_their_owner() {
  let s = store().await;
  let luke = s.create_user(new_user("luke@tatooine.net")).await.unwrap();
  let leia = s.create_user(new_user("leia@alderaan.gov")).await.unwrap();
  let planet = s.create_planet(new_planet("p-1", "Yavin 4")).await.unwrap();

  s.add_favorite(luke.id, FavoriteTarget::Planet(planet.id)).await.unwrap();

  assert_eq!(s.list_favorites(luke.id).await.unwrap().len(), 1);
  assert!(s.list_favorites(leia.id).await.unwrap().is_empty());
  assert!(
    s.find_favorite(leia.id, FavoriteTarget::Planet(planet.id))
      .await
      .unwrap()
      .is_none()
  );
}

#[tokio::test]
async fn identical_favorites_are_not_merged() {
  let s = store().await;
  let user = s.create_user(new_user("luke@tatooine.net")).await.unwrap();
  let planet = s.create_planet(new_planet("p-1", "Hoth")).await.unwrap();
  let target = FavoriteTarget::Planet(planet.id);

  let first = s.add_favorite(user.id, target).await.unwrap();
  let second = s.add_favorite(user.id, target).await.unwrap();
  assert_ne!(first.id, second.id);
  assert_eq!(s.list_favorites(user.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn add_favorite_requires_existing_user_and_target() {
  let s = store().await;
  let planet = s.create_planet(new_planet("p-1", "Endor")).await.unwrap();

  let err = s
    .add_favorite(UserId(99), FavoriteTarget::Planet(planet.id))
    .await
    .unwrap_err();
  assert!(matches!(err.domain(), Some(CoreError::UserNotFound(UserId(99)))));

  let user = s.create_user(new_user("wicket@endor.org")).await.unwrap();
  let err = s
    .add_favorite(user.id, FavoriteTarget::Planet(PlanetId(77)))
    .await
    .unwrap_err();
  assert!(matches!(err.domain(), Some(CoreError::PlanetNotFound(PlanetId(77)))));

  let err = s
    .add_favorite(user.id, FavoriteTarget::Character(CharacterId(5)))
    .await
    .unwrap_err();
  assert!(matches!(err.domain(), Some(CoreError::CharacterNotFound(CharacterId(5)))));

  assert!(s.list_favorites(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn find_favorite_returns_oldest_match_and_delete_removes_one() {
  let s = store().await;
  let user = s.create_user(new_user("luke@tatooine.net")).await.unwrap();
  let character = s.create_character(new_character("c-1", "Obi-Wan")).await.unwrap();
  let target = FavoriteTarget::Character(character.id);

  let first = s.add_favorite(user.id, target).await.unwrap();
  s.add_favorite(user.id, target).await.unwrap();

  let found = s.find_favorite(user.id, target).await.unwrap().unwrap();
  assert_eq!(found.id, first.id);

  assert!(s.delete_favorite(found.id).await.unwrap());
  assert_eq!(s.list_favorites(user.id).await.unwrap().len(), 1);

  // Already gone.
  assert!(!s.delete_favorite(found.id).await.unwrap());
}

#[tokio::test]
async fn find_favorite_distinguishes_target_kinds() {
  let s = store().await;
  let user = s.create_user(new_user("luke@tatooine.net")).await.unwrap();
  let planet = s.create_planet(new_planet("p-1", "Bespin")).await.unwrap();
  let character = s.create_character(new_character("c-1", "Lando")).await.unwrap();
  assert_eq!(planet.id.0, character.id.0);

  s.add_favorite(user.id, FavoriteTarget::Planet(planet.id)).await.unwrap();

  assert!(
    s.find_favorite(user.id, FavoriteTarget::Character(character.id))
      .await
      .unwrap()
      .is_none()
  );
}

#[tokio::test]
async fn schema_init_is_idempotent() {
  let s = store().await;
  s.init_schema().await.unwrap();
  s.create_user(new_user("r2@astromech.droid")).await.unwrap();
  s.init_schema().await.unwrap();
  assert_eq!(s.list_users().await.unwrap().len(), 1);
}
