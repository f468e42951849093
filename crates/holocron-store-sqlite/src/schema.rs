//! SQL schema for the Holocron SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS user (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    email     TEXT    NOT NULL UNIQUE,
    password  TEXT    NOT NULL,          -- argon2 PHC string, never plain text
    is_active INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS planet (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    uid        TEXT    NOT NULL UNIQUE,
    name       TEXT    NOT NULL,
    population TEXT,
    terrain    TEXT,
    url        TEXT
);

CREATE TABLE IF NOT EXISTS character (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    uid    TEXT    NOT NULL UNIQUE,
    name   TEXT    NOT NULL,
    gender TEXT,
    url    TEXT
);

-- Exactly one of planet_id / character_id is set.
-- Duplicate (user, target) rows are allowed.
CREATE TABLE IF NOT EXISTS favorite (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id      INTEGER NOT NULL REFERENCES user(id),
    planet_id    INTEGER REFERENCES planet(id),
    character_id INTEGER REFERENCES character(id),
    CHECK ((planet_id IS NULL) != (character_id IS NULL))
);

CREATE INDEX IF NOT EXISTS favorite_user_idx ON favorite(user_id);

PRAGMA user_version = 1;
";
