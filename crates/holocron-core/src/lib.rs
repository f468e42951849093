//! Core types and trait definitions for the Holocron favorites catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod catalog;
pub mod error;
pub mod favorite;
pub mod id;
pub mod store;
pub mod user;

pub use error::{Error, Result};
