//! Data layer module
//!
//! Handles all data persistence:
//! - SQLite database operations
//! - Typed row models

mod database;
mod models;

pub use database::Database;
pub use models::*;
