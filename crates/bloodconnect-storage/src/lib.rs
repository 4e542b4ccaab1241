//! BloodConnect Storage Layer
//!
//! SQLite-backed persistence for client-side state. The store survives
//! process restarts; everything else in the client treats it as a plain
//! string-keyed get/put/delete surface.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
