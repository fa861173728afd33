//! SQLite backend for Roster.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod encode;
mod schema;
mod statement;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use schema::{SAMPLE_DEPARTMENTS, SAMPLE_EMPLOYEES};
pub use store::{SeedReport, SqliteStore};
