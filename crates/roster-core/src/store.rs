//! The `QueryExecutor` trait and the typed rows it returns.
//!
//! Implemented by storage backends (e.g. `roster-store-sqlite`). The pipeline
//! depends on this abstraction only.

use std::future::Future;

use serde::Serialize;

use crate::{
  query::QueryRequest,
  record::{Department, Employee},
};

// ─── Rows ────────────────────────────────────────────────────────────────────

/// The result of one executed request, shaped by its projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum Rows {
  Employees(Vec<Employee>),
  Departments(Vec<Department>),
  Managers(Vec<String>),
  /// An aggregate always yields exactly one value.
  Total(i64),
}

impl Rows {
  pub fn len(&self) -> usize {
    match self {
      Rows::Employees(rows) => rows.len(),
      Rows::Departments(rows) => rows.len(),
      Rows::Managers(rows) => rows.len(),
      Rows::Total(_) => 1,
    }
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Runs a [`QueryRequest`] against a backing store.
///
/// Each call acquires its own data-access handle and releases it before
/// returning, on success and failure alike. Failures are not retried.
pub trait QueryExecutor: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Execute `request`, binding its argument as a statement parameter.
  fn execute<'a>(
    &'a self,
    request: &'a QueryRequest,
  ) -> impl Future<Output = Result<Rows, Self::Error>> + Send + 'a;
}
