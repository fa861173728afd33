//! Records held by the backing store.
//!
//! Both tables are seeded once and never written by the query pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A row of the `Employees` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
  pub id:         i64,
  pub name:       String,
  /// Name of a [`Department`]; not enforced by a foreign key.
  pub department: String,
  pub salary:     i64,
  /// Stored as ISO 8601 text so that lexical and chronological order agree.
  pub hire_date:  NaiveDate,
}

/// A row of the `Departments` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
  pub id:      i64,
  pub name:    String,
  /// Name of the managing employee.
  pub manager: String,
}
