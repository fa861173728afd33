//! Rendering a [`QueryRequest`] into a parameterized SQLite statement.
//!
//! Identifiers and clauses come only from the fixed fragments below, keyed by
//! the request's enums. The argument is bound as `?1`.

use roster_core::query::{Predicate, Projection, QueryRequest, Relation};

use crate::encode::{RawEmployee, RawRows, department_from_row};

/// How the selected columns decode into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
  Employees,
  Departments,
  Managers,
  Total,
}

/// SQL text plus its bound argument, ready to run on a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
  pub sql:      String,
  pub shape:    Shape,
  pub argument: Option<String>,
}

impl Statement {
  pub fn from_request(request: &QueryRequest) -> Self {
    let (columns, shape) = match (request.projection, request.relation) {
      (Projection::AllColumns, Relation::Employees) => {
        ("ID, Name, Department, Salary, Hire_Date", Shape::Employees)
      }
      (Projection::AllColumns, Relation::Departments) => ("ID, Name, Manager", Shape::Departments),
      (Projection::Manager, _) => ("Manager", Shape::Managers),
      // SUM over no rows is NULL in SQLite; an empty department totals 0.
      (Projection::SalarySum, _) => ("COALESCE(SUM(Salary), 0)", Shape::Total),
    };

    let mut sql = format!("SELECT {columns} FROM {}", table_name(request.relation));
    if let Some(predicate) = request.predicate {
      sql.push_str(" WHERE ");
      sql.push_str(predicate_clause(predicate));
    }
    if shape != Shape::Total {
      sql.push_str(" ORDER BY ID");
    }

    Self { sql, shape, argument: request.argument.clone() }
  }

  /// Prepare, bind and collect every row. The prepared statement is
  /// finalized when this returns, whichever way.
  pub fn run(&self, conn: &rusqlite::Connection) -> rusqlite::Result<RawRows> {
    let mut stmt = conn.prepare(&self.sql)?;
    let params = rusqlite::params_from_iter(self.argument.as_deref());

    Ok(match self.shape {
      Shape::Employees => RawRows::Employees(
        stmt
          .query_map(params, RawEmployee::from_row)?
          .collect::<rusqlite::Result<_>>()?,
      ),
      Shape::Departments => RawRows::Departments(
        stmt
          .query_map(params, department_from_row)?
          .collect::<rusqlite::Result<_>>()?,
      ),
      Shape::Managers => RawRows::Managers(
        stmt
          .query_map(params, |row| row.get::<_, String>(0))?
          .collect::<rusqlite::Result<_>>()?,
      ),
      Shape::Total => RawRows::Total(stmt.query_row(params, |row| row.get::<_, i64>(0))?),
    })
  }
}

fn table_name(relation: Relation) -> &'static str {
  match relation {
    Relation::Employees => "Employees",
    Relation::Departments => "Departments",
  }
}

/// Name comparisons ignore case so that stored spellings such as
/// "MARKETING" still match the capitalized argument.
fn predicate_clause(predicate: Predicate) -> &'static str {
  match predicate {
    Predicate::DepartmentIs => "Department = ?1 COLLATE NOCASE",
    Predicate::NameIs => "Name = ?1 COLLATE NOCASE",
    Predicate::HiredAfter => "Hire_Date > ?1",
  }
}

#[cfg(test)]
mod tests {
  use roster_core::{Intent, query::synthesize};

  use super::*;

  fn render(intent: Intent, argument: Option<&str>) -> Statement {
    Statement::from_request(&synthesize(intent, argument).unwrap())
  }

  #[test]
  fn department_filter_is_a_bound_parameter() {
    let stmt = render(Intent::EmployeesInDepartment, Some("engineering"));
    assert_eq!(
      stmt.sql,
      "SELECT ID, Name, Department, Salary, Hire_Date FROM Employees \
       WHERE Department = ?1 COLLATE NOCASE ORDER BY ID"
    );
    assert_eq!(stmt.shape, Shape::Employees);
    assert_eq!(stmt.argument.as_deref(), Some("Engineering"));
  }

  #[test]
  fn argument_text_never_enters_the_sql() {
    let stmt = render(Intent::DepartmentManager, Some("x' or '1'='1"));
    assert!(!stmt.sql.contains("or '1'"), "{}", stmt.sql);
    assert_eq!(stmt.sql, "SELECT Manager FROM Departments WHERE Name = ?1 COLLATE NOCASE ORDER BY ID");
  }

  #[test]
  fn total_is_coalesced_and_unordered() {
    let stmt = render(Intent::TotalSalaryExpense, Some("marketing"));
    assert_eq!(
      stmt.sql,
      "SELECT COALESCE(SUM(Salary), 0) FROM Employees WHERE Department = ?1 COLLATE NOCASE"
    );
    assert_eq!(stmt.shape, Shape::Total);
  }

  #[test]
  fn listings_have_no_parameters() {
    let stmt = render(Intent::AllDepartments, None);
    assert_eq!(stmt.sql, "SELECT ID, Name, Manager FROM Departments ORDER BY ID");
    assert_eq!(stmt.argument, None);

    let stmt = render(Intent::EmployeesHiredAfter, Some("2021-01-01"));
    assert!(stmt.sql.ends_with("WHERE Hire_Date > ?1 ORDER BY ID"));
  }
}
