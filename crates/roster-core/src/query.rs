//! Query synthesis: one fixed request template per intent.
//!
//! A [`QueryRequest`] names its table, projection and predicate through
//! closed enums. Backends turn those into statement text from static
//! fragments; the only runtime value is [`QueryRequest::argument`], which
//! must be bound as a parameter.

use serde::Serialize;

use crate::intent::Intent;

// ─── Request shape ───────────────────────────────────────────────────────────

/// The table a request reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Relation {
  Employees,
  Departments,
}

/// What a request selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Projection {
  /// Every column of the relation, one record per row.
  AllColumns,
  /// `Departments.Manager` only.
  Manager,
  /// The sum of `Employees.Salary` over matching rows.
  SalarySum,
}

/// The filter applied to a request, comparing one column to the argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Predicate {
  /// `Employees.Department` equals the argument.
  DepartmentIs,
  /// `Departments.Name` equals the argument.
  NameIs,
  /// `Employees.Hire_Date` sorts lexically after the argument.
  HiredAfter,
}

/// A parameterized retrieval request, built fresh for every question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
  pub intent:     Intent,
  pub relation:   Relation,
  pub projection: Projection,
  pub predicate:  Option<Predicate>,
  /// Bound value for the predicate; `Some` exactly when `predicate` is.
  pub argument:   Option<String>,
}

// ─── Synthesis ───────────────────────────────────────────────────────────────

/// Build the request for `intent`.
///
/// Returns `None` for [`Intent::Unrecognized`] and for argument-bearing
/// intents whose argument is absent or blank. Department names are
/// capitalized; dates are passed through untouched.
pub fn synthesize(intent: Intent, argument: Option<&str>) -> Option<QueryRequest> {
  use Predicate::*;
  use Projection::*;
  use Relation::*;

  let argument = argument.map(str::trim).filter(|a| !a.is_empty());

  let (relation, projection, predicate) = match intent {
    Intent::EmployeesInDepartment => (Employees, AllColumns, Some(DepartmentIs)),
    Intent::DepartmentManager => (Departments, Manager, Some(NameIs)),
    Intent::EmployeesHiredAfter => (Employees, AllColumns, Some(HiredAfter)),
    Intent::TotalSalaryExpense => (Employees, SalarySum, Some(DepartmentIs)),
    Intent::AllEmployees => (Employees, AllColumns, None),
    Intent::AllDepartments => (Departments, AllColumns, None),
    Intent::Unrecognized => return None,
  };

  let argument = match predicate {
    None => None,
    Some(HiredAfter) => Some(argument?.to_owned()),
    Some(DepartmentIs | NameIs) => Some(capitalize(argument?)),
  };

  Some(QueryRequest { intent, relation, projection, predicate, argument })
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first
      .to_uppercase()
      .chain(chars.flat_map(char::to_lowercase))
      .collect(),
    None => String::new(),
  }
}
