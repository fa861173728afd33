//! Result formatting: the display structure handed to the rendering layer.

use serde::Serialize;

use crate::{
  intent::Intent,
  record::{Department, Employee},
  store::Rows,
};

pub const EMPLOYEE_COLUMNS: [&str; 5] = ["ID", "Name", "Department", "Salary", "Hire Date"];
pub const DEPARTMENT_COLUMNS: [&str; 3] = ["ID", "Name", "Manager"];

pub const NO_RESULTS: &str = "No results found.";
pub const NOT_UNDERSTOOD: &str = "Sorry, I didn't understand that query. Please try again.";
pub const DATABASE_ERROR: &str = "An error occurred while accessing the database.";

/// Column headings plus one row of cell text per record, in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
  pub columns: Vec<String>,
  pub rows:    Vec<Vec<String>>,
}

impl Table {
  fn new<I>(columns: &[&str], rows: I) -> Self
  where
    I: IntoIterator<Item = Vec<String>>,
  {
    Self {
      columns: columns.iter().map(|c| (*c).to_owned()).collect(),
      rows:    rows.into_iter().collect(),
    }
  }
}

/// What a question resolved to. Values are raw text; escaping for a
/// particular markup is the renderer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
  Table(Table),
  Scalar { label: String, value: String },
  NoResults,
  NotUnderstood,
  DatabaseError,
}

impl Answer {
  /// The fixed text for the marker variants; `None` for tables and scalars.
  pub fn message(&self) -> Option<&'static str> {
    match self {
      Answer::NoResults => Some(NO_RESULTS),
      Answer::NotUnderstood => Some(NOT_UNDERSTOOD),
      Answer::DatabaseError => Some(DATABASE_ERROR),
      Answer::Table(_) | Answer::Scalar { .. } => None,
    }
  }
}

/// Map an executed (or failed) request to its [`Answer`].
///
/// Error detail is discarded here; callers log it before formatting.
pub fn format<E>(intent: Intent, result: Result<Rows, E>) -> Answer {
  if intent == Intent::Unrecognized {
    return Answer::NotUnderstood;
  }

  let rows = match result {
    Ok(rows) if rows.is_empty() => return Answer::NoResults,
    Ok(rows) => rows,
    Err(_) => return Answer::DatabaseError,
  };

  match rows {
    Rows::Employees(employees) => {
      Answer::Table(Table::new(&EMPLOYEE_COLUMNS, employees.iter().map(employee_cells)))
    }
    Rows::Departments(departments) => Answer::Table(Table::new(
      &DEPARTMENT_COLUMNS,
      departments.iter().map(department_cells),
    )),
    // Duplicate department names: the first row the store returned wins.
    Rows::Managers(managers) => match managers.into_iter().next() {
      Some(manager) => scalar("Manager", manager),
      None => Answer::NoResults,
    },
    Rows::Total(total) => scalar("Total Salary Expense", total.to_string()),
  }
}

fn scalar(label: &str, value: String) -> Answer {
  Answer::Scalar { label: label.to_owned(), value }
}

fn employee_cells(e: &Employee) -> Vec<String> {
  vec![
    e.id.to_string(),
    e.name.clone(),
    e.department.clone(),
    e.salary.to_string(),
    e.hire_date.to_string(),
  ]
}

fn department_cells(d: &Department) -> Vec<String> {
  vec![d.id.to_string(), d.name.clone(), d.manager.clone()]
}
