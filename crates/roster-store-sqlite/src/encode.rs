//! Decoding helpers between SQLite column values and Roster domain types.
//!
//! Hire dates are stored as `YYYY-MM-DD` text; everything else maps onto
//! native SQLite integers and text.

use chrono::NaiveDate;
use roster_core::{
  record::{Department, Employee},
  store::Rows,
};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw values read directly from an `Employees` row.
pub struct RawEmployee {
  pub id:         i64,
  pub name:       String,
  pub department: String,
  pub salary:     i64,
  pub hire_date:  String,
}

impl RawEmployee {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      name:       row.get(1)?,
      department: row.get(2)?,
      salary:     row.get(3)?,
      hire_date:  row.get(4)?,
    })
  }

  pub fn into_employee(self) -> Result<Employee> {
    Ok(Employee {
      id:         self.id,
      name:       self.name,
      department: self.department,
      salary:     self.salary,
      hire_date:  decode_date(&self.hire_date)?,
    })
  }
}

pub fn department_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Department> {
  Ok(Department {
    id:      row.get(0)?,
    name:    row.get(1)?,
    manager: row.get(2)?,
  })
}

/// Rows as collected on the connection thread, before domain decoding.
pub enum RawRows {
  Employees(Vec<RawEmployee>),
  Departments(Vec<Department>),
  Managers(Vec<String>),
  Total(i64),
}

impl RawRows {
  pub fn into_rows(self) -> Result<Rows> {
    Ok(match self {
      RawRows::Employees(raws) => Rows::Employees(
        raws
          .into_iter()
          .map(RawEmployee::into_employee)
          .collect::<Result<_>>()?,
      ),
      RawRows::Departments(departments) => Rows::Departments(departments),
      RawRows::Managers(managers) => Rows::Managers(managers),
      RawRows::Total(total) => Rows::Total(total),
    })
  }
}
