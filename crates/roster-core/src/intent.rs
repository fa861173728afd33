//! The closed set of question intents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The classified purpose of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
  EmployeesInDepartment,
  DepartmentManager,
  EmployeesHiredAfter,
  TotalSalaryExpense,
  AllEmployees,
  AllDepartments,
  Unrecognized,
}

impl Intent {
  pub const ALL: [Intent; 7] = [
    Intent::EmployeesInDepartment,
    Intent::DepartmentManager,
    Intent::EmployeesHiredAfter,
    Intent::TotalSalaryExpense,
    Intent::AllEmployees,
    Intent::AllDepartments,
    Intent::Unrecognized,
  ];

  /// The snake_case tag, identical to the serde representation.
  pub const fn as_str(self) -> &'static str {
    match self {
      Intent::EmployeesInDepartment => "employees_in_department",
      Intent::DepartmentManager => "department_manager",
      Intent::EmployeesHiredAfter => "employees_hired_after",
      Intent::TotalSalaryExpense => "total_salary_expense",
      Intent::AllEmployees => "all_employees",
      Intent::AllDepartments => "all_departments",
      Intent::Unrecognized => "unrecognized",
    }
  }

  /// Whether a query for this intent cannot be built without an argument.
  pub const fn needs_argument(self) -> bool {
    matches!(
      self,
      Intent::EmployeesInDepartment
        | Intent::DepartmentManager
        | Intent::EmployeesHiredAfter
        | Intent::TotalSalaryExpense
    )
  }

  /// Whether the argument is a department name, which users tend to follow
  /// with the word "department".
  pub const fn names_department(self) -> bool {
    matches!(
      self,
      Intent::EmployeesInDepartment
        | Intent::DepartmentManager
        | Intent::TotalSalaryExpense
    )
  }
}

impl fmt::Display for Intent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
