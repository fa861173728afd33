//! SQL schema and sample dataset for the Roster SQLite store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS Employees (
    ID          INTEGER PRIMARY KEY,
    Name        TEXT    NOT NULL,
    Department  TEXT    NOT NULL,   -- a Departments.Name; not a foreign key
    Salary      INTEGER NOT NULL CHECK (Salary >= 0),
    Hire_Date   TEXT    NOT NULL    -- YYYY-MM-DD; compared lexically
);

CREATE TABLE IF NOT EXISTS Departments (
    ID          INTEGER PRIMARY KEY,
    Name        TEXT    NOT NULL,
    Manager     TEXT    NOT NULL    -- an Employees.Name
);

CREATE INDEX IF NOT EXISTS employees_department_idx ON Employees(Department);
CREATE INDEX IF NOT EXISTS employees_hire_date_idx  ON Employees(Hire_Date);

PRAGMA user_version = 1;
";

/// `(ID, Name, Department, Salary, Hire_Date)`
pub const SAMPLE_EMPLOYEES: &[(i64, &str, &str, i64, &str)] = &[
  (1, "Alice",     "Sales",       50000, "2021-01-15"),
  (2, "Bob",       "Engineering", 70000, "2020-06-10"),
  (3, "Charlie",   "Marketing",   60000, "2022-03-20"),
  (4, "nandhu",    "Engineering", 45000, "2024-03-20"),
  (5, "Umapathi",  "Engineering", 60000, "2024-06-20"),
  (6, "Ganapathi", "Sales",       50000, "2022-01-15"),
  (7, "Karthik",   "Engineering", 70000, "2020-05-10"),
  (8, "Krishna",   "Marketing",   60000, "2021-03-20"),
];

/// `(ID, Name, Manager)`
pub const SAMPLE_DEPARTMENTS: &[(i64, &str, &str)] = &[
  (1, "Sales",       "Alice"),
  (2, "Engineering", "Bob"),
  (3, "Marketing",   "Charlie"),
];
