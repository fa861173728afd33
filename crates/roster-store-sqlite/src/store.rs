//! [`SqliteStore`] — the SQLite implementation of [`QueryExecutor`].

use std::path::{Path, PathBuf};

use roster_core::{
  query::QueryRequest,
  store::{QueryExecutor, Rows},
};
use tokio_rusqlite::Connection;

use crate::{
  Error, Result,
  schema::{SAMPLE_DEPARTMENTS, SAMPLE_EMPLOYEES, SCHEMA},
  statement::Statement,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roster store backed by SQLite.
///
/// Cloning is cheap. A file-backed store opens a fresh connection for every
/// operation and closes it afterwards; an in-memory store owns its only
/// connection, since the database disappears with it.
#[derive(Clone)]
pub struct SqliteStore {
  backing: Backing,
}

#[derive(Clone)]
enum Backing {
  File(PathBuf),
  Memory(Connection),
}

/// Rows inserted by [`SqliteStore::seed_sample_data`], per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
  pub employees:   usize,
  pub departments: usize,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let store = Self { backing: Backing::File(path.as_ref().to_path_buf()) };
    store.with_connection(init_schema).await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = Connection::open_in_memory().await?;
    let store = Self { backing: Backing::Memory(conn) };
    store.with_connection(init_schema).await?;
    Ok(store)
  }

  /// Insert the sample employees and departments into whichever of the two
  /// tables is still empty. Tables that already hold rows are left alone.
  pub async fn seed_sample_data(&self) -> Result<SeedReport> {
    let report = self
      .with_connection(|conn| {
        let tx = conn.transaction()?;

        let employees = if table_is_empty(&tx, "Employees")? {
          let mut stmt = tx.prepare(
            "INSERT INTO Employees (ID, Name, Department, Salary, Hire_Date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
          )?;
          for (id, name, department, salary, hire_date) in SAMPLE_EMPLOYEES {
            stmt.execute(rusqlite::params![id, name, department, salary, hire_date])?;
          }
          SAMPLE_EMPLOYEES.len()
        } else {
          0
        };

        let departments = if table_is_empty(&tx, "Departments")? {
          let mut stmt =
            tx.prepare("INSERT INTO Departments (ID, Name, Manager) VALUES (?1, ?2, ?3)")?;
          for (id, name, manager) in SAMPLE_DEPARTMENTS {
            stmt.execute(rusqlite::params![id, name, manager])?;
          }
          SAMPLE_DEPARTMENTS.len()
        } else {
          0
        };

        tx.commit()?;
        Ok(SeedReport { employees, departments })
      })
      .await?;

    tracing::info!(
      employees = report.employees,
      departments = report.departments,
      "seeded sample data"
    );
    Ok(report)
  }

  /// Run `function` on a connection acquired for this call only, then release
  /// the connection whether or not `function` succeeded.
  pub(crate) async fn with_connection<F, R>(&self, function: F) -> Result<R>
  where
    F: FnOnce(&mut rusqlite::Connection) -> rusqlite::Result<R> + Send + 'static,
    R: Send + 'static,
  {
    let conn = self.acquire().await?;
    let outcome = conn.call(move |conn| Ok(function(conn)?)).await;
    self.release(conn).await;
    outcome.map_err(Error::from)
  }

  async fn acquire(&self) -> Result<Connection> {
    match &self.backing {
      Backing::File(path) => Ok(Connection::open(path).await?),
      Backing::Memory(conn) => Ok(conn.clone()),
    }
  }

  async fn release(&self, conn: Connection) {
    if let Backing::File(path) = &self.backing
      && let Err(error) = conn.close().await
    {
      tracing::warn!(?path, %error, "failed to close SQLite connection");
    }
  }
}

fn init_schema(conn: &mut rusqlite::Connection) -> rusqlite::Result<()> {
  conn.execute_batch(SCHEMA)
}

/// `table` must be one of the fixed schema table names.
fn table_is_empty(conn: &rusqlite::Connection, table: &'static str) -> rusqlite::Result<bool> {
  conn.query_row(
    &format!("SELECT NOT EXISTS (SELECT 1 FROM {table})"),
    [],
    |row| row.get(0),
  )
}

// ─── QueryExecutor impl ──────────────────────────────────────────────────────

impl QueryExecutor for SqliteStore {
  type Error = Error;

  async fn execute(&self, request: &QueryRequest) -> Result<Rows> {
    let statement = Statement::from_request(request);
    tracing::trace!(sql = %statement.sql, argument = ?statement.argument, "running statement");

    let raw = self.with_connection(move |conn| statement.run(conn)).await?;
    raw.into_rows()
  }
}
