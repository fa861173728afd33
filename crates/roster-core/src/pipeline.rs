//! The question-to-answer pipeline.
//!
//! Every call ends in exactly one [`Answer`]; no error escapes. Logging goes
//! through `tracing`, so the subscriber (if any) is chosen by the binary.

use crate::{
  answer::{Answer, format},
  classify::{Classification, classify},
  error::{Error, Result},
  intent::Intent,
  query::{QueryRequest, synthesize},
  store::QueryExecutor,
};

/// Classify `question` and synthesize its request, without touching a store.
pub fn plan(question: &str) -> Result<QueryRequest> {
  let Classification { intent, argument } = classify(question);
  if intent == Intent::Unrecognized {
    return Err(Error::ClassificationMiss);
  }
  synthesize(intent, argument.as_deref()).ok_or(Error::ExtractionEmpty(intent))
}

/// Answer `question` using `executor` for the one store round-trip.
pub async fn answer<E>(executor: &E, question: &str) -> Answer
where
  E: QueryExecutor,
{
  let request = match plan(question) {
    Ok(request) => request,
    Err(reason) => {
      tracing::debug!(question, %reason, "question not understood");
      return Answer::NotUnderstood;
    }
  };

  tracing::debug!(
    intent = %request.intent,
    argument = ?request.argument,
    "executing synthesized query"
  );

  let result = executor.execute(&request).await;
  match &result {
    Ok(rows) => tracing::debug!(intent = %request.intent, rows = rows.len(), "query returned"),
    Err(error) => tracing::error!(intent = %request.intent, %error, "query execution failed"),
  }

  format(request.intent, result)
}

#[cfg(test)]
mod tests {
  use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
  };

  use super::*;
  use crate::{query::Predicate, record::Department, store::Rows};

  #[derive(Debug, thiserror::Error)]
  #[error("store unavailable")]
  struct Unavailable;

  /// Records every request and replies with a canned outcome.
  struct FakeExecutor {
    calls: AtomicUsize,
    seen:  Mutex<Vec<QueryRequest>>,
    reply: fn() -> Result<Rows, Unavailable>,
  }

  impl FakeExecutor {
    fn new(reply: fn() -> Result<Rows, Unavailable>) -> Self {
      Self { calls: AtomicUsize::new(0), seen: Mutex::new(Vec::new()), reply }
    }
  }

  impl QueryExecutor for FakeExecutor {
    type Error = Unavailable;

    async fn execute(&self, request: &QueryRequest) -> Result<Rows, Unavailable> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      self.seen.lock().unwrap().push(request.clone());
      (self.reply)()
    }
  }

  fn sales() -> Result<Rows, Unavailable> {
    Ok(Rows::Departments(vec![Department {
      id:      1,
      name:    "Sales".into(),
      manager: "Alice".into(),
    }]))
  }

  #[test]
  fn plan_reports_why_nothing_was_built() {
    assert!(matches!(plan("asdf random text"), Err(Error::ClassificationMiss)));
    assert!(matches!(
      plan("who is the manager of the department"),
      Err(Error::ExtractionEmpty(Intent::DepartmentManager))
    ));
  }

  #[test]
  fn plan_binds_the_capitalized_argument() {
    let request = plan("Show me all employees in the engineering department").unwrap();
    assert_eq!(request.intent, Intent::EmployeesInDepartment);
    assert_eq!(request.predicate, Some(Predicate::DepartmentIs));
    assert_eq!(request.argument.as_deref(), Some("Engineering"));
  }

  #[tokio::test]
  async fn unrecognized_never_reaches_the_executor() {
    let executor = FakeExecutor::new(sales);
    assert_eq!(answer(&executor, "asdf random text").await, Answer::NotUnderstood);
    assert_eq!(executor.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn empty_extraction_never_reaches_the_executor() {
    let executor = FakeExecutor::new(sales);
    let got = answer(&executor, "What is the total salary expense for the department").await;
    assert_eq!(got, Answer::NotUnderstood);
    assert_eq!(executor.calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn executor_failure_is_a_database_error() {
    let executor = FakeExecutor::new(|| Err(Unavailable));
    assert_eq!(answer(&executor, "show all departments").await, Answer::DatabaseError);
    assert_eq!(executor.calls.load(Ordering::SeqCst), 1);
  }

  #[tokio::test]
  async fn recognized_question_is_executed_once() {
    let executor = FakeExecutor::new(sales);
    let got = answer(&executor, "Show all departments").await;
    assert!(matches!(got, Answer::Table(ref t) if t.rows.len() == 1));

    let seen = executor.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].intent, Intent::AllDepartments);
    assert_eq!(seen[0].argument, None);
  }
}
