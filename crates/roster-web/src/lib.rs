//! HTTP surface for Roster.
//!
//! Exposes an axum [`Router`] with an HTML chat page and a JSON endpoint,
//! backed by any [`QueryExecutor`].

pub mod handlers;
pub mod render;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use roster_core::store::QueryExecutor;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROSTER_*` environment variables. Every key is optional.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  pub store_path:       PathBuf,
  /// Fill empty tables with the sample dataset at startup.
  pub seed_sample_data: bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             "127.0.0.1".to_string(),
      port:             8080,
      store_path:       PathBuf::from("employee_database.db"),
      seed_sample_data: true,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<E: QueryExecutor> {
  pub executor: Arc<E>,
}

impl<E: QueryExecutor> Clone for AppState<E> {
  fn clone(&self) -> Self { Self { executor: Arc::clone(&self.executor) } }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the server.
pub fn router<E>(state: AppState<E>) -> Router
where
  E: QueryExecutor + 'static,
{
  Router::new()
    .route("/",        get(handlers::chat::page).post(handlers::chat::submit::<E>))
    .route("/api/ask", post(handlers::api::ask::<E>))
    .route("/healthz", get(handlers::health))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use roster_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn make_state() -> AppState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    store.seed_sample_data().await.unwrap();
    AppState { executor: Arc::new(store) }
  }

  async fn oneshot_raw(
    state:        AppState<SqliteStore>,
    method:       &str,
    uri:          &str,
    content_type: Option<&str>,
    body:         &str,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
      builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();
    router(state).oneshot(req).await.unwrap()
  }

  async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  async fn ask_json(question: &str) -> Value {
    let state = make_state().await;
    let body  = json!({ "question": question }).to_string();
    let resp  = oneshot_raw(state, "POST", "/api/ask", Some("application/json"), &body).await;
    assert_eq!(resp.status(), StatusCode::OK);
    serde_json::from_str(&body_text(resp).await).unwrap()
  }

  // ── Chat page ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_root_serves_the_form() {
    let resp = oneshot_raw(make_state().await, "GET", "/", None, "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("<form"), "{html}");
  }

  #[tokio::test]
  async fn posting_a_question_renders_the_answer() {
    let resp = oneshot_raw(
      make_state().await,
      "POST",
      "/",
      Some("application/x-www-form-urlencoded"),
      "user_query=Who+is+the+manager+of+the+Sales+department",
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("<p>Manager: Alice</p>"), "{html}");
  }

  #[tokio::test]
  async fn posting_gibberish_renders_the_apology() {
    let resp = oneshot_raw(
      make_state().await,
      "POST",
      "/",
      Some("application/x-www-form-urlencoded"),
      "user_query=%3Cb%3Easdf%3C%2Fb%3E",
    )
    .await;
    let html = body_text(resp).await;
    assert!(html.contains("didn&apos;t understand"), "{html}");
    assert!(!html.contains("<b>asdf</b>"), "{html}");
  }

  // ── JSON API ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn api_returns_a_table_for_a_department() {
    let v = ask_json("Show me all employees in the Engineering department").await;
    assert_eq!(v["question"], "Show me all employees in the Engineering department");
    assert_eq!(v["answer"]["kind"], "table");
    assert_eq!(v["answer"]["columns"][4], "Hire Date");
    assert_eq!(v["answer"]["rows"].as_array().unwrap().len(), 4);
  }

  #[tokio::test]
  async fn api_returns_a_scalar_total() {
    let v = ask_json("What is the total salary expense for the Marketing department").await;
    assert_eq!(
      v["answer"],
      json!({ "kind": "scalar", "label": "Total Salary Expense", "value": "120000" })
    );
  }

  #[tokio::test]
  async fn api_markers_are_distinct() {
    assert_eq!(ask_json("asdf random text").await["answer"]["kind"], "not_understood");
    assert_eq!(
      ask_json("who is the manager of the legal department").await["answer"]["kind"],
      "no_results"
    );
  }

  #[tokio::test]
  async fn api_rejects_malformed_json() {
    let resp = oneshot_raw(
      make_state().await,
      "POST",
      "/api/ask",
      Some("application/json"),
      "{\"q\": 1}",
    )
    .await;
    assert!(resp.status().is_client_error());
  }

  // ── Health ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn healthz_is_ok() {
    let resp = oneshot_raw(make_state().await, "GET", "/healthz", None, "").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "ok");
  }

  #[test]
  fn config_defaults_fill_missing_keys() {
    let cfg: ServerConfig = serde_json::from_value(json!({ "port": 9000 })).unwrap();
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.host, "127.0.0.1");
    assert!(cfg.seed_sample_data);
  }
}
