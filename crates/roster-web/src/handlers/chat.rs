//! Handlers for the HTML chat page at `/`.

use axum::{
  Form,
  extract::State,
  response::Html,
};
use roster_core::store::QueryExecutor;
use serde::Deserialize;

use crate::{AppState, render};

#[derive(Debug, Deserialize)]
pub struct ChatForm {
  pub user_query: String,
}

/// `GET /`
pub async fn page() -> Html<String> { Html(render::page(None, None)) }

/// `POST /` — form body `user_query=<question>`
pub async fn submit<E>(
  State(state): State<AppState<E>>,
  Form(form): Form<ChatForm>,
) -> Html<String>
where
  E: QueryExecutor + 'static,
{
  let answer = roster_core::answer(state.executor.as_ref(), &form.user_query).await;
  Html(render::page(Some(&form.user_query), Some(&answer)))
}
