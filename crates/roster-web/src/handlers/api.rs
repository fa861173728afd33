//! Handler for `POST /api/ask`.
//!
//! Body: `{"question": "..."}`. The response echoes the question next to the
//! [`Answer`], whose `kind` tells tables, scalars and the three markers apart.

use axum::{Json, extract::State};
use roster_core::{Answer, store::QueryExecutor};
use serde::{Deserialize, Serialize};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AskBody {
  pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
  pub question: String,
  pub answer:   Answer,
}

/// `POST /api/ask`
pub async fn ask<E>(
  State(state): State<AppState<E>>,
  Json(body): Json<AskBody>,
) -> Json<AskResponse>
where
  E: QueryExecutor + 'static,
{
  let answer = roster_core::answer(state.executor.as_ref(), &body.question).await;
  Json(AskResponse { question: body.question, answer })
}
