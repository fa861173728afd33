//! Route handlers.

pub mod api;
pub mod chat;

/// `GET /healthz`
pub async fn health() -> &'static str { "ok" }
