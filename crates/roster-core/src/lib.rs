//! Core types and pipeline stages for Roster, the employee-directory question
//! answerer.
//!
//! A question flows through four pure stages and one I/O boundary:
//! [`classify`](classify::classify) → [`synthesize`](query::synthesize) →
//! [`QueryExecutor::execute`](store::QueryExecutor::execute) →
//! [`format`](answer::format). [`pipeline::answer`] wires them together.
//!
//! This crate has no database or HTTP dependencies; storage backends implement
//! [`store::QueryExecutor`].

pub mod answer;
pub mod classify;
pub mod error;
pub mod extract;
pub mod intent;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod store;

pub use answer::Answer;
pub use error::{Error, Result};
pub use intent::Intent;
pub use pipeline::answer;
