//! Error types for `roster-core`.

use thiserror::Error;

use crate::intent::Intent;

/// Why a question could not be turned into a query.
///
/// Both variants are expected user-input variance, not application faults.
#[derive(Debug, Error)]
pub enum Error {
  #[error("no anchor phrase matched the question")]
  ClassificationMiss,

  #[error("matched {0} but no usable argument remained")]
  ExtractionEmpty(Intent),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
