//! Error types for `roost-core`.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// A structurally invalid or duplicate rate submission, rejected before it
/// touches the timeline. Surfaced to the caller unmodified; never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
  #[error("stay window is inverted: {from} is after {to}")]
  StayWindowInverted { from: NaiveDate, to: NaiveDate },

  #[error("rate value must be positive, got {0}")]
  NonPositiveValue(f64),

  #[error("night count must be at least 1")]
  ZeroNights,

  #[error(
    "an identical rate already covers {from}..{to} for this unit"
  )]
  Duplicate { from: NaiveDate, to: NaiveDate },
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("rate not found: {0}")]
  NotFound(Uuid),

  #[error("arrival {arrival} must be before departure {departure}")]
  InvalidRange {
    arrival:   NaiveDate,
    departure: NaiveDate,
  },

  #[error("no applicable rate for night {0}")]
  NoApplicableRate(NaiveDate),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a store backend error without altering it.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
