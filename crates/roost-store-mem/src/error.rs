//! Error types for `roost-store-mem`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("rate not found: {0}")]
  RateNotFound(Uuid),

  #[error("store lock poisoned by a panicking writer")]
  LockPoisoned,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
