//! The `RateStore` trait and its ordering contract.
//!
//! The trait is implemented by storage backends (e.g. `roost-store-mem`).
//! The engine depends on this abstraction, not on any concrete backend, and
//! expects the backend to run each engine operation inside one atomic
//! transaction so a partially-applied split is never externally observable.

use std::future::Future;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::rate::{NewRate, Rate};

/// Abstraction over a rate timeline backend.
///
/// Every listing method returns records ordered by
/// `(stay_from, booking_from, rate_id)` ascending. The engine relies on that
/// ordering for adjacency scans, and downstream pricing behaviour stays
/// deterministic across backends because of it.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait RateStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Persist a new record as active and return it with its assigned id.
  fn insert(
    &self,
    rate: NewRate,
  ) -> impl Future<Output = Result<Rate, Self::Error>> + Send + '_;

  /// Persist the current state of an already-stored record (used to close a
  /// rate). Errors if the record is unknown.
  fn update<'a>(
    &'a self,
    rate: &'a Rate,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Hard-delete a record. Errors if the record is unknown.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  fn exists(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Rate>, Self::Error>> + Send + '_;

  /// Every record for a unit, active and closed.
  fn find_all(
    &self,
    unit_id: i64,
  ) -> impl Future<Output = Result<Vec<Rate>, Self::Error>> + Send + '_;

  /// The active records of a unit — its current price timeline.
  fn find_active(
    &self,
    unit_id: i64,
  ) -> impl Future<Output = Result<Vec<Rate>, Self::Error>> + Send + '_;

  /// Active records whose stay window intersects `[from, to]` (inclusive at
  /// both edges): `stay_to >= from && stay_from <= to`.
  fn find_overlapping_active(
    &self,
    unit_id: i64,
    from: NaiveDate,
    to: NaiveDate,
  ) -> impl Future<Output = Result<Vec<Rate>, Self::Error>> + Send + '_;
}
