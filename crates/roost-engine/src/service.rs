//! [`RateService`] — the orchestration surface of the engine.
//!
//! Composes validation, splitting, and merging for writes, and delegates
//! pricing queries to the resolver. Owns nothing but the injected store;
//! transactional wrapping and per-unit serialization are the caller's
//! concern.

use chrono::NaiveDate;
use uuid::Uuid;

use roost_core::{
  Error, Result,
  rate::{NewRate, Rate, today},
  store::RateStore,
};

use crate::{merge, price, split, validate};

pub struct RateService<S> {
  store: S,
}

impl<S: RateStore> RateService<S> {
  pub fn new(store: S) -> Self { Self { store } }

  /// The injected store, for callers that need raw timeline access.
  pub fn store(&self) -> &S { &self.store }

  // ── Writes ────────────────────────────────────────────────────────────

  /// Introduce a new rate: normalize to per-night pricing, validate, split
  /// the active rules it displaces, persist it as active, and compact the
  /// unit's timeline.
  pub async fn create_rate(&self, candidate: NewRate) -> Result<Rate> {
    let candidate = candidate.normalized();

    let existing = self
      .store
      .find_all(candidate.unit_id)
      .await
      .map_err(Error::store)?;
    validate::validate(&candidate, &existing, today())?;

    split::resolve_overlaps(&self.store, &candidate).await?;

    let saved = self.store.insert(candidate).await.map_err(Error::store)?;
    merge::compact(&self.store, saved.unit_id).await?;

    tracing::info!(
      rate_id = %saved.rate_id,
      unit_id = saved.unit_id,
      stay_from = %saved.stay_from,
      stay_to = %saved.stay_to,
      value = saved.value,
      "created rate"
    );
    Ok(saved)
  }

  /// Replace the rate at `id`: close it as of today, then introduce
  /// `updated` bookable from today. The closed record keeps pricing
  /// bookings that were made while it was in force.
  pub async fn update_rate(&self, id: Uuid, updated: NewRate) -> Result<Rate> {
    let mut current = self.require(id).await?;

    let cutoff = today();
    current.booking_to = Some(cutoff);
    self.store.update(&current).await.map_err(Error::store)?;
    tracing::info!(rate_id = %id, booking_to = %cutoff, "closed rate for update");

    let mut updated = updated;
    updated.booking_from = cutoff;
    self.create_rate(updated).await
  }

  /// Stop the rate at `id` from applying to bookings after `cutoff`.
  pub async fn close_rate(&self, id: Uuid, cutoff: NaiveDate) -> Result<()> {
    let mut rate = self.require(id).await?;
    rate.booking_to = Some(cutoff);
    self.store.update(&rate).await.map_err(Error::store)?;
    tracing::info!(rate_id = %id, booking_to = %cutoff, "closed rate");
    Ok(())
  }

  /// Hard-delete the rate at `id`, history included.
  pub async fn delete_rate(&self, id: Uuid) -> Result<()> {
    if !self.store.exists(id).await.map_err(Error::store)? {
      return Err(Error::NotFound(id));
    }
    self.store.delete(id).await.map_err(Error::store)?;
    tracing::info!(rate_id = %id, "deleted rate");
    Ok(())
  }

  // ── Queries ───────────────────────────────────────────────────────────

  /// Total price for a stay of `[arrival, departure)` nights at `unit_id`,
  /// as booked on `booking_date`.
  pub async fn price_stay(
    &self,
    unit_id: i64,
    arrival: NaiveDate,
    departure: NaiveDate,
    booking_date: NaiveDate,
  ) -> Result<f64> {
    let rates =
      self.store.find_all(unit_id).await.map_err(Error::store)?;
    price::resolve(&rates, arrival, departure, booking_date)
  }

  pub async fn rate(&self, id: Uuid) -> Result<Rate> {
    self.require(id).await
  }

  pub async fn all_rates(&self, unit_id: i64) -> Result<Vec<Rate>> {
    self.store.find_all(unit_id).await.map_err(Error::store)
  }

  pub async fn active_rates(&self, unit_id: i64) -> Result<Vec<Rate>> {
    self.store.find_active(unit_id).await.map_err(Error::store)
  }

  async fn require(&self, id: Uuid) -> Result<Rate> {
    self
      .store
      .find_by_id(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::NotFound(id))
  }
}
