//! [`MemStore`] — the in-memory implementation of [`RateStore`].

use std::{
  collections::HashMap,
  sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::NaiveDate;
use uuid::Uuid;

use roost_core::{
  rate::{NewRate, Rate},
  store::RateStore,
};

use crate::{Error, Result};

/// A rate store holding all records in process memory.
///
/// Cloning is cheap — the record map is reference-counted, so clones observe
/// the same timeline.
#[derive(Clone, Default)]
pub struct MemStore {
  records: Arc<RwLock<HashMap<Uuid, Rate>>>,
}

impl MemStore {
  pub fn new() -> Self { Self::default() }

  fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Uuid, Rate>>> {
    self.records.read().map_err(|_| Error::LockPoisoned)
  }

  fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<Uuid, Rate>>> {
    self.records.write().map_err(|_| Error::LockPoisoned)
  }

  /// Collect the records matching `keep` for one unit, in the trait's
  /// `(stay_from, booking_from, rate_id)` order.
  fn select(
    &self,
    unit_id: i64,
    keep: impl Fn(&Rate) -> bool,
  ) -> Result<Vec<Rate>> {
    let mut rates: Vec<Rate> = self
      .read()?
      .values()
      .filter(|r| r.unit_id == unit_id && keep(r))
      .cloned()
      .collect();
    rates.sort_by(|a, b| {
      (a.stay_from, a.booking_from, a.rate_id)
        .cmp(&(b.stay_from, b.booking_from, b.rate_id))
    });
    Ok(rates)
  }
}

impl RateStore for MemStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────

  async fn insert(&self, rate: NewRate) -> Result<Rate> {
    let rate = Rate {
      rate_id:      Uuid::new_v4(),
      unit_id:      rate.unit_id,
      stay_from:    rate.stay_from,
      stay_to:      rate.stay_to,
      booking_from: rate.booking_from,
      booking_to:   None,
      nights:       rate.nights,
      value:        rate.value,
    };
    self.write()?.insert(rate.rate_id, rate.clone());
    Ok(rate)
  }

  async fn update(&self, rate: &Rate) -> Result<()> {
    let mut records = self.write()?;
    if !records.contains_key(&rate.rate_id) {
      return Err(Error::RateNotFound(rate.rate_id));
    }
    records.insert(rate.rate_id, rate.clone());
    Ok(())
  }

  async fn delete(&self, id: Uuid) -> Result<()> {
    self
      .write()?
      .remove(&id)
      .map(|_| ())
      .ok_or(Error::RateNotFound(id))
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  async fn exists(&self, id: Uuid) -> Result<bool> {
    Ok(self.read()?.contains_key(&id))
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Rate>> {
    Ok(self.read()?.get(&id).cloned())
  }

  async fn find_all(&self, unit_id: i64) -> Result<Vec<Rate>> {
    self.select(unit_id, |_| true)
  }

  async fn find_active(&self, unit_id: i64) -> Result<Vec<Rate>> {
    self.select(unit_id, Rate::is_active)
  }

  async fn find_overlapping_active(
    &self,
    unit_id: i64,
    from: NaiveDate,
    to: NaiveDate,
  ) -> Result<Vec<Rate>> {
    self.select(unit_id, |r| r.is_active() && r.overlaps_stay(from, to))
  }
}
