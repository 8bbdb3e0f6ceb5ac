//! Rate records — the fundamental unit of a bungalow's price timeline.
//!
//! A [`Rate`] prices the nights of a stay window and is valid for bookings
//! made within a booking window. While `booking_to` is `None` the rate is
//! *active*; setting it closes the rate, after which the record is never
//! mutated again (deletion aside) and remains queryable for bookings whose
//! booking date falls inside the window.
//!
//! The active records of a unit partition calendar time: no two of them
//! have overlapping stay windows. The engine restores that invariant after
//! every insertion.

use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Rate ────────────────────────────────────────────────────────────────────

/// A persisted price rule for one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
  /// Assigned by the store on insert; never reused across records.
  pub rate_id:      Uuid,
  pub unit_id:      i64,
  /// First stay night this rule prices (inclusive).
  pub stay_from:    NaiveDate,
  /// Last stay night this rule prices (inclusive).
  pub stay_to:      NaiveDate,
  /// First booking date this rule is valid for.
  pub booking_from: NaiveDate,
  /// Last booking date this rule is valid for; `None` means active.
  pub booking_to:   Option<NaiveDate>,
  /// Night count `value` was quoted for. Normalized to 1 on ingestion, but
  /// records quoted for longer periods remain representable.
  pub nights:       u32,
  /// Total price for `nights` nights.
  pub value:        f64,
}

impl Rate {
  pub fn is_active(&self) -> bool { self.booking_to.is_none() }

  /// The price of a single night under this rule.
  pub fn per_night(&self) -> f64 { self.value / f64::from(self.nights) }

  /// Whether this rule prices the given stay night.
  pub fn covers_night(&self, night: NaiveDate) -> bool {
    self.stay_from <= night && night <= self.stay_to
  }

  /// Whether this rule's stay window intersects `[from, to]` (inclusive).
  pub fn overlaps_stay(&self, from: NaiveDate, to: NaiveDate) -> bool {
    self.stay_to >= from && self.stay_from <= to
  }

  /// A split fragment of this record: same unit, price, and night count,
  /// re-opened as active over a narrower stay window. The identifier and the
  /// original dates are deliberately not carried over — a fragment is a new
  /// record, opened at the instant the displacing rate was introduced.
  pub fn fragment(
    &self,
    stay_from: NaiveDate,
    stay_to: NaiveDate,
    booking_from: NaiveDate,
  ) -> NewRate {
    NewRate {
      unit_id: self.unit_id,
      stay_from,
      stay_to,
      booking_from,
      nights: self.nights,
      value: self.value,
    }
  }

  /// The replacement record for merging this rule with the calendar-adjacent
  /// `next`: spans both stay windows, keeps this rule's value, and opens at
  /// `next`'s booking date.
  pub fn merged_with(&self, next: &Rate) -> NewRate {
    NewRate {
      unit_id:      self.unit_id,
      stay_from:    self.stay_from,
      stay_to:      next.stay_to,
      booking_from: next.booking_from,
      nights:       1,
      value:        self.value,
    }
  }
}

// ─── NewRate ─────────────────────────────────────────────────────────────────

/// Input to [`crate::store::RateStore::insert`] — a rate that has not been
/// persisted yet.
///
/// Carries no identifier (the store assigns one) and no `booking_to` (a
/// record always starts active). Both absences are what make split fragments
/// safe to build from existing records without copying identity or closure
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRate {
  pub unit_id:      i64,
  pub stay_from:    NaiveDate,
  pub stay_to:      NaiveDate,
  pub booking_from: NaiveDate,
  pub nights:       u32,
  pub value:        f64,
}

impl NewRate {
  pub fn new(
    unit_id: i64,
    stay_from: NaiveDate,
    stay_to: NaiveDate,
    nights: u32,
    value: f64,
    booking_from: NaiveDate,
  ) -> Self {
    Self { unit_id, stay_from, stay_to, booking_from, nights, value }
  }

  /// Convenience constructor for a rate bookable from today.
  pub fn starting_today(
    unit_id: i64,
    stay_from: NaiveDate,
    stay_to: NaiveDate,
    nights: u32,
    value: f64,
  ) -> Self {
    Self::new(unit_id, stay_from, stay_to, nights, value, today())
  }

  /// Reduce a multi-night quote to per-night pricing: divide `value` evenly
  /// by `nights` and set `nights` to 1. Single-night quotes pass through
  /// unchanged, as does a zero `nights` (rejected later by validation).
  pub fn normalized(mut self) -> Self {
    if self.nights > 1 {
      self.value /= f64::from(self.nights);
      self.nights = 1;
    }
    self
  }
}

// ─── Calendar helpers ────────────────────────────────────────────────────────

/// The current calendar date (UTC).
pub fn today() -> NaiveDate { Utc::now().date_naive() }

/// The day after `date`.
pub fn next_day(date: NaiveDate) -> NaiveDate { date + Days::new(1) }

/// The day before `date`.
pub fn prev_day(date: NaiveDate) -> NaiveDate { date - Days::new(1) }

// ─── Tests ───────────────────────────────────────────────────────────────────
