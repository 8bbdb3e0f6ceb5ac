//! Point-in-time price resolution.
//!
//! A stay is priced night by night: for each night, the one rule whose stay
//! window covers the night *and* whose booking window covers the booking
//! date contributes its per-night price. Closed (historical) rules take
//! precedence over active ones — a booking made while an old rule was in
//! force keeps that rule's price even after the timeline moved on.

use chrono::NaiveDate;

use roost_core::{Error, Result, rate::{Rate, next_day}};

/// Price the nights of `[arrival, departure)` as booked on `booking_date`,
/// against every record of a unit (any order; active and closed mixed).
///
/// Fails with [`Error::InvalidRange`] unless `arrival < departure`, and with
/// [`Error::NoApplicableRate`] naming the first night no rule covers. The
/// departure day itself is never priced (checkout semantics).
pub fn resolve(
  rates: &[Rate],
  arrival: NaiveDate,
  departure: NaiveDate,
  booking_date: NaiveDate,
) -> Result<f64> {
  if arrival >= departure {
    return Err(Error::InvalidRange { arrival, departure });
  }

  let (mut closed, active): (Vec<&Rate>, Vec<&Rate>) =
    rates.iter().partition(|r| !r.is_active());

  // Several closed records can cover the same night/booking-date pair (each
  // split closes a rule at the displacing rate's booking date). The most
  // recently closed one is authoritative.
  closed.sort_by(|a, b| {
    b.booking_to
      .cmp(&a.booking_to)
      .then(a.stay_from.cmp(&b.stay_from))
      .then(b.booking_from.cmp(&a.booking_from))
  });

  let mut total = 0.0;
  let mut night = arrival;

  while night < departure {
    let matched = closed
      .iter()
      .find(|r| {
        r.covers_night(night)
          && r.booking_from <= booking_date
          && r.booking_to.is_some_and(|to| booking_date <= to)
      })
      .or_else(|| {
        active
          .iter()
          .find(|r| r.covers_night(night) && r.booking_from <= booking_date)
      })
      .ok_or(Error::NoApplicableRate(night))?;

    total += matched.per_night();
    night = next_day(night);
  }

  Ok(total)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use uuid::Uuid;

  use roost_core::{Error, rate::Rate};

  use super::resolve;

  fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
  }

  fn rate(
    stay_from: NaiveDate,
    stay_to: NaiveDate,
    value: f64,
    booking_from: NaiveDate,
    booking_to: Option<NaiveDate>,
  ) -> Rate {
    Rate {
      rate_id: Uuid::new_v4(),
      unit_id: 5,
      stay_from,
      stay_to,
      booking_from,
      booking_to,
      nights: 1,
      value,
    }
  }

  #[test]
  fn prices_a_stay_from_a_multi_night_quote() {
    // One active record quoted for ten nights at 1000 total.
    let mut r = rate(d(2025, 1, 1), d(2025, 1, 10), 1000.0, d(2024, 12, 1), None);
    r.nights = 10;

    let total =
      resolve(&[r], d(2025, 1, 1), d(2025, 1, 4), d(2024, 12, 15)).unwrap();
    assert_eq!(total, 300.0);
  }

  #[test]
  fn departure_day_is_not_priced() {
    let r = rate(d(2025, 1, 1), d(2025, 1, 10), 100.0, d(2024, 12, 1), None);
    let total =
      resolve(&[r], d(2025, 1, 9), d(2025, 1, 10), d(2024, 12, 15)).unwrap();
    assert_eq!(total, 100.0);
  }

  #[test]
  fn arrival_on_or_after_departure_is_invalid() {
    let err = resolve(&[], d(2025, 3, 5), d(2025, 3, 1), d(2025, 1, 1))
      .unwrap_err();
    assert!(matches!(
      err,
      Error::InvalidRange { arrival, departure }
        if arrival == d(2025, 3, 5) && departure == d(2025, 3, 1)
    ));

    let err = resolve(&[], d(2025, 3, 5), d(2025, 3, 5), d(2025, 1, 1))
      .unwrap_err();
    assert!(matches!(err, Error::InvalidRange { .. }));
  }

  #[test]
  fn uncovered_night_names_the_gap() {
    // Coverage stops at 01-05; the stay runs through 01-08.
    let r = rate(d(2025, 1, 1), d(2025, 1, 5), 100.0, d(2024, 12, 1), None);
    let err = resolve(&[r], d(2025, 1, 4), d(2025, 1, 8), d(2024, 12, 15))
      .unwrap_err();
    assert!(matches!(err, Error::NoApplicableRate(night) if night == d(2025, 1, 6)));
  }

  #[test]
  fn empty_timeline_fails_on_the_first_night() {
    let err = resolve(&[], d(2025, 1, 1), d(2025, 1, 3), d(2025, 1, 1))
      .unwrap_err();
    assert!(matches!(err, Error::NoApplicableRate(night) if night == d(2025, 1, 1)));
  }

  #[test]
  fn closed_record_wins_over_active_for_a_historical_booking() {
    let closed = rate(
      d(2025, 1, 1),
      d(2025, 1, 10),
      100.0,
      d(2024, 12, 1),
      Some(d(2024, 12, 31)),
    );
    let active =
      rate(d(2025, 1, 1), d(2025, 1, 10), 200.0, d(2024, 12, 1), None);

    // Booked while the old rule was still in force: old price applies.
    let total = resolve(
      &[active.clone(), closed.clone()],
      d(2025, 1, 1),
      d(2025, 1, 3),
      d(2024, 12, 15),
    )
    .unwrap();
    assert_eq!(total, 200.0);

    // Booked after the closure: the active rule prices the stay.
    let total = resolve(
      &[active, closed],
      d(2025, 1, 1),
      d(2025, 1, 3),
      d(2025, 1, 1),
    )
    .unwrap();
    assert_eq!(total, 400.0);
  }

  #[test]
  fn most_recently_closed_record_is_authoritative() {
    // Two closed records cover the same night and booking date; the one
    // closed later must win regardless of input order.
    let older = rate(
      d(2025, 1, 1),
      d(2025, 1, 10),
      100.0,
      d(2024, 11, 1),
      Some(d(2024, 12, 20)),
    );
    let newer = rate(
      d(2025, 1, 1),
      d(2025, 1, 10),
      150.0,
      d(2024, 11, 1),
      Some(d(2024, 12, 25)),
    );

    for rates in [
      vec![older.clone(), newer.clone()],
      vec![newer.clone(), older.clone()],
    ] {
      let total =
        resolve(&rates, d(2025, 1, 1), d(2025, 1, 2), d(2024, 12, 10))
          .unwrap();
      assert_eq!(total, 150.0);
    }
  }

  #[test]
  fn active_record_requires_booking_from_reached() {
    // Bookable only from 2025-02-01; an earlier booking date finds nothing.
    let r = rate(d(2025, 3, 1), d(2025, 3, 10), 100.0, d(2025, 2, 1), None);
    let err = resolve(&[r], d(2025, 3, 1), d(2025, 3, 3), d(2025, 1, 15))
      .unwrap_err();
    assert!(matches!(err, Error::NoApplicableRate(_)));
  }

  #[test]
  fn pricing_is_additive_across_a_boundary() {
    let rates = [
      rate(d(2025, 1, 1), d(2025, 1, 5), 100.0, d(2024, 12, 1), None),
      rate(d(2025, 1, 6), d(2025, 1, 10), 250.0, d(2024, 12, 1), None),
    ];

    let booked = d(2024, 12, 15);
    let whole =
      resolve(&rates, d(2025, 1, 3), d(2025, 1, 9), booked).unwrap();
    let left = resolve(&rates, d(2025, 1, 3), d(2025, 1, 6), booked).unwrap();
    let right =
      resolve(&rates, d(2025, 1, 6), d(2025, 1, 9), booked).unwrap();
    assert_eq!(whole, left + right);
  }
}
