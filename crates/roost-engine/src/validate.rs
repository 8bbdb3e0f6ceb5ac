//! Rate submission validation.
//!
//! A pure predicate over the candidate and the unit's existing records; it
//! never touches the store. Structural checks run first, then duplicate
//! detection, so the cheapest rejection wins.

use chrono::NaiveDate;

use roost_core::{
  ValidationError,
  rate::{NewRate, Rate},
};

/// Validate `candidate` against the unit's existing records (active and
/// closed, any order).
///
/// Duplicate detection rejects a candidate whose stay window is fully
/// contained in an existing record with the identical value, when that
/// record is active or closed with a booking window still open past `today`.
/// Re-submitting such a rule would only be split and merged straight back
/// into itself.
pub fn validate(
  candidate: &NewRate,
  existing: &[Rate],
  today: NaiveDate,
) -> Result<(), ValidationError> {
  if candidate.stay_from > candidate.stay_to {
    return Err(ValidationError::StayWindowInverted {
      from: candidate.stay_from,
      to:   candidate.stay_to,
    });
  }

  if candidate.value <= 0.0 {
    return Err(ValidationError::NonPositiveValue(candidate.value));
  }

  if candidate.nights == 0 {
    return Err(ValidationError::ZeroNights);
  }

  for rate in existing {
    let contains = rate.stay_from <= candidate.stay_from
      && candidate.stay_to <= rate.stay_to;
    // Exact value equality, no tolerance.
    let same_value = rate.value == candidate.value;
    let still_bookable =
      rate.booking_to.is_none_or(|to| to > today);

    if contains && same_value && still_bookable {
      return Err(ValidationError::Duplicate {
        from: candidate.stay_from,
        to:   candidate.stay_to,
      });
    }
  }

  Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use uuid::Uuid;

  use roost_core::{
    ValidationError,
    rate::{NewRate, Rate},
  };

  use super::validate;

  fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
  }

  fn candidate() -> NewRate {
    NewRate::new(1, d(2025, 1, 3), d(2025, 1, 5), 1, 300.0, d(2025, 1, 1))
  }

  fn existing(
    stay_from: NaiveDate,
    stay_to: NaiveDate,
    value: f64,
    booking_to: Option<NaiveDate>,
  ) -> Rate {
    Rate {
      rate_id: Uuid::new_v4(),
      unit_id: 1,
      stay_from,
      stay_to,
      booking_from: d(2024, 12, 1),
      booking_to,
      nights: 1,
      value,
    }
  }

  fn today() -> NaiveDate { d(2025, 1, 1) }

  #[test]
  fn accepts_a_clean_candidate() {
    assert_eq!(validate(&candidate(), &[], today()), Ok(()));
  }

  #[test]
  fn rejects_inverted_stay_window() {
    let mut c = candidate();
    c.stay_from = d(2025, 1, 6);
    assert!(matches!(
      validate(&c, &[], today()),
      Err(ValidationError::StayWindowInverted { .. })
    ));
  }

  #[test]
  fn rejects_non_positive_value() {
    let mut c = candidate();
    c.value = 0.0;
    assert!(matches!(
      validate(&c, &[], today()),
      Err(ValidationError::NonPositiveValue(_))
    ));

    c.value = -10.0;
    assert!(matches!(
      validate(&c, &[], today()),
      Err(ValidationError::NonPositiveValue(_))
    ));
  }

  #[test]
  fn rejects_zero_nights() {
    let mut c = candidate();
    c.nights = 0;
    assert!(matches!(
      validate(&c, &[], today()),
      Err(ValidationError::ZeroNights)
    ));
  }

  #[test]
  fn rejects_duplicate_inside_active_record() {
    let rates = [existing(d(2025, 1, 1), d(2025, 1, 10), 300.0, None)];
    assert!(matches!(
      validate(&candidate(), &rates, today()),
      Err(ValidationError::Duplicate { .. })
    ));
  }

  #[test]
  fn rejects_duplicate_inside_future_closed_record() {
    // Closed, but its booking window still reaches past today.
    let rates =
      [existing(d(2025, 1, 1), d(2025, 1, 10), 300.0, Some(d(2025, 6, 1)))];
    assert!(matches!(
      validate(&candidate(), &rates, today()),
      Err(ValidationError::Duplicate { .. })
    ));
  }

  #[test]
  fn accepts_duplicate_of_an_expired_closed_record() {
    let rates =
      [existing(d(2025, 1, 1), d(2025, 1, 10), 300.0, Some(d(2024, 12, 20)))];
    assert_eq!(validate(&candidate(), &rates, today()), Ok(()));
  }

  #[test]
  fn accepts_same_window_at_a_different_price() {
    let rates = [existing(d(2025, 1, 1), d(2025, 1, 10), 500.0, None)];
    assert_eq!(validate(&candidate(), &rates, today()), Ok(()));
  }

  #[test]
  fn accepts_overlap_that_is_not_fully_contained() {
    // Same value, but the candidate sticks out past the existing window.
    let rates = [existing(d(2025, 1, 4), d(2025, 1, 10), 300.0, None)];
    assert_eq!(validate(&candidate(), &rates, today()), Ok(()));
  }
}
