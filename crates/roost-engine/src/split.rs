//! Interval splitting: making room for a new rate.
//!
//! Every active rule whose stay window intersects the candidate's is closed,
//! and the parts of its window the candidate does not cover are re-opened as
//! fresh fragments. After the pass the candidate's exact window is free of
//! active rules, so inserting it cannot violate the partition invariant.

use roost_core::{
  Error, Result,
  rate::{NewRate, next_day, prev_day},
  store::RateStore,
};

/// Close and divide every active rule of `candidate.unit_id` that overlaps
/// the candidate's stay window. Must run to completion before the candidate
/// itself is inserted.
///
/// Fragments inherit the *candidate's* `booking_from`: they are rules newly
/// opened at the instant the candidate was introduced, not continuations of
/// the displaced rule's booking window. A rule fully contained in the
/// candidate's window yields no fragments and is simply closed. A closed
/// rule whose booking window came out inverted (`booking_from` after the new
/// `booking_to`) was never actually bookable and is deleted instead of kept
/// as a degenerate record.
pub async fn resolve_overlaps<S: RateStore>(
  store: &S,
  candidate: &NewRate,
) -> Result<()> {
  let overlapping = store
    .find_overlapping_active(
      candidate.unit_id,
      candidate.stay_from,
      candidate.stay_to,
    )
    .await
    .map_err(Error::store)?;

  for mut old in overlapping {
    old.booking_to = Some(candidate.booking_from);
    store.update(&old).await.map_err(Error::store)?;
    tracing::debug!(
      rate_id = %old.rate_id,
      booking_to = %candidate.booking_from,
      "closed displaced rate"
    );

    if old.stay_from < candidate.stay_from {
      let before = old.fragment(
        old.stay_from,
        prev_day(candidate.stay_from),
        candidate.booking_from,
      );
      let saved = store.insert(before).await.map_err(Error::store)?;
      tracing::debug!(
        rate_id = %saved.rate_id,
        stay_from = %saved.stay_from,
        stay_to = %saved.stay_to,
        "re-opened before fragment"
      );
    }

    if old.stay_to > candidate.stay_to {
      let after = old.fragment(
        next_day(candidate.stay_to),
        old.stay_to,
        candidate.booking_from,
      );
      let saved = store.insert(after).await.map_err(Error::store)?;
      tracing::debug!(
        rate_id = %saved.rate_id,
        stay_from = %saved.stay_from,
        stay_to = %saved.stay_to,
        "re-opened after fragment"
      );
    }

    if old.booking_to.is_some_and(|to| old.booking_from > to) {
      store.delete(old.rate_id).await.map_err(Error::store)?;
      tracing::debug!(
        rate_id = %old.rate_id,
        "deleted never-bookable closed rate"
      );
    }
  }

  Ok(())
}
