//! Adjacency merging: keeping the active timeline minimal.
//!
//! Consecutive active rules priced identically are folded into one record.
//! The displaced pair stays in history: the left rule is closed, and the
//! right one is deleted because the replacement opens at the same instant
//! it did.

use roost_core::{Error, Result, rate::next_day, store::RateStore};

/// Coalesce calendar-adjacent active rules of `unit_id` that share an exact
/// value.
///
/// Single forward pass over the active set as loaded (ascending
/// `stay_from`). When a pair merges, the scan resumes *after* the pair: the
/// freshly inserted replacement is not compared against the next element, so
/// one call resolves at most every other boundary. Rates are introduced one
/// at a time in practice, which leaves at most one boundary to resolve per
/// call; a caller wanting full transitive compaction invokes `compact`
/// again, and a pass over an already-minimal timeline performs no merges.
pub async fn compact<S: RateStore>(store: &S, unit_id: i64) -> Result<()> {
  let active = store.find_active(unit_id).await.map_err(Error::store)?;
  if active.len() < 2 {
    return Ok(());
  }

  let mut i = 0;
  while i + 1 < active.len() {
    let current = &active[i];
    let next = &active[i + 1];

    let same_value = current.value == next.value;
    let continuous = next_day(current.stay_to) == next.stay_from;

    if !(same_value && continuous) {
      i += 1;
      continue;
    }

    let mut closed = current.clone();
    closed.booking_to = Some(next.booking_from);
    store.update(&closed).await.map_err(Error::store)?;

    let merged = store
      .insert(current.merged_with(next))
      .await
      .map_err(Error::store)?;
    store.delete(next.rate_id).await.map_err(Error::store)?;

    tracing::debug!(
      left = %current.rate_id,
      right = %next.rate_id,
      merged = %merged.rate_id,
      stay_from = %merged.stay_from,
      stay_to = %merged.stay_to,
      "merged adjacent rates"
    );

    i += 2;
  }

  Ok(())
}
