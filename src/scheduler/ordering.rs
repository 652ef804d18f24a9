/*!
 * Ordering Service
 * In-place total ordering of a batch sub-range by a sort criterion
 */

use super::types::SortCriterion;
use crate::process::Batch;
use tracing::trace;

/// Order the whole batch
pub fn order_all(batch: &mut Batch, criterion: SortCriterion) {
    let len = batch.len();
    order_range(batch, criterion, 0, len);
}

/// Reorder `batch[start..end)` in place, leaving everything outside the
/// range untouched
///
/// The sort is stable and the criterion always ends with the process id,
/// so the result does not depend on the incoming order.
///
/// # Panics
/// If `start > end` or `end > batch.len()`. Either indicates broken window
/// bookkeeping in a dispatcher, not bad input.
pub fn order_range(batch: &mut Batch, criterion: SortCriterion, start: usize, end: usize) {
    assert!(
        start <= end && end <= batch.len(),
        "order range [{}, {}) out of bounds for batch of {}",
        start,
        end,
        batch.len()
    );

    if end - start < 2 {
        return;
    }

    batch.as_mut_slice()[start..end].sort_by(|a, b| criterion.compare(a, b));
    trace!(?criterion, start, end, "re-ranked batch range");
}
