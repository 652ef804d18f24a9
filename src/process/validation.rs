/*!
 * Workload Validation
 * Entry checks run once before any policy simulates a batch
 */

use super::types::Batch;
use crate::core::errors::SimError;
use crate::core::types::SimResult;
use std::collections::HashSet;

/// Validate a batch before simulation
///
/// Rejects an empty batch, zero bursts and duplicate process ids. Negative
/// arrivals are unrepresentable once a record exists; they are caught in
/// [`ProcessRecord::from_raw`](super::ProcessRecord::from_raw).
pub fn validate_batch(batch: &Batch) -> SimResult<()> {
    if batch.is_empty() {
        return Err(SimError::InvalidWorkload(
            "batch must contain at least one process".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(batch.len());
    for record in batch {
        if record.burst == 0 {
            return Err(SimError::InvalidWorkload(format!(
                "process {} has non-positive burst 0",
                record.id
            )));
        }
        if !seen.insert(record.id) {
            return Err(SimError::InvalidWorkload(format!(
                "duplicate process id {}",
                record.id
            )));
        }
    }

    Ok(())
}
