/*!
 * Time Normalization
 * Shift arrivals so the simulated clock starts at zero, and shift the
 * recorded timeline back afterward
 */

use super::types::Segment;
use crate::core::types::Ticks;
use crate::process::Batch;

/// Subtract the earliest arrival from every arrival and return the shift
pub fn normalize(batch: &mut Batch) -> Ticks {
    let shift = match batch.earliest_arrival() {
        Some(t0) if t0 > 0 => t0,
        _ => return 0,
    };

    for record in batch.as_mut_slice() {
        record.arrival -= shift;
    }
    shift
}

/// Move a timeline produced on the normalized clock back to the original
/// timescale
pub fn denormalize(segments: &mut [Segment], shift: Ticks) {
    if shift == 0 {
        return;
    }
    for segment in segments {
        segment.start += shift;
        segment.arrival += shift;
    }
}
