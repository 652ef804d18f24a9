/*!
 * Non-Preemptive Dispatch
 * Run-to-completion policies: FCFS, shortest job first, priority
 */

use super::ordering::order_range;
use super::traits::Dispatch;
use super::types::{Segment, SortCriterion};
use crate::process::Batch;
use tracing::debug;

/// Picks the best ready process at every dispatch instant and runs it to
/// completion
///
/// With [`SortCriterion::Arrival`] this is first come, first served.
#[derive(Debug, Clone, Copy)]
pub struct NonPreemptive {
    criterion: SortCriterion,
}

impl NonPreemptive {
    pub const fn new(criterion: SortCriterion) -> Self {
        Self { criterion }
    }

    pub const fn fcfs() -> Self {
        Self::new(SortCriterion::Arrival)
    }

    pub const fn shortest_job_first() -> Self {
        Self::new(SortCriterion::Burst)
    }

    pub const fn priority() -> Self {
        Self::new(SortCriterion::Priority)
    }

    /// Leaves the batch in execution order, one segment per process
    pub fn run(&self, batch: &mut Batch) -> Vec<Segment> {
        let len = batch.len();
        let mut segments = Vec::with_capacity(len);
        let mut clock = 0;
        let mut ready_end = 0;

        for current in 0..len {
            if ready_end <= current {
                ready_end = current;
                clock = batch[current].arrival.max(clock);
            }
            while ready_end < len && batch[ready_end].arrival <= clock {
                ready_end += 1;
            }

            order_range(batch, self.criterion, current, ready_end);

            let next = &batch[current];
            segments.push(Segment::completed(next, next.burst));
            clock += next.burst;
        }

        debug!(
            criterion = ?self.criterion,
            processes = len,
            "non-preemptive replay finished"
        );
        segments
    }
}

impl Dispatch for NonPreemptive {
    fn dispatch(&self, batch: &mut Batch) -> Vec<Segment> {
        self.run(batch)
    }
}
