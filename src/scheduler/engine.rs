/*!
 * Preemption Engine
 * Discrete-time replay of a batch under a preemptive policy
 *
 * The pending batch is split into three contiguous regions:
 * - `[0, completed)`: processes that have finished all their service
 * - `[completed, ready_end)`: processes that have arrived; the running one
 *   sits at `completed`
 * - `[ready_end, len)`: processes not yet arrived, still in arrival order
 *
 * Segments are appended to a log each time a process completes or is
 * preempted. The log is the only output; start and wait times are derived
 * from it afterward.
 */

use super::ordering::order_range;
use super::traits::{Dispatch, PreemptionRule};
use super::types::Segment;
use crate::core::types::Ticks;
use crate::process::Batch;
use tracing::{debug, trace};

/// Bookkeeping for one engine run
#[derive(Debug, Default)]
struct EngineState {
    /// Processes that finished all their service
    completed: usize,
    /// Segments emitted because of a preemption
    interruptions: usize,
    /// Simulated clock, on the normalized timescale
    clock: Ticks,
    /// One past the last process that has arrived by `clock`
    ready_end: usize,
    /// First arrived process not yet compared against the running one
    window_start: usize,
}

/// Preemptive dispatcher parameterized by a preemption predicate
#[derive(Debug, Clone, Default)]
pub struct PreemptionEngine<R: PreemptionRule> {
    rule: R,
}

impl<R: PreemptionRule> PreemptionEngine<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// Replay `batch`, which must be ordered by arrival, and return the
    /// segment log in chronological order
    ///
    /// The batch is mutated (reordered, bursts reduced); callers that need
    /// the original content must snapshot it first.
    pub fn run(&self, batch: &mut Batch) -> Vec<Segment> {
        let len = batch.len();
        let mut segments = Vec::with_capacity(len * 2);

        // No comparison window exists for fewer than two processes
        if len < 2 {
            if let Some(only) = batch.get(0) {
                segments.push(Segment::completed(only, only.burst));
            }
            return segments;
        }

        let mut state = EngineState::default();
        while state.completed < len - 1 {
            self.begin_lap(batch, &mut state);
            self.run_lap(batch, &mut state, &mut segments);
        }

        // Nothing after the last pending process can preempt it
        let last = &batch[state.completed];
        segments.push(Segment::completed(last, last.burst));

        debug_assert_eq!(
            segments.len(),
            len + state.interruptions,
            "segment log out of step with completions and interruptions"
        );
        debug!(
            processes = len,
            segments = segments.len(),
            preemptions = state.interruptions,
            "preemptive replay finished"
        );
        segments
    }

    /// Fold in every arrival up to now and re-rank only the ready range
    fn begin_lap(&self, batch: &mut Batch, state: &mut EngineState) {
        let current = state.completed;

        if state.ready_end <= current {
            // CPU idles until the earliest pending arrival
            state.ready_end = current;
            state.clock = state.clock.max(batch[current].arrival);
        }
        admit_arrivals(batch, state);

        order_range(batch, self.rule.criterion(), current, state.ready_end);
        batch[current].executed = 0;
        state.window_start = state.ready_end;

        trace!(
            pid = batch[current].id,
            clock = state.clock,
            ready = state.ready_end - current,
            "dispatching"
        );
    }

    /// Run the front process one unit at a time until it completes or an
    /// arrival preempts it
    fn run_lap(&self, batch: &mut Batch, state: &mut EngineState, segments: &mut Vec<Segment>) {
        let current = state.completed;

        loop {
            state.clock += 1;
            batch[current].executed += 1;
            admit_arrivals(batch, state);

            let remaining = batch[current].remaining();
            let elapsed = batch[current].executed;
            if remaining == 0 {
                segments.push(Segment::completed(&batch[current], elapsed));
                batch[current].executed = 0;
                state.completed += 1;
                return;
            }

            let Some(candidate) = self.next_candidate(batch, state) else {
                continue;
            };

            if self
                .rule
                .should_preempt(&batch[current], remaining, &batch[candidate])
            {
                segments.push(Segment::preempted(&batch[current], elapsed));
                debug!(
                    pid = batch[current].id,
                    by = batch[candidate].id,
                    at = state.clock,
                    remaining,
                    "preempted"
                );

                let running = &mut batch[current];
                running.burst = remaining;
                running.executed = 0;
                batch.swap(current, candidate);
                state.interruptions += 1;
                return;
            }
        }
    }

    /// Best-ranked process that arrived since the last comparison
    ///
    /// Earlier arrivals already lost to the running process: its remaining
    /// burst only shrinks and its priority never changes.
    fn next_candidate(&self, batch: &Batch, state: &mut EngineState) -> Option<usize> {
        let window = state.window_start..state.ready_end;
        state.window_start = state.ready_end;

        let criterion = self.rule.criterion();
        window.min_by(|&a, &b| criterion.compare(&batch[a], &batch[b]))
    }
}

impl<R: PreemptionRule> Dispatch for PreemptionEngine<R> {
    fn dispatch(&self, batch: &mut Batch) -> Vec<Segment> {
        self.run(batch)
    }
}

/// Extend the ready range over every process that has arrived by `clock`
fn admit_arrivals(batch: &Batch, state: &mut EngineState) {
    while state.ready_end < batch.len() && batch[state.ready_end].arrival <= state.clock {
        state.ready_end += 1;
    }
}
