/*!
 * Round Robin
 * Fixed-quantum rotation through a FIFO ready queue
 */

use super::traits::Dispatch;
use super::types::{Segment, TimeQuantum};
use crate::core::types::Ticks;
use crate::process::Batch;
use std::collections::VecDeque;
use tracing::debug;

/// Round-robin dispatcher; every turn becomes one segment
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: TimeQuantum,
}

impl RoundRobin {
    pub const fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    /// Replay an arrival-ordered batch
    ///
    /// Processes that arrive during a slice join the queue before the
    /// preempted process is put back. Bursts are reduced in place as
    /// service is delivered.
    pub fn run(&self, batch: &mut Batch) -> Vec<Segment> {
        let len = batch.len();
        let quantum = self.quantum.get();
        let mut segments = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(len);
        let mut next_arrival = 0;
        let mut clock: Ticks = 0;
        let mut completed = 0;

        while completed < len {
            if queue.is_empty() {
                clock = clock.max(batch[next_arrival].arrival);
            }
            admit(batch, &mut queue, &mut next_arrival, clock);

            let Some(index) = queue.pop_front() else {
                unreachable!("ready queue empty with {} processes pending", len - completed);
            };

            let slice = quantum.min(batch[index].burst);
            clock += slice;
            batch[index].burst -= slice;
            admit(batch, &mut queue, &mut next_arrival, clock);

            if batch[index].burst == 0 {
                segments.push(Segment::completed(&batch[index], slice));
                completed += 1;
            } else {
                segments.push(Segment::preempted(&batch[index], slice));
                queue.push_back(index);
            }
        }

        debug!(
            quantum,
            processes = len,
            turns = segments.len(),
            "round robin replay finished"
        );
        segments
    }
}

impl Dispatch for RoundRobin {
    fn dispatch(&self, batch: &mut Batch) -> Vec<Segment> {
        self.run(batch)
    }
}

fn admit(batch: &Batch, queue: &mut VecDeque<usize>, next_arrival: &mut usize, clock: Ticks) {
    while *next_arrival < batch.len() && batch[*next_arrival].arrival <= clock {
        queue.push_back(*next_arrival);
        *next_arrival += 1;
    }
}
