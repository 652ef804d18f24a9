/*!
 * Wait-Time Aggregator
 * Derives segment start times, per-segment waits, per-process totals and
 * the batch average from a segment log
 */

use super::types::Segment;
use crate::core::types::{Pid, Priority, Ticks};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Totals for one process across all of its segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    pub pid: Pid,
    pub priority: Priority,
    pub arrival: Ticks,
    /// Total service received; equals the original burst
    pub burst: Ticks,
    pub first_start: Ticks,
    pub completion: Ticks,
    /// Time spent ready but not running
    pub wait: Ticks,
    pub turnaround: Ticks,
    /// Number of segments the process was split into
    pub segments: usize,
}

/// Per-process totals plus the batch average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitSummary {
    pub processes: Vec<ProcessSummary>,
    pub average_wait: f64,
}

/// Fill in `start` and `wait` for every segment of a chronological log
///
/// The first segment starts at its arrival. Every later segment starts when
/// the previous one ends, or at its own arrival if the processor was idle.
/// A segment's wait is `start - arrival - service already received`, which
/// makes the wait of a process's final segment its total wait.
pub fn assign_start_and_wait(segments: &mut [Segment]) {
    let mut served: HashMap<Pid, Ticks> = HashMap::new();
    let mut previous_end: Option<Ticks> = None;

    for segment in segments.iter_mut() {
        segment.start = match previous_end {
            Some(end) => end.max(segment.arrival),
            None => segment.arrival,
        };

        let before = served.entry(segment.pid).or_insert(0);
        let ready_since = segment.arrival + *before;
        debug_assert!(
            segment.start >= ready_since,
            "segment for process {} starts at {} before it became ready at {}",
            segment.pid,
            segment.start,
            ready_since
        );
        segment.wait = segment.start.saturating_sub(ready_since);
        *before += segment.service;

        previous_end = Some(segment.end());
    }
}

/// Collapse a log whose starts and waits are already assigned into
/// per-process totals, ordered by pid
pub fn summarize(segments: &[Segment]) -> WaitSummary {
    let mut by_pid: BTreeMap<Pid, ProcessSummary> = BTreeMap::new();

    for segment in segments {
        let summary = by_pid.entry(segment.pid).or_insert_with(|| ProcessSummary {
            pid: segment.pid,
            priority: segment.priority,
            arrival: segment.arrival,
            burst: 0,
            first_start: segment.start,
            completion: 0,
            wait: 0,
            turnaround: 0,
            segments: 0,
        });

        summary.burst += segment.service;
        summary.completion = segment.end();
        summary.wait = segment.wait;
        summary.turnaround = summary.completion - summary.arrival;
        summary.segments += 1;
    }

    let processes: Vec<ProcessSummary> = by_pid.into_values().collect();
    let average_wait = if processes.is_empty() {
        0.0
    } else {
        let total: Ticks = processes.iter().map(|p| p.wait).sum();
        total as f64 / processes.len() as f64
    };

    WaitSummary {
        processes,
        average_wait,
    }
}
