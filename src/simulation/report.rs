/*!
 * Policy Report
 * Result of simulating one policy over a workload
 */

use crate::core::types::{Pid, Ticks};
use crate::scheduler::{Policy, PolicyKind, ProcessSummary, Segment, WaitSummary};
use serde::Serialize;

/// Timeline and wait statistics of one policy run
///
/// Segments are in chronological start order and all timestamps are on the
/// workload's original timescale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyReport {
    pub policy: PolicyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    /// Offset removed from arrivals while simulating
    pub shift: Ticks,
    pub segments: Vec<Segment>,
    pub processes: Vec<ProcessSummary>,
    pub average_wait: f64,
}

impl PolicyReport {
    pub(crate) fn new(policy: Policy, shift: Ticks, segments: Vec<Segment>, summary: WaitSummary) -> Self {
        let quantum = match policy {
            Policy::RoundRobin(quantum) => Some(quantum.get()),
            _ => None,
        };

        Self {
            policy: policy.kind(),
            quantum,
            shift,
            segments,
            processes: summary.processes,
            average_wait: summary.average_wait,
        }
    }

    /// Summary for one process
    pub fn process(&self, pid: Pid) -> Option<&ProcessSummary> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Number of times the processor switched from one process to another
    pub fn context_switches(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|pair| pair[0].pid != pair[1].pid)
            .count()
    }

    /// Segments that ended in a preemption
    pub fn preemptions(&self) -> usize {
        self.segments.iter().filter(|s| s.was_preempted()).count()
    }

    /// Time the last process finishes
    pub fn makespan(&self) -> Ticks {
        self.segments.last().map(Segment::end).unwrap_or(0)
    }

    /// `(start, end, pid)` triples of the timeline
    pub fn timeline(&self) -> Vec<(Ticks, Ticks, Pid)> {
        self.segments
            .iter()
            .map(|s| (s.start, s.end(), s.pid))
            .collect()
    }
}
