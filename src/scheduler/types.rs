/*!
 * Scheduler Types
 * Policy selector, time quantum, ordering criteria and execution segments
 */

use crate::core::errors::SimError;
use crate::core::types::{Pid, Priority, SimResult, Ticks};
use crate::process::ProcessRecord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;

/// Scheduling discipline without its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First come, first served
    Fcfs,
    /// Shortest job first, run to completion
    ShortestJobFirst,
    /// Highest priority first, run to completion
    PriorityNonPreemptive,
    /// Shortest remaining time, preemptive
    ShortestRemainingTime,
    /// Highest priority first, preemptive
    PriorityPreemptive,
    /// Fixed-quantum queue rotation
    RoundRobin,
}

impl PolicyKind {
    /// Every policy, in report order
    pub const ALL: [PolicyKind; 6] = [
        Self::Fcfs,
        Self::ShortestJobFirst,
        Self::PriorityNonPreemptive,
        Self::ShortestRemainingTime,
        Self::PriorityPreemptive,
        Self::RoundRobin,
    ];

    /// Parse from string representation
    pub fn from_str(s: &str) -> SimResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "shortest_job_first" => Ok(Self::ShortestJobFirst),
            "priority" | "prio" | "priority_non_preemptive" => Ok(Self::PriorityNonPreemptive),
            "srt" | "srtf" | "shortest_remaining_time" => Ok(Self::ShortestRemainingTime),
            "priority_preemptive" | "prio_preemptive" => Ok(Self::PriorityPreemptive),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SimError::UnknownPolicy(s.to_string())),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::ShortestJobFirst => "sjf",
            Self::PriorityNonPreemptive => "priority",
            Self::ShortestRemainingTime => "srt",
            Self::PriorityPreemptive => "priority_preemptive",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Human-readable title used in text reports
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Served",
            Self::ShortestJobFirst => "SJF Non Preemptive",
            Self::PriorityNonPreemptive => "Priority Non Preemptive",
            Self::ShortestRemainingTime => "SJF Preemptive",
            Self::PriorityPreemptive => "Priority Preemptive",
            Self::RoundRobin => "Round Robin",
        }
    }

    /// Attach the parameters a runnable policy needs; the quantum is only
    /// checked for round robin
    pub fn into_policy(self, quantum: i64) -> SimResult<Policy> {
        Ok(match self {
            Self::Fcfs => Policy::Fcfs,
            Self::ShortestJobFirst => Policy::ShortestJobFirst,
            Self::PriorityNonPreemptive => Policy::PriorityNonPreemptive,
            Self::ShortestRemainingTime => Policy::ShortestRemainingTime,
            Self::PriorityPreemptive => Policy::PriorityPreemptive,
            Self::RoundRobin => Policy::RoundRobin(TimeQuantum::new(quantum)?),
        })
    }
}

impl Serialize for PolicyKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PolicyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Runnable policy selector, passed once per simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    ShortestJobFirst,
    PriorityNonPreemptive,
    ShortestRemainingTime,
    PriorityPreemptive,
    RoundRobin(TimeQuantum),
}

impl Policy {
    pub const fn kind(&self) -> PolicyKind {
        match self {
            Self::Fcfs => PolicyKind::Fcfs,
            Self::ShortestJobFirst => PolicyKind::ShortestJobFirst,
            Self::PriorityNonPreemptive => PolicyKind::PriorityNonPreemptive,
            Self::ShortestRemainingTime => PolicyKind::ShortestRemainingTime,
            Self::PriorityPreemptive => PolicyKind::PriorityPreemptive,
            Self::RoundRobin(_) => PolicyKind::RoundRobin,
        }
    }

    /// Whether a running process can be interrupted by an arrival
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::ShortestRemainingTime | Self::PriorityPreemptive | Self::RoundRobin(_)
        )
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.kind().serialize(serializer)
    }
}

/// Round-robin time slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    /// Create new time quantum; it must be at least one unit
    pub fn new(units: i64) -> SimResult<Self> {
        if units < 1 {
            return Err(SimError::PolicyPrecondition(format!(
                "round robin quantum must be positive, got {}",
                units
            )));
        }
        Ok(Self(units as Ticks))
    }

    #[inline(always)]
    pub const fn get(&self) -> Ticks {
        self.0
    }
}

/// Ordering criterion used by the ordering service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    /// Arrival time ascending
    Arrival,
    /// Remaining burst ascending (shortest-job family)
    Burst,
    /// Numeric priority descending (priority family)
    Priority,
}

impl SortCriterion {
    /// Total order over records; process id is the final tie-break
    pub fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        let primary = match self {
            Self::Arrival => a.arrival.cmp(&b.arrival),
            Self::Burst => a.burst.cmp(&b.burst),
            // Higher value is more urgent, so it sorts first
            Self::Priority => b.priority.cmp(&a.priority),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// One uninterrupted run of a process in the timeline
///
/// `start` and `wait` are filled in by the wait-time aggregator; the
/// dispatchers only record who ran and for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub pid: Pid,
    pub priority: Priority,
    pub arrival: Ticks,
    /// Service delivered during this segment
    pub service: Ticks,
    /// Units executed before preemption; 0 when the segment completed the process
    pub preempted_after: Ticks,
    pub start: Ticks,
    pub wait: Ticks,
}

impl Segment {
    pub(crate) fn completed(record: &ProcessRecord, service: Ticks) -> Self {
        Self::new(record, service, 0)
    }

    pub(crate) fn preempted(record: &ProcessRecord, service: Ticks) -> Self {
        Self::new(record, service, service)
    }

    fn new(record: &ProcessRecord, service: Ticks, preempted_after: Ticks) -> Self {
        Self {
            pid: record.id,
            priority: record.priority,
            arrival: record.arrival,
            service,
            preempted_after,
            start: 0,
            wait: 0,
        }
    }

    /// Time at which this segment stops running
    #[inline]
    pub fn end(&self) -> Ticks {
        self.start + self.service
    }

    /// Whether the process was interrupted at the end of this segment
    #[inline]
    pub fn was_preempted(&self) -> bool {
        self.preempted_after > 0
    }
}
