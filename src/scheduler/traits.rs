/*!
 * Scheduler Traits
 * Dispatcher interface and the preemption predicates of the generic engine
 */

use super::types::{Segment, SortCriterion};
use crate::core::types::Ticks;
use crate::process::{Batch, ProcessRecord};

/// A scheduling discipline that replays an arrival-ordered batch into a
/// segment log
///
/// Implementations may reorder the batch and reduce bursts in place.
pub trait Dispatch {
    fn dispatch(&self, batch: &mut Batch) -> Vec<Segment>;
}

/// Decides whether a newly arrived process interrupts the running one
///
/// The two preemptive policies differ only in this predicate and in the
/// criterion used to rank the ready range.
pub trait PreemptionRule {
    /// Criterion used to rank processes that are ready to run
    fn criterion(&self) -> SortCriterion;

    /// `remaining` is the running process's outstanding service after the
    /// unit that just elapsed
    fn should_preempt(
        &self,
        running: &ProcessRecord,
        remaining: Ticks,
        candidate: &ProcessRecord,
    ) -> bool;
}

/// Shortest remaining time first
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemaining;

impl PreemptionRule for ShortestRemaining {
    fn criterion(&self) -> SortCriterion {
        SortCriterion::Burst
    }

    #[inline]
    fn should_preempt(
        &self,
        _running: &ProcessRecord,
        remaining: Ticks,
        candidate: &ProcessRecord,
    ) -> bool {
        remaining > candidate.burst
    }
}

/// Strictly higher numeric priority wins
#[derive(Debug, Clone, Copy, Default)]
pub struct HigherPriority;

impl PreemptionRule for HigherPriority {
    fn criterion(&self) -> SortCriterion {
        SortCriterion::Priority
    }

    #[inline]
    fn should_preempt(
        &self,
        running: &ProcessRecord,
        _remaining: Ticks,
        candidate: &ProcessRecord,
    ) -> bool {
        candidate.priority > running.priority
    }
}
