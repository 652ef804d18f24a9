/*!
 * Scheduler Module
 * Dispatch policies, ordering, time normalization and wait accounting
 */

pub mod engine;
pub mod non_preemptive;
pub mod normalize;
pub mod ordering;
pub mod round_robin;
pub mod traits;
pub mod types;
pub mod wait;

// Re-export public API
pub use engine::PreemptionEngine;
pub use non_preemptive::NonPreemptive;
pub use normalize::{denormalize, normalize};
pub use ordering::{order_all, order_range};
pub use round_robin::RoundRobin;
pub use traits::{Dispatch, HigherPriority, PreemptionRule, ShortestRemaining};
pub use types::{Policy, PolicyKind, Segment, SortCriterion, TimeQuantum};
pub use wait::{assign_start_and_wait, summarize, ProcessSummary, WaitSummary};

/// Dispatcher implementing `policy`
pub fn dispatcher_for(policy: Policy) -> Box<dyn Dispatch> {
    match policy {
        Policy::Fcfs => Box::new(NonPreemptive::fcfs()),
        Policy::ShortestJobFirst => Box::new(NonPreemptive::shortest_job_first()),
        Policy::PriorityNonPreemptive => Box::new(NonPreemptive::priority()),
        Policy::ShortestRemainingTime => Box::new(PreemptionEngine::new(ShortestRemaining)),
        Policy::PriorityPreemptive => Box::new(PreemptionEngine::new(HigherPriority)),
        Policy::RoundRobin(quantum) => Box::new(RoundRobin::new(quantum)),
    }
}
