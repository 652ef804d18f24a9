/*!
 * Simulation Context
 * Owns a validated workload and runs policies on a working copy of it
 */

use super::report::PolicyReport;
use crate::core::types::SimResult;
use crate::process::{validate_batch, Batch};
use crate::scheduler::{
    assign_start_and_wait, denormalize, dispatcher_for, normalize, order_all, summarize, Policy,
    PolicyKind, SortCriterion,
};
use tracing::{info, info_span};

/// Simulation context for one workload
///
/// Every run snapshots the working batch, lets the dispatcher reorder and
/// consume it, then rolls it back. Runs are therefore independent of each
/// other and of their order.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    working: Batch,
}

impl SimulationContext {
    /// Validate the workload and put it in arrival order (ties by pid)
    pub fn new(mut batch: Batch) -> SimResult<Self> {
        validate_batch(&batch)?;
        order_all(&mut batch, SortCriterion::Arrival);

        info!(
            processes = batch.len(),
            total_burst = batch.total_burst(),
            "simulation context created"
        );
        Ok(Self { working: batch })
    }

    /// The workload in arrival order, as loaded
    pub fn workload(&self) -> &Batch {
        &self.working
    }

    /// Run a single policy
    pub fn run(&mut self, policy: Policy) -> SimResult<PolicyReport> {
        let _span = info_span!("simulate", policy = policy.kind().as_str()).entered();
        validate_batch(&self.working)?;

        let snapshot = self.working.snapshot();
        let shift = normalize(&mut self.working);
        let mut segments = dispatcher_for(policy).dispatch(&mut self.working);
        self.working.restore(snapshot);

        assign_start_and_wait(&mut segments);
        denormalize(&mut segments, shift);
        let summary = summarize(&segments);

        info!(
            segments = segments.len(),
            average_wait = summary.average_wait,
            shift,
            "policy simulated"
        );
        Ok(PolicyReport::new(policy, shift, segments, summary))
    }

    /// Run a policy by kind; `quantum` is only checked for round robin
    pub fn run_kind(&mut self, kind: PolicyKind, quantum: i64) -> SimResult<PolicyReport> {
        self.run(kind.into_policy(quantum)?)
    }
}
