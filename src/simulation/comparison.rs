/*!
 * Policy Comparison
 * Runs several policies over the same workload
 */

use super::context::SimulationContext;
use super::report::PolicyReport;
use crate::core::types::SimResult;
use crate::scheduler::{PolicyKind, TimeQuantum};
use serde::Serialize;
use tracing::info;

/// Reports for a set of policies over one workload, in run order
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub reports: Vec<PolicyReport>,
}

impl Comparison {
    /// Run every policy in `kinds`
    ///
    /// The quantum is checked up front when round robin is selected, so an
    /// invalid quantum fails before any policy runs.
    pub fn run_all(
        context: &mut SimulationContext,
        kinds: &[PolicyKind],
        quantum: i64,
    ) -> SimResult<Self> {
        if kinds.contains(&PolicyKind::RoundRobin) {
            TimeQuantum::new(quantum)?;
        }

        let reports = kinds
            .iter()
            .map(|&kind| context.run_kind(kind, quantum))
            .collect::<SimResult<Vec<_>>>()?;

        let comparison = Self { reports };
        if let Some(best) = comparison.best() {
            info!(
                policy = best.policy.as_str(),
                average_wait = best.average_wait,
                "lowest average wait"
            );
        }
        Ok(comparison)
    }

    /// Report with the lowest average wait; the earliest run wins ties
    pub fn best(&self) -> Option<&PolicyReport> {
        self.reports.iter().reduce(|best, report| {
            if report.average_wait < best.average_wait {
                report
            } else {
                best
            }
        })
    }

    pub fn report(&self, kind: PolicyKind) -> Option<&PolicyReport> {
        self.reports.iter().find(|r| r.policy == kind)
    }
}
