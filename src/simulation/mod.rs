/*!
 * Simulation Module
 * Owned simulation context, per-policy reports and multi-policy comparison
 */

pub mod comparison;
pub mod context;
pub mod report;

pub use comparison::Comparison;
pub use context::SimulationContext;
pub use report::PolicyReport;
