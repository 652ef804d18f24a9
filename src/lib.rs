/*!
 * Dispatch Simulator Library
 * Offline single-processor scheduling simulation and wait-time comparison
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod simulation;
pub mod workload;

// Re-exports
pub use config::SimConfig;
pub use crate::core::errors::SimError;
pub use crate::core::types::{Pid, Priority, SimResult, Ticks};
pub use monitoring::init_tracing;
pub use process::{Batch, ProcessRecord};
pub use report::OutputFormat;
pub use scheduler::{Policy, PolicyKind, ProcessSummary, Segment, TimeQuantum};
pub use simulation::{Comparison, PolicyReport, SimulationContext};
pub use workload::{load_workload, parse_workload, Workload};
