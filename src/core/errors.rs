/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation errors with serialization support
///
/// All variants are detected before a policy starts running; a run that
/// fails produces no partial results.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Invalid workload: {0}")]
    #[diagnostic(
        code(workload::invalid),
        help("A workload needs at least one process, every burst >= 1, every arrival >= 0 and unique pids.")
    )]
    InvalidWorkload(String),

    #[error("Policy precondition failed: {0}")]
    #[diagnostic(
        code(scheduler::policy_precondition),
        help("Round robin needs a quantum of at least one time unit.")
    )]
    PolicyPrecondition(String),

    #[error("Workload parse error at line {line}: {message}")]
    #[diagnostic(
        code(workload::parse),
        help("The file starts with the quantum, followed by `pid arrival burst priority` groups of integers.")
    )]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(workload::io),
        help("Check that the workload file exists and is readable.")
    )]
    Io(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(config::invalid),
        help("Check the DISPATCH_* environment variables.")
    )]
    Config(String),

    #[error("Unknown policy: {0}")]
    #[diagnostic(
        code(scheduler::unknown_policy),
        help("Valid: fcfs, sjf, priority, srt, priority_preemptive, rr")
    )]
    UnknownPolicy(String),
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err.to_string())
    }
}
