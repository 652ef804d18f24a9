/*!
 * Runtime Configuration
 * Environment-driven settings for the command-line front end
 *
 * Environment variables:
 * - DISPATCH_OUTPUT: `text` (default) or `json`
 * - DISPATCH_QUANTUM: overrides the quantum read from the workload file
 * - DISPATCH_POLICIES: comma-separated policy names (default: all)
 */

use crate::core::errors::SimError;
use crate::core::types::SimResult;
use crate::report::OutputFormat;
use crate::scheduler::PolicyKind;

pub const OUTPUT_VAR: &str = "DISPATCH_OUTPUT";
pub const QUANTUM_VAR: &str = "DISPATCH_QUANTUM";
pub const POLICIES_VAR: &str = "DISPATCH_POLICIES";

/// Settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub output: OutputFormat,
    pub quantum_override: Option<i64>,
    pub policies: Vec<PolicyKind>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            quantum_override: None,
            policies: PolicyKind::ALL.to_vec(),
        }
    }
}

impl SimConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> SimResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> SimResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(OUTPUT_VAR) {
            config.output = OutputFormat::from_str(&value).ok_or_else(|| {
                SimError::Config(format!(
                    "{} must be `text` or `json`, got `{}`",
                    OUTPUT_VAR, value
                ))
            })?;
        }

        if let Some(value) = lookup(QUANTUM_VAR) {
            let quantum = value.trim().parse::<i64>().map_err(|_| {
                SimError::Config(format!(
                    "{} must be an integer, got `{}`",
                    QUANTUM_VAR, value
                ))
            })?;
            config.quantum_override = Some(quantum);
        }

        if let Some(value) = lookup(POLICIES_VAR) {
            let policies = value
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(PolicyKind::from_str)
                .collect::<SimResult<Vec<_>>>()?;
            if !policies.is_empty() {
                config.policies = policies;
            }
        }

        Ok(config)
    }

    /// Quantum to use given the one read from the workload
    pub fn quantum(&self, from_workload: i64) -> i64 {
        self.quantum_override.unwrap_or(from_workload)
    }
}
