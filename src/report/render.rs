/*!
 * Report Rendering
 * Human-readable schedules and machine-readable JSON
 */

use crate::core::errors::SimError;
use crate::core::types::SimResult;
use crate::simulation::{Comparison, PolicyReport};
use std::fmt::Write;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render a comparison in the requested format
pub fn render(comparison: &Comparison, format: OutputFormat) -> SimResult<String> {
    match format {
        OutputFormat::Text => Ok(render_comparison_text(comparison)),
        OutputFormat::Json => render_json(comparison),
    }
}

/// Pretty-printed JSON of every report
pub fn render_json(comparison: &Comparison) -> SimResult<String> {
    serde_json::to_string_pretty(comparison)
        .map_err(|e| SimError::Io(format!("failed to serialize report: {}", e)))
}

/// Every report, followed by the policy with the lowest average wait
pub fn render_comparison_text(comparison: &Comparison) -> String {
    let mut out = String::new();
    for report in &comparison.reports {
        out.push_str(&render_report_text(report));
        out.push('\n');
    }
    if let Some(best) = comparison.best() {
        let _ = writeln!(
            out,
            "Lowest average wait: {} ({:.2})",
            best.policy.title(),
            best.average_wait
        );
    }
    out
}

/// One policy: average wait, context-switch listing and per-process totals
pub fn render_report_text(report: &PolicyReport) -> String {
    let mut out = String::new();

    match report.quantum {
        Some(quantum) => {
            let _ = writeln!(out, "{} (quantum {})", report.policy.title(), quantum);
        }
        None => {
            let _ = writeln!(out, "{}", report.policy.title());
        }
    }
    let _ = writeln!(out, "Average Wait Time : {:.2}", report.average_wait);

    for segment in &report.segments {
        let _ = writeln!(out, "t  =  {:<6} Process: {}", segment.start, segment.pid);
    }

    let _ = writeln!(
        out,
        "{:>6} {:>8} {:>6} {:>6} {:>10} {:>6}",
        "pid", "arrival", "burst", "wait", "completion", "turn"
    );
    for process in &report.processes {
        let _ = writeln!(
            out,
            "{:>6} {:>8} {:>6} {:>6} {:>10} {:>6}",
            process.pid,
            process.arrival,
            process.burst,
            process.wait,
            process.completion,
            process.turnaround
        );
    }

    out
}
