/*!
 * Dispatch Simulator - Main Entry Point
 *
 * Loads a workload file, replays it under every selected policy and prints
 * the schedules and average wait times.
 *
 * Usage: dispatch-sim <workload-file>
 */

use anyhow::Context;
use tracing::info;

use dispatch_sim::{
    init_tracing, load_workload, report, Comparison, SimConfig, SimError, SimulationContext,
};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::args()
        .nth(1)
        .context("usage: dispatch-sim <workload-file>")?;

    if let Err(err) = run(&path) {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
    Ok(())
}

fn run(path: &str) -> Result<(), SimError> {
    let config = SimConfig::from_env()?;
    let workload = load_workload(path)?;
    let quantum = config.quantum(workload.quantum);

    info!(
        path,
        processes = workload.batch.len(),
        quantum,
        policies = config.policies.len(),
        "running simulation"
    );

    let mut context = SimulationContext::new(workload.batch)?;
    let comparison = Comparison::run_all(&mut context, &config.policies, quantum)?;

    let rendered = report::render(&comparison, config.output)?;
    print!("{}", rendered);
    Ok(())
}
