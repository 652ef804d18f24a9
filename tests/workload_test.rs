/*!
 * Workload Tests
 * Loading workload files and running them end to end
 */

use dispatch_sim::report::{render_comparison_text, render_json};
use dispatch_sim::{load_workload, Comparison, PolicyKind, SimError, SimulationContext};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_workload(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_compare() {
    let file = write_workload("2\n1 0 5 1\n2 1 3 2\n");
    let workload = load_workload(file.path()).unwrap();
    assert_eq!(workload.quantum, 2);
    assert_eq!(workload.batch.ids(), vec![1, 2]);

    let mut ctx = SimulationContext::new(workload.batch).unwrap();
    let comparison = Comparison::run_all(&mut ctx, &PolicyKind::ALL, workload.quantum).unwrap();

    let fcfs = comparison.report(PolicyKind::Fcfs).unwrap();
    assert_eq!(fcfs.average_wait, 2.0);

    let rr = comparison.report(PolicyKind::RoundRobin).unwrap();
    assert_eq!(
        rr.timeline(),
        vec![(0, 2, 1), (2, 4, 2), (4, 6, 1), (6, 7, 2), (7, 8, 1)]
    );

    let text = render_comparison_text(&comparison);
    assert!(text.contains("First Come First Served"));
    assert!(text.contains("Round Robin (quantum 2)"));
    assert!(text.contains("Lowest average wait:"));

    let json = render_json(&comparison).unwrap();
    assert!(json.contains("\"priority_preemptive\""));
}

#[test]
fn test_unsorted_file_is_ordered_by_arrival() {
    let file = write_workload("3\n3 6 2 0\n1 0 4 0\n2 2 1 0\n");
    let workload = load_workload(file.path()).unwrap();
    let ctx = SimulationContext::new(workload.batch).unwrap();
    assert_eq!(ctx.workload().ids(), vec![1, 2, 3]);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_workload("/nonexistent/dispatch-sim/workload.txt").unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn test_zero_burst_in_file_rejected() {
    let file = write_workload("2\n1 0 0 1\n");
    assert!(matches!(
        load_workload(file.path()),
        Err(SimError::InvalidWorkload(_))
    ));
}
