/*!
 * Scheduler Tests
 * Dispatch behavior of every policy on small hand-checked workloads
 */

use dispatch_sim::scheduler::{order_all, SortCriterion};
use dispatch_sim::{Batch, Policy, PolicyKind, ProcessRecord, SimulationContext, TimeQuantum};
use pretty_assertions::assert_eq;

fn workload(records: &[(u32, u64, u64, i32)]) -> SimulationContext {
    let batch: Batch = records
        .iter()
        .map(|&(id, arrival, burst, priority)| ProcessRecord::new(id, arrival, burst, priority))
        .collect();
    SimulationContext::new(batch).unwrap()
}

#[test]
fn test_fcfs_baseline() {
    let mut ctx = workload(&[(1, 0, 5, 0), (2, 1, 3, 0)]);
    let report = ctx.run(Policy::Fcfs).unwrap();

    assert_eq!(report.timeline(), vec![(0, 5, 1), (5, 8, 2)]);
    assert_eq!(report.average_wait, 2.0);
}

#[test]
fn test_srt_preemption() {
    let mut ctx = workload(&[(1, 0, 8, 0), (2, 1, 4, 0)]);
    let report = ctx.run(Policy::ShortestRemainingTime).unwrap();

    assert_eq!(report.timeline(), vec![(0, 1, 1), (1, 5, 2), (5, 12, 1)]);
    assert_eq!(report.preemptions(), 1);
    assert_eq!(report.context_switches(), 2);

    // Process 1 waits from 1 to 5; process 2 starts on arrival
    assert_eq!(report.process(1).unwrap().wait, 4);
    assert_eq!(report.process(2).unwrap().wait, 0);
    assert_eq!(report.average_wait, 2.0);
}

#[test]
fn test_srt_textbook_average() {
    let mut ctx = workload(&[(1, 0, 8, 0), (2, 1, 4, 0), (3, 2, 9, 0), (4, 3, 5, 0)]);
    let report = ctx.run(Policy::ShortestRemainingTime).unwrap();

    assert_eq!(
        report.timeline(),
        vec![(0, 1, 1), (1, 5, 2), (5, 10, 4), (10, 17, 1), (17, 26, 3)]
    );
    // (9 + 0 + 15 + 2) / 4
    assert_eq!(report.average_wait, 6.5);
}

#[test]
fn test_sjf_non_preemptive() {
    let mut ctx = workload(&[(1, 0, 8, 0), (2, 1, 4, 0), (3, 2, 9, 0), (4, 3, 5, 0)]);
    let report = ctx.run(Policy::ShortestJobFirst).unwrap();

    assert_eq!(
        report.timeline(),
        vec![(0, 8, 1), (8, 12, 2), (12, 17, 4), (17, 26, 3)]
    );
    // (0 + 7 + 15 + 9) / 4
    assert_eq!(report.average_wait, 7.75);
}

#[test]
fn test_priority_non_preemptive_prefers_higher_value() {
    let mut ctx = workload(&[(1, 0, 3, 1), (2, 1, 2, 2), (3, 1, 2, 7)]);
    let report = ctx.run(Policy::PriorityNonPreemptive).unwrap();

    assert_eq!(report.timeline(), vec![(0, 3, 1), (3, 5, 3), (5, 7, 2)]);
}

#[test]
fn test_priority_preemptive() {
    let mut ctx = workload(&[(1, 0, 5, 1), (2, 2, 3, 4), (3, 3, 2, 9)]);
    let report = ctx.run(Policy::PriorityPreemptive).unwrap();

    assert_eq!(
        report.timeline(),
        vec![(0, 2, 1), (2, 3, 2), (3, 5, 3), (5, 7, 2), (7, 10, 1)]
    );
    assert_eq!(report.process(1).unwrap().wait, 5);
    assert_eq!(report.process(2).unwrap().wait, 2);
    assert_eq!(report.process(3).unwrap().wait, 0);
}

#[test]
fn test_round_robin_single_process() {
    let mut ctx = workload(&[(1, 0, 5, 0)]);
    let report = ctx
        .run(Policy::RoundRobin(TimeQuantum::new(2).unwrap()))
        .unwrap();

    assert_eq!(report.timeline(), vec![(0, 2, 1), (2, 4, 1), (4, 5, 1)]);
    assert!(report.segments.iter().all(|s| s.wait == 0));
    assert_eq!(report.average_wait, 0.0);
    assert_eq!(report.quantum, Some(2));
}

#[test]
fn test_round_robin_two_processes() {
    let mut ctx = workload(&[(1, 0, 5, 0), (2, 0, 3, 0)]);
    let report = ctx
        .run(Policy::RoundRobin(TimeQuantum::new(2).unwrap()))
        .unwrap();

    assert_eq!(
        report.timeline(),
        vec![(0, 2, 1), (2, 4, 2), (4, 6, 1), (6, 7, 2), (7, 8, 1)]
    );
    assert_eq!(report.process(1).unwrap().wait, 3);
    assert_eq!(report.process(2).unwrap().wait, 4);
}

#[test]
fn test_single_process_every_policy() {
    for kind in PolicyKind::ALL {
        let mut ctx = workload(&[(9, 4, 6, 3)]);
        let report = ctx.run_kind(kind, 10).unwrap();

        assert_eq!(report.segments.len(), 1, "{:?}", kind);
        assert_eq!(report.timeline(), vec![(4, 10, 9)], "{:?}", kind);
        assert_eq!(report.average_wait, 0.0);
    }
}

#[test]
fn test_tie_break_is_deterministic() {
    let records = [(3, 0, 2, 5), (1, 0, 2, 5), (2, 0, 2, 5)];
    let mut forward: Batch = records
        .iter()
        .map(|&(id, arrival, burst, priority)| ProcessRecord::new(id, arrival, burst, priority))
        .collect();
    let mut backward: Batch = records
        .iter()
        .rev()
        .map(|&(id, arrival, burst, priority)| ProcessRecord::new(id, arrival, burst, priority))
        .collect();

    for criterion in [SortCriterion::Arrival, SortCriterion::Burst, SortCriterion::Priority] {
        order_all(&mut forward, criterion);
        order_all(&mut backward, criterion);
        assert_eq!(forward.ids(), vec![1, 2, 3]);
        assert_eq!(forward, backward);
    }

    for kind in PolicyKind::ALL {
        let mut ctx = workload(&records);
        let order: Vec<u32> = ctx
            .run_kind(kind, 5)
            .unwrap()
            .segments
            .iter()
            .map(|s| s.pid)
            .collect();
        assert_eq!(order, vec![1, 2, 3], "{:?}", kind);
    }
}

#[test]
fn test_late_first_arrival_is_denormalized() {
    let mut ctx = workload(&[(1, 20, 8, 0), (2, 21, 4, 0)]);
    let report = ctx.run(Policy::ShortestRemainingTime).unwrap();

    assert_eq!(report.shift, 20);
    assert_eq!(report.timeline(), vec![(20, 21, 1), (21, 25, 2), (25, 32, 1)]);
    assert_eq!(report.process(1).unwrap().arrival, 20);
    assert_eq!(report.average_wait, 2.0);
}
