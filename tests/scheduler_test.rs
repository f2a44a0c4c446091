/*!
 * Round-Robin Scheduler Tests
 * End-to-end scenarios through the Simulator facade
 */

use pretty_assertions::assert_eq;
use rr_sim::{Admission, Pid, SimError, Simulator, SimulatorState, Ticks, TimelineEvent};

fn simulate(quantum: Ticks, procs: &[(Pid, Ticks, Ticks)]) -> Simulator {
    let mut sim = Simulator::new(quantum).unwrap();
    for &(pid, arrival, burst) in procs {
        sim.admit(pid, arrival, burst).unwrap();
    }
    sim.run().unwrap();
    sim
}

fn end(sim: &Simulator, pid: Pid) -> Ticks {
    sim.lookup(pid).unwrap().completion_time.unwrap()
}

fn waiting(sim: &Simulator, pid: Pid) -> Ticks {
    sim.lookup(pid).unwrap().waiting_time
}

fn dispatch_order(sim: &Simulator) -> Vec<Pid> {
    sim.timeline()
        .iter()
        .filter_map(|event| match event {
            TimelineEvent::Slice { pid, .. } => Some(*pid),
            TimelineEvent::Idle { .. } => None,
        })
        .collect()
}

#[test]
fn test_single_process_completes() {
    let sim = simulate(4, &[(0, 0, 4)]);
    assert_eq!(end(&sim, 0), 4);
    assert_eq!(waiting(&sim, 0), 0);
}

#[test]
fn test_two_equal_processes() {
    let sim = simulate(4, &[(0, 0, 4), (1, 0, 4)]);
    assert_eq!((end(&sim, 0), end(&sim, 1)), (4, 8));
    assert_eq!((waiting(&sim, 0), waiting(&sim, 1)), (0, 4));
}

#[test]
fn test_two_processes_without_overlap() {
    let sim = simulate(4, &[(0, 0, 5), (1, 0, 3)]);
    assert_eq!((end(&sim, 0), end(&sim, 1)), (8, 7));
    assert_eq!((waiting(&sim, 0), waiting(&sim, 1)), (3, 4));
}

#[test]
fn test_three_processes_round_robin_order() {
    let sim = simulate(2, &[(0, 0, 3), (1, 0, 3), (2, 0, 3)]);

    assert_eq!(dispatch_order(&sim), vec![0, 1, 2, 0, 1, 2]);
    assert_eq!(
        (end(&sim, 0), end(&sim, 1), end(&sim, 2)),
        (7, 8, 9)
    );
    assert_eq!(
        (waiting(&sim, 0), waiting(&sim, 1), waiting(&sim, 2)),
        (4, 5, 6)
    );
}

#[test]
fn test_process_requires_multiple_quanta() {
    let sim = simulate(4, &[(0, 0, 7)]);
    assert_eq!(end(&sim, 0), 7);
    assert_eq!(waiting(&sim, 0), 0);
    assert_eq!(dispatch_order(&sim), vec![0, 0]);
}

#[test]
fn test_waiting_time_accumulation() {
    let sim = simulate(2, &[(0, 0, 4), (1, 0, 2)]);
    assert_eq!(waiting(&sim, 0), 2);
    assert_eq!(waiting(&sim, 1), 2);
}

#[test]
fn test_late_arrival_creates_idle_gap() {
    let sim = simulate(4, &[(0, 0, 2), (1, 3, 2)]);
    assert_eq!(end(&sim, 0), 2);
    assert_eq!(end(&sim, 1), 5);
    assert_eq!(
        sim.timeline(),
        &[
            TimelineEvent::Slice {
                pid: 0,
                start: 0,
                end: 2,
                completed: true
            },
            TimelineEvent::Idle { from: 2, to: 3 },
            TimelineEvent::Slice {
                pid: 1,
                start: 3,
                end: 5,
                completed: true
            },
        ]
    );
}

#[test]
fn test_later_start_jumps_time() {
    let sim = simulate(4, &[(0, 5, 2), (1, 10, 2)]);
    assert_eq!(sim.current_clock(), 12);

    let gaps: Vec<(Ticks, Ticks)> = sim
        .timeline()
        .iter()
        .filter_map(|event| match *event {
            TimelineEvent::Idle { from, to } => Some((from, to)),
            TimelineEvent::Slice { .. } => None,
        })
        .collect();
    assert_eq!(gaps, vec![(0, 5), (7, 10)]);
}

#[test]
fn test_mixed_arrival_times() {
    let sim = simulate(3, &[(0, 0, 5), (1, 2, 4), (2, 5, 2)]);
    assert_eq!(end(&sim, 0), 8);
    assert_eq!(end(&sim, 1), 11);
    assert_eq!(end(&sim, 2), 10);
    assert_eq!(dispatch_order(&sim), vec![0, 1, 0, 2, 1]);
}

#[test]
fn test_arrival_at_slice_end_queues_before_preempted_process() {
    // P1 arrives exactly when P0's quantum expires
    let sim = simulate(2, &[(0, 0, 4), (1, 2, 1)]);
    assert_eq!(dispatch_order(&sim), vec![0, 1, 0]);
    assert_eq!(end(&sim, 1), 3);
    assert_eq!(waiting(&sim, 1), 0);
    assert_eq!(waiting(&sim, 0), 1);
}

#[test]
fn test_equal_arrivals_dispatch_in_pid_order() {
    let sim = simulate(1, &[(5, 0, 1), (3, 0, 1), (4, 0, 1)]);
    assert_eq!(dispatch_order(&sim), vec![3, 4, 5]);
    // Reporting still follows admission order
    let pids: Vec<Pid> = sim.all_processes().iter().map(|p| p.pid).collect();
    assert_eq!(pids, vec![5, 3, 4]);
}

#[test]
fn test_zero_burst_process_ignored() {
    let mut sim = Simulator::new(4).unwrap();
    assert_eq!(sim.admit(0, 0, 0).unwrap(), Admission::Rejected);
    sim.run().unwrap();

    assert_eq!(sim.lookup(0).unwrap_err(), SimError::NotFound(0));
    assert!(sim.all_processes().is_empty());
    assert_eq!(sim.current_clock(), 0);
}

#[test]
fn test_duplicate_pid_rejected() {
    let mut sim = Simulator::new(4).unwrap();
    sim.admit(1, 0, 3).unwrap();
    assert_eq!(sim.admit(1, 2, 5).unwrap_err(), SimError::DuplicatePid(1));
}

#[test]
fn test_completed_records_persist() {
    let sim = simulate(1, &[(0, 0, 1)]);
    let proc = sim.lookup(0).unwrap();
    assert_eq!(proc.remaining_burst, 0);
    assert_eq!(proc.burst, 1);
    assert_eq!(proc.completion_time, Some(1));
}

#[test]
fn test_reset_clears_state() {
    let mut sim = simulate(4, &[(0, 0, 2)]);
    sim.reset();

    assert_eq!(sim.current_clock(), 0);
    assert!(sim.all_processes().is_empty());
    assert!(sim.ready_queue().is_empty());
    assert!(sim.timeline().is_empty());
    assert_eq!(sim.lifecycle(), SimulatorState::Idle);

    // Reusable after reset
    sim.admit(0, 1, 3).unwrap();
    sim.run().unwrap();
    assert_eq!(end(&sim, 0), 4);
}
