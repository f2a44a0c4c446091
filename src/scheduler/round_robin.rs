/*!
 * Round-Robin Engine
 * Fixed-quantum preemptive round-robin over a process table
 */

use super::state::{ArrivalSchedule, RunState};
use super::traits::SchedulingStrategy;
use super::types::{SchedulerPolicy, TimeQuantum};
use crate::core::types::{Pid, SimResult, Ticks};
use crate::process::{Process, ProcessTable};
use tracing::{debug, info};

/// Round-robin scheduling strategy
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinEngine {
    quantum: TimeQuantum,
}

impl RoundRobinEngine {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }

    /// Build from a raw tick count; zero is rejected
    pub fn with_ticks(quantum: Ticks) -> SimResult<Self> {
        Ok(Self::new(TimeQuantum::new(quantum)?))
    }

    /// Give `pid` the CPU for up to one quantum
    fn dispatch(
        &self,
        pid: Pid,
        table: &mut ProcessTable,
        state: &mut RunState,
        arrivals: &mut ArrivalSchedule,
    ) {
        let start = state.clock();
        let grant = self
            .quantum
            .as_ticks()
            .min(process(table, pid).remaining_burst);

        let mut completed = false;
        for _ in 0..grant {
            completed = process(table, pid).consume_tick();
            state.tick();
            // Arrivals during the slice queue ahead of the preempted process
            arrivals.admit_due(state);
        }

        let end = state.clock();
        if completed {
            process(table, pid).mark_completed(end);
            debug!(pid, start, end, "Process completed");
        } else {
            state.enqueue(pid);
            debug!(
                pid,
                start,
                end,
                remaining = process(table, pid).remaining_burst,
                "Process preempted"
            );
        }
        state.record_slice(pid, start, completed);

        charge_waiting(pid, start, end, table, state);
    }
}

impl SchedulingStrategy for RoundRobinEngine {
    fn policy(&self) -> SchedulerPolicy {
        SchedulerPolicy::RoundRobin
    }

    fn quantum(&self) -> Option<TimeQuantum> {
        Some(self.quantum)
    }

    fn run(&mut self, table: &mut ProcessTable, state: &mut RunState) -> SimResult<()> {
        let mut arrivals = ArrivalSchedule::new(table.arrival_schedule());
        info!(
            processes = table.len(),
            quantum = self.quantum.as_ticks(),
            "Round-robin run started"
        );

        loop {
            arrivals.admit_due(state);

            let Some(pid) = state.dequeue() else {
                match arrivals.next_arrival() {
                    Some(arrival) => {
                        state.idle_until(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            self.dispatch(pid, table, state, &mut arrivals);
        }

        debug_assert!(arrivals.is_exhausted());
        debug_assert!(table.all_completed());
        info!(clock = state.clock(), "Round-robin run finished");
        Ok(())
    }
}

/// Dispatched PIDs always come from the table's own schedule
fn process(table: &mut ProcessTable, pid: Pid) -> &mut Process {
    table
        .lookup_mut(pid)
        .expect("dispatched process missing from process table")
}

/// Charge every queued process (other than the one that just ran) for the
/// part of `[start, end)` it spent in the queue. A process admitted mid-slice
/// entered the queue exactly at its arrival time.
fn charge_waiting(
    running: Pid,
    start: Ticks,
    end: Ticks,
    table: &mut ProcessTable,
    state: &RunState,
) {
    for &pid in state.ready_queue() {
        if pid == running {
            continue;
        }
        let proc = process(table, pid);
        let queued_since = start.max(proc.arrival_time);
        proc.waiting_time += end - queued_since;
    }
}
