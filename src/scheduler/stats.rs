/*!
 * Run Statistics
 * Aggregate metrics derived from a finished run
 */

use super::state::{RunState, TimelineEvent};
use super::types::SchedulerPolicy;
use crate::core::types::Ticks;
use crate::process::ProcessTable;
use serde::{Deserialize, Serialize};

/// Summary of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RunStats {
    pub policy: SchedulerPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<Ticks>,
    pub final_clock: Ticks,
    pub processes: usize,
    pub dispatches: u64,
    pub preemptions: u64,
    pub idle_jumps: u64,
    pub idle_ticks: Ticks,
    pub mean_waiting: f64,
    pub mean_turnaround: f64,
}

impl RunStats {
    pub fn collect(
        policy: SchedulerPolicy,
        quantum: Option<Ticks>,
        table: &ProcessTable,
        state: &RunState,
    ) -> Self {
        let mut stats = Self {
            policy,
            quantum,
            final_clock: state.clock(),
            processes: table.len(),
            dispatches: 0,
            preemptions: 0,
            idle_jumps: 0,
            idle_ticks: 0,
            mean_waiting: 0.0,
            mean_turnaround: 0.0,
        };

        for event in state.timeline() {
            match event {
                TimelineEvent::Slice { completed, .. } => {
                    stats.dispatches += 1;
                    if !completed {
                        stats.preemptions += 1;
                    }
                }
                TimelineEvent::Idle { .. } => {
                    stats.idle_jumps += 1;
                    stats.idle_ticks += event.duration();
                }
            }
        }

        if !table.is_empty() {
            let count = table.len() as f64;
            let waiting: Ticks = table.all().iter().map(|p| p.waiting_time).sum();
            let turnaround: Ticks = table
                .all()
                .iter()
                .filter_map(|p| p.turnaround_time())
                .sum();
            stats.mean_waiting = waiting as f64 / count;
            stats.mean_turnaround = turnaround as f64 / count;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{RoundRobinEngine, SchedulingStrategy};

    #[test]
    fn test_collect_counts_preemptions_and_idle() {
        let mut table = ProcessTable::new();
        table.admit(0, 0, 5).unwrap();
        table.admit(1, 0, 3).unwrap();
        table.admit(2, 12, 1).unwrap();

        let mut state = RunState::new();
        let mut engine = RoundRobinEngine::with_ticks(4).unwrap();
        engine.run(&mut table, &mut state).unwrap();

        let stats = RunStats::collect(SchedulerPolicy::RoundRobin, Some(4), &table, &state);
        // P0 [0,4) P1 [4,7) P0 [7,8) idle [8,12) P2 [12,13)
        assert_eq!(stats.dispatches, 4);
        assert_eq!(stats.preemptions, 1);
        assert_eq!(stats.idle_jumps, 1);
        assert_eq!(stats.idle_ticks, 4);
        assert_eq!(stats.final_clock, 13);
        assert!((stats.mean_waiting - 7.0 / 3.0).abs() < 1e-9);
        assert!((stats.mean_turnaround - 16.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_collect_on_empty_table() {
        let stats = RunStats::collect(
            SchedulerPolicy::RoundRobin,
            None,
            &ProcessTable::new(),
            &RunState::new(),
        );
        assert_eq!(stats.processes, 0);
        assert_eq!(stats.mean_waiting, 0.0);
    }
}
