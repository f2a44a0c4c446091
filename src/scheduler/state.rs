/*!
 * Run State
 * Simulated clock, ready queue, arrival schedule and execution timeline
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// One entry of the execution trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineEvent {
    /// `pid` held the CPU over `[start, end)`
    Slice {
        pid: Pid,
        start: Ticks,
        end: Ticks,
        completed: bool,
    },
    /// Nothing runnable over `[from, to)`; the clock jumped
    Idle { from: Ticks, to: Ticks },
}

impl TimelineEvent {
    pub fn duration(&self) -> Ticks {
        match *self {
            Self::Slice { start, end, .. } => end - start,
            Self::Idle { from, to } => to - from,
        }
    }
}

/// Mutable state shared by the simulator and its strategy
#[derive(Debug, Default, Clone)]
pub struct RunState {
    clock: Ticks,
    ready_queue: VecDeque<Pid>,
    timeline: Vec<TimelineEvent>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clock(&self) -> Ticks {
        self.clock
    }

    pub fn ready_queue(&self) -> &VecDeque<Pid> {
        &self.ready_queue
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        &self.timeline
    }

    pub fn enqueue(&mut self, pid: Pid) {
        debug_assert!(
            !self.ready_queue.contains(&pid),
            "Process {pid} already in ready queue"
        );
        self.ready_queue.push_back(pid);
    }

    pub fn dequeue(&mut self) -> Option<Pid> {
        self.ready_queue.pop_front()
    }

    /// Advance the clock by CPU time consumed
    pub fn tick(&mut self) {
        self.clock += 1;
    }

    /// Jump over an idle gap straight to `to`
    pub fn idle_until(&mut self, to: Ticks) {
        debug_assert!(to > self.clock, "Idle jump must move the clock forward");
        debug!(from = self.clock, to, "CPU idle, jumping to next arrival");
        self.timeline.push(TimelineEvent::Idle {
            from: self.clock,
            to,
        });
        self.clock = to;
    }

    pub fn record_slice(&mut self, pid: Pid, start: Ticks, completed: bool) {
        self.timeline.push(TimelineEvent::Slice {
            pid,
            start,
            end: self.clock,
            completed,
        });
    }

    pub fn reset(&mut self) {
        self.clock = 0;
        self.ready_queue.clear();
        self.timeline.clear();
    }
}

/// Processes ordered by (arrival time, pid), with a cursor marking how many
/// have already entered the ready queue
#[derive(Debug, Clone)]
pub struct ArrivalSchedule {
    entries: Vec<(Ticks, Pid)>,
    next_to_admit: usize,
}

impl ArrivalSchedule {
    /// `entries` must already be sorted
    pub fn new(entries: Vec<(Ticks, Pid)>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0] <= w[1]));
        Self {
            entries,
            next_to_admit: 0,
        }
    }

    /// Move every process that has arrived by now into the ready queue
    pub fn admit_due(&mut self, state: &mut RunState) {
        // Contiguous, since entries are sorted
        while let Some(&(arrival, pid)) = self.entries.get(self.next_to_admit) {
            if arrival > state.clock() {
                break;
            }
            state.enqueue(pid);
            self.next_to_admit += 1;
        }
    }

    /// Arrival time of the next process not yet admitted
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.entries.get(self.next_to_admit).map(|&(arrival, _)| arrival)
    }

    pub fn is_exhausted(&self) -> bool {
        self.next_to_admit >= self.entries.len()
    }
}
