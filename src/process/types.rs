/*!
 * Process Types
 * Process records and admission outcomes
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// Process record with its mutable runtime state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Ticks,
    /// Original service requirement, never mutated
    pub burst: Ticks,
    pub remaining_burst: Ticks,
    pub waiting_time: Ticks,
    /// `None` until the process finishes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<Ticks>,
}

impl Process {
    pub fn new(pid: Pid, arrival_time: Ticks, burst: Ticks) -> Self {
        Self {
            pid,
            arrival_time,
            burst,
            remaining_burst: burst,
            waiting_time: 0,
            completion_time: None,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }

    /// Completion minus arrival, once finished
    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.completion_time.map(|end| end - self.arrival_time)
    }

    /// Run one tick of CPU time; returns true when the burst is exhausted
    pub(crate) fn consume_tick(&mut self) -> bool {
        debug_assert!(
            self.remaining_burst > 0,
            "Process {} dispatched with no remaining burst",
            self.pid
        );
        self.remaining_burst -= 1;
        self.remaining_burst == 0
    }

    /// Fix the completion time; set exactly once
    pub(crate) fn mark_completed(&mut self, now: Ticks) {
        debug_assert_eq!(self.remaining_burst, 0);
        debug_assert!(
            self.completion_time.is_none(),
            "Process {} completed twice",
            self.pid
        );
        self.completion_time = Some(now);
    }
}

/// Outcome of an admission request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Admission {
    /// Record created
    Admitted,
    /// Zero-burst process discarded; no record exists
    Rejected,
}
