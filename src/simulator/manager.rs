/*!
 * Simulator
 * Admission, one-shot run, lookup and reset over a single workload
 */

use super::builder::SimulatorBuilder;
use crate::core::errors::SimError;
use crate::core::types::{Pid, SimResult, Ticks};
use crate::process::{Admission, Process, ProcessTable};
use crate::scheduler::{
    RoundRobinEngine, RunState, RunStats, SchedulerPolicy, SchedulingStrategy, TimelineEvent,
};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::info;

/// Simulator lifecycle; `reset()` is the only way back to `Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatorState {
    Idle,
    Running,
    Terminated,
}

/// Discrete-event CPU scheduling simulator
#[derive(Debug)]
pub struct Simulator {
    table: ProcessTable,
    state: RunState,
    strategy: Box<dyn SchedulingStrategy>,
    lifecycle: SimulatorState,
}

impl Simulator {
    /// Round-robin simulator with the given quantum
    pub fn new(quantum: Ticks) -> SimResult<Self> {
        Ok(Self::with_strategy(Box::new(RoundRobinEngine::with_ticks(
            quantum,
        )?)))
    }

    pub fn with_strategy(strategy: Box<dyn SchedulingStrategy>) -> Self {
        info!(policy = %strategy.policy(), "Simulator initialized");
        Self {
            table: ProcessTable::new(),
            state: RunState::new(),
            strategy,
            lifecycle: SimulatorState::Idle,
        }
    }

    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::new()
    }

    /// Add a process before the run; zero-burst processes are discarded
    pub fn admit(&mut self, pid: Pid, arrival_time: Ticks, burst: Ticks) -> SimResult<Admission> {
        if self.lifecycle != SimulatorState::Idle {
            return Err(SimError::InvalidState(format!(
                "cannot admit process {} while {:?}",
                pid, self.lifecycle
            )));
        }
        self.table.admit(pid, arrival_time, burst)
    }

    /// Run every admitted process to completion
    pub fn run(&mut self) -> SimResult<RunStats> {
        if self.lifecycle != SimulatorState::Idle {
            return Err(SimError::InvalidState(format!(
                "run() called while {:?}",
                self.lifecycle
            )));
        }

        self.lifecycle = SimulatorState::Running;
        let result = self.strategy.run(&mut self.table, &mut self.state);
        self.lifecycle = SimulatorState::Terminated;
        result?;

        let stats = RunStats::collect(
            self.strategy.policy(),
            self.strategy.quantum().map(|q| q.as_ticks()),
            &self.table,
            &self.state,
        );
        info!(
            final_clock = stats.final_clock,
            processes = stats.processes,
            dispatches = stats.dispatches,
            "Simulation finished"
        );
        Ok(stats)
    }

    pub fn lookup(&self, pid: Pid) -> SimResult<&Process> {
        self.table.lookup(pid)
    }

    /// All admitted processes, admission order
    pub fn all_processes(&self) -> &[Process] {
        self.table.all()
    }

    pub fn current_clock(&self) -> Ticks {
        self.state.clock()
    }

    pub fn ready_queue(&self) -> &VecDeque<Pid> {
        self.state.ready_queue()
    }

    pub fn timeline(&self) -> &[TimelineEvent] {
        self.state.timeline()
    }

    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn policy(&self) -> SchedulerPolicy {
        self.strategy.policy()
    }

    pub fn lifecycle(&self) -> SimulatorState {
        self.lifecycle
    }

    /// Clear processes, queue, clock and timeline
    pub fn reset(&mut self) {
        self.table.clear();
        self.state.reset();
        self.lifecycle = SimulatorState::Idle;
        info!("Simulator reset");
    }
}
