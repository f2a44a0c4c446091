/*!
 * Simulator Builder
 * Builder pattern and policy factory for Simulator construction
 */

use super::manager::Simulator;
use crate::config::SimConfig;
use crate::core::types::{Pid, SimResult, Ticks};
use crate::scheduler::{RoundRobinEngine, SchedulerPolicy, SchedulingStrategy, TimeQuantum};
use crate::workload::{ProcessSpec, Workload};

/// Builder for Simulator
#[derive(Debug, Default)]
pub struct SimulatorBuilder {
    policy: SchedulerPolicy,
    quantum: Option<Ticks>,
    processes: Vec<ProcessSpec>,
}

impl SimulatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take policy and quantum from a config
    pub fn with_config(mut self, config: &SimConfig) -> Self {
        self.policy = config.policy;
        self.quantum = Some(config.quantum.as_ticks());
        self
    }

    pub fn with_policy(mut self, policy: SchedulerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Raw quantum; validated in `build()`
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = Some(quantum);
        self
    }

    pub fn with_process(mut self, pid: Pid, arrival: Ticks, burst: Ticks) -> Self {
        self.processes.push(ProcessSpec {
            pid,
            arrival,
            burst,
        });
        self
    }

    /// Queue every process of a workload, plus its quantum if it sets one
    pub fn with_workload(mut self, workload: &Workload) -> Self {
        if let Some(quantum) = workload.quantum {
            self.quantum = Some(quantum.as_ticks());
        }
        self.processes.extend(workload.processes.iter().copied());
        self
    }

    /// Build the simulator and admit queued processes in order
    pub fn build(self) -> SimResult<Simulator> {
        let quantum = match self.quantum {
            Some(ticks) => TimeQuantum::new(ticks)?,
            None => TimeQuantum::default(),
        };

        let strategy: Box<dyn SchedulingStrategy> = match self.policy {
            SchedulerPolicy::RoundRobin => Box::new(RoundRobinEngine::new(quantum)),
        };

        let mut simulator = Simulator::with_strategy(strategy);
        for spec in self.processes {
            simulator.admit(spec.pid, spec.arrival, spec.burst)?;
        }
        Ok(simulator)
    }
}

/// Simulator for `policy` with the default quantum
pub fn simulator_factory(policy: SchedulerPolicy) -> Simulator {
    let strategy: Box<dyn SchedulingStrategy> = match policy {
        SchedulerPolicy::RoundRobin => Box::new(RoundRobinEngine::new(TimeQuantum::default())),
    };
    Simulator::with_strategy(strategy)
}
