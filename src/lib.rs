/*!
 * Round-Robin Scheduling Simulator Library
 * Discrete-event simulation of preemptive round-robin CPU scheduling
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod simulator;
pub mod workload;

// Re-exports
pub use config::SimConfig;
pub use crate::core::{Pid, SimError, SimResult, Ticks};
pub use monitoring::init_tracing;
pub use process::{Admission, Process, ProcessTable};
pub use report::Report;
pub use scheduler::{
    RoundRobinEngine, RunState, RunStats, SchedulerPolicy, SchedulingStrategy, TimeQuantum,
    TimelineEvent,
};
pub use simulator::{simulator_factory, Simulator, SimulatorBuilder, SimulatorState};
pub use workload::{ProcessSpec, Workload};
