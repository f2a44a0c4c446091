/*!
 * Simulator Module
 * Facade that owns the process table, the run state and a strategy
 */

pub mod builder;
pub mod manager;

pub use builder::{simulator_factory, SimulatorBuilder};
pub use manager::{Simulator, SimulatorState};
