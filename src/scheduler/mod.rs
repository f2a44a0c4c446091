/*!
 * Scheduler Module
 * Scheduling strategies, run state and statistics
 */

pub mod round_robin;
pub mod state;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export public API
pub use round_robin::RoundRobinEngine;
pub use state::{ArrivalSchedule, RunState, TimelineEvent};
pub use stats::RunStats;
pub use traits::SchedulingStrategy;
pub use types::{SchedulerPolicy, TimeQuantum};
