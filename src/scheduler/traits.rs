/*!
 * Scheduler Traits
 * Interface implemented by every scheduling policy
 */

use super::state::RunState;
use super::types::{SchedulerPolicy, TimeQuantum};
use crate::core::types::SimResult;
use crate::process::ProcessTable;
use std::fmt::Debug;

/// A scheduling discipline that drives a table to completion
///
/// The strategy holds the only mutable borrow of the table for the duration
/// of `run`; new policies plug in here without touching `ProcessTable`.
pub trait SchedulingStrategy: Debug + Send + Sync {
    /// Policy this strategy implements
    fn policy(&self) -> SchedulerPolicy;

    /// Fixed time slice, for policies that use one
    fn quantum(&self) -> Option<TimeQuantum> {
        None
    }

    /// Run every admitted process to completion
    fn run(&mut self, table: &mut ProcessTable, state: &mut RunState) -> SimResult<()>;
}
