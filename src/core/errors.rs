/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulator errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(sim::invalid_configuration),
        help("The time quantum must be at least 1 tick and the policy must be round_robin.")
    )]
    InvalidConfiguration(String),

    #[error("Process {0} already admitted")]
    #[diagnostic(
        code(sim::duplicate_pid),
        help("Every PID must be unique within one simulation run.")
    )]
    DuplicatePid(Pid),

    #[error("Process {0} not found")]
    #[diagnostic(
        code(sim::not_found),
        help("The process was never admitted. Zero-burst processes are discarded on admission.")
    )]
    NotFound(Pid),

    #[error("Invalid simulator state: {0}")]
    #[diagnostic(
        code(sim::invalid_state),
        help("A simulator runs once. Call reset() before admitting a new workload.")
    )]
    InvalidState(String),

    #[error("Workload error: {0}")]
    #[diagnostic(
        code(sim::workload),
        help("Check that the workload file exists and is valid JSON.")
    )]
    Workload(String),
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Workload(err.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Workload(err.to_string())
    }
}
