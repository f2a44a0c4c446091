/*!
 * Workload Files
 * JSON description of the processes fed to a simulation
 */

use crate::core::types::{Pid, SimResult, Ticks};
use crate::scheduler::TimeQuantum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// One process to admit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: Pid,
    #[serde(default)]
    pub arrival: Ticks,
    pub burst: Ticks,
}

/// A set of processes plus an optional quantum override
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<TimeQuantum>,
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let workload = Self::from_json(&fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            processes = workload.processes.len(),
            "Loaded workload"
        );
        Ok(workload)
    }

    /// Three staggered arrivals, quantum 3
    pub fn demo() -> Self {
        Self {
            quantum: TimeQuantum::new(3).ok(),
            processes: vec![
                ProcessSpec {
                    pid: 0,
                    arrival: 0,
                    burst: 5,
                },
                ProcessSpec {
                    pid: 1,
                    arrival: 2,
                    burst: 4,
                },
                ProcessSpec {
                    pid: 2,
                    arrival: 5,
                    burst: 2,
                },
            ],
        }
    }
}
