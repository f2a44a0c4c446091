/*!
 * Simulator Configuration
 * Defaults, environment overrides and workload overlays
 */

use crate::core::errors::SimError;
use crate::core::limits::{ENV_POLICY, ENV_QUANTUM, ENV_TRACE_JSON};
use crate::core::types::{SimResult, Ticks};
use crate::scheduler::{SchedulerPolicy, TimeQuantum};
use crate::workload::Workload;
use serde::{Deserialize, Serialize};

/// Simulation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub quantum: TimeQuantum,
    pub policy: SchedulerPolicy,
    pub trace_json: bool,
}

impl SimConfig {
    /// Defaults overlaid with `RR_SIM_*` environment variables
    pub fn from_env() -> SimResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the environment, in production)
    pub fn with_overrides<F>(mut self, lookup: F) -> SimResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_QUANTUM) {
            let ticks: Ticks = raw.trim().parse().map_err(|_| {
                SimError::InvalidConfiguration(format!("{ENV_QUANTUM}={raw} is not an integer"))
            })?;
            self.quantum = TimeQuantum::new(ticks)?;
        }

        if let Some(raw) = lookup(ENV_POLICY) {
            self.policy = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_TRACE_JSON) {
            self.trace_json = raw == "1" || raw == "true";
        }

        Ok(self)
    }

    /// A workload's own quantum wins over the environment
    pub fn with_workload(mut self, workload: &Workload) -> Self {
        if let Some(quantum) = workload.quantum {
            self.quantum = quantum;
        }
        self
    }
}
