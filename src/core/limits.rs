/*!
 * Simulation Limits and Constants
 *
 * Defaults and environment knobs shared by the config layer, the engine and
 * the CLI driver.
 */

use super::types::Ticks;

// =============================================================================
// SCHEDULING
// =============================================================================

/// Default round-robin time quantum (ticks)
/// Matches the quantum handed out by the policy factory
pub const DEFAULT_QUANTUM: Ticks = 4;

/// Smallest legal quantum; a zero quantum would never make progress
pub const MIN_QUANTUM: Ticks = 1;

// =============================================================================
// REPORTING
// =============================================================================

/// Column width of the tabular process report
pub const REPORT_COLUMN_WIDTH: usize = 12;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Overrides the configured quantum
pub const ENV_QUANTUM: &str = "RR_SIM_QUANTUM";

/// Overrides the scheduling policy
pub const ENV_POLICY: &str = "RR_SIM_POLICY";

/// Switches tracing output to JSON ("1" or "true")
pub const ENV_TRACE_JSON: &str = "RR_SIM_TRACE_JSON";
