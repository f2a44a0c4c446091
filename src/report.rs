/*!
 * Reports
 * Tabular, timeline and JSON views of a finished simulation
 */

use crate::core::limits::REPORT_COLUMN_WIDTH;
use crate::core::types::{Pid, SimResult};
use crate::process::{Process, ProcessTable};
use crate::scheduler::{RunStats, TimelineEvent};
use crate::simulator::Simulator;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt::Write;

const BANNER: &str =
    "      ==========================Process========================\n";

/// Everything a caller may want to persist about a run
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub stats: &'a RunStats,
    pub processes: &'a [Process],
    pub timeline: &'a [TimelineEvent],
}

impl<'a> Report<'a> {
    pub fn new(simulator: &'a Simulator, stats: &'a RunStats) -> Self {
        Self {
            stats,
            processes: simulator.all_processes(),
            timeline: simulator.timeline(),
        }
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn header() -> String {
    format!(
        "{}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}\n",
        BANNER,
        "PID",
        "Arrival",
        "End",
        "Burst",
        "Waiting",
        "Turnaround",
        w = REPORT_COLUMN_WIDTH
    )
}

fn push_row(out: &mut String, proc: &Process) {
    let end = proc
        .completion_time
        .map_or_else(|| "-".to_string(), |t| t.to_string());
    let turnaround = proc
        .turnaround_time()
        .map_or_else(|| "-".to_string(), |t| t.to_string());
    let _ = writeln!(
        out,
        "{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}",
        proc.pid,
        proc.arrival_time,
        end,
        proc.burst,
        proc.waiting_time,
        turnaround,
        w = REPORT_COLUMN_WIDTH
    );
}

/// One row per process, in the order given
pub fn render_table(processes: &[Process]) -> String {
    let mut out = header();
    for proc in processes {
        push_row(&mut out, proc);
    }
    out
}

/// One row per queued process, front of the queue first
pub fn render_queue(table: &ProcessTable, queue: &VecDeque<Pid>) -> String {
    let mut out = header();
    for proc in queue.iter().filter_map(|&pid| table.lookup(pid).ok()) {
        push_row(&mut out, proc);
    }
    out
}

/// Compact Gantt line, e.g. `[0-3 P0] [3-6 P1] [6-8 idle]`
pub fn render_timeline(timeline: &[TimelineEvent]) -> String {
    timeline
        .iter()
        .map(|event| match *event {
            TimelineEvent::Slice { pid, start, end, .. } => format!("[{start}-{end} P{pid}]"),
            TimelineEvent::Idle { from, to } => format!("[{from}-{to} idle]"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable summary of the aggregate statistics
pub fn render_stats(stats: &RunStats) -> String {
    let quantum = stats
        .quantum
        .map_or_else(|| "-".to_string(), |q| q.to_string());
    format!(
        "policy={} quantum={} final_clock={} dispatches={} preemptions={} idle_ticks={}\n\
         mean_waiting={:.2} mean_turnaround={:.2}\n",
        stats.policy,
        quantum,
        stats.final_clock,
        stats.dispatches,
        stats.preemptions,
        stats.idle_ticks,
        stats.mean_waiting,
        stats.mean_turnaround
    )
}
