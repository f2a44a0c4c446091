/*!
 * Process Table
 * Arena of process records indexed by PID
 */

use super::types::{Admission, Process};
use crate::core::errors::SimError;
use crate::core::types::{Pid, SimResult, Ticks};
use ahash::AHashMap;
use tracing::{debug, warn};

/// Authoritative store of process records
///
/// Records live in a contiguous arena in admission order; `index` maps a PID
/// to its slot for O(1) lookup.
#[derive(Debug, Default, Clone)]
pub struct ProcessTable {
    processes: Vec<Process>,
    index: AHashMap<Pid, usize>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a process; zero-burst processes are discarded
    pub fn admit(&mut self, pid: Pid, arrival_time: Ticks, burst: Ticks) -> SimResult<Admission> {
        if burst == 0 {
            warn!(pid, arrival_time, "Ignored process with zero burst");
            return Ok(Admission::Rejected);
        }

        if self.index.contains_key(&pid) {
            return Err(SimError::DuplicatePid(pid));
        }

        self.index.insert(pid, self.processes.len());
        self.processes.push(Process::new(pid, arrival_time, burst));
        debug!(pid, arrival_time, burst, "Admitted process");

        Ok(Admission::Admitted)
    }

    pub fn lookup(&self, pid: Pid) -> SimResult<&Process> {
        let slot = *self.index.get(&pid).ok_or(SimError::NotFound(pid))?;
        Ok(&self.processes[slot])
    }

    pub fn lookup_mut(&mut self, pid: Pid) -> SimResult<&mut Process> {
        let slot = *self.index.get(&pid).ok_or(SimError::NotFound(pid))?;
        Ok(&mut self.processes[slot])
    }

    /// All records in admission order
    pub fn all(&self) -> &[Process] {
        &self.processes
    }

    pub fn clear(&mut self) {
        self.processes.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.index.contains_key(&pid)
    }

    pub fn all_completed(&self) -> bool {
        self.processes.iter().all(Process::is_completed)
    }

    /// (arrival time, pid) pairs in ascending order
    pub fn arrival_schedule(&self) -> Vec<(Ticks, Pid)> {
        let mut schedule: Vec<(Ticks, Pid)> = self
            .processes
            .iter()
            .map(|p| (p.arrival_time, p.pid))
            .collect();
        schedule.sort_unstable();
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_and_lookup() {
        let mut table = ProcessTable::new();
        assert_eq!(table.admit(1, 0, 4).unwrap(), Admission::Admitted);

        let proc = table.lookup(1).unwrap();
        assert_eq!(proc.burst, 4);
        assert_eq!(proc.remaining_burst, 4);
        assert_eq!(proc.completion_time, None);
    }

    #[test]
    fn test_zero_burst_rejected() {
        let mut table = ProcessTable::new();
        assert_eq!(table.admit(0, 0, 0).unwrap(), Admission::Rejected);
        assert!(table.is_empty());
        assert_eq!(table.lookup(0), Err(SimError::NotFound(0)));
    }

    #[test]
    fn test_duplicate_pid() {
        let mut table = ProcessTable::new();
        table.admit(5, 0, 1).unwrap();
        assert_eq!(table.admit(5, 3, 2), Err(SimError::DuplicatePid(5)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(5).unwrap().arrival_time, 0);
    }

    #[test]
    fn test_rejected_pid_can_be_admitted_later() {
        let mut table = ProcessTable::new();
        table.admit(2, 0, 0).unwrap();
        assert_eq!(table.admit(2, 0, 3).unwrap(), Admission::Admitted);
    }

    #[test]
    fn test_all_preserves_admission_order() {
        let mut table = ProcessTable::new();
        table.admit(9, 5, 1).unwrap();
        table.admit(2, 0, 1).unwrap();
        table.admit(4, 0, 1).unwrap();

        let pids: Vec<Pid> = table.all().iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![9, 2, 4]);
    }

    #[test]
    fn test_arrival_schedule_breaks_ties_by_pid() {
        let mut table = ProcessTable::new();
        table.admit(9, 5, 1).unwrap();
        table.admit(4, 0, 1).unwrap();
        table.admit(2, 0, 1).unwrap();
        table.admit(7, 3, 1).unwrap();

        assert_eq!(
            table.arrival_schedule(),
            vec![(0, 2), (0, 4), (3, 7), (5, 9)]
        );
    }

    #[test]
    fn test_lookup_mut_and_clear() {
        let mut table = ProcessTable::new();
        table.admit(1, 0, 2).unwrap();
        table.lookup_mut(1).unwrap().waiting_time = 3;
        assert_eq!(table.lookup(1).unwrap().waiting_time, 3);

        table.clear();
        assert!(table.is_empty());
        assert!(!table.contains(1));
        assert_eq!(table.lookup(1), Err(SimError::NotFound(1)));
    }
}
