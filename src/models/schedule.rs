//! Schedule (executed operations) model.
//!
//! A schedule records, per job, every operation the simulation has executed,
//! in dispatch order. Within a job this is also operation order. Records are
//! never reordered or aggregated, so a Gantt renderer can read them as-is.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

/// An executed operation: machine and `[start, finish)` interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledOperation {
    /// Machine that processed the operation.
    pub machine: usize,
    /// Start time.
    pub start: i64,
    /// Finish time (`start + duration`).
    pub finish: i64,
}

impl ScheduledOperation {
    /// Creates a record.
    pub fn new(machine: usize, start: i64, finish: i64) -> Self {
        Self {
            machine,
            start,
            finish,
        }
    }

    /// Processing time (`finish - start`).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish - self.start
    }

    /// Whether two half-open intervals `[start, finish)` intersect.
    #[inline]
    pub fn overlaps(&self, other: &ScheduledOperation) -> bool {
        self.start < other.finish && other.start < self.finish
    }
}

/// Executed operations indexed by job id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    jobs: Vec<Vec<ScheduledOperation>>,
}

impl Schedule {
    /// Creates an empty schedule for `num_jobs` jobs.
    pub fn new(num_jobs: usize) -> Self {
        Self {
            jobs: vec![Vec::new(); num_jobs],
        }
    }

    pub(crate) fn record(&mut self, job: usize, op: ScheduledOperation) {
        self.jobs[job].push(op);
    }

    pub(crate) fn clear(&mut self) {
        self.jobs.iter_mut().for_each(Vec::clear);
    }

    /// Number of jobs (rows).
    pub fn num_jobs(&self) -> usize {
        self.jobs.len()
    }

    /// Records of a job in dispatch order. Empty for unknown jobs.
    pub fn job(&self, job: usize) -> &[ScheduledOperation] {
        self.jobs.get(job).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates `(job, records)` rows in job order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[ScheduledOperation])> {
        self.jobs.iter().enumerate().map(|(j, ops)| (j, ops.as_slice()))
    }

    /// Records on a machine across all jobs, sorted by start time.
    pub fn machine(&self, machine: usize) -> Vec<(usize, ScheduledOperation)> {
        let mut ops: Vec<(usize, ScheduledOperation)> = self
            .iter()
            .flat_map(|(j, ops)| ops.iter().map(move |op| (j, *op)))
            .filter(|(_, op)| op.machine == machine)
            .collect();
        ops.sort_by_key(|(_, op)| (op.start, op.finish));
        ops
    }

    /// Total number of executed operations.
    pub fn operation_count(&self) -> usize {
        self.jobs.iter().map(Vec::len).sum()
    }

    /// Whether nothing has been executed.
    pub fn is_empty(&self) -> bool {
        self.operation_count() == 0
    }

    /// Latest finish time across all records (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.jobs
            .iter()
            .flatten()
            .map(|op| op.finish)
            .max()
            .unwrap_or(0)
    }

    /// Completion time of a job's last executed operation.
    pub fn job_completion_time(&self, job: usize) -> Option<i64> {
        self.job(job).last().map(|op| op.finish)
    }

    /// Busy time of a machine.
    pub fn machine_busy_time(&self, machine: usize) -> i64 {
        self.jobs
            .iter()
            .flatten()
            .filter(|op| op.machine == machine)
            .map(ScheduledOperation::duration)
            .sum()
    }

    /// Machine utilization: busy time / horizon.
    ///
    /// Returns `None` if `horizon` is not positive.
    pub fn machine_utilization(&self, machine: usize, horizon: i64) -> Option<f64> {
        if horizon <= 0 {
            return None;
        }
        Some(self.machine_busy_time(machine) as f64 / horizon as f64)
    }

    /// Whether any two records on the same machine, or within the same job, overlap.
    pub fn has_conflicts(&self) -> bool {
        let machines = self
            .jobs
            .iter()
            .flatten()
            .map(|op| op.machine + 1)
            .max()
            .unwrap_or(0);

        let machine_conflict = (0..machines).any(|m| {
            let ops = self.machine(m);
            ops.windows(2).any(|w| w[0].1.overlaps(&w[1].1))
        });
        let job_conflict = self
            .jobs
            .iter()
            .any(|ops| ops.windows(2).any(|w| w[0].overlaps(&w[1])));

        machine_conflict || job_conflict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new(2);
        s.record(0, ScheduledOperation::new(0, 0, 5));
        s.record(0, ScheduledOperation::new(1, 5, 8));
        s.record(1, ScheduledOperation::new(1, 0, 4));
        s.record(1, ScheduledOperation::new(0, 5, 7));
        s
    }

    #[test]
    fn test_schedule_makespan() {
        let s = sample_schedule();
        assert_eq!(s.makespan(), 8);
        assert_eq!(s.operation_count(), 4);
    }

    #[test]
    fn test_job_rows_keep_dispatch_order() {
        let s = sample_schedule();
        let j1 = s.job(1);
        assert_eq!(j1[0].machine, 1);
        assert_eq!(j1[1].machine, 0);
        assert!(s.job(9).is_empty());
    }

    #[test]
    fn test_machine_sorted_by_start() {
        let s = sample_schedule();
        let m0 = s.machine(0);
        assert_eq!(m0.len(), 2);
        assert_eq!(m0[0], (0, ScheduledOperation::new(0, 0, 5)));
        assert_eq!(m0[1], (1, ScheduledOperation::new(0, 5, 7)));
    }

    #[test]
    fn test_completion_and_busy_time() {
        let s = sample_schedule();
        assert_eq!(s.job_completion_time(0), Some(8));
        assert_eq!(s.job_completion_time(1), Some(7));
        assert_eq!(s.machine_busy_time(0), 7);
        assert_eq!(s.machine_busy_time(1), 7);
    }

    #[test]
    fn test_machine_utilization() {
        let s = sample_schedule();
        let util = s.machine_utilization(0, 8).unwrap();
        assert!((util - 0.875).abs() < 1e-10);
        assert!(s.machine_utilization(0, 0).is_none());
    }

    #[test]
    fn test_overlap_is_half_open() {
        let a = ScheduledOperation::new(0, 0, 5);
        let b = ScheduledOperation::new(0, 5, 7);
        let c = ScheduledOperation::new(0, 4, 6);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn test_conflict_detection() {
        let s = sample_schedule();
        assert!(!s.has_conflicts());

        let mut bad = sample_schedule();
        bad.record(1, ScheduledOperation::new(0, 6, 9));
        assert!(bad.has_conflicts());
    }

    #[test]
    fn test_clear_keeps_rows() {
        let mut s = sample_schedule();
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.num_jobs(), 2);
        assert_eq!(s.makespan(), 0);
    }
}
