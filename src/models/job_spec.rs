//! Immutable job-shop problem definition.
//!
//! A `JobSpec` is built once from raw `(machine_id, duration)` pairs and
//! never mutated. Construction runs [`validate_jobs`](crate::validation::validate_jobs),
//! so a value of this type always satisfies:
//! - at least one job, and every job has at least one operation,
//! - every duration is non-negative,
//! - every machine id is in `[0, num_machines)`,
//! - the total work fits in `i64` (no finish time can overflow).

use crate::error::{JobShopError, Result};
use crate::validation::validate_jobs;

use super::{Job, Operation};

/// Raw job data: outer index = job, inner = `(machine_id, duration)` pairs.
pub type RawJobs = Vec<Vec<(i64, i64)>>;

/// A validated job-shop problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    jobs: Vec<Job>,
    num_machines: usize,
}

impl JobSpec {
    /// Builds a problem, deriving `num_machines` as `1 + max(machine_id)`.
    ///
    /// # Errors
    /// [`JobShopError::Invalid`] listing every integrity fault found.
    pub fn from_pairs(raw: RawJobs) -> Result<Self> {
        Self::build(raw, None)
    }

    /// Builds a problem with a declared machine count.
    ///
    /// Every machine id must be below `num_machines`; machines that no
    /// operation references are allowed (they stay idle).
    pub fn with_machine_count(raw: RawJobs, num_machines: usize) -> Result<Self> {
        Self::build(raw, Some(num_machines))
    }

    fn build(raw: RawJobs, declared_machines: Option<usize>) -> Result<Self> {
        validate_jobs(&raw, declared_machines).map_err(JobShopError::Invalid)?;

        let derived = raw
            .iter()
            .flatten()
            .map(|&(machine, _)| machine as usize + 1)
            .max()
            .unwrap_or(0);
        let num_machines = declared_machines.unwrap_or(derived);

        let jobs = raw
            .into_iter()
            .map(|ops| {
                Job::new(
                    ops.into_iter()
                        .map(|(machine, duration)| Operation::new(machine as usize, duration))
                        .collect(),
                )
            })
            .collect();

        Ok(Self { jobs, num_machines })
    }

    /// All jobs, indexed by job id.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// The job with the given id, if any.
    pub fn job(&self, job: usize) -> Option<&Job> {
        self.jobs.get(job)
    }

    /// Number of jobs.
    pub fn num_jobs(&self) -> usize {
        self.jobs.len()
    }

    /// Number of machines.
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Number of operations across all jobs.
    pub fn total_operations(&self) -> usize {
        self.jobs.iter().map(Job::len).sum()
    }

    /// Sum of all operation durations.
    pub fn total_work(&self) -> i64 {
        self.jobs.iter().map(Job::total_duration).sum()
    }

    /// Sum of operation durations per machine.
    pub fn machine_loads(&self) -> Vec<i64> {
        let mut loads = vec![0; self.num_machines];
        for op in self.jobs.iter().flat_map(|j| j.operations()) {
            loads[op.machine] += op.duration;
        }
        loads
    }

    /// The problem back in its raw pair form.
    pub fn to_pairs(&self) -> RawJobs {
        self.jobs
            .iter()
            .map(|j| j.operations().iter().map(Operation::as_pair).collect())
            .collect()
    }
}
