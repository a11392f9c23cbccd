//! Mutable episode state.

use serde::Serialize;

use crate::models::{JobSpec, Schedule, ScheduledOperation};

/// Per-episode simulation state, owned exclusively by the engine.
///
/// # Invariants
/// - `job_cursor[j]` is in `0..=len(job j)` and only ever grows by one.
/// - `machine_free_at` and `job_free_at` are non-decreasing within an episode.
/// - `schedule.job(j).len() == job_cursor[j]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationState {
    pub(crate) job_cursor: Vec<usize>,
    pub(crate) machine_free_at: Vec<i64>,
    pub(crate) job_free_at: Vec<i64>,
    pub(crate) schedule: Schedule,
}

impl SimulationState {
    /// Fresh state for a problem: all cursors and timelines at zero.
    pub fn new(spec: &JobSpec) -> Self {
        Self {
            job_cursor: vec![0; spec.num_jobs()],
            machine_free_at: vec![0; spec.num_machines()],
            job_free_at: vec![0; spec.num_jobs()],
            schedule: Schedule::new(spec.num_jobs()),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.job_cursor.fill(0);
        self.machine_free_at.fill(0);
        self.job_free_at.fill(0);
        self.schedule.clear();
    }

    /// Applies one executed operation to both timelines and the schedule.
    pub(crate) fn commit(&mut self, job: usize, op: ScheduledOperation) {
        self.machine_free_at[op.machine] = op.finish;
        self.job_free_at[job] = op.finish;
        self.schedule.record(job, op);
        self.job_cursor[job] += 1;
    }

    /// Index of the next operation per job.
    pub fn job_cursor(&self) -> &[usize] {
        &self.job_cursor
    }

    /// Earliest time each machine is available.
    pub fn machine_free_at(&self) -> &[i64] {
        &self.machine_free_at
    }

    /// Earliest time each job is available (finish of its last operation).
    pub fn job_free_at(&self) -> &[i64] {
        &self.job_free_at
    }

    /// Executed operations so far.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Largest job availability time.
    pub fn max_job_free_at(&self) -> i64 {
        self.job_free_at.iter().copied().max().unwrap_or(0)
    }
}
