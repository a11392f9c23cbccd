//! Per-job observation signal.
//!
//! Each job contributes one value. A job with remaining operations reports
//! when the machine of its next operation becomes free; an exhausted job
//! reports its own finish time, frozen. Both cases share one channel in the
//! numeric vector handed to a policy.

use serde::Serialize;

use crate::models::JobSpec;

use super::SimulationState;

/// Observation value of a single job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobSignal {
    /// The job still has operations; its next one needs `machine`.
    Pending {
        /// Machine of the next operation.
        machine: usize,
        /// When that machine becomes free.
        machine_free_at: i64,
    },
    /// The job has no operations left.
    Finished {
        /// Finish time of the job's last operation.
        finished_at: i64,
    },
}

impl JobSignal {
    /// The value placed in the observation vector.
    pub fn value(&self) -> i64 {
        match *self {
            JobSignal::Pending {
                machine_free_at, ..
            } => machine_free_at,
            JobSignal::Finished { finished_at } => finished_at,
        }
    }

    /// Whether the job has no operations left.
    pub fn is_finished(&self) -> bool {
        matches!(self, JobSignal::Finished { .. })
    }
}

/// Observation of the whole problem, indexed by job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    signals: Vec<JobSignal>,
}

impl Observation {
    /// Builds the observation from state. Pure; does not mutate anything.
    pub fn from_state(spec: &JobSpec, state: &SimulationState) -> Self {
        let signals = spec
            .jobs()
            .iter()
            .enumerate()
            .map(|(j, job)| match job.operation(state.job_cursor[j]) {
                Some(op) => JobSignal::Pending {
                    machine: op.machine,
                    machine_free_at: state.machine_free_at[op.machine],
                },
                None => JobSignal::Finished {
                    finished_at: state.job_free_at[j],
                },
            })
            .collect();
        Self { signals }
    }

    /// Per-job signals.
    pub fn signals(&self) -> &[JobSignal] {
        &self.signals
    }

    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Whether the observation covers no jobs.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Integer values, one per job.
    pub fn values(&self) -> Vec<i64> {
        self.signals.iter().map(JobSignal::value).collect()
    }

    /// Numeric vector for a policy (float32 box of length `num_jobs`).
    pub fn to_vector(&self) -> Vec<f32> {
        self.signals.iter().map(|s| s.value() as f32).collect()
    }
}
