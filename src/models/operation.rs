//! Operation model.
//!
//! An operation is the smallest dispatchable unit of work: exclusive use of
//! one machine for a fixed duration. It belongs to a job and runs only after
//! the job's previous operation has finished.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2

use serde::{Deserialize, Serialize};

/// A single `(machine, duration)` requirement within a job.
///
/// Constructed only through [`JobSpec`](super::JobSpec), which guarantees
/// `duration >= 0` and `machine < num_machines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    /// Machine that must process this operation.
    pub machine: usize,
    /// Processing time (time units).
    pub duration: i64,
}

impl Operation {
    /// Creates an operation.
    pub fn new(machine: usize, duration: i64) -> Self {
        Self { machine, duration }
    }

    /// The operation as an input pair `(machine_id, duration)`.
    pub fn as_pair(&self) -> (i64, i64) {
        (self.machine as i64, self.duration)
    }
}
