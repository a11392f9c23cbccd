//! Job model.
//!
//! A job is an ordered sequence of operations that must execute in that
//! fixed order (linear routing, no alternatives).
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

use super::Operation;

/// A job: its operations in processing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    operations: Vec<Operation>,
}

impl Job {
    /// Creates a job from its operations in processing order.
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    /// Operations in processing order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The operation at `index`, if any.
    pub fn operation(&self, index: usize) -> Option<&Operation> {
        self.operations.get(index)
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether this job has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Total processing time across all operations.
    pub fn total_duration(&self) -> i64 {
        self.operations.iter().map(|op| op.duration).sum()
    }

    /// Processing time of the operations from `index` onward.
    pub fn remaining_duration(&self, index: usize) -> i64 {
        self.operations
            .iter()
            .skip(index)
            .map(|op| op.duration)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        Job::new(vec![
            Operation::new(0, 3),
            Operation::new(2, 5),
            Operation::new(1, 1),
        ])
    }

    #[test]
    fn test_job_accessors() {
        let job = sample_job();
        assert_eq!(job.len(), 3);
        assert!(!job.is_empty());
        assert_eq!(job.operation(1), Some(&Operation::new(2, 5)));
        assert!(job.operation(3).is_none());
    }

    #[test]
    fn test_job_durations() {
        let job = sample_job();
        assert_eq!(job.total_duration(), 9);
        assert_eq!(job.remaining_duration(1), 6);
        assert_eq!(job.remaining_duration(3), 0);
    }

    #[test]
    fn test_job_empty() {
        let job = Job::new(Vec::new());
        assert!(job.is_empty());
        assert_eq!(job.total_duration(), 0);
    }
}
