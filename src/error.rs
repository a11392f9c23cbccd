//! Crate error type.
//!
//! Only load-time data faults and caller contract violations are errors.
//! Dispatching an exhausted job is a defined simulation outcome and never
//! surfaces here.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JobShopError>;

/// Errors raised by loading, validation, and the environment boundary.
#[derive(Debug, Error)]
pub enum JobShopError {
    /// The job data failed one or more integrity checks.
    #[error("invalid job data: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),

    /// The job data could not be decoded (bad JSON or wrong shape).
    #[error("malformed job data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The instance file could not be read.
    #[error("cannot read job data: {0}")]
    Io(#[from] std::io::Error),

    /// A job index outside `[0, num_jobs)` was passed to the engine.
    #[error("job {job} out of range (num_jobs = {num_jobs})")]
    JobOutOfRange { job: usize, num_jobs: usize },

    /// An action outside the discrete action space was passed to the environment.
    #[error("action {action} outside action space [0, {num_jobs})")]
    InvalidAction { action: i64, num_jobs: usize },
}

impl JobShopError {
    /// Validation faults, if this is a load-time data fault.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            JobShopError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
