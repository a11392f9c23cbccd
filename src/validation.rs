//! Input validation for job-shop data.
//!
//! Checks structural integrity of raw job data before a
//! [`JobSpec`](crate::models::JobSpec) is built. Detects:
//! - Empty job lists and jobs without operations
//! - Negative machine ids and negative durations
//! - Machine ids beyond a declared machine count or [`MAX_MACHINES`]
//! - Total work that would overflow the time axis
//!
//! All faults are collected, not just the first one.

/// Largest supported machine count. Machine ids must stay below it.
pub const MAX_MACHINES: usize = 1 << 16;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No jobs at all.
    NoJobs,
    /// A job has no operations.
    EmptyJob,
    /// An operation references a negative machine id.
    NegativeMachine,
    /// A machine id or declared count at or beyond the supported limit.
    MachineOutOfRange,
    /// An operation has a negative duration.
    NegativeDuration,
    /// The sum of all durations does not fit the time axis.
    DurationOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates raw `(machine_id, duration)` job data.
///
/// Checks:
/// 1. At least one job
/// 2. Every job has at least one operation
/// 3. Every machine id is non-negative
/// 4. Every machine id is below `declared_machines`, when given, and
///    below [`MAX_MACHINES`] in any case
/// 5. Every duration is non-negative
/// 6. The total work fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(
    jobs: &[Vec<(i64, i64)>],
    declared_machines: Option<usize>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoJobs,
            "Job list is empty",
        ));
    }

    if declared_machines == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MachineOutOfRange,
            "Declared machine count is zero",
        ));
    }

    if let Some(limit) = declared_machines.filter(|&n| n > MAX_MACHINES) {
        errors.push(ValidationError::new(
            ValidationErrorKind::MachineOutOfRange,
            format!("Declared machine count {limit} exceeds the maximum {MAX_MACHINES}"),
        ));
    }

    let mut total_work: Option<i64> = Some(0);

    for (j, ops) in jobs.iter().enumerate() {
        if ops.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyJob,
                format!("Job {j} has no operations"),
            ));
        }

        for (i, &(machine, duration)) in ops.iter().enumerate() {
            if machine < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeMachine,
                    format!("Job {j} operation {i} references negative machine {machine}"),
                ));
            } else if machine as u64 >= MAX_MACHINES as u64 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MachineOutOfRange,
                    format!("Job {j} operation {i} machine {machine} exceeds {MAX_MACHINES}"),
                ));
            } else if let Some(limit) = declared_machines {
                if machine as u64 >= limit as u64 {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MachineOutOfRange,
                        format!(
                            "Job {j} operation {i} references machine {machine} (num_machines = {limit})"
                        ),
                    ));
                }
            }

            if duration < 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeDuration,
                    format!("Job {j} operation {i} has negative duration {duration}"),
                ));
            } else {
                total_work = total_work.and_then(|w| w.checked_add(duration));
            }
        }
    }

    if total_work.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationOverflow,
            "Total processing time overflows the time axis",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
