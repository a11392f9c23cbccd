//! Job-shop domain models.
//!
//! Provides the problem types (`Operation`, `Job`, `JobSpec`) and the
//! solution record produced by simulation (`Schedule`).
//!
//! # Domain Mappings
//!
//! | u-jobshop | Manufacturing | Computing |
//! |-----------|---------------|-----------|
//! | Job | Order / Part routing | Task chain |
//! | Operation | Process step | Stage |
//! | Machine | Work center | Worker / core |
//! | Schedule | Production plan | Execution trace |

mod job;
mod job_spec;
mod operation;
mod schedule;

pub use job::Job;
pub use job_spec::{JobSpec, RawJobs};
pub use operation::Operation;
pub use schedule::{Schedule, ScheduledOperation};
