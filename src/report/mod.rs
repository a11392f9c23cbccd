//! Schedule reporting.
//!
//! Read-only views over a finished (or in-progress) episode for external
//! consumers: Gantt records for a chart renderer and KPIs for evaluation.
//! Nothing here feeds back into the simulation.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2
//! - Gantt (1919), "Organizing for Work"

mod gantt;
mod kpi;

pub use gantt::{gantt_records, GanttRecord};
pub use kpi::ScheduleKpi;
