//! Gantt chart records.
//!
//! One record per executed operation, grouped by job row in dispatch order.
//! Rendering (bars, colors, hover text) belongs to the consumer.

use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// A single Gantt bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttRecord {
    /// Job (row) index.
    pub job: usize,
    /// Machine (color group) index.
    pub machine: usize,
    /// Bar start.
    pub start: i64,
    /// Bar end.
    pub finish: i64,
    /// Bar length.
    pub duration: i64,
    /// Row label, e.g. `"Job 0"`.
    pub job_label: String,
    /// Legend label, e.g. `"Machine 2"`.
    pub machine_label: String,
}

/// Flattens a schedule into Gantt records, job by job, in dispatch order.
pub fn gantt_records(schedule: &Schedule) -> Vec<GanttRecord> {
    schedule
        .iter()
        .flat_map(|(job, ops)| {
            ops.iter().map(move |op| GanttRecord {
                job,
                machine: op.machine,
                start: op.start,
                finish: op.finish,
                duration: op.duration(),
                job_label: format!("Job {job}"),
                machine_label: format!("Machine {}", op.machine),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobSpec;
    use crate::simulation::SimulationEngine;

    #[test]
    fn test_records_follow_job_rows() {
        let spec = JobSpec::from_pairs(vec![vec![(0, 2), (1, 3)], vec![(1, 1)]]).unwrap();
        let mut engine = SimulationEngine::new(spec);
        engine.run_sequence(&[1, 0, 0]).unwrap();

        let records = gantt_records(engine.schedule());
        assert_eq!(records.len(), 3);
        // Job 0 rows first even though job 1 was dispatched first.
        assert_eq!(records[0].job, 0);
        assert_eq!(records[0].machine_label, "Machine 0");
        assert_eq!(records[1].job, 0);
        assert_eq!((records[1].start, records[1].finish), (2, 5));
        assert_eq!(records[1].duration, 3);
        assert_eq!(records[2].job_label, "Job 1");
    }

    #[test]
    fn test_empty_schedule() {
        assert!(gantt_records(&Schedule::new(3)).is_empty());
    }

    #[test]
    fn test_record_json() {
        let spec = JobSpec::from_pairs(vec![vec![(0, 4)]]).unwrap();
        let mut engine = SimulationEngine::new(spec);
        engine.run_sequence(&[0]).unwrap();

        let json = serde_json::to_value(gantt_records(engine.schedule())).unwrap();
        assert_eq!(json[0]["start"], 0);
        assert_eq!(json[0]["finish"], 4);
        assert_eq!(json[0]["job_label"], "Job 0");
    }
}
