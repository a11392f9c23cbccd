//! Schedule quality metrics (KPIs).
//!
//! Computes standard indicators from the executed operations of an episode.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest finish time |
//! | Machine busy time | Sum of operation durations per machine |
//! | Utilization | busy / makespan, per machine |
//! | Avg Utilization | Mean over all machines, idle ones included |
//! | Avg Flow Time | Mean job completion time (all jobs released at 0) |
//! | Total Idle Time | Sum over machines of makespan - busy, saturating at `i64::MAX` |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::Serialize;

use crate::models::Schedule;

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleKpi {
    /// Latest finish time.
    pub makespan: i64,
    /// Busy time per machine.
    pub busy_time_by_machine: Vec<i64>,
    /// Utilization per machine (0.0..1.0).
    pub utilization_by_machine: Vec<f64>,
    /// Mean machine utilization.
    pub avg_utilization: f64,
    /// Mean completion time over jobs with at least one executed operation.
    pub avg_flow_time: f64,
    /// Idle machine time inside `[0, makespan)`, saturated at `i64::MAX`.
    pub total_idle_time: i64,
}

impl ScheduleKpi {
    /// Computes KPIs for a schedule over `num_machines` machines.
    pub fn calculate(schedule: &Schedule, num_machines: usize) -> Self {
        let makespan = schedule.makespan();

        let busy_time_by_machine: Vec<i64> = (0..num_machines)
            .map(|m| schedule.machine_busy_time(m))
            .collect();

        let utilization_by_machine: Vec<f64> = (0..num_machines)
            .map(|m| schedule.machine_utilization(m, makespan).unwrap_or(0.0))
            .collect();

        let avg_utilization = if num_machines == 0 {
            0.0
        } else {
            utilization_by_machine.iter().sum::<f64>() / num_machines as f64
        };

        let completions: Vec<i64> = (0..schedule.num_jobs())
            .filter_map(|j| schedule.job_completion_time(j))
            .collect();
        let avg_flow_time = if completions.is_empty() {
            0.0
        } else {
            completions.iter().map(|&c| c as f64).sum::<f64>() / completions.len() as f64
        };

        let total_idle_time = busy_time_by_machine
            .iter()
            .fold(0i64, |acc, &busy| acc.saturating_add(makespan - busy));

        Self {
            makespan,
            busy_time_by_machine,
            utilization_by_machine,
            avg_utilization,
            avg_flow_time,
            total_idle_time,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_makespan: i64, min_utilization: f64) -> bool {
        self.makespan <= max_makespan && self.avg_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobSpec;
    use crate::simulation::SimulationEngine;

    fn finished_schedule(raw: Vec<Vec<(i64, i64)>>, order: &[usize]) -> (Schedule, usize) {
        let spec = JobSpec::from_pairs(raw).unwrap();
        let machines = spec.num_machines();
        let mut engine = SimulationEngine::new(spec);
        engine.run_sequence(order).unwrap();
        (engine.schedule().clone(), machines)
    }

    #[test]
    fn test_kpi_single_machine() {
        let (s, m) = finished_schedule(vec![vec![(0, 2)], vec![(0, 3)]], &[1, 0]);
        let kpi = ScheduleKpi::calculate(&s, m);
        assert_eq!(kpi.makespan, 5);
        assert_eq!(kpi.busy_time_by_machine, vec![5]);
        assert!((kpi.avg_utilization - 1.0).abs() < 1e-10);
        assert_eq!(kpi.total_idle_time, 0);
        // completions 5 (job0) and 3 (job1)
        assert!((kpi.avg_flow_time - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_idle_machine() {
        // m0: [0,4), m1: [4,6) → m1 idle for 4 of 6.
        let (s, m) = finished_schedule(vec![vec![(0, 4), (1, 2)]], &[0, 0]);
        let kpi = ScheduleKpi::calculate(&s, m);
        assert_eq!(kpi.makespan, 6);
        assert!((kpi.utilization_by_machine[0] - 4.0 / 6.0).abs() < 1e-10);
        assert!((kpi.utilization_by_machine[1] - 2.0 / 6.0).abs() < 1e-10);
        assert!((kpi.avg_utilization - 0.5).abs() < 1e-10);
        assert_eq!(kpi.total_idle_time, 6);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(2), 2);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.utilization_by_machine, vec![0.0, 0.0]);
        assert!((kpi.avg_flow_time - 0.0).abs() < 1e-10);
        assert_eq!(kpi.total_idle_time, 0);
    }

    #[test]
    fn test_kpi_large_times() {
        let raw = vec![
            vec![(0, 5_000_000_000_000_000_000)],
            vec![(0, 4_000_000_000_000_000_000)],
        ];
        let (s, m) = finished_schedule(raw, &[0, 1]);
        let kpi = ScheduleKpi::calculate(&s, m);
        assert_eq!(kpi.makespan, 9_000_000_000_000_000_000);
        // completions 5e18 and 9e18
        assert!((kpi.avg_flow_time / 7e18 - 1.0).abs() < 1e-9);
        assert_eq!(kpi.total_idle_time, 0);
    }

    #[test]
    fn test_kpi_idle_saturates() {
        // machines 1..4 stay idle for the whole 4e18 makespan
        let raw = vec![vec![(0, 4_000_000_000_000_000_000)]];
        let spec = JobSpec::with_machine_count(raw, 4).unwrap();
        let mut engine = SimulationEngine::new(spec);
        engine.run_sequence(&[0]).unwrap();
        let kpi = ScheduleKpi::calculate(engine.schedule(), 4);
        assert_eq!(kpi.busy_time_by_machine[1..], [0, 0, 0]);
        assert_eq!(kpi.total_idle_time, i64::MAX);
    }

    #[test]
    fn test_meets_thresholds() {
        let (s, m) = finished_schedule(vec![vec![(0, 4), (1, 2)]], &[0, 0]);
        let kpi = ScheduleKpi::calculate(&s, m);
        assert!(kpi.meets_thresholds(6, 0.5));
        assert!(!kpi.meets_thresholds(5, 0.0));
        assert!(!kpi.meets_thresholds(10, 0.9));
    }
}
