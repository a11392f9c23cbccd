//! Dispatch transition engine.
//!
//! # Transition Rule
//!
//! Dispatching job `j` whose next operation is `(m, p)`:
//! ```text
//! start  = max(job_free_at[j], machine_free_at[m])
//! finish = start + p
//! machine_free_at[m] = job_free_at[j] = finish
//! ```
//! The episode is done once every job's cursor reaches its length. The
//! reward is `-makespan` on that dispatch and `0` on every earlier one.
//! Dispatching an exhausted job changes nothing and yields the configured
//! penalty with `done = false`, even when every job is already finished.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 2.1: non-delay dispatching on a job shop

use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::{JobShopError, Result};
use crate::models::{JobSpec, Schedule, ScheduledOperation};

use super::{Observation, SimulationState};

/// What a single `advance` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The job's next operation was executed.
    Dispatched(ScheduledOperation),
    /// The job had no operations left; nothing changed.
    ExhaustedJob,
}

/// Result of one `advance` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Observation after the transition.
    pub observation: Observation,
    /// `-makespan` on completion, `0` mid-episode, penalty on an exhausted job.
    pub reward: f64,
    /// Whether this dispatch completed the last remaining operation.
    pub done: bool,
    /// What happened.
    pub outcome: DispatchOutcome,
}

/// Summary of [`SimulationEngine::run_sequence`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rollout {
    /// Number of `advance` calls made.
    pub steps: usize,
    /// Sum of rewards over those calls.
    pub total_reward: f64,
    /// Whether the episode completed during the sequence.
    pub done: bool,
    /// The last transition, if any call was made.
    pub last: Option<Transition>,
}

/// Single-episode job-shop simulator.
///
/// Owns its [`SimulationState`] exclusively. Concurrent episodes need one
/// engine each; cloning an engine copies its state.
///
/// # Example
/// ```
/// use u_jobshop::models::JobSpec;
/// use u_jobshop::simulation::SimulationEngine;
///
/// let spec = JobSpec::from_pairs(vec![vec![(0, 3)]]).unwrap();
/// let mut engine = SimulationEngine::new(spec);
/// engine.reset();
///
/// let t = engine.advance(0).unwrap();
/// assert!(t.done);
/// assert_eq!(t.reward, -3.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    spec: JobSpec,
    config: SimulationConfig,
    state: SimulationState,
}

impl SimulationEngine {
    /// Creates an engine with default configuration, already reset.
    pub fn new(spec: JobSpec) -> Self {
        Self::with_config(spec, SimulationConfig::default())
    }

    /// Creates an engine with the given configuration, already reset.
    pub fn with_config(spec: JobSpec, config: SimulationConfig) -> Self {
        let state = SimulationState::new(&spec);
        Self {
            spec,
            config,
            state,
        }
    }

    /// Starts a new episode and returns the initial observation.
    pub fn reset(&mut self) -> Observation {
        self.state.clear();
        debug!(
            jobs = self.spec.num_jobs(),
            machines = self.spec.num_machines(),
            "episode reset"
        );
        self.observation()
    }

    /// Dispatches the next operation of `job`.
    ///
    /// # Errors
    /// [`JobShopError::JobOutOfRange`] if `job >= num_jobs`. State is untouched.
    pub fn advance(&mut self, job: usize) -> Result<Transition> {
        let spec_job = self.spec.job(job).ok_or(JobShopError::JobOutOfRange {
            job,
            num_jobs: self.spec.num_jobs(),
        })?;

        let cursor = self.state.job_cursor[job];
        let Some(&op) = spec_job.operation(cursor) else {
            debug!(job, "dispatch of exhausted job");
            return Ok(Transition {
                observation: self.observation(),
                reward: self.config.invalid_dispatch_penalty,
                done: false,
                outcome: DispatchOutcome::ExhaustedJob,
            });
        };

        let start = self.state.job_free_at[job].max(self.state.machine_free_at[op.machine]);
        let record = ScheduledOperation::new(op.machine, start, start + op.duration);
        self.state.commit(job, record);
        debug!(
            job,
            operation = cursor,
            machine = record.machine,
            start = record.start,
            finish = record.finish,
            "dispatched"
        );

        let done = self.is_complete();
        let reward = if done {
            let makespan = self.state.max_job_free_at();
            info!(makespan, "episode complete");
            -(makespan as f64)
        } else {
            0.0
        };

        Ok(Transition {
            observation: self.observation(),
            reward,
            done,
            outcome: DispatchOutcome::Dispatched(record),
        })
    }

    /// Resets, then applies `jobs` in order until the sequence ends.
    ///
    /// Calls after completion are still applied (and penalized), as the
    /// engine would do for any caller.
    ///
    /// # Errors
    /// Stops at the first out-of-range job id.
    pub fn run_sequence(&mut self, jobs: &[usize]) -> Result<Rollout> {
        self.reset();
        let mut rollout = Rollout {
            steps: 0,
            total_reward: 0.0,
            done: false,
            last: None,
        };
        for &job in jobs {
            let t = self.advance(job)?;
            rollout.steps += 1;
            rollout.total_reward += t.reward;
            rollout.done |= t.done;
            rollout.last = Some(t);
        }
        Ok(rollout)
    }

    /// Observation of the current state.
    pub fn observation(&self) -> Observation {
        Observation::from_state(&self.spec, &self.state)
    }

    /// Whether every job has no operations left.
    pub fn is_complete(&self) -> bool {
        self.spec
            .jobs()
            .iter()
            .zip(&self.state.job_cursor)
            .all(|(job, &cursor)| cursor >= job.len())
    }

    /// Jobs that still have operations, in id order.
    pub fn pending_jobs(&self) -> Vec<usize> {
        (0..self.spec.num_jobs())
            .filter(|&j| self.remaining_operations(j) > 0)
            .collect()
    }

    /// Operations left for `job` (0 for unknown jobs).
    pub fn remaining_operations(&self, job: usize) -> usize {
        match self.spec.job(job) {
            Some(spec_job) => spec_job.len() - self.state.job_cursor[job],
            None => 0,
        }
    }

    /// Largest job finish time so far.
    pub fn makespan(&self) -> i64 {
        self.state.max_job_free_at()
    }

    /// The problem being simulated.
    pub fn spec(&self) -> &JobSpec {
        &self.spec
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Read-only view of the episode state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Executed operations of the current episode.
    pub fn schedule(&self) -> &Schedule {
        &self.state.schedule
    }
}
