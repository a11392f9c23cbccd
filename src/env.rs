//! Gym-style environment adapter.
//!
//! Wraps a [`SimulationEngine`] in the `reset`/`step` protocol used by
//! reinforcement-learning loops:
//!
//! - action space: discrete, `[0, num_jobs)`
//! - observation space: float32 box of shape `(num_jobs,)`, bounds `[0, +inf)`
//! - `step` result: `(observation, reward, done, info)` with an empty `info`
//!
//! Unlike the engine, `step` takes a signed action so that negative indices
//! coming from a foreign policy are rejected instead of wrapping around.
//!
//! # Example
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_jobshop::env::JobShopEnv;
//!
//! let mut env = JobShopEnv::from_json_str("[[[0, 3], [1, 2]], [[1, 4], [0, 1]]]").unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! env.reset();
//! loop {
//!     let action = env.action_space().sample(&mut rng);
//!     let step = env.step(action as i64).unwrap();
//!     if step.done {
//!         assert!(step.reward < 0.0);
//!         break;
//!     }
//! }
//! ```

use std::path::Path;

use rand::Rng;
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::error::{JobShopError, Result};
use crate::models::{JobSpec, Schedule};
use crate::report::{gantt_records, GanttRecord, ScheduleKpi};
use crate::simulation::SimulationEngine;

/// Discrete action space `[0, n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionSpace {
    /// Number of actions (= number of jobs).
    pub n: usize,
}

impl ActionSpace {
    /// Whether `action` is a valid job index.
    pub fn contains(&self, action: i64) -> bool {
        action >= 0 && (action as u64) < self.n as u64
    }

    /// Uniformly random action.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.n)
    }
}

/// Continuous observation space: a float32 vector of fixed length.
///
/// JSON has no infinity, so an unbounded `high` is left out of the
/// serialized form. A missing `high` key means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObservationSpace {
    /// Vector length (= number of jobs).
    pub shape: usize,
    /// Lower bound of every component.
    pub low: f32,
    /// Upper bound of every component.
    #[serde(skip_serializing_if = "is_unbounded")]
    pub high: f32,
}

fn is_unbounded(high: &f32) -> bool {
    high.is_infinite()
}

impl ObservationSpace {
    /// Whether `obs` has the right length and lies within the bounds.
    pub fn contains(&self, obs: &[f32]) -> bool {
        obs.len() == self.shape && obs.iter().all(|&v| v >= self.low && v <= self.high)
    }
}

/// Auxiliary step information. Carries nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepInfo {}

/// Result of [`JobShopEnv::step`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    /// Observation after the step.
    pub observation: Vec<f32>,
    /// Step reward.
    pub reward: f64,
    /// Whether this step completed the episode.
    pub done: bool,
    /// Empty info structure.
    pub info: StepInfo,
}

/// Job-shop environment for an external decision loop.
#[derive(Debug, Clone)]
pub struct JobShopEnv {
    engine: SimulationEngine,
}

impl JobShopEnv {
    /// Creates an environment with default configuration.
    pub fn new(spec: JobSpec) -> Self {
        Self {
            engine: SimulationEngine::new(spec),
        }
    }

    /// Creates an environment with the given configuration.
    pub fn with_config(spec: JobSpec, config: SimulationConfig) -> Self {
        Self {
            engine: SimulationEngine::with_config(spec, config),
        }
    }

    /// Loads an instance file and builds an environment.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(JobSpec::from_path(path)?))
    }

    /// Parses a JSON instance and builds an environment.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(JobSpec::from_json_str(json)?))
    }

    /// Discrete action space over job indices.
    pub fn action_space(&self) -> ActionSpace {
        ActionSpace {
            n: self.engine.spec().num_jobs(),
        }
    }

    /// Observation space: one non-negative value per job.
    pub fn observation_space(&self) -> ObservationSpace {
        ObservationSpace {
            shape: self.engine.spec().num_jobs(),
            low: 0.0,
            high: f32::INFINITY,
        }
    }

    /// Starts a new episode.
    pub fn reset(&mut self) -> Vec<f32> {
        self.engine.reset().to_vector()
    }

    /// Dispatches the job named by `action`.
    ///
    /// # Errors
    /// [`JobShopError::InvalidAction`] if `action` is outside the action
    /// space. The episode is left untouched.
    pub fn step(&mut self, action: i64) -> Result<StepResult> {
        let space = self.action_space();
        if !space.contains(action) {
            return Err(JobShopError::InvalidAction {
                action,
                num_jobs: space.n,
            });
        }

        let t = self.engine.advance(action as usize)?;
        Ok(StepResult {
            observation: t.observation.to_vector(),
            reward: t.reward,
            done: t.done,
            info: StepInfo::default(),
        })
    }

    /// Job indices that would not be penalized.
    pub fn valid_actions(&self) -> Vec<usize> {
        self.engine.pending_jobs()
    }

    /// Executed operations of the current episode.
    pub fn schedule(&self) -> &Schedule {
        self.engine.schedule()
    }

    /// Gantt records of the current episode for an external renderer.
    pub fn gantt_records(&self) -> Vec<GanttRecord> {
        gantt_records(self.engine.schedule())
    }

    /// KPIs of the current episode.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(self.engine.schedule(), self.engine.spec().num_machines())
    }

    /// The underlying engine.
    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }
}
