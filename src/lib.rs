//! Job-shop dispatch simulation.
//!
//! Simulates the consequence of an externally supplied dispatch order on a
//! job-shop problem. A decision process (scheduling policy or learning agent)
//! picks which job to advance; the engine runs that job's next operation on
//! its machine at the earliest feasible time and reports the new state.
//!
//! # Modules
//!
//! - **`models`**: Problem and solution types: `Operation`, `Job`, `JobSpec`,
//!   `ScheduledOperation`, `Schedule`
//! - **`validation`**: Load-time integrity checks (shape, negative values,
//!   dangling machine references)
//! - **`simulation`**: `SimulationEngine`, `SimulationState`, `Observation`
//! - **`env`**: Gym-style adapter (`reset`/`step`, action and observation spaces)
//! - **`report`**: Gantt record export and schedule KPIs
//!
//! # Example
//!
//! ```
//! use u_jobshop::models::JobSpec;
//! use u_jobshop::simulation::SimulationEngine;
//!
//! let spec = JobSpec::from_json_str("[[[0, 2]], [[0, 3]]]").unwrap();
//! let mut engine = SimulationEngine::new(spec);
//!
//! let obs = engine.reset();
//! assert_eq!(obs.to_vector(), vec![0.0, 0.0]);
//!
//! let t = engine.advance(1).unwrap();
//! assert!(!t.done);
//! let t = engine.advance(0).unwrap();
//! assert!(t.done);
//! assert_eq!(t.reward, -5.0);
//! ```
//!
//! # Non-goals
//!
//! This crate is not a solver: it contains no search, dispatching heuristics,
//! or optimization. Preemption, breakdowns, alternative routings and setup
//! times are not modelled.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1-2
//! - Brockman et al. (2016), "OpenAI Gym"

pub mod config;
pub mod env;
pub mod error;
mod loader;
pub mod models;
pub mod report;
pub mod simulation;
pub mod validation;

pub use config::SimulationConfig;
pub use error::{JobShopError, Result};
