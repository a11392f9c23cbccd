//! Job-shop simulation engine.
//!
//! A monotone-timeline transition system driven by one external choice per
//! step: the caller names a job, the engine executes that job's next
//! operation at the earliest feasible time.
//!
//! # Usage
//!
//! ```
//! use u_jobshop::models::JobSpec;
//! use u_jobshop::simulation::{DispatchOutcome, SimulationEngine};
//!
//! let spec = JobSpec::from_json_str("[[[0, 2], [1, 1]], [[1, 3]]]").unwrap();
//! let mut engine = SimulationEngine::new(spec);
//! engine.reset();
//!
//! while !engine.is_complete() {
//!     let job = engine.pending_jobs()[0];
//!     let t = engine.advance(job).unwrap();
//!     assert!(matches!(t.outcome, DispatchOutcome::Dispatched(_)));
//! }
//! assert_eq!(engine.makespan(), 6);
//! ```
//!
//! # Concurrency
//!
//! Strictly single-threaded per instance. Parallel rollouts use one engine
//! per episode; engines share no mutable state.

mod engine;
mod observation;
mod state;

pub use engine::{DispatchOutcome, Rollout, SimulationEngine, Transition};
pub use observation::{JobSignal, Observation};
pub use state::SimulationState;
