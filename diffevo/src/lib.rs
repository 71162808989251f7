//! This crate implements a parallel differential evolution engine: it evolves a population of
//! candidate solutions in a bounded search space, while objective function evaluations are
//! distributed over a pool of worker threads.
//!
//! # Examples
//!
//! ```
//! use diffevo::prelude::*;
//! use diffevo::example::SphereFunction;
//! use std::sync::Arc;
//!
//! let mut engine = EngineBuilder::default()
//!     .with_objective(Arc::new(SphereFunction))
//!     .with_constraints(ConstraintSet::with_default(2, -10., 10.))
//!     .with_population_size(10)
//!     .with_worker_count(2)
//!     .with_max_generations(Some(50))
//!     .with_telemetry_mode(TelemetryMode::None)
//!     .with_environment(Arc::new(Environment::new_with_seed(42)))
//!     .build()
//!     .expect("cannot build engine");
//!
//! let best = engine.run().expect("cannot run engine");
//! assert!(best.cost().is_some());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod constraints;
pub mod engine;
pub mod evaluation;
pub mod example;
pub mod models;
pub mod mutation;
pub mod prelude;
pub mod selection;
pub mod telemetry;
pub mod termination;
pub mod utils;
