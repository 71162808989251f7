//! This module reimports commonly used types.

pub use crate::constraints::{BooleanConstraint, Constraint, ConstraintSet, IntConstraint, RealConstraint, SetConstraint};

pub use crate::engine::{DifferentialEvolution, EngineBuilder, EngineState};

pub use crate::evaluation::ObjectiveFunction;

pub use crate::models::{Individual, Population};

pub use crate::mutation::{CrossoverKind, MutationScheme, MutationStrategy};
pub use crate::selection::{BestParentChildSelection, ElitistSelection, SelectionStrategy};
pub use crate::termination::TerminationStrategy;

pub use crate::telemetry::{Listener, TelemetryMode};

pub use crate::utils::{DeError, DeResult, DefaultRandom, Environment, Float, GenericError, GenericResult, InfoLogger, Random};
