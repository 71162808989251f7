//! This module contains example objective functions to demonstrate practical usage of the crate.

#[cfg(test)]
#[path = "../tests/unit/example_test.rs"]
mod example_test;

use crate::evaluation::ObjectiveFunction;
use crate::utils::{Float, GenericResult};

/// A sphere function: sum of squares of all variables, global minimum is 0 at the origin.
#[derive(Default)]
pub struct SphereFunction;

impl ObjectiveFunction for SphereFunction {
    fn evaluate(&self, vars: &[Float]) -> GenericResult<Float> {
        Ok(vars.iter().map(|value| value * value).sum())
    }

    fn name(&self) -> &str {
        "sphere function"
    }
}

/// A route evaluation function: sum of cubes of the first three variables.
#[derive(Default)]
pub struct RouteFunction;

impl ObjectiveFunction for RouteFunction {
    fn evaluate(&self, vars: &[Float]) -> GenericResult<Float> {
        match vars {
            [x, y, z, ..] => Ok(x.powi(3) + y.powi(3) + z.powi(3)),
            _ => Err(format!("route evaluation function expects at least 3 variables, got {}", vars.len()).into()),
        }
    }

    fn name(&self) -> &str {
        "route evaluation function"
    }
}

/// A Rosenbrock function, global minimum is 0 at `(1, .., 1)`.
#[derive(Default)]
pub struct RosenbrockFunction;

impl ObjectiveFunction for RosenbrockFunction {
    fn evaluate(&self, vars: &[Float]) -> GenericResult<Float> {
        if vars.len() < 2 {
            return Err(format!("rosenbrock function expects at least 2 variables, got {}", vars.len()).into());
        }

        Ok(vars.windows(2).map(|pair| 100. * (pair[1] - pair[0].powi(2)).powi(2) + (1. - pair[0]).powi(2)).sum())
    }

    fn name(&self) -> &str {
        "rosenbrock function"
    }
}
