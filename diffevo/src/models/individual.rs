#[cfg(test)]
#[path = "../../tests/unit/models/individual_test.rs"]
mod individual_test;

use crate::constraints::ConstraintSet;
use crate::utils::{DeError, DeResult, Float, Random};
use std::fmt::{Display, Formatter};

/// A candidate solution: a fixed length vector of variables and its cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    vars: Vec<Float>,
    cost: Option<Float>,
}

impl Individual {
    /// Creates a new, not evaluated, individual from given variables.
    pub fn new(vars: Vec<Float>) -> Self {
        Self { vars, cost: None }
    }

    /// Creates an individual with `size` zero variables.
    pub fn with_size(size: usize) -> Self {
        Self::new(vec![0.; size])
    }

    /// Fills variables with random values sampled within constraints.
    pub fn init(&mut self, constraints: &ConstraintSet, random: &dyn Random) -> DeResult<()> {
        constraints.ensure_dimension(self.vars.len())?;

        self.vars.iter_mut().enumerate().try_for_each(|(idx, value)| {
            *value = constraints.random_value(idx, random)?;
            Ok::<_, DeError>(())
        })?;
        self.cost = None;

        Ok(())
    }

    /// Repairs every variable which violates its constraint using origin as a reference point.
    pub fn ensure_constraints(
        &mut self,
        constraints: &ConstraintSet,
        origin: &[Float],
        random: &dyn Random,
    ) -> DeResult<()> {
        constraints.ensure_dimension(self.vars.len())?;
        constraints.ensure_dimension(origin.len())?;

        self.vars.iter_mut().zip(origin.iter()).enumerate().try_for_each(|(idx, (value, &origin))| {
            *value = constraints.repair_value(idx, *value, origin, random)?;
            Ok::<_, DeError>(())
        })
    }

    /// Returns variables.
    pub fn vars(&self) -> &[Float] {
        self.vars.as_slice()
    }

    /// Returns mutable variables. Any change resets the cost.
    pub fn vars_mut(&mut self) -> &mut [Float] {
        self.cost = None;
        self.vars.as_mut_slice()
    }

    /// Returns the cost if the individual is evaluated.
    pub fn cost(&self) -> Option<Float> {
        self.cost
    }

    /// Sets the cost as a result of evaluation.
    pub fn set_cost(&mut self, cost: Float) {
        self.cost = Some(cost);
    }

    /// Returns true if the individual has a cost.
    pub fn is_evaluated(&self) -> bool {
        self.cost.is_some()
    }

    /// Returns amount of variables.
    pub fn size(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if this individual is strictly better than other one. An individual without
    /// cost, or with NaN cost, is worse than any evaluated one.
    pub fn better(&self, other: &Individual, minimize: bool) -> bool {
        let (cost, other) = (self.cost.filter(|cost| !cost.is_nan()), other.cost.filter(|cost| !cost.is_nan()));

        match (cost, other) {
            (Some(cost), Some(other)) => {
                if minimize {
                    cost < other
                } else {
                    cost > other
                }
            }
            (Some(_), None) => true,
            _ => false,
        }
    }

    /// Returns true if this individual is better than or equal to other one.
    pub fn better_or_equal(&self, other: &Individual, minimize: bool) -> bool {
        !other.better(self, minimize)
    }
}

impl Display for Individual {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.cost {
            Some(cost) => write!(f, "cost: {cost}, vars: ")?,
            None => write!(f, "cost: n/a, vars: ")?,
        }

        let vars = self.vars.iter().map(|value| value.to_string()).collect::<Vec<_>>();

        write!(f, "[{}]", vars.join(", "))
    }
}
