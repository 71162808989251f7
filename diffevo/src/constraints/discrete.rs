#[cfg(test)]
#[path = "../../tests/unit/constraints/discrete_test.rs"]
mod discrete_test;

use super::*;
use crate::utils::compare_floats_refs;

/// A constraint which allows only values from a predefined set.
#[derive(Clone, Debug, Default)]
pub struct SetConstraint {
    values: Vec<Float>,
}

impl SetConstraint {
    /// Creates a new instance of `SetConstraint`, duplicate values are ignored.
    pub fn new(values: &[Float]) -> Self {
        values.iter().fold(Self::default(), |mut constraint, &value| {
            constraint.add_value(value);
            constraint
        })
    }

    /// Adds a value to the set if it is not there yet.
    pub fn add_value(&mut self, value: Float) {
        if !self.contains(value) {
            self.values.push(value);
        }
    }

    /// Returns allowed values in insertion order.
    pub fn values(&self) -> &[Float] {
        self.values.as_slice()
    }

    fn contains(&self, value: Float) -> bool {
        self.values.iter().any(|&v| v == value)
    }
}

impl Constraint for SetConstraint {
    fn min(&self) -> Float {
        self.values.iter().copied().min_by(compare_floats_refs).unwrap_or(Float::NAN)
    }

    fn max(&self) -> Float {
        self.values.iter().copied().max_by(compare_floats_refs).unwrap_or(Float::NAN)
    }

    fn validate(&self) -> GenericResult<()> {
        if self.values.is_empty() {
            return Err("set constraint has no values".into());
        }

        if self.values.iter().any(|value| !value.is_finite()) {
            return Err("set constraint has non finite values".into());
        }

        Ok(())
    }

    fn is_satisfied(&self, value: Float) -> bool {
        self.contains(value)
    }

    fn random_value(&self, random: &dyn Random) -> Float {
        self.values[random.uniform_index(self.values.len())]
    }

    fn repair(&self, value: Float, _: Float, random: &dyn Random) -> Float {
        if self.contains(value) { value } else { self.random_value(random) }
    }

    fn random_value_in_zone(&self, _: Float, _: Float, _: &dyn Random) -> GenericResult<Float> {
        Err("random value in zone is only supported by range constraints".into())
    }

    fn middle_point(&self) -> GenericResult<Float> {
        Err("middle point is not supported by set constraint".into())
    }
}

/// A constraint which allows only `0` and `1` values.
#[derive(Clone, Debug, Default)]
pub struct BooleanConstraint;

impl Constraint for BooleanConstraint {
    fn min(&self) -> Float {
        0.
    }

    fn max(&self) -> Float {
        1.
    }

    fn validate(&self) -> GenericResult<()> {
        Ok(())
    }

    fn is_satisfied(&self, value: Float) -> bool {
        value == 0. || value == 1.
    }

    fn random_value(&self, random: &dyn Random) -> Float {
        if random.is_head_not_tails() { 1. } else { 0. }
    }

    fn repair(&self, value: Float, _: Float, random: &dyn Random) -> Float {
        if self.is_satisfied(value) { value } else { self.random_value(random) }
    }

    fn random_value_in_zone(&self, _: Float, _: Float, _: &dyn Random) -> GenericResult<Float> {
        Err("random value in zone is only supported by range constraints".into())
    }

    fn middle_point(&self) -> GenericResult<Float> {
        Err("middle point is not supported by boolean constraint".into())
    }
}
