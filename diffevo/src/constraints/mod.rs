//! The constraints module contains per dimension bounds of the search space together with
//! logic to sample and repair values within these bounds.

#[cfg(test)]
#[path = "../../tests/unit/constraints/constraint_set_test.rs"]
mod constraint_set_test;

use crate::utils::{DeError, DeResult, Float, GenericResult, Random};

mod range;
pub use self::range::{IntConstraint, RealConstraint};

mod discrete;
pub use self::discrete::{BooleanConstraint, SetConstraint};

/// Describes characteristics and limits of a single input variable of the objective function.
pub trait Constraint: Send + Sync {
    /// Returns the lower limit of the constraint.
    fn min(&self) -> Float;

    /// Returns the upper limit of the constraint.
    fn max(&self) -> Float;

    /// Checks that the constraint can produce at least one value.
    fn validate(&self) -> GenericResult<()>;

    /// Returns true if the value satisfies the constraint.
    fn is_satisfied(&self, value: Float) -> bool;

    /// Returns a random value limited to the type and range of the constraint.
    fn random_value(&self, random: &dyn Random) -> Float;

    /// Returns a value which satisfies the constraint: the value itself if it is valid, otherwise
    /// a replacement derived using the origin as a reference point.
    fn repair(&self, value: Float, origin: Float, random: &dyn Random) -> Float;

    /// Returns a random value inside of a zone around origin. The zone width is a percentage of
    /// the whole constraint width.
    fn random_value_in_zone(&self, origin: Float, zone_pct: Float, random: &dyn Random) -> GenericResult<Float>;

    /// Returns the middle point of the constraint.
    fn middle_point(&self) -> GenericResult<Float>;
}

/// An ordered collection of constraints, one per search dimension.
pub struct ConstraintSet {
    constraints: Vec<Box<dyn Constraint>>,
}

impl ConstraintSet {
    /// Creates a new instance of `ConstraintSet`.
    pub fn new(constraints: Vec<Box<dyn Constraint>>) -> Self {
        Self { constraints }
    }

    /// Creates a set of `count` real constraints with the same range.
    pub fn with_default(count: usize, min: Float, max: Float) -> Self {
        Self::new((0..count).map(|_| Box::new(RealConstraint::new(min, max)) as Box<dyn Constraint>).collect())
    }

    /// Creates a constraint set from string definitions in a `type;min;max` format.
    ///
    /// Dimensions without definition get a real constraint with default range. Definitions beyond
    /// `count` extend the set. Fields can be separated by whitespaces, `;` or `,`.
    pub fn parse(definitions: &[&str], count: usize, default_min: Float, default_max: Float) -> DeResult<Self> {
        let mut constraint_set = Self::with_default(count, default_min, default_max);

        definitions.iter().enumerate().try_for_each(|(idx, definition)| {
            let constraint = parse_definition(definition)?;

            if idx < constraint_set.size() {
                constraint_set.constraints[idx] = constraint;
            } else {
                constraint_set.constraints.push(constraint);
            }

            Ok::<_, DeError>(())
        })?;

        Ok(constraint_set)
    }

    /// Replaces a constraint at given index.
    pub fn set(&mut self, index: usize, constraint: Box<dyn Constraint>) -> DeResult<()> {
        let size = self.size();
        let slot = self.constraints.get_mut(index).ok_or(DeError::OutOfRange { index, size })?;
        *slot = constraint;

        Ok(())
    }

    /// Returns amount of dimensions.
    pub fn size(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if there are no constraints.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns constraint at given index.
    pub fn get(&self, index: usize) -> DeResult<&dyn Constraint> {
        self.constraints.get(index).map(|c| c.as_ref()).ok_or(DeError::OutOfRange { index, size: self.size() })
    }

    /// Validates every constraint.
    pub fn validate(&self) -> DeResult<()> {
        self.constraints.iter().enumerate().try_for_each(|(idx, constraint)| {
            constraint.validate().map_err(|err| DeError::Configuration(format!("constraint at {idx}: {err}")))
        })
    }

    /// Returns a value uniformly sampled within the constraint at given index.
    pub fn random_value(&self, index: usize, random: &dyn Random) -> DeResult<Float> {
        self.get(index).map(|constraint| constraint.random_value(random))
    }

    /// Returns a value which satisfies the constraint at given index, repairing it when needed.
    pub fn repair_value(&self, index: usize, value: Float, origin: Float, random: &dyn Random) -> DeResult<Float> {
        self.get(index).map(|constraint| constraint.repair(value, origin, random))
    }

    /// Returns random values for all dimensions.
    pub fn random_values(&self, random: &dyn Random) -> Vec<Float> {
        self.constraints.iter().map(|constraint| constraint.random_value(random)).collect()
    }

    /// Returns random values inside of a square zone centered on origin.
    pub fn zone_random_values(&self, origin: &[Float], side_pct: Float, random: &dyn Random) -> DeResult<Vec<Float>> {
        self.ensure_dimension(origin.len())?;

        self.constraints
            .iter()
            .zip(origin.iter())
            .map(|(constraint, &origin)| {
                constraint.random_value_in_zone(origin, side_pct, random).map_err(DeError::from)
            })
            .collect()
    }

    /// Returns the middle point of the search space.
    pub fn middle_point(&self) -> DeResult<Vec<Float>> {
        self.constraints.iter().map(|constraint| constraint.middle_point().map_err(DeError::from)).collect()
    }

    /// Returns true if every value satisfies its constraint.
    pub fn is_satisfied(&self, vars: &[Float]) -> bool {
        vars.len() == self.size()
            && self.constraints.iter().zip(vars.iter()).all(|(constraint, &value)| constraint.is_satisfied(value))
    }

    /// Returns an error if the amount of dimensions differs.
    pub fn ensure_dimension(&self, actual: usize) -> DeResult<()> {
        if actual == self.size() { Ok(()) } else { Err(DeError::DimensionMismatch { expected: self.size(), actual }) }
    }
}

fn parse_definition(definition: &str) -> DeResult<Box<dyn Constraint>> {
    let fields = definition
        .split(|ch: char| ch.is_whitespace() || ch == ';' || ch == ',')
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>();

    let (kind, min, max) = match fields.as_slice() {
        [kind, min, max] => (kind.to_lowercase(), parse_bound(definition, min)?, parse_bound(definition, max)?),
        fields if fields.len() > 3 => {
            return Err(DeError::Configuration(format!("wrong variable format in \"{definition}\" - too many fields")));
        }
        _ => {
            return Err(DeError::Configuration(format!("wrong variable format in \"{definition}\" - too few fields")));
        }
    };

    if min > max {
        return Err(DeError::Configuration(format!("wrong variable format in \"{definition}\" - min > max")));
    }

    match kind.as_str() {
        "real" => Ok(Box::new(RealConstraint::new(min, max))),
        "int" | "integer" => Ok(Box::new(IntConstraint::new(min, max))),
        _ => Err(DeError::Configuration(format!("invalid constraint type \"{kind}\""))),
    }
}

fn parse_bound(definition: &str, value: &str) -> DeResult<Float> {
    value
        .parse::<Float>()
        .map_err(|err| DeError::Configuration(format!("cannot parse \"{value}\" in \"{definition}\": {err}")))
}
