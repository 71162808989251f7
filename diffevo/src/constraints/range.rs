#[cfg(test)]
#[path = "../../tests/unit/constraints/range_test.rs"]
mod range_test;

use super::*;

/// A real valued constraint limited by `[min, max]` range.
#[derive(Clone, Debug)]
pub struct RealConstraint {
    min: Float,
    max: Float,
}

impl RealConstraint {
    /// Creates a new instance of `RealConstraint`.
    pub fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }
}

impl Constraint for RealConstraint {
    fn min(&self) -> Float {
        self.min
    }

    fn max(&self) -> Float {
        self.max
    }

    fn validate(&self) -> GenericResult<()> {
        validate_range(self.min, self.max)
    }

    fn is_satisfied(&self, value: Float) -> bool {
        value >= self.min && value <= self.max
    }

    fn random_value(&self, random: &dyn Random) -> Float {
        random.uniform_real(self.min, self.max)
    }

    fn repair(&self, value: Float, origin: Float, random: &dyn Random) -> Float {
        bounce_back(value, origin, self.min, self.max, random, |value| value)
    }

    fn random_value_in_zone(&self, origin: Float, zone_pct: Float, random: &dyn Random) -> GenericResult<Float> {
        let (min, max) = get_zone(self, origin, zone_pct)?;

        Ok(random.uniform_real(min, max))
    }

    fn middle_point(&self) -> GenericResult<Float> {
        Ok((self.min + self.max) / 2.)
    }
}

/// An integer valued constraint limited by `[min, max]` range.
#[derive(Clone, Debug)]
pub struct IntConstraint {
    min: Float,
    max: Float,
}

impl IntConstraint {
    /// Creates a new instance of `IntConstraint`.
    pub fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }

    fn int_min(&self) -> Float {
        self.min.ceil()
    }

    fn int_max(&self) -> Float {
        self.max.floor()
    }
}

impl Constraint for IntConstraint {
    fn min(&self) -> Float {
        self.min
    }

    fn max(&self) -> Float {
        self.max
    }

    fn validate(&self) -> GenericResult<()> {
        validate_range(self.min, self.max)?;

        if self.int_min() > self.int_max() {
            return Err(format!("no integer value within [{}, {}]", self.min, self.max).into());
        }

        Ok(())
    }

    fn is_satisfied(&self, value: Float) -> bool {
        value.fract() == 0. && value >= self.min && value <= self.max
    }

    fn random_value(&self, random: &dyn Random) -> Float {
        uniform_int_value(self.int_min(), self.int_max(), random)
    }

    fn repair(&self, value: Float, origin: Float, random: &dyn Random) -> Float {
        bounce_back(value.round(), origin, self.int_min(), self.int_max(), random, Float::round)
    }

    fn random_value_in_zone(&self, origin: Float, zone_pct: Float, random: &dyn Random) -> GenericResult<Float> {
        let (min, max) = get_zone(self, origin, zone_pct)?;
        let (min, max) = (min.ceil(), max.floor());

        if min > max {
            return Err(format!("zone around {origin} has no integer value").into());
        }

        Ok(uniform_int_value(min, max, random))
    }

    fn middle_point(&self) -> GenericResult<Float> {
        Ok(((self.min + self.max) / 2.).round())
    }
}

/// Samples an integral value in `[min, max]`, falling back to real sampling when bounds do not fit `i32`.
fn uniform_int_value(min: Float, max: Float, random: &dyn Random) -> Float {
    let limits = (i32::MIN as Float)..=(i32::MAX as Float);

    if limits.contains(&min) && limits.contains(&max) {
        random.uniform_int(min as i32, max as i32) as Float
    } else {
        random.uniform_real(min, max + 1.).floor().clamp(min, max)
    }
}

fn validate_range(min: Float, max: Float) -> GenericResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(format!("range [{min}, {max}] is not finite").into());
    }

    if min > max {
        return Err(format!("range [{min}, {max}] has min > max").into());
    }

    Ok(())
}

/// Moves a value which violates the range back into it: a replacement is sampled between the
/// violated bound and the origin. The final clamp keeps the range for an origin outside of it.
fn bounce_back<F>(value: Float, origin: Float, min: Float, max: Float, random: &dyn Random, adjust: F) -> Float
where
    F: Fn(Float) -> Float,
{
    let value = if value < min {
        adjust(min + random.uniform_real(0., 1.) * (origin - min))
    } else if value > max {
        adjust(max + random.uniform_real(0., 1.) * (origin - max))
    } else {
        value
    };

    if value.is_nan() { adjust((min + max) / 2.).clamp(min, max) } else { value.clamp(min, max) }
}

fn get_zone(constraint: &dyn Constraint, origin: Float, zone_pct: Float) -> GenericResult<(Float, Float)> {
    if origin > constraint.max() {
        return Err("origin coordinate > max".into());
    }

    if origin < constraint.min() {
        return Err("origin coordinate < min".into());
    }

    if !(zone_pct > 0. && zone_pct <= 100.) {
        return Err(format!("zone percentage must be in (0, 100] range, got {zone_pct}").into());
    }

    let zone_size = (constraint.max() - constraint.min()) * zone_pct / 100.;

    Ok(((origin - zone_size / 2.).max(constraint.min()), (origin + zone_size / 2.).min(constraint.max())))
}
