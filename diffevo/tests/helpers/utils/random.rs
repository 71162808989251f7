use crate::utils::{Float, Random};
use std::sync::RwLock;

struct FakeDistribution<T> {
    values: Vec<T>,
}

impl<T> FakeDistribution<T> {
    pub fn new(values: Vec<T>) -> Self {
        let mut values = values;
        values.reverse();
        Self { values }
    }

    pub fn next(&mut self) -> T {
        self.values.pop().expect("no more fake values")
    }
}

/// Returns predefined values in the given order.
pub struct FakeRandom {
    ints: RwLock<FakeDistribution<i32>>,
    reals: RwLock<FakeDistribution<Float>>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<Float>) -> Self {
        Self { ints: RwLock::new(FakeDistribution::new(ints)), reals: RwLock::new(FakeDistribution::new(reals)) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        let value = self.ints.write().unwrap().next();
        assert!(value >= min && value <= max, "fake int {value} is not in [{min}, {max}]");

        value
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        assert!(min <= max);
        self.reals.write().unwrap().next()
    }
}

/// Always returns either the lower or the upper bound of requested range.
pub struct EchoRandom {
    use_min: bool,
}

impl EchoRandom {
    pub fn new(use_min: bool) -> Self {
        Self { use_min }
    }
}

impl Random for EchoRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if self.use_min { min } else { max }
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if self.use_min { min } else { max }
    }
}
