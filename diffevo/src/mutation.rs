//! The mutation module contains logic to produce trial individuals from the population.

#[cfg(test)]
#[path = "../tests/unit/mutation_test.rs"]
mod mutation_test;

use crate::constraints::ConstraintSet;
use crate::models::{Individual, Population};
use crate::utils::{DeError, DeResult, Float, Random};

/// Minimum population size which allows to pick three distinct donors different from the target.
pub const MIN_POPULATION_SIZE: usize = 4;

/// Specifies how the donor vector is mixed with the target one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossoverKind {
    /// Each dimension is taken from the donor with crossover probability, at least one is always taken.
    #[default]
    Binomial,
    /// A contiguous (cyclic) run of dimensions starting at random one is taken from the donor while
    /// a crossover probability test passes.
    Exponential,
}

/// Specifies how the donor vector is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MutationScheme {
    /// `x_r1 + F * (x_r2 - x_r3)`, classic DE/rand/1.
    #[default]
    RandOne,
    /// `x_i + F * (best - x_i) + F * (x_r2 - x_r3)`.
    CurrentToBestOne,
    /// `best + (F + jitter) * (x_r2 - x_r3)` with small jitter sampled per dimension.
    BestOneJitter,
    /// `x_r1 + K * (x_r2 - x_r3)` where `K` is sampled in `[F, 1)` for every trial.
    RandOneVectorDither,
    /// `x_r1 + K * (x_r2 - x_r3)` where `K` is sampled in `[F, 1)` once for the whole run.
    RandOneDither,
}

/// Keeps mutation parameters.
#[derive(Clone, Debug)]
pub struct MutationArguments {
    weight: Float,
    crossover: Float,
    dither: Float,
    crossover_kind: CrossoverKind,
}

impl MutationArguments {
    /// Creates a new instance of `MutationArguments`. The weight should be in `(0, 2]` range and
    /// crossover rate in `[0, 1]` range.
    pub fn new(weight: Float, crossover: Float, random: &dyn Random) -> DeResult<Self> {
        if !(weight > 0. && weight <= 2.) {
            return Err(DeError::Configuration(format!("mutation weight must be in (0, 2] range, got {weight}")));
        }

        if !(0. ..=1.).contains(&crossover) {
            return Err(DeError::Configuration(format!("crossover rate must be in [0, 1] range, got {crossover}")));
        }

        let dither = weight + random.uniform_real(0., 1.) * (1. - weight);

        Ok(Self { weight, crossover, dither, crossover_kind: CrossoverKind::default() })
    }

    /// Sets crossover kind.
    pub fn with_crossover_kind(mut self, crossover_kind: CrossoverKind) -> Self {
        self.crossover_kind = crossover_kind;
        self
    }

    /// Returns mutation weight (F).
    pub fn weight(&self) -> Float {
        self.weight
    }

    /// Returns crossover rate (CR).
    pub fn crossover(&self) -> Float {
        self.crossover
    }

    /// Returns dither factor sampled once on creation.
    pub fn dither(&self) -> Float {
        self.dither
    }

    /// Returns crossover kind.
    pub fn crossover_kind(&self) -> CrossoverKind {
        self.crossover_kind
    }
}

/// Keeps everything needed to produce a trial individual.
pub struct MutationContext<'a> {
    /// Current population.
    pub population: &'a Population,
    /// Search space constraints.
    pub constraints: &'a ConstraintSet,
    /// The best individual of the current population.
    pub best: &'a Individual,
    /// Random generator.
    pub random: &'a dyn Random,
}

/// A mutation strategy which produces a trial individual for the target one.
pub trait MutationStrategy: Send + Sync {
    /// Returns a trial individual which satisfies constraints.
    fn mutate(&self, context: &MutationContext, target_index: usize) -> DeResult<Individual>;
}

/// A mutation strategy which combines one of the donor schemes with a crossover.
pub struct StandardMutation {
    scheme: MutationScheme,
    args: MutationArguments,
}

impl StandardMutation {
    /// Creates a new instance of `StandardMutation`.
    pub fn new(scheme: MutationScheme, args: MutationArguments) -> Self {
        Self { scheme, args }
    }

    /// Returns mutation scheme.
    pub fn scheme(&self) -> MutationScheme {
        self.scheme
    }

    /// Returns mutation arguments.
    pub fn args(&self) -> &MutationArguments {
        &self.args
    }
}

impl MutationStrategy for StandardMutation {
    fn mutate(&self, context: &MutationContext, target_index: usize) -> DeResult<Individual> {
        let population = context.population.as_slice();
        let random = context.random;

        if population.len() < MIN_POPULATION_SIZE {
            return Err(DeError::Configuration(format!(
                "population size must be at least {MIN_POPULATION_SIZE}, got {}",
                population.len()
            )));
        }

        let target = population
            .get(target_index)
            .ok_or(DeError::OutOfRange { index: target_index, size: population.len() })?;
        let dimension = target.size();
        if dimension == 0 {
            return Err(DeError::Configuration("cannot mutate an individual without variables".to_string()));
        }
        context.constraints.ensure_dimension(dimension)?;

        let urn = select_distinct_indices(population.len(), target_index, 3, random);
        let (r1, r2, r3) = (population[urn[0]].vars(), population[urn[1]].vars(), population[urn[2]].vars());
        let (current, best) = (target.vars(), context.best.vars());
        let weight = self.args.weight;

        let factor = match self.scheme {
            MutationScheme::RandOneVectorDither => weight + random.uniform_real(0., 1.) * (1. - weight),
            MutationScheme::RandOneDither => self.args.dither,
            _ => weight,
        };

        let donor = |j: usize| match self.scheme {
            MutationScheme::RandOne | MutationScheme::RandOneVectorDither | MutationScheme::RandOneDither => {
                r1[j] + factor * (r2[j] - r3[j])
            }
            MutationScheme::CurrentToBestOne => current[j] + weight * (best[j] - current[j]) + weight * (r2[j] - r3[j]),
            MutationScheme::BestOneJitter => {
                let jitter = 0.0001 * random.uniform_real(0., 1.) + weight;
                best[j] + jitter * (r2[j] - r3[j])
            }
        };

        let mut vars = current.to_vec();
        match self.args.crossover_kind {
            CrossoverKind::Binomial => {
                let forced = random.uniform_index(dimension);
                (0..dimension).for_each(|j| {
                    if j == forced || random.is_hit(self.args.crossover) {
                        vars[j] = donor(j);
                    }
                });
            }
            CrossoverKind::Exponential => {
                let mut j = random.uniform_index(dimension);
                let mut taken = 0;
                loop {
                    vars[j] = donor(j);
                    j = (j + 1) % dimension;
                    taken += 1;

                    if taken >= dimension || !random.is_hit(self.args.crossover) {
                        break;
                    }
                }
            }
        }

        let mut trial = Individual::new(vars);
        trial.ensure_constraints(context.constraints, r1, random)?;

        Ok(trial)
    }
}

/// Selects `count` distinct indices in `[0, size)` range which are different from `exclude`.
pub(crate) fn select_distinct_indices(size: usize, exclude: usize, count: usize, random: &dyn Random) -> Vec<usize> {
    assert!(count < size, "cannot select {count} distinct indices from {size} excluding one");

    let mut indices = Vec::with_capacity(count);
    while indices.len() < count {
        let candidate = random.uniform_index(size);
        if candidate != exclude && !indices.contains(&candidate) {
            indices.push(candidate);
        }
    }

    indices
}
