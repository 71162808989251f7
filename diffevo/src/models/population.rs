#[cfg(test)]
#[path = "../../tests/unit/models/population_test.rs"]
mod population_test;

use crate::constraints::ConstraintSet;
use crate::models::Individual;
use crate::utils::{DeError, DeResult, Random};
use std::fmt::{Display, Formatter};

/// A fixed size collection of individuals evolved per generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a new instance of `Population` from given individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Creates a population of `size` individuals initialized randomly within constraints.
    pub fn new_random(size: usize, constraints: &ConstraintSet, random: &dyn Random) -> DeResult<Self> {
        (0..size)
            .map(|_| {
                let mut individual = Individual::with_size(constraints.size());
                individual.init(constraints, random)?;
                Ok::<_, DeError>(individual)
            })
            .collect::<DeResult<Vec<_>>>()
            .map(Self::new)
    }

    /// Returns amount of individuals.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Returns true if population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Returns individual at given index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Returns an iterator over individuals.
    pub fn iter(&self) -> impl Iterator<Item = &Individual> + '_ {
        self.individuals.iter()
    }

    /// Returns individuals as a slice.
    pub fn as_slice(&self) -> &[Individual] {
        self.individuals.as_slice()
    }

    /// Returns index of the best individual. The first one wins among equal individuals.
    pub fn best_index(&self, minimize: bool) -> Option<usize> {
        self.individuals.iter().enumerate().fold(None, |best: Option<(usize, &Individual)>, (idx, individual)| {
            match best {
                Some((_, best_individual)) if !individual.better(best_individual, minimize) => best,
                _ => Some((idx, individual)),
            }
        })
        .map(|(idx, _)| idx)
    }

    /// Returns the best individual.
    pub fn best(&self, minimize: bool) -> Option<&Individual> {
        self.best_index(minimize).and_then(|idx| self.individuals.get(idx))
    }

    /// Replaces all individuals keeping population size unchanged.
    pub fn replace_all(&mut self, individuals: Vec<Individual>) -> DeResult<()> {
        if individuals.len() != self.individuals.len() {
            return Err(DeError::Configuration(format!(
                "population size cannot change: expected {}, got {}",
                self.individuals.len(),
                individuals.len()
            )));
        }

        self.individuals = individuals;

        Ok(())
    }

    /// Consumes population and returns its individuals.
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }
}

impl Display for Population {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.individuals.iter().try_for_each(|individual| writeln!(f, "{individual}"))
    }
}
