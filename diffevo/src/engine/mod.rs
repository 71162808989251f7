//! Contains the differential evolution engine which drives the generational loop.

#[cfg(test)]
#[path = "../../tests/unit/engine/engine_test.rs"]
mod engine_test;

use crate::constraints::ConstraintSet;
use crate::evaluation::WorkerPool;
use crate::models::{Individual, Population};
use crate::mutation::{MutationContext, MutationStrategy};
use crate::selection::SelectionStrategy;
use crate::telemetry::Listener;
use crate::termination::TerminationStrategy;
use crate::utils::{DeError, DeResult, Environment, Float};
use std::sync::Arc;

mod builder;
pub use self::builder::EngineBuilder;

/// Specifies a state of the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineState {
    /// Population is not created yet.
    Init,
    /// Population is created, but not evaluated.
    EvaluatingInitial,
    /// Population is evaluated and evolves generation by generation.
    Evolving,
    /// Termination criteria is met, the best individual is available.
    Done,
    /// The run is aborted by an error.
    Failed(DeError),
}

/// A differential evolution engine: owns the population, produces trials using the mutation
/// strategy, evaluates them on the worker pool and chooses survivors using the selection strategy
/// until the termination strategy stops it.
///
/// Mutation and selection run on the caller thread, only objective function evaluations are
/// parallel. Given the same seed, the run is repeatable regardless of the amount of workers.
pub struct DifferentialEvolution {
    constraints: ConstraintSet,
    population_size: usize,
    minimize: bool,
    pool: WorkerPool,
    mutation: Box<dyn MutationStrategy>,
    selection: Box<dyn SelectionStrategy>,
    termination: Box<dyn TerminationStrategy>,
    listener: Arc<dyn Listener>,
    environment: Arc<Environment>,

    state: EngineState,
    population: Option<Population>,
    best: Option<Individual>,
    generation: usize,
}

impl DifferentialEvolution {
    /// Returns the current state.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Returns amount of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns population: it is available once created and keeps the last completed generation.
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    /// Returns the best individual once the run is done.
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Returns search space constraints.
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Returns a relative progress estimation till termination in the `[0, 1]` range.
    pub fn estimate(&self) -> Float {
        match (&self.state, self.population.as_ref()) {
            (EngineState::Done, _) => 1.,
            (_, Some(population)) => self.termination.estimate(self.generation, population),
            (_, None) => 0.,
        }
    }

    /// Returns true if the engine minimizes the cost.
    pub fn is_minimize(&self) -> bool {
        self.minimize
    }

    /// Runs the engine till a terminal state. Returns the best individual or the error which
    /// aborted the run. Calling it again returns the same result.
    pub fn run(&mut self) -> DeResult<Individual> {
        loop {
            match &self.state {
                EngineState::Done => {
                    return self
                        .best
                        .clone()
                        .ok_or_else(|| DeError::Configuration("best individual is not available".to_string()));
                }
                EngineState::Failed(err) => return Err(err.clone()),
                _ => {
                    self.step();
                }
            }
        }
    }

    /// Makes one transition of the state machine: one generation while evolving.
    pub fn step(&mut self) -> &EngineState {
        let result = match self.state {
            EngineState::Init => self.create_population(),
            EngineState::EvaluatingInitial => self.evaluate_population(),
            EngineState::Evolving => self.evolve_generation(),
            EngineState::Done | EngineState::Failed(_) => Ok(()),
        };

        if let Err(err) = result {
            self.listener.on_error(&err);
            self.state = EngineState::Failed(err);
        }

        &self.state
    }

    fn create_population(&mut self) -> DeResult<()> {
        let population =
            Population::new_random(self.population_size, &self.constraints, self.environment.random.as_ref())?;

        self.population = Some(population);
        self.state = EngineState::EvaluatingInitial;

        Ok(())
    }

    fn evaluate_population(&mut self) -> DeResult<()> {
        let population = self.population.take().ok_or_else(missing_population)?;
        let population = Population::new(self.pool.evaluate_all(population.into_individuals())?);

        self.listener.on_start(&population);
        self.population = Some(population);
        self.state = EngineState::Evolving;

        Ok(())
    }

    fn evolve_generation(&mut self) -> DeResult<()> {
        let population = self.population.as_ref().ok_or_else(missing_population)?;
        let best = population.best(self.minimize).ok_or_else(missing_population)?;
        let context = MutationContext {
            population,
            constraints: &self.constraints,
            best,
            random: self.environment.random.as_ref(),
        };

        // NOTE trials are submitted as soon as they are created, evaluation overlaps with mutation
        let mutation_result = (0..population.size()).try_for_each(|idx| {
            let trial = self.mutation.mutate(&context, idx)?;
            self.pool.submit(trial);
            Ok::<_, DeError>(())
        });
        let trials = self.pool.wait();
        mutation_result?;
        let trials = trials?;

        let survivors = self.selection.select_generation(population.as_slice().to_vec(), trials, self.minimize);

        let population = self.population.as_mut().ok_or_else(missing_population)?;
        population.replace_all(survivors)?;

        self.generation += 1;
        self.listener.on_generation_complete(self.generation, population);

        if self.termination.should_stop(self.generation, population) {
            let best = population.best(self.minimize).cloned().ok_or_else(missing_population)?;
            self.listener.on_run_complete(&best);
            self.best = Some(best);
            self.state = EngineState::Done;
        }

        Ok(())
    }
}

fn missing_population() -> DeError {
    DeError::Configuration("population is not available".to_string())
}
