#[cfg(test)]
#[path = "../../tests/unit/engine/builder_test.rs"]
mod builder_test;

use super::*;
use crate::evaluation::ObjectiveFunction;
use crate::mutation::{CrossoverKind, MIN_POPULATION_SIZE, MutationArguments, MutationScheme, StandardMutation};
use crate::selection::BestParentChildSelection;
use crate::telemetry::{LoggingListener, NullListener, TelemetryMode};
use crate::termination::{CompositeTermination, MaxGeneration, MaxTime, TargetCost};
use crate::utils::{Float, InfoLogger};

/// Provides configurable way to build the engine using fluent interface style. All parameters are
/// validated on `build`, before any worker thread is started.
pub struct EngineBuilder {
    objective: Option<Arc<dyn ObjectiveFunction>>,
    constraints: Option<ConstraintSet>,
    dimension_count: Option<usize>,
    population_size: usize,
    worker_count: Option<usize>,
    minimize: bool,

    weight: Float,
    crossover: Float,
    scheme: MutationScheme,
    crossover_kind: CrossoverKind,

    max_generations: Option<usize>,
    max_time: Option<Float>,
    target_cost: Option<Float>,

    mutation: Option<Box<dyn MutationStrategy>>,
    selection: Option<Box<dyn SelectionStrategy>>,
    termination: Option<Box<dyn TerminationStrategy>>,
    listener: Option<Arc<dyn Listener>>,
    telemetry_mode: Option<TelemetryMode>,
    environment: Arc<Environment>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            objective: None,
            constraints: None,
            dimension_count: None,
            population_size: 20,
            worker_count: None,
            minimize: true,
            weight: 0.5,
            crossover: 0.9,
            scheme: MutationScheme::default(),
            crossover_kind: CrossoverKind::default(),
            max_generations: None,
            max_time: None,
            target_cost: None,
            mutation: None,
            selection: None,
            termination: None,
            listener: None,
            telemetry_mode: None,
            environment: Arc::new(Environment::default()),
        }
    }
}

impl EngineBuilder {
    /// Sets objective function. Mandatory.
    pub fn with_objective(mut self, objective: Arc<dyn ObjectiveFunction>) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Sets search space constraints, one per dimension. Mandatory.
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Sets expected amount of dimensions, it is checked against constraints.
    pub fn with_dimension_count(mut self, dimension_count: usize) -> Self {
        self.dimension_count = Some(dimension_count);
        self
    }

    /// Sets population size. Default is 20.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets amount of evaluation workers. Default is taken from environment parallelism.
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = Some(worker_count);
        self
    }

    /// Sets optimization direction. Default is minimization.
    pub fn with_minimize(mut self, minimize: bool) -> Self {
        self.minimize = minimize;
        self
    }

    /// Sets mutation weight (F). Default is 0.5.
    pub fn with_mutation_weight(mut self, weight: Float) -> Self {
        self.weight = weight;
        self
    }

    /// Sets crossover rate (CR). Default is 0.9.
    pub fn with_crossover_rate(mut self, crossover: Float) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets mutation scheme of the standard mutation. Default is `RandOne`.
    pub fn with_mutation_scheme(mut self, scheme: MutationScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets crossover kind of the standard mutation. Default is `Binomial`.
    pub fn with_crossover_kind(mut self, crossover_kind: CrossoverKind) -> Self {
        self.crossover_kind = crossover_kind;
        self
    }

    /// Sets max generations to be run. Default is 1000 when no other termination is set.
    pub fn with_max_generations(mut self, limit: Option<usize>) -> Self {
        self.max_generations = limit;
        self
    }

    /// Sets max running time limit in seconds.
    pub fn with_max_time(mut self, limit: Option<Float>) -> Self {
        self.max_time = limit;
        self
    }

    /// Sets target cost: the run stops once the best individual reaches it.
    pub fn with_target_cost(mut self, target: Option<Float>) -> Self {
        self.target_cost = target;
        self
    }

    /// Sets a custom mutation strategy replacing the standard one.
    pub fn with_mutation(mut self, mutation: Box<dyn MutationStrategy>) -> Self {
        self.mutation = Some(mutation);
        self
    }

    /// Sets a custom selection strategy. Default is best parent/child selection.
    pub fn with_selection(mut self, selection: Box<dyn SelectionStrategy>) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Sets a custom termination replacing max generations, max time and target cost criteria.
    pub fn with_termination(mut self, termination: Box<dyn TerminationStrategy>) -> Self {
        self.termination = Some(termination);
        self
    }

    /// Sets a listener. It takes precedence over telemetry mode.
    pub fn with_listener(mut self, listener: Arc<dyn Listener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Sets telemetry mode. Default is logging of the best individual every 100 generations.
    pub fn with_telemetry_mode(mut self, mode: TelemetryMode) -> Self {
        self.telemetry_mode = Some(mode);
        self
    }

    /// Sets environment. Default is an environment with non-repeatable random.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = environment;
        self
    }

    /// Builds the engine and starts its workers.
    pub fn build(self) -> DeResult<DifferentialEvolution> {
        let logger = self.environment.logger.clone();

        let objective = self.objective.ok_or_else(|| DeError::Configuration("missing objective function".to_string()))?;
        let constraints = self.constraints.ok_or_else(|| DeError::Configuration("missing constraints".to_string()))?;

        if constraints.is_empty() {
            return Err(DeError::Configuration("dimension count must be greater than zero".to_string()));
        }

        if let Some(dimension_count) = self.dimension_count.filter(|&count| count != constraints.size()) {
            return Err(DeError::Configuration(format!(
                "dimension count {dimension_count} does not match amount of constraints {}",
                constraints.size()
            )));
        }

        constraints.validate()?;

        if self.population_size < MIN_POPULATION_SIZE {
            return Err(DeError::Configuration(format!(
                "population size must be at least {MIN_POPULATION_SIZE}, got {}",
                self.population_size
            )));
        }

        let worker_count = self.worker_count.unwrap_or(self.environment.parallelism);
        if worker_count == 0 {
            return Err(DeError::Configuration("worker count must be at least 1".to_string()));
        }

        if self.max_generations == Some(0) {
            return Err(DeError::Configuration("max generations must be at least 1".to_string()));
        }

        if let Some(limit) = self.max_time.filter(|limit| !limit.is_finite() || *limit < 0.) {
            return Err(DeError::Configuration(format!("max time must be a non-negative finite number, got {limit}")));
        }

        if let Some(target) = self.target_cost.filter(|target| target.is_nan()) {
            return Err(DeError::Configuration(format!("target cost must be a number, got {target}")));
        }

        let mutation = match self.mutation {
            Some(mutation) => {
                (logger)("configured to use a custom mutation");
                mutation
            }
            None => {
                let args = MutationArguments::new(self.weight, self.crossover, self.environment.random.as_ref())?
                    .with_crossover_kind(self.crossover_kind);
                (logger)(
                    format!(
                        "configured to use {:?} mutation with {:?} crossover, weight: {}, crossover rate: {}",
                        self.scheme, self.crossover_kind, self.weight, self.crossover
                    )
                    .as_str(),
                );
                Box::new(StandardMutation::new(self.scheme, args)) as Box<dyn MutationStrategy>
            }
        };

        let termination = match self.termination {
            Some(termination) => {
                (logger)("configured to use a custom termination");
                termination
            }
            None => get_termination(&logger, self.max_generations, self.max_time, self.target_cost, self.minimize),
        };

        let listener: Arc<dyn Listener> = match (self.listener, self.telemetry_mode) {
            (Some(listener), _) => listener,
            (None, Some(TelemetryMode::None)) => Arc::new(NullListener),
            (None, Some(TelemetryMode::OnlyLogging { logger, log_best })) => {
                Arc::new(LoggingListener::new(logger, log_best, self.minimize))
            }
            (None, None) => Arc::new(LoggingListener::new(logger.clone(), 100, self.minimize)),
        };

        (logger)(
            format!(
                "configured to use {} dimensions, population size: {}, workers: {worker_count}, minimize: {}",
                constraints.size(),
                self.population_size,
                self.minimize
            )
            .as_str(),
        );

        let pool = WorkerPool::new(worker_count, objective, listener.clone())?;

        Ok(DifferentialEvolution {
            constraints,
            population_size: self.population_size,
            minimize: self.minimize,
            pool,
            mutation,
            selection: self.selection.unwrap_or_else(|| Box::new(BestParentChildSelection)),
            termination,
            listener,
            environment: self.environment,
            state: EngineState::Init,
            population: None,
            best: None,
            generation: 0,
        })
    }
}

fn get_termination(
    logger: &InfoLogger,
    max_generations: Option<usize>,
    max_time: Option<Float>,
    target_cost: Option<Float>,
    minimize: bool,
) -> Box<dyn TerminationStrategy> {
    let mut terminations: Vec<Box<dyn TerminationStrategy>> = vec![];

    match (max_generations, max_time, target_cost) {
        (None, None, None) => {
            (logger)("configured to use default max-generations (1000)");
            terminations.push(Box::new(MaxGeneration::new(1000)));
        }
        _ => {
            if let Some(limit) = max_generations {
                (logger)(format!("configured to use max-generations: {limit}").as_str());
                terminations.push(Box::new(MaxGeneration::new(limit)));
            }

            if let Some(limit) = max_time {
                (logger)(format!("configured to use max-time: {limit}s").as_str());
                terminations.push(Box::new(MaxTime::new(limit)));
            }

            if let Some(target) = target_cost {
                (logger)(format!("configured to use target cost: {target}").as_str());
                terminations.push(Box::new(TargetCost::new(target, minimize)));
            }
        }
    }

    Box::new(CompositeTermination::new(terminations))
}
