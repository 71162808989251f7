//! Run configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use diffevo::example::{RosenbrockFunction, RouteFunction, SphereFunction};
use diffevo::prelude::*;
use diffevo::utils::get_cpus;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A run configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies a built-in objective function.
    pub function: FunctionType,
    /// Specifies amount of dimensions. Default is amount of variable definitions.
    pub dimensions: Option<usize>,
    /// Specifies population size. Default is 20.
    pub population_size: Option<usize>,
    /// Specifies amount of evaluation workers. Default is number of cpus.
    pub workers: Option<usize>,
    /// Specifies optimization direction. Default is true.
    pub minimize: Option<bool>,
    /// Specifies random seed for repeatable runs.
    pub seed: Option<u64>,
    /// Specifies mutation configuration.
    pub mutation: Option<MutationConfig>,
    /// Specifies selection type.
    pub selection: Option<SelectionType>,
    /// Specifies termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies search space constraints.
    pub constraints: Option<ConstraintsConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A built-in objective function.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
pub enum FunctionType {
    /// A sum of squares.
    #[serde(rename(deserialize = "sphere"))]
    Sphere,
    /// A sum of cubes of the first three variables.
    #[serde(rename(deserialize = "route"))]
    Route,
    /// A Rosenbrock function.
    #[serde(rename(deserialize = "rosenbrock"))]
    Rosenbrock,
}

/// A mutation configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MutationConfig {
    /// Mutation scheme. Default is `rand-one`.
    #[serde(rename(deserialize = "type"))]
    pub scheme: Option<MutationSchemeType>,
    /// Mutation weight (F). Default is 0.5.
    pub weight: Option<Float>,
    /// Crossover rate (CR). Default is 0.9.
    pub crossover: Option<Float>,
    /// Crossover kind. Default is `binomial`.
    pub crossover_kind: Option<CrossoverKindType>,
}

/// A mutation scheme.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
pub enum MutationSchemeType {
    /// `x_r1 + F * (x_r2 - x_r3)`.
    #[serde(rename(deserialize = "rand-one"))]
    RandOne,
    /// `x_i + F * (best - x_i) + F * (x_r2 - x_r3)`.
    #[serde(rename(deserialize = "current-to-best-one"))]
    CurrentToBestOne,
    /// `best + (F + jitter) * (x_r2 - x_r3)`.
    #[serde(rename(deserialize = "best-one-jitter"))]
    BestOneJitter,
    /// Rand one with dither factor sampled per trial.
    #[serde(rename(deserialize = "rand-one-vector-dither"))]
    RandOneVectorDither,
    /// Rand one with dither factor sampled once.
    #[serde(rename(deserialize = "rand-one-dither"))]
    RandOneDither,
}

/// A crossover kind.
#[derive(Clone, Copy, Deserialize, Debug, PartialEq, Eq)]
pub enum CrossoverKindType {
    /// Binomial crossover.
    #[serde(rename(deserialize = "binomial"))]
    Binomial,
    /// Exponential crossover.
    #[serde(rename(deserialize = "exponential"))]
    Exponential,
}

/// A selection configuration.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SelectionType {
    /// Keeps the better one of parent and its trial.
    #[serde(rename(deserialize = "best-parent-child"))]
    BestParentChild,
    /// Keeps the best individuals of merged parents and trials.
    #[serde(rename(deserialize = "elitist"))]
    Elitist,
}

/// A termination configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max amount of generations.
    pub max_generations: Option<usize>,
    /// Target cost of the best individual.
    pub target_cost: Option<Float>,
    /// Max running time in seconds.
    pub max_time: Option<Float>,
}

/// A search space configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintsConfig {
    /// A constraint used for dimensions without variable definition.
    pub default: Option<DefaultConstraintConfig>,
    /// Variable definitions in `type;min;max` format, one per dimension.
    pub variables: Option<Vec<String>>,
}

/// A default constraint configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct DefaultConstraintConfig {
    /// Constraint type: `real` or `int`. Default is `real`.
    #[serde(rename(deserialize = "type"))]
    pub kind: Option<String>,
    /// Lower bound.
    pub min: Float,
    /// Upper bound.
    pub max: Float,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies whether logging is enabled. Default is true.
    pub enabled: Option<bool>,
    /// Specifies how often best individual is logged. Default is 100 (generations).
    pub log_best: Option<usize>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates an environment from config.
pub fn create_environment(config: &Config, logger: InfoLogger) -> Arc<Environment> {
    let random: Arc<dyn Random> = match config.seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    Arc::new(Environment::new(random, get_cpus(), logger))
}

/// Creates an engine builder from config file.
pub fn create_builder_from_config_file<R: Read>(
    reader: BufReader<R>,
    logger: InfoLogger,
) -> Result<EngineBuilder, String> {
    read_config(reader).and_then(|config| create_builder_from_config(&config, create_environment(&config, logger)))
}

/// Creates an engine builder from config.
pub fn create_builder_from_config(config: &Config, environment: Arc<Environment>) -> Result<EngineBuilder, String> {
    let mut builder = EngineBuilder::default()
        .with_objective(create_objective(config.function))
        .with_constraints(create_constraints(config)?)
        .with_minimize(config.minimize.unwrap_or(true));

    if let Some(dimensions) = config.dimensions {
        builder = builder.with_dimension_count(dimensions);
    }

    if let Some(population_size) = config.population_size {
        builder = builder.with_population_size(population_size);
    }

    if let Some(workers) = config.workers {
        builder = builder.with_worker_count(workers);
    }

    builder = configure_from_telemetry(builder, &config.telemetry, &environment);
    builder = configure_from_mutation(builder, &config.mutation);
    builder = configure_from_selection(builder, &config.selection);
    builder = configure_from_termination(builder, &config.termination);

    Ok(builder.with_environment(environment))
}

fn create_objective(function: FunctionType) -> Arc<dyn ObjectiveFunction> {
    match function {
        FunctionType::Sphere => Arc::new(SphereFunction),
        FunctionType::Route => Arc::new(RouteFunction),
        FunctionType::Rosenbrock => Arc::new(RosenbrockFunction),
    }
}

fn create_constraints(config: &Config) -> Result<ConstraintSet, String> {
    let default = config.constraints.as_ref().and_then(|constraints| constraints.default.as_ref());
    let variables = config.constraints.as_ref().and_then(|constraints| constraints.variables.clone()).unwrap_or_default();
    let dimensions = config.dimensions.unwrap_or(variables.len());

    let definitions = (0..dimensions.max(variables.len()))
        .map(|idx| match (variables.get(idx), default) {
            (Some(variable), _) => Ok(variable.clone()),
            (None, Some(default)) => {
                Ok(format!("{};{};{}", default.kind.as_deref().unwrap_or("real"), default.min, default.max))
            }
            (None, None) => Err(format!("no constraint is defined for dimension {idx}")),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let definitions = definitions.iter().map(|definition| definition.as_str()).collect::<Vec<_>>();

    ConstraintSet::parse(definitions.as_slice(), 0, 0., 0.).map_err(|err| err.to_string())
}

fn configure_from_mutation(mut builder: EngineBuilder, mutation_config: &Option<MutationConfig>) -> EngineBuilder {
    if let Some(config) = mutation_config {
        if let Some(weight) = config.weight {
            builder = builder.with_mutation_weight(weight);
        }

        if let Some(crossover) = config.crossover {
            builder = builder.with_crossover_rate(crossover);
        }

        if let Some(scheme) = config.scheme {
            builder = builder.with_mutation_scheme(match scheme {
                MutationSchemeType::RandOne => MutationScheme::RandOne,
                MutationSchemeType::CurrentToBestOne => MutationScheme::CurrentToBestOne,
                MutationSchemeType::BestOneJitter => MutationScheme::BestOneJitter,
                MutationSchemeType::RandOneVectorDither => MutationScheme::RandOneVectorDither,
                MutationSchemeType::RandOneDither => MutationScheme::RandOneDither,
            });
        }

        if let Some(kind) = config.crossover_kind {
            builder = builder.with_crossover_kind(match kind {
                CrossoverKindType::Binomial => CrossoverKind::Binomial,
                CrossoverKindType::Exponential => CrossoverKind::Exponential,
            });
        }
    }

    builder
}

fn configure_from_selection(builder: EngineBuilder, selection_config: &Option<SelectionType>) -> EngineBuilder {
    match selection_config {
        Some(SelectionType::Elitist) => builder.with_selection(Box::new(ElitistSelection)),
        Some(SelectionType::BestParentChild) => builder.with_selection(Box::new(BestParentChildSelection)),
        None => builder,
    }
}

fn configure_from_termination(builder: EngineBuilder, termination_config: &Option<TerminationConfig>) -> EngineBuilder {
    if let Some(config) = termination_config {
        builder
            .with_max_generations(config.max_generations)
            .with_max_time(config.max_time)
            .with_target_cost(config.target_cost)
    } else {
        builder
    }
}

fn configure_from_telemetry(
    builder: EngineBuilder,
    telemetry_config: &Option<TelemetryConfig>,
    environment: &Environment,
) -> EngineBuilder {
    const LOG_BEST: usize = 100;

    let mode = match telemetry_config {
        Some(TelemetryConfig { enabled: Some(false), .. }) => TelemetryMode::None,
        Some(TelemetryConfig { log_best, .. }) => {
            TelemetryMode::OnlyLogging { logger: environment.logger.clone(), log_best: log_best.unwrap_or(LOG_BEST) }
        }
        None => TelemetryMode::None,
    };

    builder.with_telemetry_mode(mode)
}
