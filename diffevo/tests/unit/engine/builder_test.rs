use super::*;
use crate::constraints::{Constraint, SetConstraint};
use crate::example::SphereFunction;
use crate::helpers::utils::create_test_environment;
use std::sync::Mutex;

fn create_valid_builder() -> EngineBuilder {
    EngineBuilder::default()
        .with_objective(Arc::new(SphereFunction))
        .with_constraints(ConstraintSet::with_default(2, -10., 10.))
        .with_worker_count(2)
        .with_environment(Arc::new(create_test_environment(0)))
}

fn create_logging_environment() -> (Arc<Environment>, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (Arc::new(Environment { logger, ..create_test_environment(0) }), messages)
}

parameterized_test! {can_reject_wrong_configuration, (modify, expected), {
    let result = modify(create_valid_builder()).build();

    assert_eq!(result.err(), Some(DeError::Configuration(expected.to_string())));
}}

can_reject_wrong_configuration! {
    case_01_no_objective: (|_: EngineBuilder| EngineBuilder::default().with_constraints(ConstraintSet::with_default(2, 0., 1.)),
        "missing objective function"),
    case_02_no_constraints: (|_: EngineBuilder| EngineBuilder::default().with_objective(Arc::new(SphereFunction)),
        "missing constraints"),
    case_03_empty_constraints: (|b: EngineBuilder| b.with_constraints(ConstraintSet::new(vec![])),
        "dimension count must be greater than zero"),
    case_04_dimension_mismatch: (|b: EngineBuilder| b.with_dimension_count(3),
        "dimension count 3 does not match amount of constraints 2"),
    case_05_inverted_bounds: (|b: EngineBuilder| b.with_constraints(ConstraintSet::with_default(1, 1., 0.)),
        "constraint at 0: range [1, 0] has min > max"),
    case_06_empty_set: (|b: EngineBuilder| b.with_constraints(ConstraintSet::new(vec![Box::new(SetConstraint::default()) as Box<dyn Constraint>])),
        "constraint at 0: set constraint has no values"),
    case_07_small_population: (|b: EngineBuilder| b.with_population_size(3),
        "population size must be at least 4, got 3"),
    case_08_no_workers: (|b: EngineBuilder| b.with_worker_count(0),
        "worker count must be at least 1"),
    case_09_zero_generations: (|b: EngineBuilder| b.with_max_generations(Some(0)),
        "max generations must be at least 1"),
    case_10_zero_weight: (|b: EngineBuilder| b.with_mutation_weight(0.),
        "mutation weight must be in (0, 2] range, got 0"),
    case_11_big_crossover: (|b: EngineBuilder| b.with_crossover_rate(1.5),
        "crossover rate must be in [0, 1] range, got 1.5"),
    case_12_negative_max_time: (|b: EngineBuilder| b.with_max_time(Some(-1.)),
        "max time must be a non-negative finite number, got -1"),
    case_13_nan_max_time: (|b: EngineBuilder| b.with_max_time(Some(Float::NAN)),
        "max time must be a non-negative finite number, got NaN"),
    case_14_nan_target_cost: (|b: EngineBuilder| b.with_target_cost(Some(Float::NAN)),
        "target cost must be a number, got NaN"),
}

#[test]
fn can_build_with_defaults() {
    let engine = create_valid_builder().with_dimension_count(2).build().unwrap();

    assert_eq!(engine.state(), &EngineState::Init);
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.constraints().size(), 2);
    assert!(engine.is_minimize());
    assert!(engine.population().is_none());
    assert!(engine.best().is_none());
}

#[test]
fn can_use_environment_parallelism_as_default_worker_count() {
    let environment = Environment { parallelism: 0, ..create_test_environment(0) };
    let builder = EngineBuilder::default()
        .with_objective(Arc::new(SphereFunction))
        .with_constraints(ConstraintSet::with_default(2, -10., 10.))
        .with_environment(Arc::new(environment));

    assert_eq!(builder.build().err(), Some(DeError::Configuration("worker count must be at least 1".to_string())));
}

#[test]
fn can_log_configuration() {
    let (environment, messages) = create_logging_environment();

    create_valid_builder().with_environment(environment).build().unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|msg| msg == "configured to use default max-generations (1000)"));
    assert!(messages.iter().any(|msg| msg.starts_with("configured to use RandOne mutation with Binomial crossover")));
    assert!(messages.iter().any(|msg| msg.contains("2 dimensions, population size: 20, workers: 2")));
}

#[test]
fn can_log_combined_termination() {
    let (environment, messages) = create_logging_environment();

    create_valid_builder()
        .with_environment(environment)
        .with_max_generations(Some(10))
        .with_max_time(Some(60.))
        .with_target_cost(Some(0.1))
        .build()
        .unwrap();

    let messages = messages.lock().unwrap();
    assert!(messages.iter().any(|msg| msg == "configured to use max-generations: 10"));
    assert!(messages.iter().any(|msg| msg == "configured to use max-time: 60s"));
    assert!(messages.iter().any(|msg| msg == "configured to use target cost: 0.1"));
    assert!(!messages.iter().any(|msg| msg.contains("default max-generations")));
}

#[test]
fn can_use_logging_telemetry() {
    let (environment, messages) = create_logging_environment();
    let mut engine = create_valid_builder()
        .with_population_size(5)
        .with_max_generations(Some(4))
        .with_telemetry_mode(TelemetryMode::OnlyLogging { logger: environment.logger.clone(), log_best: 2 })
        .build()
        .unwrap();

    engine.run().unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.iter().filter(|msg| msg.contains("generation") && msg.contains("is completed")).count(), 2);
    assert!(messages.iter().any(|msg| msg.contains("evaluated initial population of 5 individuals")));
    assert!(messages.iter().any(|msg| msg.contains("run is completed in")));
}

#[test]
fn can_disable_telemetry() {
    let (environment, messages) = create_logging_environment();
    let mut engine = create_valid_builder()
        .with_environment(environment)
        .with_population_size(5)
        .with_max_generations(Some(3))
        .with_telemetry_mode(TelemetryMode::None)
        .build()
        .unwrap();
    let configuration_messages = messages.lock().unwrap().len();

    engine.run().unwrap();

    assert_eq!(messages.lock().unwrap().len(), configuration_messages);
}

#[test]
fn can_use_custom_mutation() {
    struct CopyMutation;

    impl MutationStrategy for CopyMutation {
        fn mutate(&self, context: &MutationContext, target_index: usize) -> DeResult<Individual> {
            context.population.get(target_index).map(|individual| Individual::new(individual.vars().to_vec())).ok_or(
                DeError::OutOfRange { index: target_index, size: context.population.size() },
            )
        }
    }

    let mut engine = create_valid_builder()
        .with_mutation(Box::new(CopyMutation))
        .with_max_generations(Some(3))
        .with_telemetry_mode(TelemetryMode::None)
        .build()
        .unwrap();

    engine.step();
    engine.step();
    let initial = engine.population().cloned().unwrap();
    engine.run().unwrap();

    assert_eq!(engine.population(), Some(&initial));
}
