use super::*;
use crate::helpers::models::{create_individual, create_population, create_population_with_costs};
use crate::utils::{DefaultRandom, Float};

#[test]
fn can_create_random_population() {
    let constraints = ConstraintSet::with_default(4, -3., 3.);

    let population = Population::new_random(10, &constraints, &DefaultRandom::new_repeatable(0)).unwrap();

    assert_eq!(population.size(), 10);
    assert!(population.iter().all(|individual| !individual.is_evaluated()));
    assert!(population.iter().all(|individual| constraints.is_satisfied(individual.vars())));
}

parameterized_test! {can_find_best_index, (costs, minimize, expected), {
    let population = create_population_with_costs(costs.as_slice());

    assert_eq!(population.best_index(minimize), expected);
}}

can_find_best_index! {
    case_01_min: (vec![3., 1., 2.], true, Some(1)),
    case_02_max: (vec![3., 1., 2.], false, Some(0)),
    case_03_ties_first: (vec![2., 1., 1.], true, Some(1)),
    case_04_empty: (vec![], true, None),
    case_05_nan_first_min: (vec![Float::NAN, 1.], true, Some(1)),
    case_06_nan_first_max: (vec![Float::NAN, -1.], false, Some(1)),
    case_07_nan_all: (vec![Float::NAN, Float::NAN], true, Some(0)),
}

#[test]
fn can_prefer_evaluated_individual_as_best() {
    let population = Population::new(vec![create_individual(vec![0.], None), create_individual(vec![1.], Some(10.))]);

    assert_eq!(population.best(true).and_then(|best| best.cost()), Some(10.));
}

#[test]
fn can_replace_all_individuals() {
    let mut population = create_population(vec![vec![0.], vec![1.]]);

    population.replace_all(vec![create_individual(vec![2.], Some(2.)), create_individual(vec![3.], Some(3.))]).unwrap();

    assert_eq!(population.get(1).map(|individual| individual.vars().to_vec()), Some(vec![3.]));
    assert!(population.replace_all(vec![create_individual(vec![2.], None)]).is_err());
    assert_eq!(population.size(), 2);
}

#[test]
fn can_display_population() {
    let population = Population::new(vec![create_individual(vec![1.], Some(1.)), create_individual(vec![2.], None)]);

    assert_eq!(population.to_string(), "cost: 1, vars: [1]\ncost: n/a, vars: [2]\n");
}
