use super::*;
use crate::constraints::IntConstraint;
use crate::helpers::models::create_individual;
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;

#[test]
fn can_init_individual_within_constraints() {
    let mut constraints = ConstraintSet::with_default(3, -1., 1.);
    constraints.set(2, Box::new(IntConstraint::new(0., 5.))).unwrap();
    let mut individual = create_individual(vec![0.; 3], Some(1.));

    individual.init(&constraints, &DefaultRandom::new_repeatable(0)).unwrap();

    assert!(!individual.is_evaluated());
    assert!(constraints.is_satisfied(individual.vars()));
}

#[test]
fn can_reject_init_with_wrong_dimension() {
    let constraints = ConstraintSet::with_default(3, -1., 1.);
    let mut individual = Individual::with_size(2);

    let result = individual.init(&constraints, &DefaultRandom::new_repeatable(0));

    assert_eq!(result, Err(DeError::DimensionMismatch { expected: 3, actual: 2 }));
}

#[test]
fn can_ensure_constraints() {
    let constraints = ConstraintSet::with_default(3, 0., 10.);
    let mut individual = Individual::new(vec![-2., 5., 14.]);
    let random = FakeRandom::new(vec![], vec![0.5, 0.5]);

    individual.ensure_constraints(&constraints, &[4., 1., 6.], &random).unwrap();

    assert_eq!(individual.vars(), &[2., 5., 8.]);
}

#[test]
fn can_reject_ensure_constraints_with_wrong_origin() {
    let constraints = ConstraintSet::with_default(2, 0., 10.);
    let mut individual = Individual::new(vec![1., 2.]);

    let result = individual.ensure_constraints(&constraints, &[1.], &DefaultRandom::new_repeatable(0));

    assert_eq!(result, Err(DeError::DimensionMismatch { expected: 2, actual: 1 }));
}

#[test]
fn can_reset_cost_on_vars_change() {
    let mut individual = create_individual(vec![1., 2.], Some(5.));
    assert_eq!(individual.cost(), Some(5.));

    individual.vars_mut()[0] = 3.;

    assert_eq!(individual.cost(), None);
    assert_eq!(individual.vars(), &[3., 2.]);
    assert_eq!(individual.size(), 2);
}

parameterized_test! {can_compare_individuals, (left, right, minimize, expected), {
    let left = create_individual(vec![0.], left);
    let right = create_individual(vec![0.], right);

    assert_eq!(left.better(&right, minimize), expected);
}}

can_compare_individuals! {
    case_01_min_better: (Some(1.), Some(2.), true, true),
    case_02_min_worse: (Some(3.), Some(2.), true, false),
    case_03_min_equal: (Some(2.), Some(2.), true, false),
    case_04_max_better: (Some(3.), Some(2.), false, true),
    case_05_max_worse: (Some(1.), Some(2.), false, false),
    case_06_not_evaluated_left: (None, Some(2.), true, false),
    case_07_not_evaluated_right: (Some(2.), None, false, true),
    case_08_not_evaluated_both: (None, None, true, false),
    case_09_nan_left: (Some(Float::NAN), Some(2.), true, false),
    case_10_nan_right: (Some(2.), Some(Float::NAN), true, true),
    case_11_nan_right_max: (Some(-2.), Some(Float::NAN), false, true),
    case_12_nan_both: (Some(Float::NAN), Some(Float::NAN), true, false),
}

#[test]
fn can_compare_equal_individuals_as_better_or_equal() {
    let left = create_individual(vec![0.], Some(2.));
    let right = create_individual(vec![1.], Some(2.));

    assert!(left.better_or_equal(&right, true));
    assert!(right.better_or_equal(&left, false));
}

#[test]
fn can_display_individual() {
    assert_eq!(create_individual(vec![1., 2.5], Some(3.)).to_string(), "cost: 3, vars: [1, 2.5]");
    assert_eq!(Individual::new(vec![1.]).to_string(), "cost: n/a, vars: [1]");
}
