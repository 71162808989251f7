use super::*;
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;

#[test]
fn can_ignore_duplicates_in_set() {
    let mut constraint = SetConstraint::new(&[3., 1., 3., 2.]);
    constraint.add_value(1.);
    constraint.add_value(5.);

    assert_eq!(constraint.values(), &[3., 1., 2., 5.]);
    assert_eq!(constraint.min(), 1.);
    assert_eq!(constraint.max(), 5.);
}

#[test]
fn can_validate_set_constraint() {
    assert!(SetConstraint::new(&[1.]).validate().is_ok());
    assert!(SetConstraint::new(&[]).validate().is_err());
    assert!(SetConstraint::new(&[1., Float::INFINITY]).validate().is_err());
    assert!(SetConstraint::default().min().is_nan());
}

#[test]
fn can_sample_only_set_values() {
    let constraint = SetConstraint::new(&[-1., 0.5, 7.]);
    let random = DefaultRandom::new_repeatable(0);

    let values = (0..300).map(|_| constraint.random_value(&random)).collect::<Vec<_>>();

    assert!(values.iter().all(|&value| constraint.is_satisfied(value)));
    assert!(constraint.values().iter().all(|expected| values.contains(expected)));
}

#[test]
fn can_repair_set_value() {
    let constraint = SetConstraint::new(&[-1., 0.5, 7.]);

    assert_eq!(constraint.repair(0.5, 7., &FakeRandom::new(vec![], vec![])), 0.5);
    assert_eq!(constraint.repair(0.4, 7., &FakeRandom::new(vec![2], vec![])), 7.);
    assert_eq!(constraint.repair(Float::NAN, 7., &FakeRandom::new(vec![0], vec![])), -1.);
}

#[test]
fn can_reject_zone_and_middle_for_discrete_constraints() {
    let random = DefaultRandom::new_repeatable(0);

    assert!(SetConstraint::new(&[1., 2.]).random_value_in_zone(1., 50., &random).is_err());
    assert!(SetConstraint::new(&[1., 2.]).middle_point().is_err());
    assert!(BooleanConstraint.random_value_in_zone(1., 50., &random).is_err());
    assert!(BooleanConstraint.middle_point().is_err());
}

#[test]
fn can_sample_boolean_values() {
    let random = FakeRandom::new(vec![1, 0], vec![]);

    assert_eq!(BooleanConstraint.random_value(&random), 1.);
    assert_eq!(BooleanConstraint.random_value(&random), 0.);
}

parameterized_test! {can_repair_boolean_value, (value, ints, expected), {
    let random = FakeRandom::new(ints, vec![]);

    assert_eq!(BooleanConstraint.repair(value, 1., &random), expected);
}}

can_repair_boolean_value! {
    case_01_zero: (0., vec![], 0.),
    case_02_one: (1., vec![], 1.),
    case_03_invalid_to_one: (0.5, vec![1], 1.),
    case_04_invalid_to_zero: (-3., vec![0], 0.),
}
