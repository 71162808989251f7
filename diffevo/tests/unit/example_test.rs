use super::*;

parameterized_test! {can_evaluate_sphere, (vars, expected), {
    assert_eq!(SphereFunction.evaluate(vars.as_slice()), Ok(expected));
}}

can_evaluate_sphere! {
    case_01_origin: (vec![0., 0.], 0.),
    case_02_simple: (vec![1., -2., 3.], 14.),
    case_03_empty: (vec![], 0.),
}

parameterized_test! {can_evaluate_route, (vars, expected), {
    assert_eq!(RouteFunction.evaluate(vars.as_slice()), Ok(expected));
}}

can_evaluate_route! {
    case_01_three: (vec![1., 2., 3.], 36.),
    case_02_negative: (vec![-1., 0., 2.], 7.),
    case_03_extra_ignored: (vec![1., 1., 1., 100.], 3.),
}

#[test]
fn can_reject_short_route_input() {
    let result = RouteFunction.evaluate(&[1., 2.]);

    assert_eq!(
        result.map_err(|err| err.to_string()),
        Err("route evaluation function expects at least 3 variables, got 2".to_string())
    );
}

#[test]
fn can_evaluate_rosenbrock() {
    assert_eq!(RosenbrockFunction.evaluate(&[1., 1., 1.]), Ok(0.));
    assert_eq!(RosenbrockFunction.evaluate(&[0., 0.]), Ok(1.));
    assert!(RosenbrockFunction.evaluate(&[1.]).is_err());
}

#[test]
fn can_use_closure_as_objective_function() {
    let objective = |vars: &[Float]| -> GenericResult<Float> { Ok(vars.len() as Float) };

    assert_eq!(objective.evaluate(&[1., 2.]), Ok(2.));
    assert_eq!(objective.name(), "objective function");
    assert_eq!(SphereFunction.name(), "sphere function");
}
