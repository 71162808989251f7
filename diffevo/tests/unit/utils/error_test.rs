use super::*;

#[test]
fn can_join_many_errors() {
    let errs = vec![GenericError::from("first"), GenericError::from("second".to_string())];

    assert_eq!(GenericError::join_many(&errs, ", "), "first, second");
}

parameterized_test! {can_classify_errors, (error, is_configuration), {
    assert_eq!(error.is_configuration(), is_configuration);
}}

can_classify_errors! {
    case_01_configuration: (DeError::Configuration("bad".to_string()), true),
    case_02_dimension: (DeError::DimensionMismatch { expected: 2, actual: 3 }, true),
    case_03_out_of_range: (DeError::OutOfRange { index: 5, size: 2 }, true),
    case_04_evaluation: (DeError::Evaluation { index: 0, message: "boom".to_string() }, false),
}

#[test]
fn can_convert_generic_error_into_configuration_error() {
    let error: DeError = GenericError::from("min > max").into();

    assert_eq!(error, DeError::Configuration("min > max".to_string()));
}

#[test]
fn can_display_errors() {
    assert_eq!(
        DeError::DimensionMismatch { expected: 2, actual: 3 }.to_string(),
        "dimension mismatch: expected 2, got 3"
    );
    assert_eq!(
        DeError::Evaluation { index: 4, message: "boom".to_string() }.to_string(),
        "objective function error at batch index 4: boom"
    );
}
