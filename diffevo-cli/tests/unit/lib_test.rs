use super::*;
use std::io::BufWriter;

#[test]
fn can_create_result_from_evaluated_individual() {
    let mut best = Individual::new(vec![0.5, -1.]);
    assert!(SolveResult::new(&best, 10).is_err());

    best.set_cost(1.25);
    let result = SolveResult::new(&best, 10).unwrap();

    assert_eq!(result.cost, 1.25);
    assert_eq!(result.vars, vec![0.5, -1.]);
    assert_eq!(result.generations, 10);
}

#[test]
fn can_write_result_as_json() {
    let result = SolveResult { cost: 0.5, vars: vec![1., 2.], generations: 3 };
    let mut writer = BufWriter::new(Vec::new());

    write_result(&result, &mut writer).unwrap();

    let json = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(json.as_str()).unwrap();
    assert_eq!(value["cost"], 0.5);
    assert_eq!(value["vars"], serde_json::json!([1., 2.]));
    assert_eq!(value["generations"], 3);
}
