use anyhow::Result;
use serde_json::{json, Value};
use small_utils::{flatten, flatten_value, Nested, UtilsError};

#[test]
fn test_flatten_documented_scenarios() -> Result<()> {
    assert_eq!(flatten_value(&json!([1, [2, [3, 4]], 5]))?, json!([1, 2, 3, 4, 5]));
    assert_eq!(flatten_value(&json!([[], [1], [[2]]]))?, json!([1, 2]));
    assert_eq!(flatten_value(&json!([]))?, json!([]));
    assert_eq!(flatten_value(&json!([[[]]]))?, json!([]));
    assert_eq!(flatten_value(&json!([1, 2, 3]))?, json!([1, 2, 3]));
    Ok(())
}

#[test]
fn test_flatten_is_idempotent_on_flat_output() -> Result<()> {
    let inputs = [
        json!([1, [2, [3, [4, [5]]]]]),
        json!([["a"], "b", [["c", []], "d"]]),
        json!([[null], [[false]], 0]),
    ];
    for input in inputs {
        let once = flatten_value(&input)?;
        let twice = flatten_value(&once)?;
        assert_eq!(once, twice);
        assert!(once.as_array().unwrap().iter().all(|v| !v.is_array()));
    }
    Ok(())
}

#[test]
fn test_flatten_typed_from_json() -> Result<()> {
    let nested: Vec<Nested<String>> = serde_json::from_str(r#"["a", ["b", ["c"]], [], "d"]"#)?;
    assert_eq!(flatten(nested), vec!["a", "b", "c", "d"]);
    Ok(())
}

#[test]
fn test_flatten_deep_json_input() -> Result<()> {
    let mut value = json!(["leaf"]);
    for _ in 0..1_000 {
        value = Value::Array(vec![value]);
    }
    assert_eq!(flatten_value(&value)?, json!(["leaf"]));
    Ok(())
}

#[test]
fn test_flatten_value_rejects_non_list() {
    for input in [json!("not_a_list"), json!(5), json!({"a": [1]}), Value::Null] {
        let err = flatten_value(&input).unwrap_err();
        assert!(matches!(err, UtilsError::TypeError { .. }));
        assert_eq!(err.to_string(), "nested_list must be a list");
    }
}
