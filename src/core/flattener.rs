use crate::domain::model::Nested;
use crate::utils::error::Result;
use crate::utils::validation::require_list;
use serde_json::Value;

/// Collapses arbitrarily nested lists into one flat list, depth-first and left to right.
///
/// Uses an explicit stack of iterators, so deep inputs cannot overflow the call stack.
pub fn flatten<T>(nested: Vec<Nested<T>>) -> Vec<T> {
    let mut flat = Vec::new();
    let mut stack = vec![nested.into_iter()];

    while let Some(items) = stack.last_mut() {
        match items.next() {
            Some(Nested::Leaf(value)) => flat.push(value),
            Some(Nested::List(children)) => stack.push(children.into_iter()),
            None => {
                stack.pop();
            }
        }
    }

    flat
}

/// Flattens a JSON array. Only the top level must be an array; every
/// non-array value below it is kept as a leaf.
pub fn flatten_value(nested: &Value) -> Result<Value> {
    let top = require_list(nested, "nested_list must be a list")?;

    let mut flat = Vec::new();
    let mut stack = vec![top.iter()];
    while let Some(items) = stack.last_mut() {
        match items.next() {
            Some(Value::Array(children)) => stack.push(children.iter()),
            Some(leaf) => flat.push(leaf.clone()),
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!(leaves = flat.len(), "flattened nested list");
    Ok(Value::Array(flat))
}

impl<T> Nested<T> {
    /// Leaf values in depth-first order. A bare leaf flattens to itself.
    pub fn flatten(self) -> Vec<T> {
        match self {
            Nested::List(items) => flatten(items),
            Nested::Leaf(value) => vec![value],
        }
    }
}
