use crate::core::chunker::chunk_value;
use crate::core::flattener::flatten_value;
use crate::utils::error::{Result, UtilsError};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The operations that can be looked up by name and run over JSON values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Chunk,
    Flatten,
}

impl Operation {
    pub const ALL: [Operation; 2] = [Operation::Chunk, Operation::Flatten];

    /// Accepts the full name (`chunk_list`) or the short alias (`chunk`).
    pub fn resolve(name: &str) -> Result<Self> {
        match name.trim() {
            "chunk_list" | "chunk" => Ok(Self::Chunk),
            "flatten_nested" | "flatten" => Ok(Self::Flatten),
            other => {
                tracing::debug!("No operation named '{}'", other);
                Err(UtilsError::type_error("func must be callable"))
            }
        }
    }

    /// Name used in timing reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chunk => "chunk_list",
            Self::Flatten => "flatten_nested",
        }
    }

    /// `chunk_size` is only read by [`Operation::Chunk`].
    pub fn apply(&self, input: &Value, chunk_size: &Value) -> Result<Value> {
        match self {
            Self::Chunk => chunk_value(input, chunk_size),
            Self::Flatten => flatten_value(input),
        }
    }
}

impl FromStr for Operation {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_names_and_aliases() {
        assert_eq!(Operation::resolve("chunk_list").unwrap(), Operation::Chunk);
        assert_eq!(Operation::resolve("chunk").unwrap(), Operation::Chunk);
        assert_eq!(Operation::resolve("flatten_nested").unwrap(), Operation::Flatten);
        assert_eq!("flatten".parse::<Operation>().unwrap(), Operation::Flatten);

        for op in Operation::ALL {
            assert_eq!(Operation::resolve(op.name()).unwrap(), op);
        }
    }

    #[test]
    fn test_resolve_unknown_is_not_callable() {
        let err = Operation::resolve("not_callable").unwrap_err();
        assert!(matches!(err, UtilsError::TypeError { .. }));
        assert_eq!(err.to_string(), "func must be callable");
    }

    #[test]
    fn test_apply_dispatches() {
        let chunked = Operation::Chunk.apply(&json!([1, 2, 3]), &json!(2)).unwrap();
        assert_eq!(chunked, json!([[1, 2], [3]]));

        let flat = Operation::Flatten.apply(&json!([1, [2]]), &Value::Null).unwrap();
        assert_eq!(flat, json!([1, 2]));
    }
}
