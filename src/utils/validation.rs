use crate::utils::error::{Result, UtilsError};
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Borrow the elements of a JSON array, or fail with a TypeKind error carrying `message`.
pub fn require_list<'a>(value: &'a Value, message: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| UtilsError::type_error(message))
}

/// Accepts JSON integers only. `2.0`, `"2"`, `true` and `null` are all rejected.
pub fn require_integer(value: &Value, message: &str) -> Result<i64> {
    match value {
        Value::Number(n) if n.is_i64() => n.as_i64().ok_or_else(|| UtilsError::type_error(message)),
        // above i64::MAX, still an integer and certainly >= 1
        Value::Number(n) if n.is_u64() => Ok(i64::MAX),
        _ => Err(UtilsError::type_error(message)),
    }
}

pub fn require_chunk_size(size: i64) -> Result<usize> {
    if size < 1 {
        return Err(UtilsError::value_error("chunk_size must be greater than 0"));
    }
    Ok(usize::try_from(size).unwrap_or(usize::MAX))
}

pub fn validate_positive_number(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(UtilsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
