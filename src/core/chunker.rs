use crate::utils::error::{Result, UtilsError};
use crate::utils::validation::{require_chunk_size, require_integer, require_list};
use serde_json::Value;

fn check_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(UtilsError::value_error("chunk_size must be greater than 0"));
    }
    Ok(())
}

/// Splits `data` into consecutive chunks of `chunk_size` elements.
///
/// Only the last chunk may be shorter. An empty slice yields no chunks.
///
/// ```
/// use small_utils::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn chunk<T: Clone>(data: &[T], chunk_size: usize) -> Result<Vec<Vec<T>>> {
    check_size(chunk_size)?;
    Ok(data.chunks(chunk_size).map(<[T]>::to_vec).collect())
}

/// Like [`chunk`], but moves the elements instead of cloning them.
pub fn chunk_owned<T>(data: Vec<T>, chunk_size: usize) -> Result<Vec<Vec<T>>> {
    check_size(chunk_size)?;

    let mut chunks = Vec::with_capacity(data.len().div_ceil(chunk_size));
    let mut current = Vec::with_capacity(chunk_size.min(data.len()));
    for item in data {
        current.push(item);
        if current.len() == chunk_size {
            chunks.push(std::mem::replace(&mut current, Vec::with_capacity(chunk_size)));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    Ok(chunks)
}

/// Chunks a JSON array. Both arguments are checked before any work is done.
pub fn chunk_value(data: &Value, chunk_size: &Value) -> Result<Value> {
    let items = require_list(data, "data must be a list")?;
    let size = require_integer(chunk_size, "chunk_size must be an integer")?;
    let size = require_chunk_size(size)?;

    tracing::debug!(items = items.len(), chunk_size = size, "chunking list");
    let chunks = chunk(items, size)?;
    Ok(Value::Array(chunks.into_iter().map(Value::Array).collect()))
}
