use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A leaf value or a list of further nested values.
///
/// Untagged, so a JSON array decodes as `List` and anything else as `Leaf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    List(Vec<Nested<T>>),
    Leaf(T),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    pub fn list(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Self::List(items.into_iter().collect())
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Self::List(items)
    }
}

/// Record of a single timed invocation.
#[derive(Debug, Clone, Serialize)]
pub struct TimingReport {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Monotonic duration, independent of wall-clock adjustments
    pub elapsed: Duration,
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Function '{}' executed in {:.2} seconds",
            self.name,
            self.elapsed.as_secs_f64()
        )
    }
}
