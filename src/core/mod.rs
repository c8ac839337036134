pub mod chunker;
pub mod flattener;
pub mod operation;
pub mod timing;

pub use crate::domain::model::{Nested, TimingReport};
pub use crate::domain::ports::ReportSink;
pub use crate::utils::error::Result;
