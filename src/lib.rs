pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::Invocation, CliConfig, Command};
pub use config::UtilsConfig;

pub use crate::core::{
    chunker::{chunk, chunk_owned, chunk_value},
    flattener::{flatten, flatten_value},
    operation::Operation,
    timing::{with_timing, StderrSink, Timed, TimingConfig, WriterSink},
};
pub use domain::{
    model::{Nested, TimingReport},
    ports::ReportSink,
};
pub use utils::error::{ErrorKind, Result, UtilsError};
