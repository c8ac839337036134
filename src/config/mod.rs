#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::UtilsConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-utils")]
#[command(about = "Chunk and flatten JSON lists, optionally timing each call")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, global = true, help = "Report the execution time of the operation")]
    pub time: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Split a JSON list into chunks
    Chunk {
        #[arg(allow_negative_numbers = true)]
        input: String,
        /// Chunk size; defaults to `chunk.default_size` from the config
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<String>,
    },
    /// Flatten a nested JSON list
    Flatten {
        #[arg(allow_negative_numbers = true)]
        input: String,
    },
    /// Run a function by name through the timing wrapper
    Time {
        function: String,
        #[arg(allow_negative_numbers = true)]
        input: String,
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<String>,
    },
}
