use crate::config::{CliConfig, Command, UtilsConfig};
use crate::core::operation::Operation;
use crate::core::timing::with_timing;
use crate::utils::error::Result;
use serde::Deserialize;
use serde_json::Value;

/// Reads a command-line argument as JSON, without a nesting depth limit.
///
/// Bare text such as `not_a_list` is kept as a JSON string, so the operation's
/// own type checks report it. Text starting with `[` or `{` must be valid JSON.
pub fn parse_json_arg(text: &str) -> Result<Value> {
    match parse_unbounded(text) {
        Ok(value) => Ok(value),
        Err(e) if text.trim_start().starts_with(['[', '{']) => Err(e.into()),
        Err(_) => Ok(Value::String(text.to_string())),
    }
}

fn parse_unbounded(text: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// A resolved command, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub operation: Operation,
    pub input: Value,
    pub chunk_size: Value,
    pub timed: bool,
}

impl CliConfig {
    pub fn verbose(&self, config: &UtilsConfig) -> bool {
        self.verbose || config.logging.verbose
    }

    pub fn json_logs(&self, config: &UtilsConfig) -> bool {
        self.json_logs || config.logging.json
    }

    pub fn invocation(&self, config: &UtilsConfig) -> Result<Invocation> {
        let always_time = self.time || config.timing.enabled;

        let (operation, input, size, timed) = match &self.command {
            Command::Chunk { input, size } => (Operation::Chunk, input, size.as_deref(), always_time),
            Command::Flatten { input } => (Operation::Flatten, input, None, always_time),
            Command::Time {
                function,
                input,
                size,
            } => (Operation::resolve(function)?, input, size.as_deref(), true),
        };

        let chunk_size = match size {
            Some(text) => parse_json_arg(text)?,
            None => Value::from(config.chunk.default_size),
        };

        Ok(Invocation {
            operation,
            input: parse_json_arg(input)?,
            chunk_size,
            timed,
        })
    }

    pub fn execute(&self, config: &UtilsConfig) -> Result<Value> {
        let invocation = self.invocation(config)?;
        tracing::debug!("Running {:?}", invocation);
        invocation.run()
    }
}

impl Invocation {
    pub fn run(&self) -> Result<Value> {
        let operation = self.operation;
        if self.timed {
            with_timing(operation.name(), || operation.apply(&self.input, &self.chunk_size))
                .try_call()
        } else {
            operation.apply(&self.input, &self.chunk_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::UtilsError;
    use clap::Parser;
    use serde_json::json;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_json_arg() {
        assert_eq!(parse_json_arg("[1, 2]").unwrap(), json!([1, 2]));
        assert_eq!(parse_json_arg("3").unwrap(), json!(3));
        assert_eq!(parse_json_arg("-1").unwrap(), json!(-1));
        assert_eq!(parse_json_arg("not_a_list").unwrap(), json!("not_a_list"));
    }

    #[test]
    fn test_parse_json_arg_rejects_malformed_lists() {
        let err = parse_json_arg("[1,2").unwrap_err();
        assert!(matches!(err, UtilsError::SerializationError(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(parse_json_arg("  {\"a\": ").is_err());
    }

    #[test]
    fn test_parse_json_arg_has_no_depth_limit() {
        let text = format!("{}7{}", "[".repeat(300), "]".repeat(300));
        let value = parse_json_arg(&text).unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_chunk_size_falls_back_to_config() {
        let cli = parse(&["small-utils", "chunk", "[1, 2, 3]"]);
        let mut config = UtilsConfig::default();
        config.chunk.default_size = 3;

        let invocation = cli.invocation(&config).unwrap();
        assert_eq!(invocation.operation, Operation::Chunk);
        assert_eq!(invocation.chunk_size, json!(3));
        assert!(!invocation.timed);
    }

    #[test]
    fn test_time_flag_and_config_enable_timing() {
        let cli = parse(&["small-utils", "--time", "flatten", "[[1]]"]);
        assert!(cli.invocation(&UtilsConfig::default()).unwrap().timed);

        let cli = parse(&["small-utils", "flatten", "[[1]]"]);
        let mut config = UtilsConfig::default();
        config.timing.enabled = true;
        assert!(cli.invocation(&config).unwrap().timed);
    }

    #[test]
    fn test_time_command_resolves_function() {
        let cli = parse(&["small-utils", "time", "chunk_list", "[1, 2, 3]", "--size", "2"]);
        let invocation = cli.invocation(&UtilsConfig::default()).unwrap();
        assert_eq!(invocation.operation, Operation::Chunk);
        assert!(invocation.timed);
        assert_eq!(invocation.run().unwrap(), json!([[1, 2], [3]]));

        let cli = parse(&["small-utils", "time", "chunk", "[1, 2]", "--size", "-1"]);
        assert_eq!(cli.invocation(&UtilsConfig::default()).unwrap().chunk_size, json!(-1));

        let cli = parse(&["small-utils", "time", "not_callable", "[]"]);
        let err = cli.invocation(&UtilsConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "func must be callable");
    }

    #[test]
    fn test_logging_flags_merge_with_config() {
        let cli = parse(&["small-utils", "-v", "flatten", "[]"]);
        let mut config = UtilsConfig::default();
        assert!(cli.verbose(&config));
        assert!(!cli.json_logs(&config));

        config.logging.json = true;
        assert!(cli.json_logs(&config));
    }
}
