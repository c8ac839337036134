use anyhow::Context;
use clap::Parser;
use small_utils::utils::{logger, validation::Validate};
use small_utils::{CliConfig, UtilsConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => UtilsConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => UtilsConfig::default(),
    };

    // 初始化日誌
    if cli.json_logs(&config) {
        logger::init_json_logger(cli.verbose(&config));
    } else {
        logger::init_cli_logger(cli.verbose(&config));
    }

    config
        .validate()
        .context("Configuration validation failed")?;
    tracing::debug!("Config: {:?}", config);

    match cli.execute(&config) {
        Ok(output) => {
            println!("{}", serde_json::to_string(&output)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Operation failed: {} (Kind: {:?})", e, e.kind());
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
