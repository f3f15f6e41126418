mod cli;
mod commands;
mod inspect;
mod settings;

use std::process::ExitCode;

use dockyard_common::ConfigError;
use dockyard_config::DockyardConfig;
use tracing_subscriber::EnvFilter;

/// Load the config named on the command line, or the platform default.
fn load_config(args: &cli::Args) -> Result<DockyardConfig, ConfigError> {
    match &args.config {
        Some(path) => dockyard_config::load_config_from(path),
        None => dockyard_config::load_config(),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Loaded before logging so the configured level can seed the filter.
    let loaded = load_config(&args);

    let default_directive = match &loaded {
        Ok(config) => format!("dockyard={}", config.logging.level.as_directive()),
        Err(_) => "dockyard=info".to_string(),
    };
    let log_directive = args.log_level.as_deref().unwrap_or(&default_directive);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "dockyard=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("dockyard v{} starting", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DockyardConfig::default()
    });

    match commands::run(&args.command, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
