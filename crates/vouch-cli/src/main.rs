//! Vouch CLI entry point

use clap::Parser;
use tracing::error;

use vouch_cli::{Cli, CliConfig, CommandDispatcher, Result};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = match load_configuration(&cli) {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = CommandDispatcher::execute(cli, config) {
        error!("{}", err);
        std::process::exit(1);
    }
}

/// Setup logging based on verbosity level
///
/// Logs go to stderr; stdout is reserved for command output and reports.
fn setup_logging(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load configuration from file or use defaults
fn load_configuration(cli: &Cli) -> Result<CliConfig> {
    if let Some(config_path) = &cli.config {
        CliConfig::load_from_file(config_path)
    } else {
        Ok(CliConfig::default())
    }
}
