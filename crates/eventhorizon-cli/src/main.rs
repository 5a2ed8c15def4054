//! eventhorizon CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use eventhorizon_cli::cli::{Cli, Command, ConfigAction};
use eventhorizon_cli::commands;
use eventhorizon_cli::config::CliConfig;
use eventhorizon_cli::error::{CliError, CliResult};
use eventhorizon_core::tracing::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = match cli.config {
        Some(ref path) => CliConfig::load_from(path).map_err(CliError::Config)?,
        None => CliConfig::load().unwrap_or_default(),
    };

    let tracing_config = if cli.debug || config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    };
    init_tracing(tracing_config).map_err(|e| CliError::Config(e.to_string()))?;

    match cli.command {
        Command::Google { input, slot } => {
            commands::export::google(&input, slot.as_deref(), &config)
        }
        Command::Ics {
            input,
            slot,
            output,
        } => commands::export::ics(&input, slot.as_deref(), output.as_deref(), &config),
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
    }
}
