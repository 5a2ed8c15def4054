//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// eventhorizon - Add space events to your calendar
#[derive(Debug, Parser)]
#[command(name = "eventhorizon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "EVENTHORIZON_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a Google Calendar link for an event
    Google {
        /// Event JSON file (event row plus optional `registered_slots`)
        input: PathBuf,

        /// Export only the time slot with this id
        #[arg(long)]
        slot: Option<String>,
    },

    /// Write an ICS file for an event or its registered slots
    Ics {
        /// Event JSON file (event row plus optional `registered_slots`)
        input: PathBuf,

        /// Export only the time slot with this id
        #[arg(long)]
        slot: Option<String>,

        /// Output path, or `-` for stdout (defaults to `<slug>.ics`)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_ics_with_slot() {
        let cli = Cli::try_parse_from([
            "eventhorizon",
            "ics",
            "event.json",
            "--slot",
            "a1",
            "-o",
            "-",
        ])
        .unwrap();
        match cli.command {
            Command::Ics { input, slot, output } => {
                assert_eq!(input, PathBuf::from("event.json"));
                assert_eq!(slot.as_deref(), Some("a1"));
                assert_eq!(output, Some(PathBuf::from("-")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_google_debug() {
        let cli = Cli::try_parse_from(["eventhorizon", "-v", "google", "event.json"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Command::Google { slot: None, .. }));
    }
}
