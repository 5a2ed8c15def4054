//! CLI error types.

use std::fmt;

use eventhorizon_core::ExportError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Configuration error.
    Config(String),
    /// IO error.
    Io(std::io::Error),
    /// Event input could not be read or does not match the request.
    Input(String),
    /// Export failed.
    Export(ExportError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Io(err) => write!(f, "IO error: {}", err),
            Self::Input(msg) => write!(f, "invalid input: {}", msg),
            Self::Export(err) => write!(f, "export failed: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Export(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Input(err.to_string())
    }
}

impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        Self::Export(err)
    }
}
