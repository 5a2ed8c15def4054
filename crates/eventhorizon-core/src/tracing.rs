//! Logging setup for Event Horizon binaries.
//!
//! The export engine only emits `tracing` events; binaries decide where they
//! go by calling [`init_tracing`] once at startup.
//!
//! ```ignore
//! use eventhorizon_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::cli_debug())?;
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Target prefix used for the default env filter directive.
const LOG_TARGET: &str = "eventhorizon";

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// A global subscriber is already installed.
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// The env filter directive does not parse.
    #[error("failed to parse env filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingOutputFormat {
    /// Multi-line human-readable output.
    Pretty,
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// One JSON object per line.
    Json,
}

/// Configuration for tracing initialization
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: Level,
    pub output_format: TracingOutputFormat,
    /// Include file and line of each event.
    pub include_location: bool,
    /// Include the module path of each event.
    pub include_target: bool,
    pub include_timestamp: bool,
    /// Explicit filter directive; overrides `RUST_LOG` and `default_level`.
    pub env_filter: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            output_format: TracingOutputFormat::Compact,
            include_location: false,
            include_target: false,
            include_timestamp: false,
            env_filter: None,
        }
    }
}

impl TracingConfig {
    /// Verbose settings for `--debug` runs.
    #[must_use]
    pub fn cli_debug() -> Self {
        Self {
            default_level: Level::DEBUG,
            include_location: true,
            include_target: true,
            ..Self::default()
        }
    }

    /// Set the default log level
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set a custom env filter directive
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Builds the env filter: explicit directive, then `RUST_LOG`, then
    /// `eventhorizon=<default_level>`.
    fn build_filter(&self) -> Result<EnvFilter, TracingError> {
        match self.env_filter {
            Some(ref directive) => Ok(EnvFilter::try_new(directive)?),
            None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(format!("{}={}", LOG_TARGET, self.default_level))
            })),
        }
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set or if the env
/// filter directive is invalid.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let filter = config.build_filter()?;

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_target(config.include_target);

    let layer = match (config.output_format, config.include_timestamp) {
        (TracingOutputFormat::Pretty, true) => layer.pretty().boxed(),
        (TracingOutputFormat::Pretty, false) => layer.pretty().without_time().boxed(),
        (TracingOutputFormat::Compact, true) => layer.compact().boxed(),
        (TracingOutputFormat::Compact, false) => layer.compact().without_time().boxed(),
        (TracingOutputFormat::Json, true) => layer.json().boxed(),
        (TracingOutputFormat::Json, false) => layer.json().without_time().boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.default_level, Level::WARN);
        assert_eq!(config.output_format, TracingOutputFormat::Compact);
        assert!(!config.include_location);
        assert!(!config.include_timestamp);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn cli_debug_config() {
        let config = TracingConfig::cli_debug();
        assert_eq!(config.default_level, Level::DEBUG);
        assert!(config.include_location);
        assert!(config.include_target);
    }

    #[test]
    fn builder_methods() {
        let config = TracingConfig::default()
            .with_level(Level::INFO)
            .with_format(TracingOutputFormat::Json)
            .with_env_filter("eventhorizon=trace");

        assert_eq!(config.default_level, Level::INFO);
        assert_eq!(config.output_format, TracingOutputFormat::Json);
        assert_eq!(config.env_filter, Some("eventhorizon=trace".to_string()));
    }

    #[test]
    fn explicit_filter_is_parsed() {
        let config = TracingConfig::default().with_env_filter("eventhorizon=debug");
        assert!(config.build_filter().is_ok());
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let config = TracingConfig::default().with_env_filter("eventhorizon=notalevel");
        assert!(matches!(config.build_filter(), Err(TracingError::EnvFilter(_))));
    }
}
