//! Export error types.

use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while exporting occurrences to a calendar format.
///
/// Missing optional fields never produce an error; they are simply omitted
/// from the output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The timezone is not a known IANA identifier.
    #[error("unknown timezone: {timezone:?}")]
    UnknownTimezone { timezone: String },
}

impl ExportError {
    /// Creates an unknown-timezone error.
    pub fn unknown_timezone(timezone: impl Into<String>) -> Self {
        Self::UnknownTimezone {
            timezone: timezone.into(),
        }
    }
}
