//! Calendar export engine: occurrences, Google Calendar links, ICS documents

pub mod config;
pub mod error;
pub mod exporter;
pub mod google;
pub mod ics;
pub mod occurrence;
pub mod text;
pub mod time;
pub mod tracing;

#[cfg(test)]
mod golden_tests;

pub use config::ExportConfig;
pub use error::{ExportError, ExportResult};
pub use exporter::CalendarExporter;
pub use google::{google_calendar_url, truncate_description};
pub use ics::escape::{escape_text, fold_line, unescape_text, unfold};
pub use ics::{generate_ics, uid_for};
pub use occurrence::{
    CalendarOccurrence, EventRecord, ExportSelection, ICS_CONTENT_TYPE, LocationType,
    TimeSlotRecord,
};
pub use text::{build_description, build_location, build_title};
pub use time::{Clock, FixedClock, SystemClock, google_calendar_format, ics_local_format};
pub use self::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
