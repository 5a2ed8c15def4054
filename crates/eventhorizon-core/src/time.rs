//! Time formatting for calendar exports.
//!
//! Two encodings are produced from an absolute instant:
//! - [`google_calendar_format`]: `YYYYMMDDTHHmmssZ` in UTC, as used by the
//!   Google Calendar `dates` parameter and the ICS `DTSTAMP` property.
//! - [`ics_local_format`]: `YYYYMMDDTHHmmss` wall-clock time in an IANA
//!   timezone, for use with an ICS `TZID` parameter.
//!
//! The current time is supplied through the [`Clock`] trait so that document
//! generation stays reproducible under test.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::error::{ExportError, ExportResult};

const GOOGLE_CALENDAR_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const ICS_LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";

/// A source of the current time.
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Creates a clock that always returns `instant`.
    pub fn new<Z: TimeZone>(instant: DateTime<Z>) -> Self {
        Self(instant.with_timezone(&Utc))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Formats an instant as `YYYYMMDDTHHmmssZ` in UTC.
///
/// The declared timezone of an occurrence is irrelevant here: Google Calendar
/// receives the instant in UTC plus a separate `ctz` parameter.
pub fn google_calendar_format<Z: TimeZone>(instant: &DateTime<Z>) -> String {
    instant
        .with_timezone(&Utc)
        .format(GOOGLE_CALENDAR_FORMAT)
        .to_string()
}

/// Resolves an IANA timezone identifier.
///
/// # Errors
///
/// Returns [`ExportError::UnknownTimezone`] if the identifier is not in the
/// timezone database.
pub fn parse_timezone(timezone: &str) -> ExportResult<Tz> {
    Tz::from_str(timezone).map_err(|_| {
        warn!(timezone, "Unrecognized timezone identifier");
        ExportError::unknown_timezone(timezone)
    })
}

/// Formats an instant as wall-clock `YYYYMMDDTHHmmss` in `timezone`.
///
/// DST transitions are resolved from the timezone database for the date of
/// the instant. The hour is always rendered `00`-`23`.
///
/// # Errors
///
/// Returns [`ExportError::UnknownTimezone`] if `timezone` cannot be resolved.
pub fn ics_local_format(instant: &DateTime<FixedOffset>, timezone: &str) -> ExportResult<String> {
    let tz = parse_timezone(timezone)?;
    Ok(instant.with_timezone(&tz).format(ICS_LOCAL_FORMAT).to_string())
}
