//! Google Calendar "add event" links.
//!
//! # Example
//!
//! ```
//! use chrono::DateTime;
//! use eventhorizon_core::{CalendarOccurrence, ExportConfig, google_calendar_url};
//!
//! let occ = CalendarOccurrence::new(
//!     "Mars Rover Workshop",
//!     DateTime::parse_from_rfc3339("2026-03-10T14:00:00-05:00").unwrap(),
//!     DateTime::parse_from_rfc3339("2026-03-10T16:00:00-05:00").unwrap(),
//!     "America/New_York",
//!     "mars-rover-workshop",
//! );
//! let url = google_calendar_url(&occ, &ExportConfig::default());
//! assert!(url.contains("dates=20260310T190000Z%2F20260310T210000Z"));
//! ```

use tracing::debug;
use url::form_urlencoded;

use crate::config::ExportConfig;
use crate::occurrence::CalendarOccurrence;
use crate::text::{build_description, build_location, build_title};
use crate::time::google_calendar_format;

const ELLIPSIS: &str = "...";

/// Truncates `text` to at most `max_chars` characters.
///
/// When truncation happens the last three characters of the result are
/// `...`, so the result is exactly `max_chars` long.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Builds a Google Calendar link that pre-fills the "add event" form.
///
/// Query parameters, in order: `action`, `text`, `dates`, `details`
/// (omitted if empty), `location` (omitted if empty), `ctz`. Values are
/// form-encoded. The timezone is passed through as-is.
pub fn google_calendar_url(occ: &CalendarOccurrence, config: &ExportConfig) -> String {
    let title = build_title(occ);
    let dates = format!(
        "{}/{}",
        google_calendar_format(&occ.start),
        google_calendar_format(&occ.end)
    );
    let location = build_location(occ);

    let raw_description = build_description(occ, false);
    let description = truncate_description(&raw_description, config.max_description_length);
    if description.len() != raw_description.len() {
        debug!(
            slug = %occ.event_slug,
            max = config.max_description_length,
            "Truncated Google Calendar description"
        );
    }

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("action", "TEMPLATE");
    query.append_pair("text", &title);
    query.append_pair("dates", &dates);
    if !description.is_empty() {
        query.append_pair("details", &description);
    }
    if !location.is_empty() {
        query.append_pair("location", &location);
    }
    query.append_pair("ctz", &occ.timezone);

    format!("{}?{}", config.google_base_url, query.finish())
}
