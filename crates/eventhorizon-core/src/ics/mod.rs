//! ICS document generation.
//!
//! Produces one `VCALENDAR` holding a `VEVENT` per occurrence, so a single
//! event and a full set of registered sessions export the same way.

pub mod escape;

use tracing::debug;

use crate::config::ExportConfig;
use crate::error::ExportResult;
use crate::occurrence::CalendarOccurrence;
use crate::text::{build_description, build_location, build_title};
use crate::time::{Clock, google_calendar_format, ics_local_format};

use self::escape::{CRLF, escape_text, fold_line};

/// Returns the stable UID for an occurrence.
///
/// `<slug>-<slot id>@<domain>` for a time slot, `<slug>@<domain>` otherwise.
/// Calendar clients use it to recognize a re-import as an update.
pub fn uid_for(occ: &CalendarOccurrence, domain: &str) -> String {
    match occ.slot_id() {
        Some(slot_id) => format!("{}-{}@{}", occ.event_slug, slot_id, domain),
        None => format!("{}@{}", occ.event_slug, domain),
    }
}

/// Generates an ICS document for the given occurrences.
///
/// `DTSTAMP` is read from `clock` once and shared by every `VEVENT`. Lines
/// are folded at 75 characters and joined with CRLF.
///
/// # Errors
///
/// Returns [`ExportError::UnknownTimezone`](crate::ExportError::UnknownTimezone)
/// if any occurrence carries an unrecognized timezone. No partial document is
/// returned.
pub fn generate_ics(
    occurrences: &[CalendarOccurrence],
    config: &ExportConfig,
    clock: &dyn Clock,
) -> ExportResult<String> {
    let dtstamp = google_calendar_format(&clock.now());

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", config.prod_id),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    for occ in occurrences {
        push_event(&mut lines, occ, config, &dtstamp)?;
    }

    lines.push("END:VCALENDAR".to_string());

    debug!(
        events = occurrences.len(),
        dtstamp = %dtstamp,
        "Generated ICS document"
    );

    Ok(lines
        .iter()
        .map(|line| fold_line(line))
        .collect::<Vec<_>>()
        .join(CRLF))
}

fn push_event(
    lines: &mut Vec<String>,
    occ: &CalendarOccurrence,
    config: &ExportConfig,
    dtstamp: &str,
) -> ExportResult<()> {
    let start = ics_local_format(&occ.start, &occ.timezone)?;
    let end = ics_local_format(&occ.end, &occ.timezone)?;

    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}", uid_for(occ, &config.uid_domain)));
    lines.push(format!("DTSTAMP:{dtstamp}"));
    lines.push(format!("DTSTART;TZID={}:{}", occ.timezone, start));
    lines.push(format!("DTEND;TZID={}:{}", occ.timezone, end));
    lines.push(format!("SUMMARY:{}", escape_text(&build_title(occ))));

    let description = build_description(occ, true);
    if !description.is_empty() {
        lines.push(format!("DESCRIPTION:{description}"));
    }

    let location = build_location(occ);
    if !location.is_empty() {
        lines.push(format!("LOCATION:{}", escape_text(&location)));
    }

    // URI value, not TEXT: no escaping.
    if let Some(url) = occ.online_url() {
        lines.push(format!("URL:{url}"));
    }

    lines.push("END:VEVENT".to_string());
    Ok(())
}
