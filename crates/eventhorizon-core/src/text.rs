//! Title, location, and description text for calendar exports.

use crate::ics::escape::escape_text;
use crate::occurrence::{CalendarOccurrence, LocationType};

const HYBRID_SEPARATOR: &str = " | ";
const PARAGRAPH_BREAK: &str = "\n\n";

/// Builds the event title, appending the slot title when present.
pub fn build_title(occ: &CalendarOccurrence) -> String {
    match occ.slot_title() {
        Some(slot_title) => format!("{} - {}", occ.title, slot_title),
        None => occ.title.clone(),
    }
}

/// Builds the location text from the location type.
///
/// - physical: the address
/// - virtual: the meeting URL
/// - hybrid: `address | Online: url`, omitting whichever half is absent
/// - anything else: the address, else the meeting URL
///
/// Returns an empty string when nothing applies.
pub fn build_location(occ: &CalendarOccurrence) -> String {
    match occ.location_type {
        LocationType::Physical => occ.address().unwrap_or_default().to_string(),
        LocationType::Virtual => occ.meeting_url().unwrap_or_default().to_string(),
        LocationType::Hybrid => {
            let mut parts = Vec::with_capacity(2);
            if let Some(address) = occ.address() {
                parts.push(address.to_string());
            }
            if let Some(url) = occ.meeting_url() {
                parts.push(format!("Online: {url}"));
            }
            parts.join(HYBRID_SEPARATOR)
        }
        LocationType::Other => occ
            .address()
            .or_else(|| occ.meeting_url())
            .unwrap_or_default()
            .to_string(),
    }
}

/// Builds the description text.
///
/// Paragraphs, each separated by a blank line and skipped when absent:
/// 1. `Organized by: <organization>`
/// 2. the occurrence description
/// 3. `Join online: <url>` unless the event is purely physical
///
/// With `for_ics` set the result is escaped as an ICS TEXT value, so line
/// breaks come out as the two-character sequence `\n`. Otherwise raw line
/// breaks are kept for URL encoding.
pub fn build_description(occ: &CalendarOccurrence, for_ics: bool) -> String {
    let mut paragraphs = Vec::with_capacity(3);

    if let Some(org) = occ.organization_name() {
        paragraphs.push(format!("Organized by: {org}"));
    }
    if let Some(description) = occ.description() {
        paragraphs.push(description.to_string());
    }
    if let Some(url) = occ.online_url() {
        paragraphs.push(format!("Join online: {url}"));
    }

    let text = paragraphs.join(PARAGRAPH_BREAK);
    if for_ics { escape_text(&text) } else { text }
}
