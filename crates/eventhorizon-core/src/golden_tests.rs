//! Golden tests for export output.
//!
//! These tests use insta inline snapshots to pin the exact bytes handed to
//! calendar clients. ICS documents are compared with CRLF shown as LF.

use chrono::DateTime;

use crate::config::ExportConfig;
use crate::exporter::CalendarExporter;
use crate::occurrence::{
    CalendarOccurrence, EventRecord, ExportSelection, LocationType, TimeSlotRecord,
};
use crate::time::FixedClock;

fn exporter() -> CalendarExporter<FixedClock> {
    let now = DateTime::parse_from_rfc3339("2026-01-15T12:00:00Z").unwrap();
    CalendarExporter::with_clock(ExportConfig::default(), FixedClock::new(now))
}

fn slot(id: &str, title: &str, start: &str, end: &str) -> TimeSlotRecord {
    TimeSlotRecord {
        id: id.to_string(),
        title: title.to_string(),
        start_datetime: DateTime::parse_from_rfc3339(start).unwrap(),
        end_datetime: DateTime::parse_from_rfc3339(end).unwrap(),
    }
}

#[test]
fn google_url_hybrid_event() {
    let occ = CalendarOccurrence::new(
        "Perseid Meteor Shower",
        DateTime::parse_from_rfc3339("2026-08-12T21:00:00-06:00").unwrap(),
        DateTime::parse_from_rfc3339("2026-08-13T01:00:00-06:00").unwrap(),
        "America/Denver",
        "perseids-2026",
    )
    .with_location_type(LocationType::Hybrid)
    .with_address("Dark Sky Park, Lot B")
    .with_meeting_url("https://stream.example/perseids")
    .with_organization("Rocky Mountain Astronomers")
    .with_description("Bring a chair.\nNo flashlights!");

    let url = exporter().google_calendar_url(&occ);
    insta::assert_snapshot!(url, @"https://www.google.com/calendar/render?action=TEMPLATE&text=Perseid+Meteor+Shower&dates=20260813T030000Z%2F20260813T070000Z&details=Organized+by%3A+Rocky+Mountain+Astronomers%0A%0ABring+a+chair.%0ANo+flashlights%21%0A%0AJoin+online%3A+https%3A%2F%2Fstream.example%2Fperseids&location=Dark+Sky+Park%2C+Lot+B+%7C+Online%3A+https%3A%2F%2Fstream.example%2Fperseids&ctz=America%2FDenver");
}

#[test]
fn ics_registered_slots() {
    let event = EventRecord {
        title: "Rocket Lab".to_string(),
        description: Some("Launch, reuse".to_string()),
        start_datetime: DateTime::parse_from_rfc3339("2026-04-20T09:00:00+02:00").unwrap(),
        end_datetime: DateTime::parse_from_rfc3339("2026-04-20T12:00:00+02:00").unwrap(),
        timezone: "Europe/Berlin".to_string(),
        location_type: LocationType::Virtual,
        address: None,
        meeting_url: Some("https://meet.example/conf".to_string()),
        organization_name: None,
        slug: "conf".to_string(),
    };
    let selection = ExportSelection::registered(vec![
        slot("a1", "Intro", "2026-04-20T09:00:00+02:00", "2026-04-20T10:30:00+02:00"),
        slot("b2", "Q&A", "2026-04-20T11:00:00+02:00", "2026-04-20T11:45:00+02:00"),
    ]);

    let ics = exporter().ics_for(&event, &selection).unwrap();
    insta::assert_snapshot!(ics.replace("\r\n", "\n"), @r"
    BEGIN:VCALENDAR
    VERSION:2.0
    PRODID:-//Event Horizon//Event Horizon App//EN
    CALSCALE:GREGORIAN
    METHOD:PUBLISH
    BEGIN:VEVENT
    UID:conf-a1@event-horizon.app
    DTSTAMP:20260115T120000Z
    DTSTART;TZID=Europe/Berlin:20260420T090000
    DTEND;TZID=Europe/Berlin:20260420T103000
    SUMMARY:Rocket Lab - Intro
    DESCRIPTION:Launch\, reuse\n\nJoin online: https://meet.example/conf
    LOCATION:https://meet.example/conf
    URL:https://meet.example/conf
    END:VEVENT
    BEGIN:VEVENT
    UID:conf-b2@event-horizon.app
    DTSTAMP:20260115T120000Z
    DTSTART;TZID=Europe/Berlin:20260420T110000
    DTEND;TZID=Europe/Berlin:20260420T114500
    SUMMARY:Rocket Lab - Q&A
    DESCRIPTION:Launch\, reuse\n\nJoin online: https://meet.example/conf
    LOCATION:https://meet.example/conf
    URL:https://meet.example/conf
    END:VEVENT
    END:VCALENDAR
    ");
}

#[test]
fn ics_physical_minimal() {
    let occ = CalendarOccurrence::new(
        "Planetarium Night",
        DateTime::parse_from_rfc3339("2026-11-20T19:00:00-08:00").unwrap(),
        DateTime::parse_from_rfc3339("2026-11-20T21:00:00-08:00").unwrap(),
        "America/Los_Angeles",
        "planetarium-night",
    );

    let ics = exporter().ics(&[occ]).unwrap();
    insta::assert_snapshot!(ics.replace("\r\n", "\n"), @r"
    BEGIN:VCALENDAR
    VERSION:2.0
    PRODID:-//Event Horizon//Event Horizon App//EN
    CALSCALE:GREGORIAN
    METHOD:PUBLISH
    BEGIN:VEVENT
    UID:planetarium-night@event-horizon.app
    DTSTAMP:20260115T120000Z
    DTSTART;TZID=America/Los_Angeles:20261120T190000
    DTEND;TZID=America/Los_Angeles:20261120T210000
    SUMMARY:Planetarium Night
    END:VEVENT
    END:VCALENDAR
    ");
}
