//! Occurrence types for calendar export.
//!
//! This module provides the value types the export engine operates on:
//! - [`CalendarOccurrence`]: one schedulable block of time (a whole event or
//!   a single time slot of a multi-session event)
//! - [`LocationType`]: whether an event happens in person, online, or both
//! - [`EventRecord`] / [`TimeSlotRecord`]: the stored event and slot rows that
//!   occurrences are built from
//! - [`ExportSelection`]: which part of an event a caller wants to export

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Media type of a generated ICS document.
pub const ICS_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Number of slot id characters kept in a per-slot ICS file name.
const SLOT_FILENAME_ID_LEN: usize = 8;

/// Where an event takes place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// In person, at `address`.
    #[default]
    Physical,
    /// Online, at `meeting_url`.
    Virtual,
    /// Both in person and online.
    Hybrid,
    /// Any value not recognized above.
    #[serde(other)]
    Other,
}

impl LocationType {
    /// Returns true if the event can be joined online.
    ///
    /// Everything except a purely physical event surfaces its meeting URL.
    pub fn has_online_component(&self) -> bool {
        !matches!(self, Self::Physical)
    }
}

/// One schedulable block of time to export to a calendar.
///
/// Built fresh for each export call. Optional text fields holding an empty
/// string are treated the same as absent ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOccurrence {
    /// Event title.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Start instant.
    pub start: DateTime<FixedOffset>,
    /// End instant. Expected to be at or after `start`; not validated.
    pub end: DateTime<FixedOffset>,
    /// IANA timezone identifier (e.g., "America/New_York").
    pub timezone: String,
    /// Drives which of `address` / `meeting_url` is surfaced.
    pub location_type: LocationType,
    /// Physical address.
    pub address: Option<String>,
    /// Virtual meeting URL.
    pub meeting_url: Option<String>,
    /// Organizing organization, prefixed into the description.
    pub organization_name: Option<String>,
    /// Stable event identifier used to build the ICS UID.
    pub event_slug: String,
    /// Time slot identifier for one session of a multi-session event.
    pub slot_id: Option<String>,
    /// Time slot title, appended to the event title.
    pub slot_title: Option<String>,
}

impl CalendarOccurrence {
    /// Creates a new occurrence with required fields.
    pub fn new(
        title: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        timezone: impl Into<String>,
        event_slug: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            start,
            end,
            timezone: timezone.into(),
            location_type: LocationType::default(),
            address: None,
            meeting_url: None,
            organization_name: None,
            event_slug: event_slug.into(),
            slot_id: None,
            slot_title: None,
        }
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the location type.
    pub fn with_location_type(mut self, location_type: LocationType) -> Self {
        self.location_type = location_type;
        self
    }

    /// Builder method to set the physical address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Builder method to set the meeting URL.
    pub fn with_meeting_url(mut self, url: impl Into<String>) -> Self {
        self.meeting_url = Some(url.into());
        self
    }

    /// Builder method to set the organization name.
    pub fn with_organization(mut self, name: impl Into<String>) -> Self {
        self.organization_name = Some(name.into());
        self
    }

    /// Builder method to mark this occurrence as a single time slot.
    pub fn with_slot(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.slot_id = Some(id.into());
        self.slot_title = Some(title.into());
        self
    }

    /// Returns the description, if present and non-empty.
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    /// Returns the address, if present and non-empty.
    pub fn address(&self) -> Option<&str> {
        non_empty(&self.address)
    }

    /// Returns the meeting URL, if present and non-empty.
    pub fn meeting_url(&self) -> Option<&str> {
        non_empty(&self.meeting_url)
    }

    /// Returns the organization name, if present and non-empty.
    pub fn organization_name(&self) -> Option<&str> {
        non_empty(&self.organization_name)
    }

    /// Returns the slot id, if present and non-empty.
    pub fn slot_id(&self) -> Option<&str> {
        non_empty(&self.slot_id)
    }

    /// Returns the slot title, if present and non-empty.
    pub fn slot_title(&self) -> Option<&str> {
        non_empty(&self.slot_title)
    }

    /// Returns the meeting URL when it should be offered to attendees.
    ///
    /// A purely physical event never surfaces its meeting URL.
    pub fn online_url(&self) -> Option<&str> {
        self.meeting_url()
            .filter(|_| self.location_type.has_online_component())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// A stored event row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_datetime: DateTime<FixedOffset>,
    pub end_datetime: DateTime<FixedOffset>,
    pub timezone: String,
    pub location_type: LocationType,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub meeting_url: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    pub slug: String,
}

/// A stored time slot row (one session of a multi-session event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotRecord {
    pub id: String,
    pub title: String,
    pub start_datetime: DateTime<FixedOffset>,
    pub end_datetime: DateTime<FixedOffset>,
}

impl EventRecord {
    /// Builds the occurrence for the whole event, or for one of its slots.
    ///
    /// A slot replaces the event's start and end and contributes its id and
    /// title; every other field comes from the event.
    pub fn occurrence(&self, slot: Option<&TimeSlotRecord>) -> CalendarOccurrence {
        let (start, end) = match slot {
            Some(slot) => (slot.start_datetime, slot.end_datetime),
            None => (self.start_datetime, self.end_datetime),
        };

        CalendarOccurrence {
            title: self.title.clone(),
            description: self.description.clone(),
            start,
            end,
            timezone: self.timezone.clone(),
            location_type: self.location_type,
            address: self.address.clone(),
            meeting_url: self.meeting_url.clone(),
            organization_name: self.organization_name.clone(),
            event_slug: self.slug.clone(),
            slot_id: slot.map(|s| s.id.clone()),
            slot_title: slot.map(|s| s.title.clone()),
        }
    }
}

/// Which part of an event to export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExportSelection {
    /// The event as a whole, for events without time slots.
    #[default]
    WholeEvent,
    /// A single time slot.
    Slot(TimeSlotRecord),
    /// Every time slot the attendee registered for.
    RegisteredSlots(Vec<TimeSlotRecord>),
}

impl ExportSelection {
    /// Builds the selection for an attendee's registered slots.
    ///
    /// An empty list means the event has no slots and is exported whole.
    pub fn registered(slots: Vec<TimeSlotRecord>) -> Self {
        if slots.is_empty() {
            Self::WholeEvent
        } else {
            Self::RegisteredSlots(slots)
        }
    }

    /// Returns the occurrences to put into an ICS document, in slot order.
    pub fn occurrences(&self, event: &EventRecord) -> Vec<CalendarOccurrence> {
        match self {
            Self::WholeEvent => vec![event.occurrence(None)],
            Self::Slot(slot) => vec![event.occurrence(Some(slot))],
            Self::RegisteredSlots(slots) if slots.is_empty() => vec![event.occurrence(None)],
            Self::RegisteredSlots(slots) => slots
                .iter()
                .map(|slot| event.occurrence(Some(slot)))
                .collect(),
        }
    }

    /// Returns the single occurrence to send to Google Calendar.
    ///
    /// Google Calendar accepts one event per link, so multiple registered
    /// slots are represented by the first one.
    pub fn primary_occurrence(&self, event: &EventRecord) -> CalendarOccurrence {
        match self {
            Self::WholeEvent => event.occurrence(None),
            Self::Slot(slot) => event.occurrence(Some(slot)),
            Self::RegisteredSlots(slots) => event.occurrence(slots.first()),
        }
    }

    /// Returns the download file name for the ICS document.
    pub fn ics_filename(&self, event: &EventRecord) -> String {
        match self {
            Self::Slot(slot) => {
                let short_id: String = slot.id.chars().take(SLOT_FILENAME_ID_LEN).collect();
                format!("{}-{}.ics", event.slug, short_id)
            }
            Self::WholeEvent | Self::RegisteredSlots(_) => format!("{}.ics", event.slug),
        }
    }
}
