//! Event input files.
//!
//! An input file is the stored event row as JSON, optionally carrying the
//! time slots the attendee registered for:
//!
//! ```json
//! {
//!   "title": "Space Conference",
//!   "start_datetime": "2026-05-01T09:00:00Z",
//!   "end_datetime": "2026-05-01T17:00:00Z",
//!   "timezone": "UTC",
//!   "location_type": "physical",
//!   "address": "Hall A",
//!   "slug": "conf",
//!   "registered_slots": [
//!     { "id": "a1", "title": "Keynote",
//!       "start_datetime": "2026-05-01T09:00:00Z",
//!       "end_datetime": "2026-05-01T10:00:00Z" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use eventhorizon_core::{EventRecord, ExportSelection, TimeSlotRecord};

use crate::error::{CliError, CliResult};

/// An event plus the slots an attendee registered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportInput {
    #[serde(flatten)]
    pub event: EventRecord,

    #[serde(default)]
    pub registered_slots: Vec<TimeSlotRecord>,
}

impl ExportInput {
    /// Parses an input document.
    pub fn from_json(json: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses an input file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Input(format!("failed to read {}: {}", path.display(), e))
        })?;
        let input = Self::from_json(&content)?;
        debug!(
            slug = %input.event.slug,
            slots = input.registered_slots.len(),
            "Loaded event input"
        );
        Ok(input)
    }

    /// Resolves what to export.
    ///
    /// With a slot id, only that registered slot; otherwise every registered
    /// slot, or the whole event when there are none.
    pub fn selection(&self, slot_id: Option<&str>) -> CliResult<ExportSelection> {
        match slot_id {
            Some(id) => self
                .registered_slots
                .iter()
                .find(|slot| slot.id == id)
                .cloned()
                .map(ExportSelection::Slot)
                .ok_or_else(|| {
                    CliError::Input(format!(
                        "event {:?} has no registered slot {:?}",
                        self.event.slug, id
                    ))
                }),
            None => Ok(ExportSelection::registered(self.registered_slots.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhorizon_core::LocationType;

    const INPUT: &str = r#"{
        "title": "Space Conference",
        "description": "Two days of talks",
        "start_datetime": "2026-05-01T09:00:00Z",
        "end_datetime": "2026-05-02T17:00:00Z",
        "timezone": "UTC",
        "location_type": "hybrid",
        "address": "Hall A",
        "meeting_url": "https://meet.example/conf",
        "organization_name": "Orbital Society",
        "slug": "conf",
        "registered_slots": [
            {"id": "a1", "title": "Keynote", "start_datetime": "2026-05-01T09:00:00Z", "end_datetime": "2026-05-01T10:00:00Z"},
            {"id": "b2", "title": "Panel", "start_datetime": "2026-05-02T14:00:00Z", "end_datetime": "2026-05-02T15:00:00Z"}
        ]
    }"#;

    #[test]
    fn parses_event_and_slots() {
        let input = ExportInput::from_json(INPUT).unwrap();
        assert_eq!(input.event.slug, "conf");
        assert_eq!(input.event.location_type, LocationType::Hybrid);
        assert_eq!(input.registered_slots.len(), 2);
        assert_eq!(input.registered_slots[1].id, "b2");
    }

    #[test]
    fn slots_are_optional() {
        let json = r#"{
            "title": "Eclipse",
            "start_datetime": "2026-08-12T18:00:00+02:00",
            "end_datetime": "2026-08-12T19:00:00+02:00",
            "timezone": "Europe/Madrid",
            "location_type": "physical",
            "slug": "eclipse"
        }"#;
        let input = ExportInput::from_json(json).unwrap();
        assert!(input.registered_slots.is_empty());
        assert_eq!(input.selection(None).unwrap(), ExportSelection::WholeEvent);
    }

    #[test]
    fn selects_single_slot() {
        let input = ExportInput::from_json(INPUT).unwrap();
        match input.selection(Some("b2")).unwrap() {
            ExportSelection::Slot(slot) => assert_eq!(slot.title, "Panel"),
            other => panic!("unexpected selection: {other:?}"),
        }
    }

    #[test]
    fn selects_all_registered() {
        let input = ExportInput::from_json(INPUT).unwrap();
        assert!(matches!(
            input.selection(None).unwrap(),
            ExportSelection::RegisteredSlots(slots) if slots.len() == 2
        ));
    }

    #[test]
    fn unknown_slot_errors() {
        let input = ExportInput::from_json(INPUT).unwrap();
        let err = input.selection(Some("zz")).unwrap_err();
        assert!(err.to_string().contains("no registered slot \"zz\""));
    }

    #[test]
    fn malformed_json_is_input_error() {
        let err = ExportInput::from_json("{\"title\": 1}").unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExportInput::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
