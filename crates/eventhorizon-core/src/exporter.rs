//! Calendar exporter bundling configuration and a clock.

use crate::config::ExportConfig;
use crate::error::ExportResult;
use crate::google::google_calendar_url;
use crate::ics::generate_ics;
use crate::occurrence::{CalendarOccurrence, EventRecord, ExportSelection};
use crate::time::{Clock, SystemClock};

/// Produces Google Calendar links and ICS documents.
///
/// Holds no state between calls; the clock is only read once per ICS
/// document.
#[derive(Debug, Clone, Default)]
pub struct CalendarExporter<C: Clock = SystemClock> {
    config: ExportConfig,
    clock: C,
}

impl CalendarExporter<SystemClock> {
    /// Creates an exporter reading the system clock.
    pub fn new(config: ExportConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> CalendarExporter<C> {
    /// Creates an exporter with an explicit clock.
    pub fn with_clock(config: ExportConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Returns the export configuration.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Builds a Google Calendar link for one occurrence.
    pub fn google_calendar_url(&self, occ: &CalendarOccurrence) -> String {
        google_calendar_url(occ, &self.config)
    }

    /// Builds an ICS document for the given occurrences.
    pub fn ics(&self, occurrences: &[CalendarOccurrence]) -> ExportResult<String> {
        generate_ics(occurrences, &self.config, &self.clock)
    }

    /// Builds a Google Calendar link for the selected part of an event.
    pub fn google_for(&self, event: &EventRecord, selection: &ExportSelection) -> String {
        self.google_calendar_url(&selection.primary_occurrence(event))
    }

    /// Builds an ICS document for the selected part of an event.
    pub fn ics_for(&self, event: &EventRecord, selection: &ExportSelection) -> ExportResult<String> {
        self.ics(&selection.occurrences(event))
    }
}
