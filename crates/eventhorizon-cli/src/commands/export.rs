//! Export commands.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use eventhorizon_core::{CalendarExporter, Clock, ICS_CONTENT_TYPE};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::ExportInput;

/// Output path meaning "write to stdout".
const STDOUT_PATH: &str = "-";

/// A rendered ICS document and its suggested file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsFile {
    pub filename: String,
    pub content: String,
}

/// Print a Google Calendar link for an event.
pub fn google(input_path: &Path, slot: Option<&str>, config: &CliConfig) -> CliResult<()> {
    config.validate().map_err(CliError::Config)?;
    let input = ExportInput::load(input_path)?;
    let exporter = CalendarExporter::new(config.export.clone());
    println!("{}", google_link(&input, slot, &exporter)?);
    Ok(())
}

/// Write an ICS file for an event.
///
/// Without `output` the file is named after the event (and slot) in the
/// current directory.
pub fn ics(
    input_path: &Path,
    slot: Option<&str>,
    output: Option<&Path>,
    config: &CliConfig,
) -> CliResult<()> {
    config.validate().map_err(CliError::Config)?;
    let input = ExportInput::load(input_path)?;
    let exporter = CalendarExporter::new(config.export.clone());
    let file = render_ics(&input, slot, &exporter)?;

    match output {
        Some(path) if path == Path::new(STDOUT_PATH) => {
            std::io::stdout().write_all(file.content.as_bytes())?;
        }
        Some(path) => write_ics(path, &file.content)?,
        None => write_ics(&PathBuf::from(&file.filename), &file.content)?,
    }
    Ok(())
}

/// Builds the Google Calendar link for the selected part of an event.
pub fn google_link<C: Clock>(
    input: &ExportInput,
    slot: Option<&str>,
    exporter: &CalendarExporter<C>,
) -> CliResult<String> {
    let selection = input.selection(slot)?;
    Ok(exporter.google_for(&input.event, &selection))
}

/// Builds the ICS document for the selected part of an event.
pub fn render_ics<C: Clock>(
    input: &ExportInput,
    slot: Option<&str>,
    exporter: &CalendarExporter<C>,
) -> CliResult<IcsFile> {
    let selection = input.selection(slot)?;
    Ok(IcsFile {
        filename: selection.ics_filename(&input.event),
        content: exporter.ics_for(&input.event, &selection)?,
    })
}

fn write_ics(path: &Path, content: &str) -> CliResult<()> {
    std::fs::write(path, content)?;
    info!(
        path = %path.display(),
        bytes = content.len(),
        content_type = ICS_CONTENT_TYPE,
        "Wrote calendar file"
    );
    Ok(())
}
