//! End-to-end workout file creation.
//!
//! Reads a script, expands it and writes the `.zwo` file. The document is fully
//! rendered before the output location is touched, so a bad script never
//! leaves a file or directory behind.

use std::path::{Path, PathBuf};

use crate::storage::config::AppConfig;
use crate::storage::output::resolve_output;
use crate::workouts::engine::assemble;
use crate::workouts::exporter_zwo::export_zwo;
use crate::workouts::parser_script::parse_script_file;
use crate::workouts::types::{ExportError, WorkoutError, WorkoutParseError};

/// One run of the tool.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    /// Workout script to read
    pub input: PathBuf,
    /// Output file or directory; the configured default when absent
    pub output: Option<PathBuf>,
    /// Create missing output directories
    pub force: bool,
}

/// Create the workout file described by `request`, returning where it was
/// written.
pub fn create_workout(request: &CreateRequest, config: &AppConfig) -> Result<PathBuf, WorkoutError> {
    let script = parse_script_file(&request.input)?;
    let document = assemble(&script);
    let content = export_zwo(&document)?;

    let path = resolve_output(
        request.output.as_deref(),
        &config.output.default_file_name,
        request.force || config.output.create_missing_dirs,
    )?;

    std::fs::write(&path, content).map_err(ExportError::from)?;

    tracing::info!(
        path = %path.display(),
        segments = document.segments.len(),
        duration_seconds = document.total_duration_seconds(),
        "Wrote workout file"
    );
    Ok(path)
}

/// User-facing message for a failed run.
pub fn describe_error(input: &Path, err: &WorkoutError) -> String {
    match err {
        WorkoutError::Parse(WorkoutParseError::InvalidScript { line, message }) => {
            let file_name = script_file_name(input);
            match line {
                Some(line) => format!(
                    "There was an error with script \"{}\" at line {}: {}",
                    file_name, line, message
                ),
                None => format!("There was an error with script \"{}\": {}", file_name, message),
            }
        }
        WorkoutError::Parse(WorkoutParseError::IoError(e)) => {
            format!("Could not read script \"{}\": {}", input.display(), e)
        }
        other => other.to_string(),
    }
}

fn script_file_name(input: &Path) -> String {
    input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}
