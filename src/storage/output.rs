//! Output location for generated workout files.

use std::path::{Path, PathBuf};

use crate::workouts::types::OutputError;

/// Extension Zwift expects on workout files.
pub const ZWO_EXTENSION: &str = "zwo";

/// Work out where the workout file should be written.
///
/// - no output: `default_file_name` in the working directory
/// - an existing directory: `default_file_name` inside it
/// - a path without an extension: `.zwo` is appended
///
/// The parent directory must exist unless `create_dirs` is set, in which case
/// it is created.
pub fn resolve_output(
    output: Option<&Path>,
    default_file_name: &str,
    create_dirs: bool,
) -> Result<PathBuf, OutputError> {
    let path = match output {
        None => PathBuf::from(default_file_name),
        Some(dir) if dir.is_dir() => dir.join(default_file_name),
        Some(path) if path.extension().is_none() => path.with_extension(ZWO_EXTENSION),
        Some(path) => path.to_path_buf(),
    };

    ensure_parent(&path, create_dirs)?;
    Ok(path)
}

fn ensure_parent(path: &Path, create_dirs: bool) -> Result<(), OutputError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };

    if parent.is_dir() {
        return Ok(());
    }

    if !create_dirs {
        return Err(OutputError::MissingDirectory);
    }

    std::fs::create_dir_all(parent).map_err(|e| {
        tracing::warn!(path = %parent.display(), error = %e, "Could not create output directory");
        OutputError::CreateFailed(path.display().to_string())
    })?;

    tracing::info!(path = %parent.display(), "Created output directory");
    Ok(())
}
