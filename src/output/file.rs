//! Output destinations: stdout or a file on disk.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Open a buffered writer for `path`, or stdout when `path` is `None`
///
/// **Public** - used by every command that produces output
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty, a directory, or its parent
///   cannot be created
/// * `OutputError::WriteFailed` - file cannot be created
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, OutputError> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(std::io::stdout().lock())));
    };

    info!("Writing output to: {}", path.display());

    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(path).map_err(OutputError::WriteFailed)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Check that an output path can be written
///
/// **Public** - also used for early argument validation
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
