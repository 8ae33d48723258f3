use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open a log file for sequential reading
pub fn open_log_file(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Check a log path before doing any work
pub fn validate_log_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        anyhow::bail!("Log path cannot be empty");
    }

    if path.is_dir() {
        anyhow::bail!("Log path is a directory: {}", path.display());
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Pirate Log Tools v{}", env!("CARGO_PKG_VERSION"));
    println!("Log format: PIRATEv1");
    println!();
    println!("Converts cache-pirate performance counter logs to CSV.");
}
