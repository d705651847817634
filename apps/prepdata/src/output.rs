use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::PrepError;
use crate::models::document::OutputDocument;

/// Writes the document as two-space-indented JSON.
///
/// Output is staged in a temp file next to `path` and renamed into place, so a
/// failed write never leaves a truncated artifact behind.
pub fn write_output(path: &Path, document: &OutputDocument) -> Result<(), PrepError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut staged, document)?;
    staged.flush()?;
    staged.persist(path)?;

    info!("Preprocessed data saved to {}", path.display());
    Ok(())
}
