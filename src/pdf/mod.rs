mod writer;

pub use writer::render_document;

use std::io::Write;
use std::path::Path;

use crate::error::{InvoiceError, Result};

fn unwritable(path: &Path, source: std::io::Error) -> InvoiceError {
    InvoiceError::OutputDirectoryUnwritable {
        path: path.to_path_buf(),
        source,
    }
}

/// Create the output directory (and parents) if it does not exist yet
pub fn ensure_output_directory(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| unwritable(dir, e))
}

/// Write the file next to its destination and rename it into place, so a
/// failed write never leaves a truncated file at `path`.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_output_directory(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| unwritable(dir, e))?;
    tmp.write_all(bytes).map_err(|e| unwritable(path, e))?;
    tmp.flush().map_err(|e| unwritable(path, e))?;
    tmp.persist(path).map_err(|e| unwritable(path, e.error))?;

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
