//! Load document text from disk.

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read a document's text, dispatching on the file extension.
///
/// Plain-text formats (`.txt`, `.md`) are read as UTF-8 with a Latin-1
/// fallback for legacy exports. PDFs go through text extraction. Any
/// other extension is rejected.
pub fn load_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "md" => load_text(path),
        "pdf" => load_pdf(path),
        _ => Err(CliError::UnsupportedFormat(extension)),
    }
}

fn load_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(
                "{} is not valid UTF-8, falling back to Latin-1",
                path.display()
            );
            // Latin-1 maps each byte to the code point of the same value
            Ok(e.into_bytes().iter().map(|&b| b as char).collect())
        }
    }
}

fn load_pdf(path: &Path) -> Result<String> {
    debug!("Extracting text from PDF {}", path.display());
    let bytes = fs::read(path)?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| CliError::Pdf(e.to_string()))
}
