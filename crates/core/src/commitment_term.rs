//! Commitment-term document rules: accepted format, size limit and the
//! on-disk naming scheme.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// MIME type recorded for every stored term.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Largest accepted upload (10 MiB).
pub const MAX_TERM_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Every PDF file starts with this header.
const PDF_MAGIC: &[u8] = b"%PDF-";

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// Reduce an uploaded filename to a safe single path component.
///
/// Directory components are dropped and any character outside
/// `[A-Za-z0-9._-]` becomes `_`.
pub fn sanitize_filename(original: &str) -> Result<String, CoreError> {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        return Err(CoreError::Validation(format!(
            "Invalid file name '{original}'"
        )));
    }
    Ok(cleaned)
}

/// Physical file name for a contract's term: `contract_{id}_{filename}`.
pub fn storage_filename(contract_id: DbId, original: &str) -> Result<String, CoreError> {
    Ok(format!("contract_{contract_id}_{}", sanitize_filename(original)?))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Accept only non-empty PDFs within the size limit.
pub fn validate_term_upload(filename: &str, data: &[u8]) -> Result<(), CoreError> {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();
    if ext != "pdf" {
        return Err(CoreError::Validation(format!(
            "Unsupported file format '.{ext}'. Commitment terms must be PDF files"
        )));
    }
    if data.is_empty() {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if data.len() > MAX_TERM_SIZE_BYTES {
        return Err(CoreError::Validation(format!(
            "File is too large ({} bytes). Maximum is {MAX_TERM_SIZE_BYTES} bytes",
            data.len()
        )));
    }
    if !data.starts_with(PDF_MAGIC) {
        return Err(CoreError::Validation(
            "File content is not a PDF document".into(),
        ));
    }
    Ok(())
}
