//! Submission-to-text extraction
//!
//! Reads the supported containers into a plain string. Extraction never
//! fails from the caller's point of view: any error is logged and the
//! submission is assessed as empty text.

mod office;
mod pdf;

use std::fs;
use std::path::Path;

use crate::error::{AssayError, Result};

/// Container formats assay can read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Pdf,
    Docx,
    Pptx,
    Text,
}

impl SubmissionKind {
    /// File extensions picked up during discovery
    pub const EXTENSIONS: [&'static str; 4] = ["pdf", "docx", "pptx", "txt"];

    /// Kind from a file extension, case-insensitive
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(SubmissionKind::Pdf),
            "docx" => Some(SubmissionKind::Docx),
            "pptx" => Some(SubmissionKind::Pptx),
            "txt" | "md" => Some(SubmissionKind::Text),
            _ => None,
        }
    }
}

/// Extract the text of a submission, or `""` if it cannot be read
pub fn extract_text(path: &Path) -> String {
    match try_extract_text(path) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), chars = text.len(), "extracted");
            text
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "extraction failed; assessing as empty");
            String::new()
        }
    }
}

/// Extract the text of a submission, reporting why it failed
pub fn try_extract_text(path: &Path) -> Result<String> {
    let kind = SubmissionKind::from_path(path).ok_or_else(|| {
        AssayError::unsupported("submission type", path.display(), "pdf, docx, pptx, txt, md")
    })?;

    match kind {
        SubmissionKind::Text => read_lossy(path),
        SubmissionKind::Pdf => pdf::extract(path),
        SubmissionKind::Docx => office::extract_docx(path),
        SubmissionKind::Pptx => office::extract_pptx(path),
    }
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).map_err(|e| AssayError::io_operation("read", path.display(), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
