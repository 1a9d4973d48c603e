//! PDF text extraction using lopdf

use std::path::Path;

use lopdf::Document;

use crate::error::{AssayError, Result};

/// Text of every page, in page order, one page per line block
pub(super) fn extract(path: &Path) -> Result<String> {
    let doc = Document::load(path)
        .map_err(|e| AssayError::io_operation("load pdf", path.display(), e))?;

    let pages = doc.get_pages();
    let mut page_numbers: Vec<u32> = pages.keys().copied().collect();
    page_numbers.sort_unstable();

    let mut text = String::new();
    for page in page_numbers {
        match doc.extract_text(&[page]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), page, error = %e, "skipping unreadable page");
            }
        }
    }

    Ok(text)
}
