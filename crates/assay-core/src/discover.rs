//! Submission discovery in a directory

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{AssayError, Result};
use crate::extract::SubmissionKind;

fn is_submission(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| SubmissionKind::EXTENSIONS.contains(&ext.as_str()))
}

/// Submission files directly inside `dir`, sorted by file name.
///
/// Only pdf, docx, pptx and txt files are picked up; subdirectories are not
/// searched.
#[tracing::instrument(skip(dir), fields(dir = %dir.display()))]
pub fn discover_submissions(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AssayError::not_found("submissions directory", dir.display()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry =
            entry.map_err(|e| AssayError::io_operation("list", dir.display(), e))?;
        if entry.file_type().is_file() && is_submission(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(count = files.len(), "discovered submissions");
    Ok(files)
}
