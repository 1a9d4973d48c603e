//! Submissions and the names derived from their file names

use std::path::Path;

/// Raw input for one assessment: where it came from and its extracted text.
///
/// `raw_text` is empty when extraction failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub filename: String,
    pub raw_text: String,
}

impl Submission {
    pub fn new(filename: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Submission {
            filename: filename.into(),
            raw_text: raw_text.into(),
        }
    }

    pub fn display_name(&self) -> String {
        display_name(&self.filename)
    }
}

const NAME_SEPARATOR: &str = " - ";
const ASSIGNMENT_PREFIX: &str = "a3 ";

/// Human display name from a submission file name.
///
/// - `Course - Jane Doe - A3.pdf` → `Jane Doe` (second of three or more
///   ` - `-separated segments)
/// - `A3 Jane Doe.pdf` → `Jane Doe` (prefix matched case-insensitively)
/// - otherwise the file stem
pub fn display_name(filename: &str) -> String {
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| filename.to_string());

    let parts: Vec<&str> = stem.split(NAME_SEPARATOR).collect();
    if parts.len() >= 3 {
        return parts[1].trim().to_string();
    }

    if stem
        .get(..ASSIGNMENT_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(ASSIGNMENT_PREFIX))
    {
        return stem[ASSIGNMENT_PREFIX.len()..].trim().to_string();
    }

    stem
}

/// Stable identifier for a submission, derived from its display name
pub fn submission_id(display_name: &str) -> String {
    slug::slugify(display_name)
}
