//! Text normalisation and counting

use std::sync::OnceLock;

use regex::Regex;

static WORD_RE: OnceLock<Regex> = OnceLock::new();
static HEADING_RE: OnceLock<Regex> = OnceLock::new();

/// Headings needed before the structure signal fires (strictly more than this)
pub const HEADING_THRESHOLD: usize = 2;

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"\w+").expect("valid word regex"))
}

fn heading_re() -> &'static Regex {
    HEADING_RE.get_or_init(|| Regex::new(r"(?m)^#+\s").expect("valid heading regex"))
}

/// Lowercase-folded submission text, only alive for one analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        NormalizedText(raw.to_lowercase())
    }

    /// Substring containment, not word-boundary aware
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

/// Number of runs of word characters in the raw text
pub fn word_count(raw: &str) -> usize {
    word_re().find_iter(raw).count()
}

/// Number of markdown-style heading lines (`#`, `##`, ... followed by whitespace)
pub fn heading_count(raw: &str) -> usize {
    heading_re().find_iter(raw).count()
}

/// Whether the text is visibly sectioned: more than two heading lines
pub fn detect_structure(raw: &str) -> bool {
    heading_count(raw) > HEADING_THRESHOLD
}
