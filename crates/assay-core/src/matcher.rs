//! Lexicon matching: category coverage and approach detection

use std::collections::BTreeSet;

use serde::Serialize;

use crate::lexicon::{Category, Lexicon, LexiconRegistry};
use crate::text::NormalizedText;

/// Token added to the communication matches when the text is visibly sectioned
pub const HEADING_TOKEN: &str = "heading";

/// Tokens of one category found in a submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMatch {
    pub category: Category,
    pub matched: BTreeSet<String>,
    pub lexicon_size: usize,
    pub score: f64,
}

impl CategoryMatch {
    fn new(category: Category, matched: BTreeSet<String>, lexicon_size: usize) -> Self {
        let score = coverage(matched.len(), lexicon_size);
        CategoryMatch {
            category,
            matched,
            lexicon_size,
            score,
        }
    }

    pub fn has(&self, token: &str) -> bool {
        self.matched.contains(token)
    }

    /// True when at least one of `tokens` was matched
    pub fn has_any(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|t| self.has(t))
    }

    /// Add the synthetic heading token and recompute the score.
    ///
    /// The denominator stays at the lexicon size, so with a lexicon that
    /// lacks "heading" the score can exceed the raw-match coverage.
    pub fn with_heading_signal(mut self) -> Self {
        self.matched.insert(HEADING_TOKEN.to_string());
        self.score = coverage(self.matched.len(), self.lexicon_size);
        self
    }
}

fn coverage(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

/// Match one category lexicon against normalized text
pub fn match_category(text: &NormalizedText, category: Category, lexicon: &Lexicon) -> CategoryMatch {
    let matched = lexicon
        .tokens()
        .iter()
        .filter(|token| text.contains(token))
        .cloned()
        .collect();
    CategoryMatch::new(category, matched, lexicon.len())
}

/// Names of approaches evidenced by the text, in declaration order
pub fn detect_approaches(text: &NormalizedText, registry: &LexiconRegistry) -> Vec<String> {
    registry
        .approaches()
        .iter()
        .filter(|approach| approach.tokens().iter().any(|t| text.contains(t)))
        .map(|approach| approach.name().to_string())
        .collect()
}
