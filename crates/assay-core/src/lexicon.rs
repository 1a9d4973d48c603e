//! Lexicon registry
//!
//! Token lists per rubric category and per methodological approach. The
//! lists are plain data: matching logic lives in [`crate::matcher`], so a
//! rubric change only touches this table (or the `[lexicon]` config section).

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AssayError, Result};

/// One of the four weighted rubric dimensions.
///
/// Declaration order is the tie-break priority used when two categories
/// score the same: research design outranks pilot execution, and so on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ResearchDesign,
    PilotExecution,
    Documentation,
    Communication,
}

impl Category {
    /// All categories in priority order
    pub const ALL: [Category; 4] = [
        Category::ResearchDesign,
        Category::PilotExecution,
        Category::Documentation,
        Category::Communication,
    ];

    /// Machine name, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ResearchDesign => "research_design",
            Category::PilotExecution => "pilot_execution",
            Category::Documentation => "documentation",
            Category::Communication => "communication",
        }
    }

    /// Human-readable rubric heading
    pub fn label(&self) -> &'static str {
        match self {
            Category::ResearchDesign => "Research Design",
            Category::PilotExecution => "Pilot Execution",
            Category::Documentation => "Method Documentation",
            Category::Communication => "Communication",
        }
    }

    /// Short name used in the report preamble
    pub fn short_label(&self) -> &'static str {
        match self {
            Category::ResearchDesign => "Research Design",
            Category::PilotExecution => "Pilot",
            Category::Documentation => "Documentation",
            Category::Communication => "Communication",
        }
    }

    /// Rubric weight in percent. The four weights sum to 100.
    pub fn weight(&self) -> f64 {
        match self {
            Category::ResearchDesign => 40.0,
            Category::PilotExecution => 30.0,
            Category::Documentation => 20.0,
            Category::Communication => 10.0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AssayError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AssayError::invalid_value("category", s))
    }
}

/// A named, ordered set of lowercase tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexicon {
    name: String,
    tokens: Vec<String>,
}

impl Lexicon {
    /// Build a lexicon from user-supplied tokens.
    ///
    /// Tokens are trimmed and lowercased. A blank name, an empty token list,
    /// blank tokens and duplicates (after normalisation) are rejected.
    pub fn new<I, S>(name: impl Into<String>, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            crate::bail_lexicon!("<unnamed>", "blank name");
        }
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();

        for token in tokens {
            let token = token.as_ref().trim().to_lowercase();
            if token.is_empty() {
                crate::bail_lexicon!(&name, "blank token");
            }
            if !seen.insert(token.clone()) {
                crate::bail_lexicon!(&name, format!("duplicate token '{}'", token));
            }
            normalized.push(token);
        }

        if normalized.is_empty() {
            crate::bail_lexicon!(&name, "no tokens");
        }

        Ok(Lexicon {
            name,
            tokens: normalized,
        })
    }

    fn from_static(name: &str, tokens: &[&str]) -> Self {
        Lexicon {
            name: name.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokens in declaration order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

const RESEARCH_DESIGN: &[&str] = &[
    "research question",
    "hypothesis",
    "hypotheses",
    "success criteria",
    "decision threshold",
    "alternative explanation",
    "method",
    "methodology",
    "quality control",
    "reliability",
    "validity",
];

const PILOT_EXECUTION: &[&str] = &[
    "pilot",
    "implementation",
    "what worked",
    "what didn",
    "didn't work",
    "unexpected",
    "refine",
    "refinement",
    "revised",
    "timeline",
    "resources",
    "risk",
    "backup",
];

const DOCUMENTATION: &[&str] = &[
    "protocol",
    "step-by-step",
    "reproducibility",
    "data management",
    "metadata",
    "ethical",
    "privacy",
    "consent",
    "irb",
    "access",
    "security",
];

const COMMUNICATION: &[&str] = &[
    "figure", "table", "diagram", "appendix", "section", "heading", "visual", "overview",
];

const APPROACHES: &[(&str, &[&str])] = &[
    (
        "simulation",
        &[
            "simulation",
            "simulate",
            "radiance",
            "energyplus",
            "cfd",
            "ladybug",
            "honeybee",
        ],
    ),
    (
        "user study",
        &[
            "user study",
            "survey",
            "interview",
            "focus group",
            "questionnaire",
        ],
    ),
    (
        "measurement",
        &[
            "measurement",
            "sensor",
            "monitoring",
            "environmental",
            "observation",
        ],
    ),
    (
        "comparative",
        &["comparative", "compare", "alternative", "alternatives"],
    ),
    ("case study", &["case study", "case-study"]),
];

/// All lexicons the pipeline consults for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconRegistry {
    research_design: Lexicon,
    pilot_execution: Lexicon,
    documentation: Lexicon,
    communication: Lexicon,
    approaches: Vec<Lexicon>,
}

impl LexiconRegistry {
    /// The built-in rubric lexicons
    pub fn builtin() -> Self {
        LexiconRegistry {
            research_design: Lexicon::from_static("research_design", RESEARCH_DESIGN),
            pilot_execution: Lexicon::from_static("pilot_execution", PILOT_EXECUTION),
            documentation: Lexicon::from_static("documentation", DOCUMENTATION),
            communication: Lexicon::from_static("communication", COMMUNICATION),
            approaches: APPROACHES
                .iter()
                .map(|(name, tokens)| Lexicon::from_static(name, tokens))
                .collect(),
        }
    }

    /// Lexicon for a rubric category
    pub fn category(&self, category: Category) -> &Lexicon {
        match category {
            Category::ResearchDesign => &self.research_design,
            Category::PilotExecution => &self.pilot_execution,
            Category::Documentation => &self.documentation,
            Category::Communication => &self.communication,
        }
    }

    /// Replace the lexicon of one category
    pub fn with_category(mut self, category: Category, lexicon: Lexicon) -> Self {
        match category {
            Category::ResearchDesign => self.research_design = lexicon,
            Category::PilotExecution => self.pilot_execution = lexicon,
            Category::Documentation => self.documentation = lexicon,
            Category::Communication => self.communication = lexicon,
        }
        self
    }

    /// Approach lexicons in declaration order
    pub fn approaches(&self) -> &[Lexicon] {
        &self.approaches
    }

    /// Replace the approach table. Approach names must be unique.
    pub fn with_approaches(mut self, approaches: Vec<Lexicon>) -> Result<Self> {
        let mut names = HashSet::new();
        for approach in &approaches {
            if !names.insert(approach.name()) {
                crate::bail_lexicon!("approach", format!("duplicate approach '{}'", approach.name()));
            }
        }
        self.approaches = approaches;
        Ok(self)
    }
}

impl Default for LexiconRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
