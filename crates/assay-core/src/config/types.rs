//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Report file written next to the submissions unless overridden
pub const DEFAULT_OUTPUT_FILE: &str = "A3-assessments.auto.qmd";

/// Rubric configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Lexicon overrides
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Report rendering options
    #[serde(default)]
    pub report: ReportConfig,
}

/// Per-category token lists replacing the built-in ones
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_design: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilot_execution: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication: Option<Vec<String>>,

    /// Ordered approach table (`[[lexicon.approach]]`), replaces the built-in table
    #[serde(default, rename = "approach", skip_serializing_if = "Option::is_none")]
    pub approaches: Option<Vec<ApproachConfig>>,
}

/// One methodological approach and its evidence tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachConfig {
    pub name: String,
    pub tokens: Vec<String>,
}

/// Report rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// File name of the report inside the submissions directory
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Rubric named in the document preamble
    #[serde(default = "default_rubric")]
    pub rubric: String,
}

impl Default for RubricConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            lexicon: LexiconConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            output_file: default_output_file(),
            rubric: default_rubric(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_title() -> String {
    "A3 Assessment: Test Plan + Pilot Study".to_string()
}

fn default_subtitle() -> String {
    "Automated first-pass feedback aligned to rubric".to_string()
}

fn default_rubric() -> String {
    "Assignment 3 rubric".to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}
