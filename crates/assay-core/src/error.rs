//! Error types and exit codes for assay
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid configuration value)
//! - 3: Data error (missing submissions, invalid lexicon)
//!
//! The scoring pipeline itself is total and never produces these; they come
//! from configuration, discovery, and writing reports.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the assay binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing submissions, invalid lexicon (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during assay operations
#[derive(Error, Debug)]
pub enum AssayError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("no submissions found in {dir:?}")]
    NoSubmissions { dir: PathBuf },

    #[error("invalid lexicon {lexicon}: {reason}")]
    InvalidLexicon { lexicon: String, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl AssayError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        AssayError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        AssayError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        AssayError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        AssayError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a lexicon that fails validation
    pub fn invalid_lexicon(lexicon: &str, reason: impl std::fmt::Display) -> Self {
        AssayError::InvalidLexicon {
            lexicon: lexicon.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AssayError::UnknownFormat(_)
            | AssayError::UsageError(_)
            | AssayError::InvalidValue { .. }
            | AssayError::Unsupported { .. } => ExitCode::Usage,

            AssayError::NoSubmissions { .. }
            | AssayError::InvalidLexicon { .. }
            | AssayError::NotFound { .. } => ExitCode::Data,

            AssayError::Io(_)
            | AssayError::Yaml(_)
            | AssayError::Json(_)
            | AssayError::Toml(_)
            | AssayError::FailedOperationWithTarget { .. }
            | AssayError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            AssayError::UnknownFormat(_) => "unknown_format",
            AssayError::UsageError(_) => "usage_error",
            AssayError::InvalidValue { .. } => "invalid_value",
            AssayError::Unsupported { .. } => "unsupported",
            AssayError::NoSubmissions { .. } => "no_submissions",
            AssayError::InvalidLexicon { .. } => "invalid_lexicon",
            AssayError::NotFound { .. } => "not_found",
            AssayError::Io(_) => "io_error",
            AssayError::Yaml(_) => "yaml_error",
            AssayError::Json(_) => "json_error",
            AssayError::Toml(_) => "toml_error",
            AssayError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            AssayError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for assay operations
pub type Result<T> = std::result::Result<T, AssayError>;
