//! Rubric configuration for assay
//!
//! Configuration is TOML. Resolution order: an explicit path, then
//! `assay.toml` in the submissions directory, then the global file
//! (`~/.config/assay/config.toml`, or `$ASSAY_CONFIG_DIR/config.toml`),
//! then built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssayError, Result};
use crate::lexicon::{Category, Lexicon, LexiconRegistry};

pub use types::{
    ApproachConfig, LexiconConfig, ReportConfig, RubricConfig, CONFIG_FORMAT_VERSION,
    DEFAULT_OUTPUT_FILE,
};

/// Name of the per-directory configuration file
pub const LOCAL_CONFIG_FILE: &str = "assay.toml";

const CONFIG_DIR: &str = "assay";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ASSAY_CONFIG_DIR";

/// Location of the global configuration file, if one can be determined
pub fn global_config_path() -> Option<PathBuf> {
    let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(config_dir.join(CONFIG_FILE))
}

impl RubricConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AssayError::io_operation("read config", path.display(), e))?;
        let config: RubricConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Find and load the effective configuration
    pub fn resolve(explicit: Option<&Path>, submissions_dir: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(AssayError::not_found("config file", path.display()));
            }
            return Self::load(path);
        }

        if let Some(dir) = submissions_dir {
            let local = dir.join(LOCAL_CONFIG_FILE);
            if local.is_file() {
                return Self::load(&local);
            }
        }

        if let Some(global) = global_config_path() {
            if global.is_file() {
                return Self::load(&global);
            }
        }

        Ok(Self::default())
    }

    /// Check version, report settings and lexicon overrides
    pub fn validate(&self) -> Result<()> {
        if self.version == 0 || self.version > CONFIG_FORMAT_VERSION {
            crate::bail_invalid!("config version", self.version);
        }
        let output = self.report.output_file.trim();
        if output.is_empty() || output.contains(['/', '\\']) {
            crate::bail_invalid!("report.output_file", &self.report.output_file);
        }
        self.lexicon_registry()?;
        Ok(())
    }

    /// Built-in lexicons with any configured overrides applied
    pub fn lexicon_registry(&self) -> Result<LexiconRegistry> {
        let mut registry = LexiconRegistry::builtin();

        for category in Category::ALL {
            if let Some(tokens) = self.lexicon.tokens_for(category) {
                let lexicon = Lexicon::new(category.as_str(), tokens)?;
                registry = registry.with_category(category, lexicon);
            }
        }

        if let Some(approaches) = &self.lexicon.approaches {
            let lexicons = approaches
                .iter()
                .map(|a| Lexicon::new(a.name.trim(), &a.tokens))
                .collect::<Result<Vec<_>>>()?;
            registry = registry.with_approaches(lexicons)?;
        }

        Ok(registry)
    }
}

impl LexiconConfig {
    fn tokens_for(&self, category: Category) -> Option<&Vec<String>> {
        match category {
            Category::ResearchDesign => self.research_design.as_ref(),
            Category::PilotExecution => self.pilot_execution.as_ref(),
            Category::Documentation => self.documentation.as_ref(),
            Category::Communication => self.communication.as_ref(),
        }
    }
}
