//! Optional defaults file (`instantiate.config.json`).
//!
//! ```json
//! {
//!   "numbering": 2,
//!   "contexts": ["course.yaml"],
//!   "no_replace": ["*.png", "*.ipynb"]
//! }
//! ```
//!
//! Relative context paths are resolved against the config file's directory.
//! Command-line flags take precedence over every field.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InstantiateError, Result};
use crate::numbering::DEFAULT_WIDTH;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "instantiate.config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstantiateConfig {
    /// Zero-padding width for the numeric prefix; 0 disables numbering.
    pub numbering: usize,
    /// Context files loaded before any given on the command line.
    pub contexts: Vec<PathBuf>,
    /// File-name patterns copied without substitution.
    pub no_replace: Vec<String>,
}

impl Default for InstantiateConfig {
    fn default() -> Self {
        Self {
            numbering: DEFAULT_WIDTH,
            contexts: Vec::new(),
            no_replace: Vec::new(),
        }
    }
}

impl InstantiateConfig {
    /// Load a config file. Missing files are an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => InstantiateError::not_found(path, e),
            _ => InstantiateError::Io(e),
        })?;
        let mut config: Self =
            serde_json::from_str(&contents).map_err(|e| InstantiateError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        if let Some(base) = path.parent() {
            for ctx in &mut config.contexts {
                if ctx.is_relative() {
                    *ctx = base.join(&*ctx);
                }
            }
        }
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!("loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| InstantiateError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
