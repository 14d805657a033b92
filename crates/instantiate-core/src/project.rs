//! The generated project descriptor and destination naming.
//!
//! ## Directory naming
//!
//! ```text
//! <parent>/
//! ├── 00-intro/        # width 2, number 0
//! ├── 01-homework/     # width 2, number 1
//! └── scratch/         # width 0, numbering disabled
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InstantiateError, Result};
use crate::numbering::format_number;

/// The `project` namespace exposed to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDescriptor {
    /// Project name, used verbatim.
    pub name: String,
    /// Sequence number inferred from the parent directory.
    pub number: u64,
    /// `number` zero-padded to the numbering width; empty when numbering is disabled.
    pub padded_number: String,
}

impl ProjectDescriptor {
    pub fn new(name: impl Into<String>, number: u64, width: usize) -> Self {
        Self {
            name: name.into(),
            number,
            padded_number: format_number(number, width),
        }
    }

    /// Directory name for this project: `<padded>-<name>`, or `<name>` when unnumbered.
    pub fn dir_name(&self) -> String {
        if self.padded_number.is_empty() {
            self.name.clone()
        } else {
            format!("{}-{}", self.padded_number, self.name)
        }
    }

    /// Full destination path under `parent`.
    pub fn destination(&self, parent: &Path) -> PathBuf {
        parent.join(self.dir_name())
    }

    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "number": self.number,
            "padded_number": self.padded_number,
        })
    }
}

/// Reject names that are empty or that would place the project outside its parent.
pub fn validate_name(name: &str) -> Result<()> {
    let bad = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.contains(std::path::MAIN_SEPARATOR);
    if bad {
        return Err(InstantiateError::InvalidProjectName(name.to_string()));
    }
    Ok(())
}
