//! In-place substitution over a copied project tree.
//!
//! Walks the destination in file-name order and renders each regular file
//! with [`TemplateRenderer::render_file`]. The first failure aborts the walk;
//! files rendered before it stay rendered.

use std::path::Path;

use glob::Pattern;
use serde_json::Value;
use walkdir::{DirEntry, WalkDir};

use crate::error::{InstantiateError, Result};
use crate::templates::renderer::TemplateRenderer;

/// File-name patterns excluded from substitution.
///
/// Patterns are fnmatch-style (`*.png`, `vendor`, `data?.csv`) and are matched
/// against the entry's file name only. A matching directory is skipped as a
/// whole.
#[derive(Debug, Clone, Default)]
pub struct SkipPatterns {
    patterns: Vec<Pattern>,
}

impl SkipPatterns {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|e| InstantiateError::InvalidPattern {
                    pattern: p.to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(file_name))
    }

    fn skips(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.matches(name))
    }
}

/// Render every regular file under `root` in place. Returns the number rendered.
pub fn substitute_tree(
    root: &Path,
    renderer: &TemplateRenderer,
    context: &Value,
    skip: &SkipPatterns,
) -> Result<u64> {
    let mut rendered = 0;
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let skipped = skip.skips(e);
            if skipped {
                tracing::debug!("not rendering {} (no-replace)", e.path().display());
            }
            !skipped
        });

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        tracing::debug!("rendering {}", entry.path().display());
        renderer.render_file(entry.path(), context)?;
        rendered += 1;
    }

    Ok(rendered)
}
