//! Handlebars-based renderer for copied template files.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled.
//! Any `{{variable}}` referenced in a file must be present in the render
//! context, otherwise rendering fails instead of silently producing an empty
//! string. HTML escaping is turned off: templates are source files, READMEs
//! and configs, not web pages.
//!
//! ## Usage
//!
//! ```ignore
//! use instantiate_core::templates::renderer::TemplateRenderer;
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "project": { "name": "demo", "number": 0 } });
//! let output = renderer.render("# {{ project.name }}", &data)?;
//! ```

use std::path::Path;

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{InstantiateError, Result};

/// Template renderer used by the substitution stage.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> std::result::Result<String, String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| e.to_string())
    }

    /// Render the file at `path` in place.
    ///
    /// Content that is not valid UTF-8 is a render error for that file.
    pub fn render_file(&self, path: &Path, data: &Value) -> Result<()> {
        let bytes = std::fs::read(path)?;
        let template = String::from_utf8(bytes).map_err(|_| InstantiateError::Render {
            path: path.to_path_buf(),
            message: "file is not valid UTF-8 text".into(),
        })?;

        let rendered = self
            .render(&template, data)
            .map_err(|message| InstantiateError::Render {
                path: path.to_path_buf(),
                message,
            })?;

        std::fs::write(path, rendered)?;
        Ok(())
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
