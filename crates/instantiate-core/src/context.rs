//! Variable namespaces loaded from context files.
//!
//! Each context file becomes one namespace named after its file stem, so
//! `course.yaml` containing `instructor: Justin` is visible to templates as
//! `{{ course.instructor }}`. The `project` name is reserved for the generated
//! [`ProjectDescriptor`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{InstantiateError, Result};
use crate::project::ProjectDescriptor;

/// Namespace name under which the project descriptor is injected.
pub const PROJECT_NAMESPACE: &str = "project";

/// Registry of namespace name to structured value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespaces {
    entries: BTreeMap<String, Value>,
}

impl Namespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a namespace, rejecting reserved or already-present names.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Result<()> {
        let name = name.into();
        if name == PROJECT_NAMESPACE || self.entries.contains_key(&name) {
            return Err(InstantiateError::DuplicateNamespace(name));
        }
        self.entries.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the render context: every namespace plus `project`.
    pub fn with_project(&self, project: &ProjectDescriptor) -> Value {
        let mut context = self.to_value();
        if let Value::Object(map) = &mut context {
            map.insert(PROJECT_NAMESPACE.to_string(), project.to_value());
        }
        context
    }

    /// The namespaces alone as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

/// Load every context file in order into a fresh [`Namespaces`].
pub fn load_contexts<P: AsRef<Path>>(paths: &[P]) -> Result<Namespaces> {
    let mut namespaces = Namespaces::new();
    for path in paths {
        let path = path.as_ref();
        let name = namespace_name(path)?;
        let value = load_file(path)?;
        tracing::debug!("loaded context namespace '{name}' from {}", path.display());
        namespaces.insert(name, value)?;
    }
    Ok(namespaces)
}

/// Parse one context file. `.json` goes through serde_json, anything else through YAML.
pub fn load_file(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => InstantiateError::not_found(path, e),
        std::io::ErrorKind::InvalidData => parse_error(path, "file is not valid UTF-8"),
        _ => InstantiateError::Io(e),
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&contents).map_err(|e| parse_error(path, e))
    } else if contents.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_yaml::from_str(&contents).map_err(|e| parse_error(path, e))
    }
}

/// Derive the namespace name from the file stem (`vars.yaml` -> `vars`).
pub fn namespace_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| parse_error(path, "cannot derive a namespace name from the file name"))
}

fn parse_error(path: &Path, message: impl ToString) -> InstantiateError {
    InstantiateError::Parse {
        path: PathBuf::from(path),
        message: message.to_string(),
    }
}
