//! Unified error types for the instantiate toolkit.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// All errors that can occur while instantiating a project.
#[derive(Error, Debug)]
pub enum InstantiateError {
    // --- Inputs ---

    /// The template directory or a context file does not exist.
    ///
    /// `source` carries the I/O error when one was observed; it is `None` when
    /// the path exists but is the wrong kind (a file where a directory is needed).
    #[error("not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The project name is empty or would escape the parent directory.
    #[error("invalid project name: {0:?} (must be non-empty and contain no path separators)")]
    InvalidProjectName(String),

    /// A `--no-replace` pattern is not a valid glob.
    #[error("invalid no-replace pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    // --- Context ---

    /// A context file's content is not valid YAML/JSON key-value data.
    #[error("failed to parse context file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Two context files share a base name, or one is named after the reserved `project` key.
    #[error("duplicate namespace '{0}' (each context file needs a distinct base name, and 'project' is reserved)")]
    DuplicateNamespace(String),

    // --- Copy ---

    /// The destination directory already exists; nothing was written.
    #[error("destination already exists: {0} (not overwriting)")]
    AlreadyExists(PathBuf),

    // --- Substitution ---

    /// A copied file could not be rendered (not UTF-8, undefined variable, bad syntax).
    #[error("failed to render {path}: {message}")]
    Render { path: PathBuf, message: String },

    // --- Configuration ---

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An error while walking a directory tree.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl InstantiateError {
    /// `NotFound` for `path`, keeping the I/O error that reported it.
    pub fn not_found(path: &Path, source: std::io::Error) -> Self {
        Self::NotFound {
            path: path.to_path_buf(),
            source: Some(source),
        }
    }
}

/// Alias for `Result<T, InstantiateError>`.
pub type Result<T> = std::result::Result<T, InstantiateError>;

/// The pipeline stage a failure originated in, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Prepare,
    Context,
    Numbering,
    Copy,
    Substitute,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prepare => "prepare",
            Self::Context => "context",
            Self::Numbering => "numbering",
            Self::Copy => "copy",
            Self::Substitute => "substitute",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error tagged with the stage that produced it.
#[derive(Error, Debug)]
#[error("{stage} stage failed")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: InstantiateError,
}

impl StageError {
    pub fn new(stage: Stage, source: InstantiateError) -> Self {
        Self { stage, source }
    }
}
