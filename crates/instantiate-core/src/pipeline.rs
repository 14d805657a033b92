//! End-to-end instantiation: context → number → copy → substitute.
//!
//! Every failure is tagged with the [`Stage`] it came from and stops the run.
//! Nothing is cleaned up: if substitution fails halfway, the destination
//! directory stays on disk with the files rendered so far.

use std::path::PathBuf;

use crate::context::load_contexts;
use crate::copier::{check_template_dir, copy_tree};
use crate::error::{InstantiateError, Stage, StageError};
use crate::numbering::{next_project_number, DEFAULT_WIDTH};
use crate::project::{validate_name, ProjectDescriptor};
use crate::substitution::{substitute_tree, SkipPatterns};
use crate::templates::renderer::TemplateRenderer;

/// Everything needed for one run.
#[derive(Debug, Clone)]
pub struct InstantiateRequest {
    /// Template directory to copy.
    pub template_dir: PathBuf,
    /// Project name, used verbatim.
    pub project_name: String,
    /// Directory the new project is created in.
    pub parent_dir: PathBuf,
    /// Zero-padding width for the numeric prefix; 0 disables numbering.
    pub numbering: usize,
    /// Context files, one namespace each.
    pub contexts: Vec<PathBuf>,
    /// File-name patterns copied without substitution.
    pub no_replace: Vec<String>,
}

impl InstantiateRequest {
    pub fn new(template_dir: impl Into<PathBuf>, project_name: impl Into<String>) -> Self {
        Self {
            template_dir: template_dir.into(),
            project_name: project_name.into(),
            parent_dir: PathBuf::from("."),
            numbering: DEFAULT_WIDTH,
            contexts: Vec::new(),
            no_replace: Vec::new(),
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub project: ProjectDescriptor,
    pub destination: PathBuf,
    pub namespaces: Vec<String>,
    pub files_copied: u64,
    pub files_rendered: u64,
}

/// Run the whole pipeline.
pub fn instantiate(request: &InstantiateRequest) -> std::result::Result<Outcome, StageError> {
    instantiate_with(request, |_| {})
}

/// Run the whole pipeline, calling `on_stage` as each stage begins.
pub fn instantiate_with<F>(
    request: &InstantiateRequest,
    mut on_stage: F,
) -> std::result::Result<Outcome, StageError>
where
    F: FnMut(Stage),
{
    let fail = |stage: Stage| move |e: InstantiateError| StageError::new(stage, e);

    on_stage(Stage::Prepare);
    validate_name(&request.project_name).map_err(fail(Stage::Prepare))?;
    check_template_dir(&request.template_dir).map_err(fail(Stage::Prepare))?;
    let skip = SkipPatterns::new(&request.no_replace).map_err(fail(Stage::Prepare))?;

    on_stage(Stage::Context);
    let namespaces = load_contexts(&request.contexts).map_err(fail(Stage::Context))?;
    tracing::info!("loaded {} context namespace(s)", namespaces.len());

    on_stage(Stage::Numbering);
    let number = next_project_number(&request.parent_dir, request.numbering)
        .map_err(fail(Stage::Numbering))?;
    let project = ProjectDescriptor::new(&request.project_name, number, request.numbering);
    let destination = project.destination(&request.parent_dir);
    tracing::info!("next project number is {number}, destination {}", destination.display());

    on_stage(Stage::Copy);
    let files_copied = copy_tree(&request.template_dir, &destination).map_err(fail(Stage::Copy))?;

    on_stage(Stage::Substitute);
    let context = namespaces.with_project(&project);
    let renderer = TemplateRenderer::new();
    let files_rendered =
        substitute_tree(&destination, &renderer, &context, &skip).map_err(fail(Stage::Substitute))?;
    tracing::info!("rendered {files_rendered} of {files_copied} file(s)");

    Ok(Outcome {
        project,
        destination,
        namespaces: namespaces.names().map(str::to_string).collect(),
        files_copied,
        files_rendered,
    })
}
