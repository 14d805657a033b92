use std::path::Path;

use anyhow::{Context, Result};

use instantiate_core::config::{InstantiateConfig, CONFIG_FILE};
use instantiate_core::error::Stage;
use instantiate_core::pipeline::{self, InstantiateRequest};

use crate::output;
use crate::Cli;

/// Create a new project from the command-line arguments.
///
/// Flags override the config file; context files from the config are loaded
/// before the ones given with `--context`, and no-replace patterns from both
/// sources apply.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => InstantiateConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => InstantiateConfig::load_or_default(Path::new(CONFIG_FILE))
            .with_context(|| format!("loading config {CONFIG_FILE}"))?,
    };

    let mut request = InstantiateRequest::new(&cli.template_dir, &cli.project_name);
    request.parent_dir = cli.into.clone();
    request.numbering = cli.numbering.unwrap_or(config.numbering);
    request.contexts = config.contexts.iter().chain(&cli.contexts).cloned().collect();
    request.no_replace = config
        .no_replace
        .iter()
        .chain(&cli.no_replace)
        .cloned()
        .collect();
    tracing::debug!("resolved request: {request:?}");

    output::print_header(&cli.project_name);
    output::print_key_value("Template", &cli.template_dir.display().to_string());

    match pipeline::instantiate_with(&request, output::print_stage) {
        Ok(outcome) => {
            output::print_outcome(&outcome);
            Ok(())
        }
        Err(err) => {
            if matches!(err.stage, Stage::Substitute) {
                output::print_warning("partially rendered files were left on disk");
            }
            Err(err.into())
        }
    }
}
