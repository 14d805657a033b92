//! instantiate CLI — scaffold a numbered project directory from a template.
//!
//! ```text
//! instantiate <template_dir> <project_name> [--numbering <width>] [--context <file>]...
//! ```
//!
//! The heavy lifting lives in [`instantiate_core::pipeline`]; this crate only
//! parses arguments, merges them with the optional config file and reports
//! progress.

mod output;
mod run;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "instantiate",
    about = "Create a new numbered project from a template directory",
    version
)]
pub struct Cli {
    /// Template directory to copy
    template_dir: PathBuf,

    /// Project name (used verbatim in the directory name and as {{ project.name }})
    project_name: String,

    /// Zero-padding width of the number prefix; 0 disables numbering [default: 2]
    #[arg(long, value_name = "WIDTH")]
    numbering: Option<usize>,

    /// Context file (YAML or JSON); available to templates under its base name
    #[arg(long = "context", value_name = "FILE")]
    contexts: Vec<PathBuf>,

    /// File-name patterns to copy without substitution (e.g. '*.png')
    #[arg(long = "no-replace", value_name = "PATTERN", num_args = 1..)]
    no_replace: Vec<String>,

    /// Directory to create the project in
    #[arg(long, value_name = "DIR", default_value = ".")]
    into: PathBuf,

    /// Path to a defaults file (default: ./instantiate.config.json, if present)
    #[arg(long, env = "INSTANTIATE_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
