//! Terminal reporting for an instantiate run.
//!
//! Progress and the final summary go to stdout; failures go to stderr so a
//! script can capture the created path without the noise.

use console::style;

use instantiate_core::error::Stage;
use instantiate_core::pipeline::Outcome;

/// Number of stages the pipeline reports through [`print_stage`].
const TOTAL_STAGES: u32 = 5;

/// Title line naming the project, underlined to its width.
pub fn print_header(project_name: &str) {
    let text = format!("instantiate: {project_name}");
    println!("\n{}", style(&text).bold().cyan());
    println!("{}", style("=".repeat(text.chars().count())).dim());
}

/// `[n/5] ...` line announcing a pipeline stage.
pub fn print_stage(stage: Stage) {
    let (step, text) = match stage {
        Stage::Prepare => (1, "Checking template and project name"),
        Stage::Context => (2, "Loading context files"),
        Stage::Numbering => (3, "Inferring project number"),
        Stage::Copy => (4, "Copying template tree"),
        Stage::Substitute => (5, "Rendering files"),
    };
    println!(
        "{} {}",
        style(format!("[{step}/{TOTAL_STAGES}]")).dim(),
        text
    );
}

/// Summary after a successful run: destination, number, namespaces, counts.
pub fn print_outcome(outcome: &Outcome) {
    println!(
        "{} Created {}",
        style("[OK]").green().bold(),
        outcome.destination.display()
    );
    print_key_value("Number", &outcome.project.number.to_string());
    if !outcome.namespaces.is_empty() {
        print_key_value("Namespaces", &outcome.namespaces.join(", "));
    }
    print_key_value(
        "Files",
        &format!(
            "{} copied, {} rendered",
            outcome.files_copied, outcome.files_rendered
        ),
    );
    println!();
}

/// Yellow `[WARN]` note, e.g. about files left behind by a failed render.
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow().bold(), text);
}

/// Red `[ERROR]` line on stderr carrying the failing stage and its cause.
pub fn print_error(text: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), text);
}

/// Indented `key: value` line.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}
