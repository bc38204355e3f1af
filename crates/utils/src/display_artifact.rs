use colored::*;
use makever_core::Artifact;

/// One-line colored rendering of an artifact for terminal output.
pub fn display_artifact(artifact: &dyn Artifact) -> String {
    format!(
        "{} {} {}",
        format!("[{}]", artifact.name()).bright_blue().bold(),
        "→".bright_cyan(),
        artifact.path().display().to_string().bright_black()
    )
}
