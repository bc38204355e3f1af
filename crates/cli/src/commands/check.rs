use anyhow::Result;
use clap::Args;
use colored::Colorize;
use makever_core::SyncReport;
use makever_utils::display_artifact;

use crate::{artifacts::get_artifacts, options::FormatOptions};

#[derive(Args, Debug)]
#[command(about = "Report the version embedded in each metadata file")]
pub struct CheckArgs {
    #[arg(short, long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Report per-artifact versions, failing when they disagree
pub async fn handle_check(args: &CheckArgs) -> Result<()> {
    let artifacts = get_artifacts();

    let mut reports = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let version = artifact.current_version().await?;
        reports.push(SyncReport::new(
            artifact.name(),
            &artifact.path().display().to_string(),
            version,
        ));
    }

    let in_sync = SyncReport::all_in_sync(&reports);

    let mut stdout_lines = artifacts
        .iter()
        .zip(&reports)
        .map(|(artifact, report)| {
            let version = match &report.version {
                Some(version) => format!("v{version}").bright_green().to_string(),
                None => "missing".bright_red().to_string(),
            };
            format!("{} {}", display_artifact(artifact.as_ref()), version)
        })
        .collect::<Vec<_>>();
    if in_sync {
        stdout_lines.push("All files in sync".bright_green().to_string());
    }
    args.format.print(
        &stdout_lines.join("\n"),
        &serde_json::to_string_pretty(&reports)?,
    );

    if !in_sync {
        anyhow::bail!("metadata files are out of sync");
    }
    Ok(())
}
