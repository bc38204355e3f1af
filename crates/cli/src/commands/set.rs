use anyhow::Result;
use clap::Args;
use futures::future::try_join_all;
use makever_core::{VersionTriple, commit_all, stage_all};
use makever_utils::{display_artifact, display_update};

use crate::{artifacts::get_artifacts, options::FormatOptions, prompter::Prompter};

#[derive(Args, Debug)]
#[command(about = "Rewrite every metadata file to the given version")]
pub struct SetArgs {
    /// Version in X.Y.Z form
    pub version: VersionTriple,

    /// Show the planned updates without touching any file
    #[arg(short, long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    #[arg(short, long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Synchronize the version across every metadata file
pub async fn handle_set(args: &SetArgs, prompter: &dyn Prompter) -> Result<()> {
    let artifacts = get_artifacts();
    let version = args.version;

    // Render everything up front so a bad input file aborts before any write
    let current = try_join_all(
        artifacts
            .iter()
            .map(|artifact| artifact.current_version()),
    )
    .await?;
    let rendered = try_join_all(artifacts.iter().map(|artifact| artifact.render(&version))).await?;

    let next = version.to_string();
    let stdout_lines = artifacts
        .iter()
        .zip(&current)
        .map(|(artifact, current)| {
            format!(
                "{} {}",
                display_artifact(artifact.as_ref()),
                display_update(current.as_deref(), &next)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let json_updates = artifacts
        .iter()
        .zip(&current)
        .map(|(artifact, current)| {
            serde_json::json!({
                "name": artifact.name(),
                "path": artifact.path().display().to_string(),
                "from": current,
                "to": next,
            })
        })
        .collect::<Vec<_>>();
    args.format
        .print(&stdout_lines, &serde_json::to_string_pretty(&json_updates)?);

    if args.dry_run {
        if matches!(args.format, FormatOptions::Stdout) {
            println!("Dry run, no files will be modified");
        }
        return Ok(());
    }

    // confirm
    if !args.yes {
        let confirm = prompter.confirm(&format!("Update all files to v{next}?"))?;
        if !confirm {
            println!("Update cancelled");
            return Ok(());
        }
    }

    // stage every temp file before the first rename, so a failed write
    // leaves all three targets untouched
    let entries = artifacts
        .iter()
        .zip(rendered)
        .map(|(artifact, contents)| (artifact.path().to_path_buf(), contents))
        .collect();
    let staged = stage_all(entries).await?;
    commit_all(staged).await?;

    if matches!(args.format, FormatOptions::Stdout) {
        println!("Updated {} files to v{next}", artifacts.len());
    }
    Ok(())
}
