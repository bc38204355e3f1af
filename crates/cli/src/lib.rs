use anyhow::Result;

use clap::{Parser, Subcommand};

use crate::{
    commands::{CheckArgs, SetArgs, handle_check, handle_set},
    prompter::InquirePrompter,
};

pub mod artifacts;
pub mod commands;
pub mod options;
pub mod prompter;

pub use prompter::UserCancelled;

#[derive(Parser, Debug)]
#[command(
    name = "makever",
    author,
    version,
    about = "Synchronize the release version across library metadata files",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Set(SetArgs),
    Check(CheckArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            print!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    match cli.command {
        Commands::Set(args) => handle_set(&args, &InquirePrompter).await?,
        Commands::Check(args) => handle_check(&args).await?,
    }
    Ok(())
}
