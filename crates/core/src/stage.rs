use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs::{remove_file, rename, write};

/// A pending file replacement: contents written to `<target>.new`, renamed
/// over the target on commit.
#[derive(Debug)]
pub struct StagedWrite {
    target: PathBuf,
    temp: PathBuf,
}

impl StagedWrite {
    /// Write `contents` to the temp file next to `target`.
    pub async fn prepare(target: &Path, contents: &str) -> Result<Self> {
        let temp = temp_path(target);
        write(&temp, contents)
            .await
            .with_context(|| format!("unable to write {}", temp.display()))?;
        Ok(Self {
            target: target.to_path_buf(),
            temp,
        })
    }

    /// Rename the temp file over the target. Atomic at the filesystem level.
    pub async fn commit(self) -> Result<()> {
        rename(&self.temp, &self.target)
            .await
            .with_context(|| format!("unable to replace {}", self.target.display()))
    }

    /// Remove the temp file, leaving the target untouched. Best effort.
    pub async fn discard(self) {
        let _ = remove_file(&self.temp).await;
    }

    pub fn target(&self) -> &Path {
        &self.target
    }
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(".new");
    PathBuf::from(name)
}

/// Prepare a staged write for every `(target, contents)` pair.
///
/// If any temp write fails, the already-prepared temp files are removed and
/// no target has been modified.
pub async fn stage_all(entries: Vec<(PathBuf, String)>) -> Result<Vec<StagedWrite>> {
    let mut staged = Vec::with_capacity(entries.len());
    for (target, contents) in entries {
        match StagedWrite::prepare(&target, &contents).await {
            Ok(stage) => staged.push(stage),
            Err(e) => {
                for stage in staged {
                    stage.discard().await;
                }
                return Err(e);
            }
        }
    }
    Ok(staged)
}

/// Rename every staged temp file over its target, in order.
pub async fn commit_all(staged: Vec<StagedWrite>) -> Result<()> {
    for stage in staged {
        stage.commit().await?;
    }
    Ok(())
}
