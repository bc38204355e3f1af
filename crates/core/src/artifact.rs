use std::path::Path;

use crate::VersionTriple;
use anyhow::Result;
use async_trait::async_trait;

/// A metadata file that embeds the release version.
///
/// One implementation per target file. `render` produces the complete new
/// file contents; writing and replacing the target is the caller's job, so
/// a failed render never touches disk.
#[async_trait]
pub trait Artifact: std::fmt::Debug + Send + Sync {
    /// Short label used in terminal and JSON output.
    fn name(&self) -> &str;

    /// Target path, resolved against the current working directory.
    fn path(&self) -> &Path;

    /// The version currently embedded in the file on disk, `None` if absent.
    async fn current_version(&self) -> Result<Option<String>>;

    /// Full new file contents for `version`.
    async fn render(&self, version: &VersionTriple) -> Result<String>;
}
