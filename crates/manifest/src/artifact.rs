use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use makever_core::{Artifact, VersionTriple};
use tokio::fs::read_to_string;

use crate::rewrite::{find_version, set_version};

pub const MANIFEST_PATH: &str = "library.json";

/// The `library.json` JSON manifest artifact.
#[derive(Debug)]
pub struct ManifestArtifact {
    path: PathBuf,
}

impl ManifestArtifact {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(MANIFEST_PATH),
        }
    }

    /// Artifact rooted at `root` instead of the current directory.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            path: root.join(MANIFEST_PATH),
        }
    }

    async fn read(&self) -> Result<String> {
        read_to_string(&self.path)
            .await
            .with_context(|| format!("unable to read {}", self.path.display()))
    }
}

impl Default for ManifestArtifact {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Artifact for ManifestArtifact {
    fn name(&self) -> &str {
        "manifest"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    async fn current_version(&self) -> Result<Option<String>> {
        let content = self.read().await?;
        find_version(&content).with_context(|| format!("unable to parse {}", self.path.display()))
    }

    async fn render(&self, version: &VersionTriple) -> Result<String> {
        let content = self.read().await?;
        set_version(&content, &version.to_string())
            .with_context(|| format!("unable to parse {}", self.path.display()))
    }
}
