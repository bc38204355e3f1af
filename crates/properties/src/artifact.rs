use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use makever_core::{Artifact, VersionTriple};
use tokio::fs::read_to_string;

use crate::rewrite::{find_version, replace_version_lines};

pub const PROPERTIES_PATH: &str = "library.properties";

/// The `library.properties` key=value artifact.
#[derive(Debug)]
pub struct PropertiesArtifact {
    path: PathBuf,
}

impl PropertiesArtifact {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(PROPERTIES_PATH),
        }
    }

    /// Artifact rooted at `root` instead of the current directory.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            path: root.join(PROPERTIES_PATH),
        }
    }

    async fn read(&self) -> Result<String> {
        read_to_string(&self.path)
            .await
            .with_context(|| format!("unable to read {}", self.path.display()))
    }
}

impl Default for PropertiesArtifact {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Artifact for PropertiesArtifact {
    fn name(&self) -> &str {
        "properties"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    async fn current_version(&self) -> Result<Option<String>> {
        let content = self.read().await?;
        Ok(find_version(&content).map(String::from))
    }

    async fn render(&self, version: &VersionTriple) -> Result<String> {
        let content = self.read().await?;
        Ok(replace_version_lines(&content, &version.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs::write;

    #[tokio::test]
    async fn test_current_version() {
        let temp_dir = TempDir::new().unwrap();
        let artifact = PropertiesArtifact::rooted_at(temp_dir.path());
        write(artifact.path(), "name=Foo\nversion=1.9.9\n")
            .await
            .unwrap();

        let version = artifact.current_version().await.unwrap();
        assert_eq!(version.as_deref(), Some("1.9.9"));
    }

    #[tokio::test]
    async fn test_current_version_without_version_line() {
        let temp_dir = TempDir::new().unwrap();
        let artifact = PropertiesArtifact::rooted_at(temp_dir.path());
        write(artifact.path(), "name=Foo\n").await.unwrap();

        let version = artifact.current_version().await.unwrap();
        assert_eq!(version, None);
    }

    #[tokio::test]
    async fn test_current_version_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let artifact = PropertiesArtifact::rooted_at(temp_dir.path());

        assert!(artifact.current_version().await.is_err());
    }

    #[tokio::test]
    async fn test_render_replaces_version_line() {
        let temp_dir = TempDir::new().unwrap();
        let artifact = PropertiesArtifact::rooted_at(temp_dir.path());
        write(artifact.path(), "name=Foo\nversion=1.9.9\nauthor=Bar\n")
            .await
            .unwrap();

        let version: VersionTriple = "2.0.1".parse().unwrap();
        let rendered = artifact.render(&version).await.unwrap();
        assert_eq!(rendered, "name=Foo\nversion=2.0.1\nauthor=Bar\n");
    }
}
