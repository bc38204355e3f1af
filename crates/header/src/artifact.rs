use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use makever_core::{Artifact, VersionTriple};
use tokio::fs::read_to_string;

use crate::render::{find_version, render_header};

pub const HEADER_PATH: &str = "src/ESP8266AudioVer.h";

/// The generated `src/ESP8266AudioVer.h` artifact.
///
/// Unlike the other artifacts the header need not pre-exist; it is fully
/// regenerated on every `set`.
#[derive(Debug)]
pub struct HeaderArtifact {
    path: PathBuf,
}

impl HeaderArtifact {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(HEADER_PATH),
        }
    }

    /// Artifact rooted at `root` instead of the current directory.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            path: root.join(HEADER_PATH),
        }
    }
}

impl Default for HeaderArtifact {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Artifact for HeaderArtifact {
    fn name(&self) -> &str {
        "header"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    async fn current_version(&self) -> Result<Option<String>> {
        let content = match read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("unable to read {}", self.path.display()));
            }
        };
        Ok(find_version(&content).map(String::from))
    }

    async fn render(&self, version: &VersionTriple) -> Result<String> {
        Ok(render_header(version))
    }
}
