use serde::Serialize;

/// Per-artifact record of the version found on disk.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub name: String,
    pub path: String,
    pub version: Option<String>,
}

impl SyncReport {
    pub fn new(name: &str, path: &str, version: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            version,
        }
    }

    /// True when every report carries the same present version.
    pub fn all_in_sync(reports: &[SyncReport]) -> bool {
        let mut versions = reports.iter().map(|report| report.version.as_deref());
        match versions.next() {
            Some(Some(first)) => versions.all(|version| version == Some(first)),
            Some(None) => false,
            None => true,
        }
    }
}
