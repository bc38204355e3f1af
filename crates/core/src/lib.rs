pub mod artifact;
pub mod report;
pub mod stage;
pub mod version;

// Re-export the main types for convenience
pub use artifact::Artifact;
pub use report::SyncReport;
pub use stage::{StagedWrite, commit_all, stage_all};
pub use version::{ParseVersionError, VersionTriple};
