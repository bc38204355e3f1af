use makever_core::Artifact;
use makever_header::HeaderArtifact;
use makever_manifest::ManifestArtifact;
use makever_properties::PropertiesArtifact;

// artifact list, in commit order

pub fn get_artifacts() -> [Box<dyn Artifact>; 3] {
    [
        Box::new(PropertiesArtifact::new()),
        Box::new(ManifestArtifact::new()),
        Box::new(HeaderArtifact::new()),
    ]
}
