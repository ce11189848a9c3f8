//! Boundary model: the host build tool's view of a project, and the
//! configuration of one resolution run.
//!
//! These types are produced by the host (project object model, plugin
//! configuration) and consumed here; they carry no behavior beyond
//! convenience constructors.

use pomsync_artifact::{ArtifactCoordinate, GroupArtifact};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DeclaredDependency
// ---------------------------------------------------------------------------

/// One dependency as declared in the project's build configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDependency {
    /// Group identifier.
    pub group_id: String,
    /// Artifact identifier.
    pub artifact_id: String,
    /// Declared version.
    pub version: String,
    /// Optional classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Declared type, `jar` when omitted.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Declared scope, `compile` when omitted.
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Whether the dependency is optional.
    #[serde(default)]
    pub optional: bool,
    /// Transitive exclusions declared on this dependency.
    #[serde(default)]
    pub exclusions: Vec<GroupArtifact>,
}

fn default_kind() -> String {
    "jar".to_owned()
}

fn default_scope() -> String {
    pomsync_artifact::SCOPE_COMPILE.to_owned()
}

impl DeclaredDependency {
    /// Create a `jar`/`compile` dependency declaration.
    #[must_use]
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: None,
            kind: default_kind(),
            scope: default_scope(),
            optional: false,
            exclusions: Vec::new(),
        }
    }

    /// Return a copy with the given scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// The coordinate of this declaration.
    #[must_use]
    pub fn coordinate(&self) -> ArtifactCoordinate {
        let mut coordinate =
            ArtifactCoordinate::new(self.group_id.clone(), self.artifact_id.clone(), self.version.clone())
                .with_kind(self.kind.clone());
        coordinate.classifier = self.classifier.clone();
        coordinate
    }
}

// ---------------------------------------------------------------------------
// ProjectModel
// ---------------------------------------------------------------------------

/// The slice of the host project model the resolver needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectModel {
    /// The project's own coordinate.
    pub coordinate: ArtifactCoordinate,
    /// The project's declared direct dependencies, in declaration order.
    #[serde(default)]
    pub dependencies: Vec<DeclaredDependency>,
}

impl ProjectModel {
    /// Create a project model.
    #[must_use]
    pub fn new(coordinate: ArtifactCoordinate) -> Self {
        Self {
            coordinate,
            dependencies: Vec::new(),
        }
    }

    /// Return a copy with the given dependency appended.
    #[must_use]
    pub fn with_dependency(mut self, dependency: DeclaredDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

// ---------------------------------------------------------------------------
// ResolutionConfig
// ---------------------------------------------------------------------------

/// Configuration of one resolution run, deserialized from the host's plugin
/// configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Whether dependencies satisfied by reactor siblings become IDE project
    /// references instead of repository artifacts.
    pub use_project_references: bool,
    /// Configured `groupId:artifactId` exclusions.
    pub excludes: Vec<String>,
    /// Whether sources attachments may be fetched from remote repositories.
    /// The local repository is always consulted.
    pub download_sources: bool,
    /// Whether javadoc attachments are resolved at all.
    pub download_javadocs: bool,
    /// Whether the collaborator should discard negative-cache entries before
    /// answering attachment requests.
    pub force_recheck: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            use_project_references: true,
            excludes: Vec::new(),
            download_sources: false,
            download_javadocs: false,
            force_recheck: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_dependency_defaults() {
        let json = r#"{"group_id":"com.foo","artifact_id":"bar","version":"1.0"}"#;
        let dependency: DeclaredDependency = serde_json::from_str(json).unwrap();
        assert_eq!(dependency.kind, "jar");
        assert_eq!(dependency.scope, "compile");
        assert!(!dependency.optional);
        assert!(dependency.exclusions.is_empty());
    }

    #[test]
    fn test_declared_dependency_coordinate() {
        let mut dependency = DeclaredDependency::new("com.foo", "bar", "1.0").with_scope("test");
        dependency.classifier = Some("tests".to_owned());
        dependency.kind = "test-jar".to_owned();

        let coordinate = dependency.coordinate();
        assert_eq!(coordinate.id(), "com.foo:bar:1.0");
        assert_eq!(coordinate.classifier.as_deref(), Some("tests"));
        assert_eq!(coordinate.kind, "test-jar");
    }

    #[test]
    fn test_config_defaults() {
        let config = ResolutionConfig::default();
        assert!(config.use_project_references);
        assert!(!config.download_sources);
        assert!(!config.download_javadocs);
        assert!(!config.force_recheck);
        assert!(config.excludes.is_empty());
    }

    #[test]
    fn test_config_deserializes_with_missing_fields() {
        let config: ResolutionConfig =
            serde_json::from_str(r#"{"download_sources":true}"#).unwrap();
        assert!(config.download_sources);
        assert!(config.use_project_references);
    }

    #[test]
    fn test_project_model_builder() {
        let project = ProjectModel::new(ArtifactCoordinate::new("com.foo", "app", "1.0"))
            .with_dependency(DeclaredDependency::new("org.dep", "lib", "2.0"));
        assert_eq!(project.dependencies.len(), 1);
        assert_eq!(project.dependencies[0].artifact_id, "lib");
    }
}
