//! Orchestration of one resolution run.
//!
//! A run is strictly sequential: build the filters, ask the repository
//! collaborator for the dependency graph (fatal on failure), flatten it in
//! preorder, classify every node against the reactor, then optionally hand
//! the list to the attachment reconciler. One thread, no suspension, no
//! cancellation; the reactor index is read-only throughout.

use tracing::{debug, warn};

use pomsync_artifact::{
    Artifact, GroupArtifact, ReactorIndex, ReactorLookup, TypeRegistry,
};

use crate::attachments::{AttachmentReconciler, AttachmentReport};
use crate::dependency::ResolvedDependency;
use crate::error::Result;
use crate::project::{ProjectModel, ResolutionConfig};
use crate::repository::{ArtifactRepository, GraphRequest};

// ---------------------------------------------------------------------------
// ProjectResolver
// ---------------------------------------------------------------------------

/// Resolves one project's dependency list against the repositories and the
/// reactor.
pub struct ProjectResolver<'a, R: ArtifactRepository> {
    repository: &'a R,
    types: &'a TypeRegistry,
    reactor: &'a ReactorIndex,
    config: ResolutionConfig,
}

impl<'a, R: ArtifactRepository> ProjectResolver<'a, R> {
    /// Create a resolver over the given collaborators.
    #[must_use]
    pub fn new(
        repository: &'a R,
        types: &'a TypeRegistry,
        reactor: &'a ReactorIndex,
        config: ResolutionConfig,
    ) -> Self {
        Self {
            repository,
            types,
            reactor,
            config,
        }
    }

    /// Resolve and classify the project's dependencies.
    ///
    /// The returned list is in preorder of the resolved graph and is the
    /// deterministic ordering descriptor generation relies on.
    ///
    /// # Errors
    ///
    /// Fails fast on a malformed exclusion entry, and propagates a
    /// dependency-graph resolution failure unchanged: without the graph the
    /// classpath cannot be determined.
    pub fn resolve(&self, project: &ProjectModel) -> Result<Vec<ResolvedDependency>> {
        let artifacts = self.resolve_artifacts(project)?;
        Ok(artifacts
            .iter()
            .map(|artifact| self.classify(artifact))
            .collect())
    }

    /// Resolve, classify, and enrich the dependencies with sources/javadoc
    /// attachments, returning the enriched list and the missing-attachment
    /// report. The report summary is logged before returning.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::resolve`]; attachment resolution
    /// problems are per-item and never fail the run.
    pub fn resolve_enriched(
        &self,
        project: &ProjectModel,
    ) -> Result<(Vec<ResolvedDependency>, AttachmentReport)> {
        let artifacts = self.resolve_artifacts(project)?;
        let mut dependencies: Vec<ResolvedDependency> = artifacts
            .iter()
            .map(|artifact| self.classify(artifact))
            .collect();

        let reconciler =
            AttachmentReconciler::new(self.repository, self.types, self.reactor, &self.config);
        let report = reconciler.reconcile(&mut dependencies, &artifacts);
        report.log_summary(&self.config);

        Ok((dependencies, report))
    }

    /// Build the request, resolve the graph and flatten it.
    fn resolve_artifacts(&self, project: &ProjectModel) -> Result<Vec<Artifact>> {
        let exclusions = self
            .config
            .excludes
            .iter()
            .map(|entry| GroupArtifact::parse(entry))
            .collect::<pomsync_artifact::Result<Vec<_>>>()?;

        debug!("resolving dependency graph for {}", project.coordinate);
        let request = GraphRequest {
            project: project.clone(),
            exclusions,
        };
        let graph = self.repository.resolve_graph(&request)?;

        let artifacts = graph.flatten_preorder();
        debug!("flattened {} dependencies", artifacts.len());
        Ok(artifacts)
    }

    /// Classify one flattened graph node.
    fn classify(&self, artifact: &Artifact) -> ResolvedDependency {
        let mut dependency = ResolvedDependency::new(artifact.coordinate.clone());
        dependency.test_dependency = artifact.is_test_scope();
        dependency.system_scoped = artifact.is_system_scope();
        dependency.provided = artifact.is_provided_scope();
        dependency.added_to_classpath = self.types.added_to_classpath(&artifact.coordinate.kind);

        match self.reactor.lookup(&artifact.coordinate) {
            ReactorLookup::Member(module) if self.config.use_project_references => {
                // the IDE links the sibling project; no file is needed
                dependency.referenced_project = true;
                dependency.ide_project_name = Some(module.project_name.clone());
            }
            ReactorLookup::VersionMismatch(module) => {
                warn!(
                    "artifact {} is available as reactor project {} with a different version (expected {}, found {}); resolving externally",
                    artifact.coordinate,
                    module.project_name,
                    artifact.coordinate.version,
                    module.version
                );
                dependency.file = artifact.file.clone();
            }
            _ => {
                dependency.file = artifact.file.clone();
            }
        }

        dependency
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::DependencyGraph;
    use crate::repository::{ResolutionPolicy, ResolvedArtifact};
    use pomsync_artifact::{ArtifactCoordinate, ReactorModule};
    use std::path::PathBuf;

    /// Stub collaborator answering from a pre-built graph.
    struct StubRepository {
        graph: DependencyGraph,
    }

    impl ArtifactRepository for StubRepository {
        fn resolve_graph(&self, _request: &GraphRequest) -> Result<DependencyGraph> {
            Ok(self.graph.clone())
        }

        fn resolve_artifact(
            &self,
            coordinate: &ArtifactCoordinate,
            _policy: ResolutionPolicy,
        ) -> Result<ResolvedArtifact> {
            Err(Error::ArtifactResolution {
                coordinate: coordinate.to_string(),
                message: "not available".to_owned(),
            })
        }
    }

    struct FailingRepository;

    impl ArtifactRepository for FailingRepository {
        fn resolve_graph(&self, request: &GraphRequest) -> Result<DependencyGraph> {
            Err(Error::GraphResolution {
                coordinate: request.project.coordinate.to_string(),
                message: "missing primary artifact".to_owned(),
            })
        }

        fn resolve_artifact(
            &self,
            coordinate: &ArtifactCoordinate,
            _policy: ResolutionPolicy,
        ) -> Result<ResolvedArtifact> {
            Err(Error::ArtifactResolution {
                coordinate: coordinate.to_string(),
                message: "unreachable".to_owned(),
            })
        }
    }

    fn project() -> ProjectModel {
        ProjectModel::new(ArtifactCoordinate::new("com.test", "app", "1.0"))
    }

    fn graph_with(artifacts: Vec<Artifact>) -> DependencyGraph {
        let mut graph = DependencyGraph::new(Artifact::new(
            ArtifactCoordinate::new("com.test", "app", "1.0"),
            "compile",
        ));
        let root = graph.root();
        for artifact in artifacts {
            graph.add_dependency(root, artifact);
        }
        graph
    }

    fn external(name: &str, scope: &str) -> Artifact {
        Artifact::new(ArtifactCoordinate::new("com.foo", name, "1.0"), scope)
            .with_file(PathBuf::from(format!("/repo/{name}-1.0.jar")))
    }

    #[test]
    fn test_scope_flags_from_scope_string() {
        let repository = StubRepository {
            graph: graph_with(vec![external("bar", "test")]),
        };
        let types = TypeRegistry::with_defaults();
        let reactor = ReactorIndex::new(vec![]);
        let resolver =
            ProjectResolver::new(&repository, &types, &reactor, ResolutionConfig::default());

        let dependencies = resolver.resolve(&project()).unwrap();
        assert_eq!(dependencies.len(), 1);
        let dependency = &dependencies[0];
        assert!(dependency.test_dependency);
        assert!(!dependency.system_scoped);
        assert!(!dependency.provided);
        assert!(!dependency.referenced_project);
        assert!(dependency.added_to_classpath);
        assert!(dependency.file.is_some());
    }

    #[test]
    fn test_reactor_member_becomes_project_reference() {
        let repository = StubRepository {
            graph: graph_with(vec![external("bar", "compile")]),
        };
        let types = TypeRegistry::with_defaults();
        let reactor = ReactorIndex::new(vec![ReactorModule::new(
            "com.foo",
            "bar",
            "1.0",
            "bar-project",
        )]);
        let resolver =
            ProjectResolver::new(&repository, &types, &reactor, ResolutionConfig::default());

        let dependencies = resolver.resolve(&project()).unwrap();
        let dependency = &dependencies[0];
        assert!(dependency.referenced_project);
        assert_eq!(dependency.ide_project_name.as_deref(), Some("bar-project"));
        assert!(dependency.file.is_none());
    }

    #[test]
    fn test_reactor_member_resolved_externally_without_references() {
        let repository = StubRepository {
            graph: graph_with(vec![external("bar", "compile")]),
        };
        let types = TypeRegistry::with_defaults();
        let reactor = ReactorIndex::new(vec![ReactorModule::new(
            "com.foo",
            "bar",
            "1.0",
            "bar-project",
        )]);
        let config = ResolutionConfig {
            use_project_references: false,
            ..ResolutionConfig::default()
        };
        let resolver = ProjectResolver::new(&repository, &types, &reactor, config);

        let dependency = &resolver.resolve(&project()).unwrap()[0];
        assert!(!dependency.referenced_project);
        assert!(dependency.file.is_some());
    }

    #[test]
    fn test_version_mismatch_resolves_externally() {
        let repository = StubRepository {
            graph: graph_with(vec![Artifact::new(
                ArtifactCoordinate::new("com.foo", "bar", "2.0"),
                "compile",
            )
            .with_file(PathBuf::from("/repo/bar-2.0.jar"))]),
        };
        let types = TypeRegistry::with_defaults();
        let reactor = ReactorIndex::new(vec![ReactorModule::new(
            "com.foo",
            "bar",
            "1.0",
            "bar-project",
        )]);
        let resolver =
            ProjectResolver::new(&repository, &types, &reactor, ResolutionConfig::default());

        let dependency = &resolver.resolve(&project()).unwrap()[0];
        assert!(!dependency.referenced_project);
        assert!(dependency.ide_project_name.is_none());
        assert_eq!(dependency.file.as_deref().unwrap().to_str().unwrap(), "/repo/bar-2.0.jar");
    }

    #[test]
    fn test_graph_failure_aborts_the_run() {
        let types = TypeRegistry::with_defaults();
        let reactor = ReactorIndex::new(vec![]);
        let resolver = ProjectResolver::new(
            &FailingRepository,
            &types,
            &reactor,
            ResolutionConfig::default(),
        );

        let error = resolver.resolve(&project()).unwrap_err();
        assert!(matches!(error, Error::GraphResolution { .. }));
    }

    #[test]
    fn test_malformed_exclude_fails_fast() {
        let repository = StubRepository {
            graph: graph_with(vec![]),
        };
        let types = TypeRegistry::with_defaults();
        let reactor = ReactorIndex::new(vec![]);
        let config = ResolutionConfig {
            excludes: vec!["missing-colon".to_owned()],
            ..ResolutionConfig::default()
        };
        let resolver = ProjectResolver::new(&repository, &types, &reactor, config);

        let error = resolver.resolve(&project()).unwrap_err();
        assert!(matches!(error, Error::Artifact(_)));
    }

    #[test]
    fn test_war_dependency_not_added_to_classpath() {
        let mut artifact = external("webapp", "compile");
        artifact.coordinate.kind = "war".to_owned();
        let repository = StubRepository {
            graph: graph_with(vec![artifact]),
        };
        let types = TypeRegistry::with_defaults();
        let reactor = ReactorIndex::new(vec![]);
        let resolver =
            ProjectResolver::new(&repository, &types, &reactor, ResolutionConfig::default());

        let dependency = &resolver.resolve(&project()).unwrap()[0];
        assert!(!dependency.added_to_classpath);
    }
}
