//! Second-pass resolution of sources and javadoc attachments.
//!
//! The reconciler derives companion coordinates for every candidate
//! dependency, resolves them through the repository collaborator, and
//! matches the results back onto the primary list by inverting the
//! classifier derivation. Everything in this pass is optional: a companion
//! that cannot be resolved leaves its dependency unattached and is reported
//! in the end-of-run summary, never as an error.
//!
//! The sources pass always runs; remote repositories are consulted only
//! when `download_sources` is set (the local repository is checked either
//! way). The javadoc pass as a whole is gated by `download_javadocs`, and
//! its candidate filtering is computed independently of the sources pass.

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

use tracing::{debug, info};

use pomsync_artifact::classifier::{
    invert_classifier, javadoc_coordinate, javadoc_coordinates, sources_coordinate,
    sources_coordinates, AttachmentKind,
};
use pomsync_artifact::{
    Artifact, ArtifactCoordinate, FilterChain, ReactorFilter, ReactorIndex, ScopeExcludeFilter,
    TypeRegistry, UnresolvedFilter, SCOPE_SYSTEM,
};

use crate::dependency::ResolvedDependency;
use crate::project::ResolutionConfig;
use crate::repository::{ArtifactRepository, ResolutionPolicy, ResolvedArtifact};
use crate::status::DependencyStatusSets;

// ---------------------------------------------------------------------------
// AttachmentReport
// ---------------------------------------------------------------------------

/// Dependencies still lacking an attachment after reconciliation. Used for
/// the user-facing summary only, never for control flow.
#[derive(Clone, Debug, Default)]
pub struct AttachmentReport {
    /// Dependencies without a sources attachment.
    pub missing_sources: Vec<ArtifactCoordinate>,
    /// Dependencies without a javadoc attachment.
    pub missing_javadoc: Vec<ArtifactCoordinate>,
}

impl AttachmentReport {
    /// Log the summary at info level. A pass is mentioned only when its
    /// download flag was enabled: without it, missing attachments are the
    /// expected state and not worth a report.
    pub fn log_summary(&self, config: &ResolutionConfig) {
        let mut message = String::new();
        if config.download_sources && !self.missing_sources.is_empty() {
            message.push_str("Sources not available for:");
            for coordinate in &self.missing_sources {
                let _ = write!(message, "\n  {}", coordinate.id());
            }
        }
        if config.download_javadocs && !self.missing_javadoc.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str("Javadoc not available for:");
            for coordinate in &self.missing_javadoc {
                let _ = write!(message, "\n  {}", coordinate.id());
            }
        }
        if !message.is_empty() {
            info!("{message}");
        }
    }
}

// ---------------------------------------------------------------------------
// AttachmentReconciler
// ---------------------------------------------------------------------------

/// Runs the secondary resolution pass over a classified dependency list.
pub struct AttachmentReconciler<'a, R: ArtifactRepository> {
    repository: &'a R,
    types: &'a TypeRegistry,
    reactor: &'a ReactorIndex,
    config: &'a ResolutionConfig,
}

impl<'a, R: ArtifactRepository> AttachmentReconciler<'a, R> {
    /// Create a reconciler over the given collaborators.
    #[must_use]
    pub fn new(
        repository: &'a R,
        types: &'a TypeRegistry,
        reactor: &'a ReactorIndex,
        config: &'a ResolutionConfig,
    ) -> Self {
        Self {
            repository,
            types,
            reactor,
            config,
        }
    }

    /// Enrich `dependencies` with sources/javadoc attachments. `artifacts`
    /// is the flattened graph the dependencies were classified from, in the
    /// same order; it carries the scope strings and files the candidate
    /// filters need.
    pub fn reconcile(
        &self,
        dependencies: &mut [ResolvedDependency],
        artifacts: &[Artifact],
    ) -> AttachmentReport {
        let sources_policy = ResolutionPolicy {
            with_remote_repositories: self.config.download_sources,
            force_recheck: self.config.force_recheck,
        };
        let mut candidates = self.candidates(artifacts);
        let coordinates = sources_coordinates(&candidates.resolved, self.types);
        let resolved = self.resolve_all(&coordinates, sources_policy);
        mark_unresolved(&mut candidates, &resolved, |artifact| {
            sources_coordinate(artifact, self.types)
        });
        candidates.log_debug("sources");
        self.match_back(dependencies, &resolved);

        if self.config.download_javadocs {
            let javadoc_policy = ResolutionPolicy {
                with_remote_repositories: true,
                force_recheck: self.config.force_recheck,
            };
            let mut candidates = self.candidates(artifacts);
            let coordinates = javadoc_coordinates(&candidates.resolved, self.types);
            let resolved = self.resolve_all(&coordinates, javadoc_policy);
            mark_unresolved(&mut candidates, &resolved, |artifact| {
                javadoc_coordinate(artifact, self.types)
            });
            candidates.log_debug("javadoc");
            self.match_back(dependencies, &resolved);
        }

        report(dependencies)
    }

    /// Partition the artifacts into attachment candidates and skipped ones.
    /// System-scoped artifacts never have companions, reactor members are
    /// satisfied by project references (when enabled), and artifacts
    /// without a primary file have nothing to attach to.
    fn candidates(&self, artifacts: &[Artifact]) -> DependencyStatusSets {
        let mut chain = FilterChain::new().with(ScopeExcludeFilter::new([SCOPE_SYSTEM]));
        if self.config.use_project_references {
            chain = chain.with(ReactorFilter::new(self.reactor));
        }
        let chain = chain.with(UnresolvedFilter);
        DependencyStatusSets::partition(artifacts, &chain)
    }

    /// Resolve every coordinate, tolerating per-item failures.
    fn resolve_all(
        &self,
        coordinates: &[ArtifactCoordinate],
        policy: ResolutionPolicy,
    ) -> Vec<ResolvedArtifact> {
        let mut resolved = Vec::with_capacity(coordinates.len());
        for coordinate in coordinates {
            match self.repository.resolve_artifact(coordinate, policy) {
                Ok(artifact) => resolved.push(artifact),
                Err(error) => debug!("error resolving {coordinate}: {error}"),
            }
        }
        resolved
    }

    /// Match resolved companions back onto the primary dependencies by
    /// reconstructing the primary coordinate from the companion classifier.
    fn match_back(&self, dependencies: &mut [ResolvedDependency], resolved: &[ResolvedArtifact]) {
        let mut by_coordinate: HashMap<ArtifactCoordinate, usize> = HashMap::new();
        for (index, dependency) in dependencies.iter().enumerate() {
            by_coordinate.insert(dependency.coordinate.clone(), index);
        }

        for artifact in resolved {
            let Some(classifier) = artifact.coordinate.classifier.as_deref() else {
                debug!("resolved companion {} has no classifier", artifact.coordinate);
                continue;
            };
            // unknown classifiers are tolerated: stale or renamed companions
            let Some((kind, base_classifier)) = invert_classifier(classifier) else {
                continue;
            };

            let mut key = artifact.coordinate.clone();
            key.classifier = base_classifier;
            match by_coordinate.get(&key) {
                Some(&index) => match kind {
                    AttachmentKind::Sources => {
                        dependencies[index].attach_sources(artifact.file.clone());
                    }
                    AttachmentKind::Javadoc => {
                        dependencies[index].attach_javadoc(artifact.file.clone());
                    }
                },
                None => debug!(
                    "no dependency matches resolved companion {}",
                    artifact.coordinate
                ),
            }
        }
    }
}

/// Move candidates whose derived coordinate did not resolve into the
/// unresolved set; purely for the debug rendering of the pass.
fn mark_unresolved(
    candidates: &mut DependencyStatusSets,
    resolved: &[ResolvedArtifact],
    derive: impl Fn(&Artifact) -> ArtifactCoordinate,
) {
    let resolved_coordinates: HashSet<&ArtifactCoordinate> =
        resolved.iter().map(|artifact| &artifact.coordinate).collect();

    candidates.unresolved = candidates
        .resolved
        .iter()
        .filter(|artifact| !resolved_coordinates.contains(&derive(artifact)))
        .cloned()
        .collect();
}

/// Build the missing-attachment report over the reconciled list. Reactor
/// references and system-scoped dependencies are left out: no companion is
/// ever resolved for them.
fn report(dependencies: &[ResolvedDependency]) -> AttachmentReport {
    let mut report = AttachmentReport::default();
    for dependency in dependencies {
        if dependency.referenced_project || dependency.system_scoped {
            continue;
        }
        if dependency.source_attachment().is_none() {
            report.missing_sources.push(dependency.coordinate.clone());
        }
        if dependency.javadoc_attachment().is_none() {
            report.missing_javadoc.push(dependency.coordinate.clone());
        }
    }
    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
