//! The repository-resolution collaborator boundary.
//!
//! Transitive-closure computation, version conflict resolution, transport
//! and caching all belong to the host build tool's resolution machinery.
//! This module only defines the seam: the request types this engine sends
//! and the trait the collaborator implements. Every call is blocking and
//! synchronous; timeouts, if any, are the collaborator's business.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pomsync_artifact::{ArtifactCoordinate, GroupArtifact};

use crate::error::Result;
use crate::graph::DependencyGraph;
use crate::project::ProjectModel;

// ---------------------------------------------------------------------------
// GraphRequest
// ---------------------------------------------------------------------------

/// Request for the resolution of a project's full dependency graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRequest {
    /// The project whose dependencies are resolved.
    pub project: ProjectModel,
    /// (group, artifact) pairs excluded from resolution before the walk.
    #[serde(default)]
    pub exclusions: Vec<GroupArtifact>,
}

// ---------------------------------------------------------------------------
// ResolutionPolicy
// ---------------------------------------------------------------------------

/// How a single-artifact resolution request may be answered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionPolicy {
    /// Whether remote repositories may be consulted. The local repository
    /// is always checked first either way.
    pub with_remote_repositories: bool,
    /// Whether the collaborator should discard negative-cache entries
    /// recorded for the coordinate before answering.
    pub force_recheck: bool,
}

impl ResolutionPolicy {
    /// Local-repository-only resolution.
    #[must_use]
    pub fn local_only() -> Self {
        Self::default()
    }

    /// Resolution that may reach remote repositories.
    #[must_use]
    pub fn with_remote() -> Self {
        Self {
            with_remote_repositories: true,
            force_recheck: false,
        }
    }
}

// ---------------------------------------------------------------------------
// ResolvedArtifact
// ---------------------------------------------------------------------------

/// A successfully resolved single artifact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    /// The coordinate that was resolved. For attachment requests the type
    /// field carries the requested file extension.
    pub coordinate: ArtifactCoordinate,
    /// The resolved file.
    pub file: PathBuf,
}

// ---------------------------------------------------------------------------
// ArtifactRepository
// ---------------------------------------------------------------------------

/// The repository-resolution collaborator.
pub trait ArtifactRepository {
    /// Resolve the project's transitive dependency graph, applying the
    /// request's exclusions before the walk and the collaborator's own
    /// conflict resolution (nearest-wins or equivalent) during it.
    ///
    /// # Errors
    ///
    /// A failure here names the unresolvable coordinate and aborts the whole
    /// run; there is no per-node recovery for the primary graph.
    fn resolve_graph(&self, request: &GraphRequest) -> Result<DependencyGraph>;

    /// Resolve one artifact under the given policy.
    ///
    /// # Errors
    ///
    /// Fails when the artifact cannot be found in the repositories the
    /// policy allows. Callers in the optional attachment pass treat this as
    /// per-item and recoverable.
    fn resolve_artifact(
        &self,
        coordinate: &ArtifactCoordinate,
        policy: ResolutionPolicy,
    ) -> Result<ResolvedArtifact>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_constructors() {
        assert!(!ResolutionPolicy::local_only().with_remote_repositories);
        assert!(ResolutionPolicy::with_remote().with_remote_repositories);
        assert!(!ResolutionPolicy::with_remote().force_recheck);
    }

    #[test]
    fn test_graph_request_serde_roundtrip() {
        let request = GraphRequest {
            project: ProjectModel::new(ArtifactCoordinate::new("com.foo", "app", "1.0")),
            exclusions: vec![GroupArtifact::new("org.slf4j", "slf4j-api")],
        };
        let json = serde_json::to_string(&request).unwrap();
        let decoded: GraphRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
    }
}
