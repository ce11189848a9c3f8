//! Partitioning of an artifact set into resolution status sets.

use tracing::debug;

use pomsync_artifact::{Artifact, ArtifactFilter};

// ---------------------------------------------------------------------------
// DependencyStatusSets
// ---------------------------------------------------------------------------

/// Disjoint partition of an artifact set after filtering: artifacts that go
/// into a resolution step, artifacts that went through one and failed, and
/// artifacts a filter skipped. An intermediate result only; never persisted.
#[derive(Clone, Debug, Default)]
pub struct DependencyStatusSets {
    /// Artifacts accepted by the filters, in input order.
    pub resolved: Vec<Artifact>,
    /// Artifacts a resolution step failed to resolve.
    pub unresolved: Vec<Artifact>,
    /// Artifacts rejected by a filter, in input order.
    pub skipped: Vec<Artifact>,
}

impl DependencyStatusSets {
    /// Partition `artifacts` with the given filter: accepted artifacts into
    /// `resolved`, rejected ones into `skipped`. Both partitions preserve
    /// input order.
    #[must_use]
    pub fn partition(artifacts: &[Artifact], filter: &impl ArtifactFilter) -> Self {
        let mut sets = Self::default();
        for artifact in artifacts {
            if filter.includes(artifact) {
                sets.resolved.push(artifact.clone());
            } else {
                sets.skipped.push(artifact.clone());
            }
        }
        sets
    }

    /// Log the partition at debug level.
    pub fn log_debug(&self, label: &str) {
        debug!(
            "{label}: {} to resolve, {} unresolved, {} skipped",
            self.resolved.len(),
            self.unresolved.len(),
            self.skipped.len()
        );
        for artifact in &self.skipped {
            debug!("{label}: skipped {artifact}");
        }
        for artifact in &self.unresolved {
            debug!("{label}: unresolved {artifact}");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
