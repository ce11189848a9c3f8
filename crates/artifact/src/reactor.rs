//! Reactor membership index.
//!
//! The reactor is the set of sibling modules participating in the current
//! multi-module build. Dependencies that match a reactor module exactly by
//! (group, artifact, version) can be satisfied by a project reference in the
//! IDE instead of a repository artifact. A match on (group, artifact) alone
//! with a differing version is version skew: the dependency is still
//! resolved externally, but the skew is surfaced as a diagnostic.
//!
//! The index is built once per resolution run and is read-only afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::coordinate::ArtifactCoordinate;

// ---------------------------------------------------------------------------
// ReactorModule
// ---------------------------------------------------------------------------

/// One sibling module of the current multi-module build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactorModule {
    /// The module's group identifier.
    pub group_id: String,
    /// The module's artifact identifier.
    pub artifact_id: String,
    /// The module's declared version.
    pub version: String,
    /// The name under which the module is known to the IDE.
    pub project_name: String,
}

impl ReactorModule {
    /// Create a module entry.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        project_name: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            project_name: project_name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ReactorLookup
// ---------------------------------------------------------------------------

/// Result of probing the index for a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReactorLookup<'a> {
    /// A module matches on (group, artifact, version).
    Member(&'a ReactorModule),
    /// A module matches on (group, artifact) but declares a different
    /// version. The dependency is not satisfied by the reactor; callers
    /// should surface the skew.
    VersionMismatch(&'a ReactorModule),
    /// No module matches.
    Absent,
}

// ---------------------------------------------------------------------------
// ReactorIndex
// ---------------------------------------------------------------------------

/// O(1) membership index over the reactor modules.
#[derive(Clone, Debug, Default)]
pub struct ReactorIndex {
    modules: Vec<ReactorModule>,
    exact: HashMap<(String, String, String), usize>,
    by_group_artifact: HashMap<(String, String), usize>,
}

impl ReactorIndex {
    /// Build the index from the sibling modules of the current build.
    ///
    /// If several modules share a (group, artifact) pair the first one wins
    /// for the version-mismatch probe; exact matches are unaffected.
    #[must_use]
    pub fn new(modules: Vec<ReactorModule>) -> Self {
        let mut exact = HashMap::with_capacity(modules.len());
        let mut by_group_artifact = HashMap::with_capacity(modules.len());
        for (index, module) in modules.iter().enumerate() {
            exact.insert(
                (
                    module.group_id.clone(),
                    module.artifact_id.clone(),
                    module.version.clone(),
                ),
                index,
            );
            by_group_artifact
                .entry((module.group_id.clone(), module.artifact_id.clone()))
                .or_insert(index);
        }
        Self {
            modules,
            exact,
            by_group_artifact,
        }
    }

    /// Whether a coordinate matches a reactor module exactly by
    /// (group, artifact, version).
    #[must_use]
    pub fn contains(&self, coordinate: &ArtifactCoordinate) -> bool {
        matches!(self.lookup(coordinate), ReactorLookup::Member(_))
    }

    /// Probe the index for a coordinate.
    #[must_use]
    pub fn lookup(&self, coordinate: &ArtifactCoordinate) -> ReactorLookup<'_> {
        let triple = (
            coordinate.group_id.clone(),
            coordinate.artifact_id.clone(),
            coordinate.version.clone(),
        );
        if let Some(&index) = self.exact.get(&triple) {
            return ReactorLookup::Member(&self.modules[index]);
        }
        let pair = (coordinate.group_id.clone(), coordinate.artifact_id.clone());
        match self.by_group_artifact.get(&pair) {
            Some(&index) => ReactorLookup::VersionMismatch(&self.modules[index]),
            None => ReactorLookup::Absent,
        }
    }

    /// Number of indexed modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the reactor has no modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The indexed modules, in build order.
    #[must_use]
    pub fn modules(&self) -> &[ReactorModule] {
        &self.modules
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> ReactorIndex {
        ReactorIndex::new(vec![
            ReactorModule::new("com.foo", "bar", "1.0", "bar-project"),
            ReactorModule::new("com.foo", "baz", "1.0", "baz-project"),
        ])
    }

    #[test]
    fn test_exact_triple_is_member() {
        let idx = index();
        let c = ArtifactCoordinate::new("com.foo", "bar", "1.0");
        match idx.lookup(&c) {
            ReactorLookup::Member(module) => assert_eq!(module.project_name, "bar-project"),
            other => panic!("expected Member, got {other:?}"),
        }
        assert!(idx.contains(&c));
    }

    #[test]
    fn test_version_mismatch_is_not_member() {
        let idx = index();
        let c = ArtifactCoordinate::new("com.foo", "bar", "2.0");
        match idx.lookup(&c) {
            ReactorLookup::VersionMismatch(module) => assert_eq!(module.version, "1.0"),
            other => panic!("expected VersionMismatch, got {other:?}"),
        }
        assert!(!idx.contains(&c));
    }

    #[test]
    fn test_unknown_artifact_is_absent() {
        let idx = index();
        let c = ArtifactCoordinate::new("org.other", "thing", "1.0");
        assert_eq!(idx.lookup(&c), ReactorLookup::Absent);
    }

    #[test]
    fn test_classifier_and_type_do_not_affect_membership() {
        let idx = index();
        let c = ArtifactCoordinate::new("com.foo", "bar", "1.0")
            .with_classifier("tests")
            .with_kind("test-jar");
        assert!(idx.contains(&c));
    }

    #[test]
    fn test_empty_index() {
        let idx = ReactorIndex::new(vec![]);
        assert!(idx.is_empty());
        assert_eq!(idx.len(), 0);
        let c = ArtifactCoordinate::new("com.foo", "bar", "1.0");
        assert_eq!(idx.lookup(&c), ReactorLookup::Absent);
    }
}
