//! The single internal artifact representation.
//!
//! Host build tools expose resolved dependencies through more than one API
//! shape (flat artifact sets, dependency-graph nodes). All of them are
//! adapted into [`Artifact`] at the boundary so that filtering, resolution
//! and reconciliation are written once against one type.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::coordinate::ArtifactCoordinate;

/// The `test` dependency scope.
pub const SCOPE_TEST: &str = "test";
/// The `system` dependency scope.
pub const SCOPE_SYSTEM: &str = "system";
/// The `provided` dependency scope.
pub const SCOPE_PROVIDED: &str = "provided";
/// The default `compile` dependency scope.
pub const SCOPE_COMPILE: &str = "compile";

// ---------------------------------------------------------------------------
// Artifact
// ---------------------------------------------------------------------------

/// A dependency as reported by the repository-resolution collaborator:
/// a coordinate, the collaborator's scope string, and the resolved file
/// when one exists.
///
/// Scope is kept verbatim as reported; the scope predicates below match
/// exactly against the well-known scope strings, and anything unrecognized
/// is treated as `compile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// The artifact coordinate.
    pub coordinate: ArtifactCoordinate,
    /// The scope string reported by the collaborator.
    pub scope: String,
    /// The resolved file, absent when the artifact has no physical
    /// counterpart (unresolved, or satisfied by a reactor sibling).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Artifact {
    /// Create an unresolved artifact with the given coordinate and scope.
    #[must_use]
    pub fn new(coordinate: ArtifactCoordinate, scope: impl Into<String>) -> Self {
        Self {
            coordinate,
            scope: scope.into(),
            file: None,
        }
    }

    /// Return a copy of this artifact with a resolved file.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether a physical file was resolved for this artifact.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.file.is_some()
    }

    /// The resolved file, if any.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Whether the reported scope is exactly `test`.
    #[must_use]
    pub fn is_test_scope(&self) -> bool {
        self.scope == SCOPE_TEST
    }

    /// Whether the reported scope is exactly `system`.
    #[must_use]
    pub fn is_system_scope(&self) -> bool {
        self.scope == SCOPE_SYSTEM
    }

    /// Whether the reported scope is exactly `provided`.
    #[must_use]
    pub fn is_provided_scope(&self) -> bool {
        self.scope == SCOPE_PROVIDED
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.coordinate, self.scope)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(scope: &str) -> Artifact {
        Artifact::new(ArtifactCoordinate::new("com.foo", "bar", "1.0"), scope)
    }

    #[test]
    fn test_scope_predicates_match_exactly() {
        assert!(artifact("test").is_test_scope());
        assert!(artifact("system").is_system_scope());
        assert!(artifact("provided").is_provided_scope());

        let compile = artifact("compile");
        assert!(!compile.is_test_scope());
        assert!(!compile.is_system_scope());
        assert!(!compile.is_provided_scope());
    }

    #[test]
    fn test_unknown_scope_matches_nothing() {
        let odd = artifact("Test");
        assert!(!odd.is_test_scope());
    }

    #[test]
    fn test_resolved_iff_file_present() {
        let a = artifact("compile");
        assert!(!a.is_resolved());
        let resolved = a.with_file("/repo/com/foo/bar/1.0/bar-1.0.jar");
        assert!(resolved.is_resolved());
        assert_eq!(
            resolved.file().unwrap(),
            Path::new("/repo/com/foo/bar/1.0/bar-1.0.jar")
        );
    }

    #[test]
    fn test_display() {
        let a = artifact("test");
        assert_eq!(a.to_string(), "com.foo:bar:1.0 (test)");
    }
}
