//! The resolved dependency record handed to descriptor generation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::error;

use pomsync_artifact::ArtifactCoordinate;

// ---------------------------------------------------------------------------
// ResolvedDependency
// ---------------------------------------------------------------------------

/// One entry of the resolved, classified dependency list.
///
/// Created once during classification and immutable afterwards, except for
/// the two attachment fields, which are written at most once each during the
/// reconciliation pass through the designated setters.
///
/// A record answers "where do the bytes come from" in exactly one way:
/// either `referenced_project` is true and the IDE links the sibling module
/// (no file needed, `ide_project_name` set), or the record carries the
/// resolved `file`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDependency {
    /// The dependency coordinate.
    pub coordinate: ArtifactCoordinate,
    /// Whether the dependency is satisfied by a reactor sibling and becomes
    /// an IDE project reference.
    pub referenced_project: bool,
    /// Whether the dependency is test-scoped.
    pub test_dependency: bool,
    /// Whether the dependency is system-scoped.
    pub system_scoped: bool,
    /// Whether the dependency is provided-scoped.
    pub provided: bool,
    /// Whether artifacts of this type contribute to the compile classpath.
    pub added_to_classpath: bool,
    /// The resolved artifact file; absent for reactor references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// The IDE name of the sibling module, for reactor references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ide_project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_attachment: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    javadoc_attachment: Option<PathBuf>,
}

impl ResolvedDependency {
    /// Create a record with all flags cleared and no attachments.
    #[must_use]
    pub fn new(coordinate: ArtifactCoordinate) -> Self {
        Self {
            coordinate,
            referenced_project: false,
            test_dependency: false,
            system_scoped: false,
            provided: false,
            added_to_classpath: false,
            file: None,
            ide_project_name: None,
            source_attachment: None,
            javadoc_attachment: None,
        }
    }

    /// The attached sources archive, when one was resolved.
    #[must_use]
    pub fn source_attachment(&self) -> Option<&Path> {
        self.source_attachment.as_deref()
    }

    /// The attached javadoc archive, when one was resolved.
    #[must_use]
    pub fn javadoc_attachment(&self) -> Option<&Path> {
        self.javadoc_attachment.as_deref()
    }

    /// Attach the resolved sources archive. The field is written at most
    /// once; a second write is refused and reported, keeping the first
    /// value.
    pub fn attach_sources(&mut self, file: PathBuf) -> bool {
        if self.source_attachment.is_some() {
            error!(
                "refusing second sources attachment for {}",
                self.coordinate
            );
            return false;
        }
        self.source_attachment = Some(file);
        true
    }

    /// Attach the resolved javadoc archive. The field is written at most
    /// once; a second write is refused and reported, keeping the first
    /// value.
    pub fn attach_javadoc(&mut self, file: PathBuf) -> bool {
        if self.javadoc_attachment.is_some() {
            error!(
                "refusing second javadoc attachment for {}",
                self.coordinate
            );
            return false;
        }
        self.javadoc_attachment = Some(file);
        true
    }
}

impl fmt::Display for ResolvedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinate.id())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
