//! Artifact coordinates and the `groupId:artifactId` exclusion key.
//!
//! An [`ArtifactCoordinate`] identifies one artifact variant within a
//! repository. Identity and ordering deliberately exclude the version: the
//! coordinate is the join key between the primary resolution pass and the
//! secondary (sources/javadoc) pass, and both passes always operate on the
//! same version of the graph. Two coordinates are the same artifact when
//! group, artifact, type and classifier agree; an absent classifier orders
//! strictly before any present one.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// ArtifactCoordinate
// ---------------------------------------------------------------------------

/// The (group, artifact, version, classifier, type) tuple identifying an
/// artifact.
///
/// Equality, hashing and ordering are defined over (group, artifact, type,
/// classifier) only; the version rides along but is not part of the identity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArtifactCoordinate {
    /// The group identifier, e.g. `org.apache.commons`.
    pub group_id: String,
    /// The artifact identifier, e.g. `commons-lang3`.
    pub artifact_id: String,
    /// The artifact version. Not part of coordinate identity.
    pub version: String,
    /// The optional classifier distinguishing artifact variants
    /// (e.g. `tests`, `sources`, `javadoc`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// The declared packaging type (`jar`, `war`, ...). For secondary
    /// resolution requests this field carries the resolved file extension.
    #[serde(rename = "type")]
    pub kind: String,
}

impl ArtifactCoordinate {
    /// Create a coordinate with the default `jar` type and no classifier.
    #[must_use]
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: None,
            kind: "jar".to_owned(),
        }
    }

    /// Return a copy of this coordinate with the given classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Return a copy of this coordinate with the given type.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// The classifier as a string slice, empty when absent.
    #[must_use]
    pub fn classifier_or_empty(&self) -> &str {
        self.classifier.as_deref().unwrap_or("")
    }

    /// The `groupId:artifactId:version` rendering used in diagnostics and
    /// user-facing reports.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// The `groupId:artifactId` pair of this coordinate.
    #[must_use]
    pub fn group_artifact(&self) -> GroupArtifact {
        GroupArtifact {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
        }
    }
}

impl PartialEq for ArtifactCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id
            && self.artifact_id == other.artifact_id
            && self.kind == other.kind
            && self.classifier == other.classifier
    }
}

impl Eq for ArtifactCoordinate {}

impl Hash for ArtifactCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
        self.kind.hash(state);
        self.classifier.hash(state);
    }
}

impl Ord for ArtifactCoordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.group_id
            .cmp(&other.group_id)
            .then_with(|| self.artifact_id.cmp(&other.artifact_id))
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| match (&self.classifier, &other.classifier) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for ArtifactCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GroupArtifact
// ---------------------------------------------------------------------------

/// A `groupId:artifactId` pair, the key of the configured exclusion list.
///
/// Matching is exact: no wildcards and no version component.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupArtifact {
    /// The group identifier.
    pub group_id: String,
    /// The artifact identifier.
    pub artifact_id: String,
}

impl GroupArtifact {
    /// Create a key from its two components.
    #[must_use]
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    /// Parse a configured `groupId:artifactId` entry.
    ///
    /// The split happens at the first `:`; everything after it is the
    /// artifact id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedExclude`] when the entry has no `:`. This is
    /// a setup-time failure: exclusion lists are parsed once before any
    /// resolution starts.
    pub fn parse(entry: &str) -> Result<Self> {
        match entry.split_once(':') {
            Some((group_id, artifact_id)) => Ok(Self::new(group_id, artifact_id)),
            None => Err(Error::MalformedExclude {
                value: entry.to_owned(),
            }),
        }
    }
}

impl fmt::Display for GroupArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
