//! Classifier translation between primary artifacts and their sources and
//! javadoc companions.
//!
//! The forward direction derives the coordinate under which an artifact's
//! sources or javadoc archive is published. The inverse direction recovers
//! the primary classifier from a resolved companion so it can be matched
//! back onto the dependency it belongs to; the two directions must agree
//! exactly, including the reserved `test-sources` classifier used by
//! test-scoped (`tests`-classified) dependencies.

use tracing::debug;

use crate::artifact::Artifact;
use crate::coordinate::ArtifactCoordinate;
use crate::handler::TypeRegistry;

/// Classifier of source archives.
pub const SOURCES: &str = "sources";
/// Classifier of javadoc archives.
pub const JAVADOC: &str = "javadoc";
/// Classifier of source archives accompanying `tests`-classified artifacts.
pub const TEST_SOURCES: &str = "test-sources";
/// Classifier of test artifacts.
pub const TESTS: &str = "tests";

// ---------------------------------------------------------------------------
// AttachmentKind
// ---------------------------------------------------------------------------

/// The two companion artifact families resolved in the secondary pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttachmentKind {
    /// A `*-sources` archive.
    Sources,
    /// A `javadoc` archive.
    Javadoc,
}

// ---------------------------------------------------------------------------
// Forward derivation
// ---------------------------------------------------------------------------

/// Derive the sources classifier for an artifact with the given original
/// classifier.
///
/// Rules, first match wins:
/// 1. `tests` → `test-sources`
/// 2. any other non-empty classifier except `javadocs` → `<classifier>-sources`
/// 3. otherwise → `sources`
#[must_use]
pub fn sources_classifier(original: Option<&str>) -> String {
    match original {
        Some(TESTS) => TEST_SOURCES.to_owned(),
        Some(classifier) if !classifier.is_empty() && classifier != "javadocs" => {
            format!("{classifier}-sources")
        }
        _ => SOURCES.to_owned(),
    }
}

/// Derive the sources coordinate of one artifact. The derived coordinate's
/// type carries the file extension registered for the artifact's declared
/// type.
#[must_use]
pub fn sources_coordinate(artifact: &Artifact, registry: &TypeRegistry) -> ArtifactCoordinate {
    derive(
        artifact,
        registry,
        sources_classifier(artifact.coordinate.classifier.as_deref()),
    )
}

/// Derive the javadoc coordinate of one artifact. The javadoc classifier is
/// unconditional: it is never combined with the original classifier.
#[must_use]
pub fn javadoc_coordinate(artifact: &Artifact, registry: &TypeRegistry) -> ArtifactCoordinate {
    derive(artifact, registry, JAVADOC.to_owned())
}

/// Derive the deduplicated, order-preserving set of sources coordinates for
/// a list of artifacts.
#[must_use]
pub fn sources_coordinates(artifacts: &[Artifact], registry: &TypeRegistry) -> Vec<ArtifactCoordinate> {
    dedup(artifacts.iter().map(|artifact| sources_coordinate(artifact, registry)))
}

/// Derive the deduplicated, order-preserving set of javadoc coordinates for
/// a list of artifacts.
#[must_use]
pub fn javadoc_coordinates(artifacts: &[Artifact], registry: &TypeRegistry) -> Vec<ArtifactCoordinate> {
    dedup(artifacts.iter().map(|artifact| javadoc_coordinate(artifact, registry)))
}

fn derive(artifact: &Artifact, registry: &TypeRegistry, classifier: String) -> ArtifactCoordinate {
    ArtifactCoordinate {
        group_id: artifact.coordinate.group_id.clone(),
        artifact_id: artifact.coordinate.artifact_id.clone(),
        version: artifact.coordinate.version.clone(),
        classifier: Some(classifier),
        kind: registry.extension(&artifact.coordinate.kind),
    }
}

fn dedup(coordinates: impl Iterator<Item = ArtifactCoordinate>) -> Vec<ArtifactCoordinate> {
    let mut seen = std::collections::HashSet::new();
    coordinates
        .filter(|coordinate| seen.insert(coordinate.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Inverse derivation
// ---------------------------------------------------------------------------

/// Recover the attachment kind and the primary classifier from a companion
/// artifact's classifier.
///
/// Returns `None` for classifiers that no forward rule produces; callers
/// tolerate those (stale or renamed companions in the local repository).
#[must_use]
pub fn invert_classifier(classifier: &str) -> Option<(AttachmentKind, Option<String>)> {
    match classifier {
        SOURCES => Some((AttachmentKind::Sources, None)),
        JAVADOC => Some((AttachmentKind::Javadoc, None)),
        TEST_SOURCES => Some((AttachmentKind::Sources, Some(TESTS.to_owned()))),
        other => match other.strip_suffix("-sources") {
            Some(base) if !base.is_empty() => {
                Some((AttachmentKind::Sources, Some(base.to_owned())))
            }
            _ => {
                debug!("unknown companion classifier: {other}");
                None
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(classifier: Option<&str>, kind: &str) -> Artifact {
        let mut coordinate = ArtifactCoordinate::new("com.foo", "bar", "1.0").with_kind(kind);
        coordinate.classifier = classifier.map(str::to_owned);
        Artifact::new(coordinate, "compile")
    }

    #[test]
    fn test_sources_classifier_plain() {
        assert_eq!(sources_classifier(None), "sources");
        assert_eq!(sources_classifier(Some("")), "sources");
    }

    #[test]
    fn test_sources_classifier_tests_is_reserved() {
        assert_eq!(sources_classifier(Some("tests")), "test-sources");
    }

    #[test]
    fn test_sources_classifier_suffixes_other_classifiers() {
        assert_eq!(sources_classifier(Some("jdk15")), "jdk15-sources");
    }

    #[test]
    fn test_sources_classifier_javadocs_falls_through() {
        assert_eq!(sources_classifier(Some("javadocs")), "sources");
    }

    #[test]
    fn test_sources_coordinates_use_registered_extension() {
        let registry = TypeRegistry::with_defaults();
        let coords = sources_coordinates(&[artifact(None, "test-jar")], &registry);
        assert_eq!(coords.len(), 1);
        assert_eq!(coords[0].kind, "jar");
        assert_eq!(coords[0].classifier.as_deref(), Some("sources"));
        assert_eq!(coords[0].version, "1.0");
    }

    #[test]
    fn test_javadoc_classifier_is_unconditional() {
        let registry = TypeRegistry::with_defaults();
        let coords = javadoc_coordinates(&[artifact(Some("jdk15"), "jar")], &registry);
        assert_eq!(coords[0].classifier.as_deref(), Some("javadoc"));
    }

    #[test]
    fn test_translation_deduplicates_preserving_order() {
        let registry = TypeRegistry::with_defaults();
        let artifacts = vec![
            artifact(None, "jar"),
            artifact(None, "jar"),
            Artifact::new(ArtifactCoordinate::new("org.other", "lib", "2.0"), "compile"),
        ];
        let coords = sources_coordinates(&artifacts, &registry);
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0].artifact_id, "bar");
        assert_eq!(coords[1].artifact_id, "lib");
    }

    #[test]
    fn test_invert_sources() {
        assert_eq!(
            invert_classifier("sources"),
            Some((AttachmentKind::Sources, None))
        );
    }

    #[test]
    fn test_invert_javadoc() {
        assert_eq!(
            invert_classifier("javadoc"),
            Some((AttachmentKind::Javadoc, None))
        );
    }

    #[test]
    fn test_invert_test_sources_recovers_tests() {
        assert_eq!(
            invert_classifier("test-sources"),
            Some((AttachmentKind::Sources, Some("tests".to_owned())))
        );
    }

    #[test]
    fn test_invert_suffixed_classifier() {
        assert_eq!(
            invert_classifier("jdk15-sources"),
            Some((AttachmentKind::Sources, Some("jdk15".to_owned())))
        );
    }

    #[test]
    fn test_invert_unknown_classifier() {
        assert_eq!(invert_classifier("tests"), None);
        assert_eq!(invert_classifier("-sources"), None);
        assert_eq!(invert_classifier("native"), None);
    }

    #[test]
    fn test_round_trip_for_ordinary_classifiers() {
        for classifier in ["jdk15", "linux-x86_64", "shaded"] {
            let derived = sources_classifier(Some(classifier));
            let (kind, base) = invert_classifier(&derived).unwrap();
            assert_eq!(kind, AttachmentKind::Sources);
            assert_eq!(base.as_deref(), Some(classifier));
        }
    }

    #[test]
    fn test_round_trip_for_tests_classifier() {
        let derived = sources_classifier(Some("tests"));
        assert_eq!(derived, "test-sources");
        let (_, base) = invert_classifier(&derived).unwrap();
        assert_eq!(base.as_deref(), Some("tests"));
    }
}
