//! Artifact model for pomsync: coordinates, classifier translation,
//! composable filters and the reactor membership index.
//!
//! This crate holds the leaf vocabulary of the resolution engine. Everything
//! here is synchronous, allocation-light and free of I/O; the repository
//! collaborators that actually move bytes live behind traits in
//! `pomsync-resolver`.
//!
//! # Core Types
//!
//! - [`ArtifactCoordinate`] - identity of one artifact variant; ordering and
//!   equality exclude the version
//! - [`Artifact`] - the single internal representation of a resolved or
//!   unresolved dependency (coordinate + scope + optional file)
//! - [`TypeRegistry`] - packaging type → (extension, classpath flag) table
//! - [`ReactorIndex`] - O(1) membership lookup over the sibling modules of a
//!   multi-module build, with a version-skew probe
//!
//! # Filters
//!
//! [`ArtifactFilter`] implementations compose through [`FilterChain`]:
//! [`ExcludesFilter`] (configured `groupId:artifactId` pairs),
//! [`ReactorFilter`] (exact-triple reactor membership),
//! [`ScopeExcludeFilter`] (exact scope strings) and [`UnresolvedFilter`]
//! (artifacts without a physical file).
//!
//! # Classifier translation
//!
//! The [`classifier`] module derives sources/javadoc companion coordinates
//! and inverts them again when resolved companions are matched back onto
//! their primaries.

pub mod artifact;
pub mod classifier;
pub mod coordinate;
pub mod error;
pub mod filter;
pub mod handler;
pub mod reactor;

// Re-export core types
pub use artifact::{Artifact, SCOPE_COMPILE, SCOPE_PROVIDED, SCOPE_SYSTEM, SCOPE_TEST};
pub use coordinate::{ArtifactCoordinate, GroupArtifact};
pub use handler::{TypeHandler, TypeRegistry};
pub use reactor::{ReactorIndex, ReactorLookup, ReactorModule};

// Re-export filters
pub use filter::{
    ArtifactFilter, ExcludesFilter, FilterChain, ReactorFilter, ScopeExcludeFilter,
    UnresolvedFilter,
};

// Re-export classifier translation
pub use classifier::AttachmentKind;

// Re-export error types
pub use error::{Error, Result};
