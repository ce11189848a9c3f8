//! Dependency resolution and attachment reconciliation for pomsync.
//!
//! This crate turns a project's declared dependencies into the ordered,
//! classified, enriched dependency list that IDE descriptor generation
//! consumes. The actual repository machinery (transitive closure, conflict
//! resolution, transport, caching) stays behind the [`ArtifactRepository`]
//! trait; what lives here is the filtering of what enters that resolution
//! and the classification and enrichment of what comes out.
//!
//! # Flow
//!
//! 1. [`ProjectResolver::resolve`] parses the configured exclusions, sends a
//!    [`GraphRequest`] to the collaborator, flattens the returned
//!    [`DependencyGraph`] in preorder, and classifies every node:
//!    scope flags from the reported scope string, classpath contribution
//!    from the [`TypeRegistry`](pomsync_artifact::TypeRegistry), reactor
//!    members into IDE project references.
//! 2. [`ProjectResolver::resolve_enriched`] additionally runs the
//!    [`AttachmentReconciler`]: sources and javadoc companions are derived,
//!    resolved (tolerating per-item failures) and matched back onto the
//!    primary list, and an [`AttachmentReport`] summarizes what is still
//!    missing.
//!
//! A whole-graph resolution failure aborts the run; everything in the
//! attachment pass is optional and at worst logged.
//!
//! # Ordering
//!
//! The output order is the preorder traversal of the resolved graph (parent
//! before children, depth-first, children in the collaborator's order) and
//! is stable across runs for identical inputs, so generated descriptors are
//! reproducible.

pub mod attachments;
pub mod dependency;
pub mod error;
pub mod graph;
pub mod project;
pub mod repository;
pub mod resolve;
pub mod status;

// Re-export core types
pub use dependency::ResolvedDependency;
pub use graph::DependencyGraph;
pub use project::{DeclaredDependency, ProjectModel, ResolutionConfig};
pub use status::DependencyStatusSets;

// Re-export the collaborator boundary
pub use repository::{ArtifactRepository, GraphRequest, ResolutionPolicy, ResolvedArtifact};

// Re-export the engine
pub use attachments::{AttachmentReconciler, AttachmentReport};
pub use resolve::ProjectResolver;

// Re-export error types
pub use error::{Error, Result};
