//! Source directory model and merge engine for pomsync.
//!
//! A project declares its compiled source roots, test roots and resource
//! directories separately, and build-helper style plugins can attach more.
//! The IDE descriptor has a single flat list of source roots, so entries
//! denoting the same physical directory must be reconciled into one record
//! first. This crate owns that reconciliation.
//!
//! # Core Types
//!
//! - [`SourceDirectory`] - one declared directory; identity, hashing and
//!   ordering are by normalized path only
//! - [`MergePolicy`] - what a rejected merge means to the caller (fatal, or
//!   keep both entries)
//!
//! # Merging
//!
//! [`reconcile`] folds a declaration list into a duplicate-free list in one
//! pass. The pairwise rules live on [`SourceDirectory::merge`]: source wins
//! over resource (lossily dropping filters), includes union only when both
//! sides have some, excludes always union, and the output/test/optional/
//! filtering fields must agree or the merge is rejected.

pub mod entry;
pub mod error;
pub mod merge;

// Re-export core types
pub use entry::{normalize_path, SourceDirectory, PATTERN_SEPARATOR};
pub use merge::{reconcile, MergePolicy};

// Re-export error types
pub use error::{Error, Result};
