//! Composable artifact filters.
//!
//! Each filter is an order-preserving set transform plus a per-artifact
//! predicate for incremental checks. Filters compose by sequential
//! application; composition order affects performance only, with two
//! constraints honored by the callers: the reactor filter runs before any
//! remote resolution it can spare, and the unresolved filter runs after
//! every filter that needs an already-resolved file.
//!
//! Filters never fail per artifact. Construction is the only fallible step
//! (a malformed exclusion entry), and it fails fast during setup.

use std::collections::HashSet;

use tracing::debug;

use crate::artifact::Artifact;
use crate::coordinate::GroupArtifact;
use crate::error::Result;
use crate::reactor::ReactorIndex;

// ---------------------------------------------------------------------------
// ArtifactFilter
// ---------------------------------------------------------------------------

/// An order-preserving artifact set filter.
pub trait ArtifactFilter {
    /// Whether the filter keeps this artifact.
    fn includes(&self, artifact: &Artifact) -> bool;

    /// Apply the filter to a list, preserving the order of survivors.
    fn filter(&self, artifacts: Vec<Artifact>) -> Vec<Artifact> {
        artifacts
            .into_iter()
            .filter(|artifact| self.includes(artifact))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// ExcludesFilter
// ---------------------------------------------------------------------------

/// Excludes artifacts whose (group, artifact) pair appears in a configured
/// exclusion list. Matching is exact; versions are not consulted.
#[derive(Clone, Debug, Default)]
pub struct ExcludesFilter {
    excluded: HashSet<GroupArtifact>,
}

impl ExcludesFilter {
    /// Parse the configured `groupId:artifactId` entries.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed entry; an exclusion list that cannot be
    /// parsed is a configuration error, not something to skip over.
    pub fn from_excludes(excludes: &[String]) -> Result<Self> {
        let excluded = excludes
            .iter()
            .map(|entry| GroupArtifact::parse(entry))
            .collect::<Result<HashSet<_>>>()?;
        Ok(Self { excluded })
    }
}

impl ArtifactFilter for ExcludesFilter {
    fn includes(&self, artifact: &Artifact) -> bool {
        self.excluded.is_empty() || !self.excluded.contains(&artifact.coordinate.group_artifact())
    }
}

// ---------------------------------------------------------------------------
// ReactorFilter
// ---------------------------------------------------------------------------

/// Excludes artifacts satisfied by a reactor sibling.
///
/// Only an exact (group, artifact, version) match counts: a sibling with a
/// different version is version skew that must surface as a diagnostic, not
/// silently satisfy the dependency.
#[derive(Clone, Debug)]
pub struct ReactorFilter<'a> {
    index: &'a ReactorIndex,
}

impl<'a> ReactorFilter<'a> {
    /// Create the filter over a built index.
    #[must_use]
    pub fn new(index: &'a ReactorIndex) -> Self {
        Self { index }
    }
}

impl ArtifactFilter for ReactorFilter<'_> {
    fn includes(&self, artifact: &Artifact) -> bool {
        let in_reactor = self.index.contains(&artifact.coordinate);
        if in_reactor {
            debug!("skipped {} because it is present in the reactor", artifact.coordinate);
        }
        !in_reactor
    }
}

// ---------------------------------------------------------------------------
// ScopeExcludeFilter
// ---------------------------------------------------------------------------

/// Excludes artifacts whose reported scope matches one of the given scope
/// strings exactly.
#[derive(Clone, Debug)]
pub struct ScopeExcludeFilter {
    scopes: Vec<String>,
}

impl ScopeExcludeFilter {
    /// Create a filter excluding the given scopes.
    #[must_use]
    pub fn new(scopes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }
}

impl ArtifactFilter for ScopeExcludeFilter {
    fn includes(&self, artifact: &Artifact) -> bool {
        !self.scopes.iter().any(|scope| artifact.scope == *scope)
    }
}

// ---------------------------------------------------------------------------
// UnresolvedFilter
// ---------------------------------------------------------------------------

/// Excludes artifacts lacking a resolved physical file.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnresolvedFilter;

impl ArtifactFilter for UnresolvedFilter {
    fn includes(&self, artifact: &Artifact) -> bool {
        artifact.is_resolved()
    }
}

// ---------------------------------------------------------------------------
// FilterChain
// ---------------------------------------------------------------------------

/// Sequential composition of filters.
#[derive(Default)]
pub struct FilterChain<'a> {
    filters: Vec<Box<dyn ArtifactFilter + 'a>>,
}

impl<'a> FilterChain<'a> {
    /// Create an empty chain, which includes everything.
    #[must_use]
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Append a filter to the chain.
    #[must_use]
    pub fn with(mut self, filter: impl ArtifactFilter + 'a) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl ArtifactFilter for FilterChain<'_> {
    fn includes(&self, artifact: &Artifact) -> bool {
        self.filters.iter().all(|filter| filter.includes(artifact))
    }

    fn filter(&self, artifacts: Vec<Artifact>) -> Vec<Artifact> {
        self.filters
            .iter()
            .fold(artifacts, |artifacts, filter| filter.filter(artifacts))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
