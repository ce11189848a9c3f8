//! Merging of duplicate source directory declarations.
//!
//! Whenever two entries denote the same normalized path they must become one
//! record before descriptor generation. The pairwise [`SourceDirectory::merge`]
//! implements the field-level rules; [`reconcile`] drives it over a whole
//! declaration list in one pass, with the caller choosing what a rejected
//! merge means ([`MergePolicy`]).

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::entry::SourceDirectory;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Pairwise merge
// ---------------------------------------------------------------------------

impl SourceDirectory {
    /// Merge another declaration of the same directory into this one.
    ///
    /// Mixed resource/source declarations collapse into a source directory.
    /// Include and exclude lists are dropped: the IDE has no main/test/
    /// resource distinction, so neither side's filters survive the merge.
    /// The compiled side's output wins; a compiled side without an explicit
    /// output adopts the resource side's.
    ///
    /// Same-type declarations union their pattern lists. Includes are
    /// unioned only when both sides have one: an empty include list means
    /// "include everything", and everything unioned with a subset is still
    /// everything. Excludes are always unioned. Deduplication is by exact
    /// string equality; overlapping glob patterns are not analyzed.
    ///
    /// After the structural merge the output, test, optional and filtering
    /// fields must agree or the merge is rejected by returning `false`. The
    /// receiver keeps its structural changes in that case; [`reconcile`]
    /// only commits an entry once the merge succeeded.
    #[must_use = "a rejected merge must be handled by the caller"]
    pub fn merge(&mut self, other: &SourceDirectory) -> bool {
        if self.resource != other.resource {
            if self.resource {
                self.output = other.output.clone();
            } else if self.output.is_none() {
                self.output = other.output.clone();
            }
            self.resource = false;
            self.include.clear();
            self.exclude.clear();
        } else {
            if self.include.is_empty() || other.include.is_empty() {
                self.include.clear();
            } else {
                self.include = union(&self.include, &other.include);
            }
            self.exclude = union(&self.exclude, &other.exclude);
        }

        if self.output != other.output {
            return false;
        }
        if self.test != other.test {
            return false;
        }
        if self.optional != other.optional {
            return false;
        }
        if self.filtering != other.filtering {
            return false;
        }
        true
    }
}

/// Order-preserving union with exact-string deduplication.
fn union(left: &[String], right: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    left.iter()
        .chain(right.iter())
        .filter(|pattern| seen.insert((*pattern).clone()))
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// MergePolicy / reconcile
// ---------------------------------------------------------------------------

/// What a rejected merge means to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Divergent declarations of one directory are a fatal
    /// misconfiguration.
    #[default]
    Fail,
    /// Divergent declarations remain as separate entries; a warning is
    /// logged.
    KeepSeparate,
}

/// Reconcile a list of declarations into a duplicate-free list, preserving
/// the order of first appearance.
///
/// Declarations are processed in order; each duplicate path is merged into
/// the entry that introduced the path. The merged entry is only committed
/// when the merge succeeds, so a rejection never leaves a half-merged
/// record in the result.
///
/// # Errors
///
/// With [`MergePolicy::Fail`], returns [`Error::Irreconcilable`] for the
/// first rejected merge.
pub fn reconcile(
    entries: impl IntoIterator<Item = SourceDirectory>,
    policy: MergePolicy,
) -> Result<Vec<SourceDirectory>> {
    let mut merged: Vec<SourceDirectory> = Vec::new();
    let mut by_path: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        match by_path.get(entry.path()) {
            Some(&index) => {
                let mut candidate = merged[index].clone();
                if candidate.merge(&entry) {
                    debug!("merged duplicate declaration of {}", entry.path());
                    merged[index] = candidate;
                } else {
                    match policy {
                        MergePolicy::Fail => {
                            return Err(Error::Irreconcilable {
                                path: entry.path().to_owned(),
                                left: merged[index].to_string(),
                                right: entry.to_string(),
                            });
                        }
                        MergePolicy::KeepSeparate => {
                            warn!(
                                "divergent declarations of {} kept as separate entries",
                                entry.path()
                            );
                            merged.push(entry);
                        }
                    }
                }
            }
            None => {
                by_path.insert(entry.path().to_owned(), merged.len());
                merged.push(entry);
            }
        }
    }

    Ok(merged)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
