//! Source directory entries.
//!
//! The IDE has no notion of "main", "test" or "resource" roots: two entries
//! denoting the same directory must collapse into one before descriptor
//! generation. Identity, hashing and ordering are therefore defined by the
//! normalized path alone, which is what makes merge-on-duplicate-path work
//! in a single pass over a set.
//!
//! A compiled source root should normally carry a `None` output (it falls
//! back to the project default); resource roots carry the output directory
//! their content is copied to.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};

/// Separator used when rendering pattern lists for the descriptor writer.
pub const PATTERN_SEPARATOR: &str = "|";

/// Normalize a path to forward-slash form.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

fn deserialize_normalized<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize_path(&raw))
}

// ---------------------------------------------------------------------------
// SourceDirectory
// ---------------------------------------------------------------------------

/// One declared source, test or resource directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceDirectory {
    /// Normalized (forward-slash) directory path. Kept private so every
    /// write goes through normalization.
    #[serde(deserialize_with = "deserialize_normalized")]
    path: String,
    /// Output directory for compiled classes or copied resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Include patterns, in declaration order. Empty means include
    /// everything.
    #[serde(default)]
    pub include: Vec<String>,
    /// Exclude patterns, in declaration order.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Whether this is a resource directory rather than a compiled source
    /// directory.
    #[serde(default)]
    pub resource: bool,
    /// Whether this directory belongs to the test compilation unit.
    #[serde(default)]
    pub test: bool,
    /// Whether a missing directory is tolerated.
    #[serde(default)]
    pub optional: bool,
    /// Whether resource filtering applies when content is copied.
    #[serde(default)]
    pub filtering: bool,
    /// Whether the directory was attached by a plugin (build-helper style)
    /// rather than declared in the build section itself.
    #[serde(default)]
    pub attached: bool,
}

impl SourceDirectory {
    /// Create a compiled source directory entry with defaults.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: normalize_path(path),
            output: None,
            include: Vec::new(),
            exclude: Vec::new(),
            resource: false,
            test: false,
            optional: false,
            filtering: false,
            attached: false,
        }
    }

    /// Create a resource directory entry with the given output directory.
    #[must_use]
    pub fn resource(path: &str, output: Option<&str>) -> Self {
        let mut entry = Self::new(path);
        entry.resource = true;
        entry.output = output.map(str::to_owned);
        entry
    }

    /// The normalized path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replace the path, normalizing separators.
    pub fn set_path(&mut self, path: &str) {
        self.path = normalize_path(path);
    }

    /// Return a copy with the test flag set.
    #[must_use]
    pub fn as_test(mut self) -> Self {
        self.test = true;
        self
    }

    /// Return a copy with the given include patterns.
    #[must_use]
    pub fn with_include(mut self, include: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.include = include.into_iter().map(Into::into).collect();
        self
    }

    /// Return a copy with the given exclude patterns.
    #[must_use]
    pub fn with_exclude(mut self, exclude: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude = exclude.into_iter().map(Into::into).collect();
        self
    }

    /// The include patterns joined into the single-string form the
    /// descriptor writer consumes.
    #[must_use]
    pub fn include_pattern(&self) -> String {
        self.include.join(PATTERN_SEPARATOR)
    }

    /// The exclude patterns joined into the single-string form the
    /// descriptor writer consumes.
    #[must_use]
    pub fn exclude_pattern(&self) -> String {
        self.exclude.join(PATTERN_SEPARATOR)
    }
}

// Two entries denote the same directory when their normalized paths are
// equal, regardless of every other field.
impl PartialEq for SourceDirectory {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for SourceDirectory {}

impl Hash for SourceDirectory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl Ord for SourceDirectory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

impl PartialOrd for SourceDirectory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SourceDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: output={}, include=[{}], exclude=[{}], test={}, optional={}, filtering={}, attached={}",
            if self.resource { "resource" } else { "source" },
            self.path,
            self.output.as_deref().unwrap_or("<default>"),
            self.include_pattern(),
            self.exclude_pattern(),
            self.test,
            self.optional,
            self.filtering,
            self.attached,
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_normalized_on_construction() {
        let entry = SourceDirectory::new("src\\main\\java");
        assert_eq!(entry.path(), "src/main/java");
    }

    #[test]
    fn test_set_path_normalizes() {
        let mut entry = SourceDirectory::new("src/main/java");
        entry.set_path("src\\test\\java");
        assert_eq!(entry.path(), "src/test/java");
    }

    #[test]
    fn test_identity_by_path_only() {
        let source = SourceDirectory::new("src/main/java");
        let resource = SourceDirectory::resource("src/main/java", Some("target/classes"))
            .with_include(["**/*.properties"]);
        assert_eq!(source, resource);

        let other = SourceDirectory::new("src/main/resources");
        assert_ne!(source, other);
        assert!(source < other);
    }

    #[test]
    fn test_backslash_and_forward_slash_paths_are_equal() {
        let a = SourceDirectory::new("src\\main\\java");
        let b = SourceDirectory::new("src/main/java");
        assert_eq!(a, b);
    }

    #[test]
    fn test_pattern_rendering() {
        let entry = SourceDirectory::new("src/main/resources")
            .with_include(["**/*.xml", "**/*.properties"])
            .with_exclude(["**/internal/**"]);
        assert_eq!(entry.include_pattern(), "**/*.xml|**/*.properties");
        assert_eq!(entry.exclude_pattern(), "**/internal/**");
    }

    #[test]
    fn test_empty_pattern_rendering() {
        let entry = SourceDirectory::new("src/main/java");
        assert_eq!(entry.include_pattern(), "");
        assert_eq!(entry.exclude_pattern(), "");
    }

    #[test]
    fn test_display() {
        let entry = SourceDirectory::resource("src/main/resources", Some("target/classes"));
        let rendered = entry.to_string();
        assert!(rendered.starts_with("resource src/main/resources"));
        assert!(rendered.contains("output=target/classes"));
    }

    #[test]
    fn test_serde_roundtrip_normalizes_path() {
        let json = r#"{"path":"src\\main\\java","test":true}"#;
        let entry: SourceDirectory = serde_json::from_str(json).unwrap();
        assert_eq!(entry.path(), "src/main/java");
        assert!(entry.test);
        assert!(!entry.resource);

        let reencoded = serde_json::to_string(&entry).unwrap();
        let decoded: SourceDirectory = serde_json::from_str(&reencoded).unwrap();
        assert_eq!(decoded, entry);
    }
}
