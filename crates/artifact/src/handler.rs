//! Artifact-type handler registry.
//!
//! Maps a declared packaging type (`jar`, `war`, ...) to the file extension
//! of the produced artifact and to whether artifacts of that type contribute
//! to the compile classpath. The registry is an immutable base table built
//! once, optionally extended with caller-supplied overrides; it is never
//! mutated after construction.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// TypeHandler
// ---------------------------------------------------------------------------

/// The registered properties of one packaging type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeHandler {
    /// File extension of artifacts of this type.
    pub extension: String,
    /// Whether artifacts of this type are added to the compile classpath.
    pub added_to_classpath: bool,
}

impl TypeHandler {
    /// Create a handler.
    #[must_use]
    pub fn new(extension: impl Into<String>, added_to_classpath: bool) -> Self {
        Self {
            extension: extension.into(),
            added_to_classpath,
        }
    }
}

// ---------------------------------------------------------------------------
// TypeRegistry
// ---------------------------------------------------------------------------

/// Immutable type → handler lookup table.
///
/// Unknown types fall back to a handler whose extension equals the type
/// itself and which does not contribute to the classpath.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    handlers: HashMap<String, TypeHandler>,
}

impl TypeRegistry {
    /// Build the registry with the default handlers for the common
    /// packaging types.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut handlers = HashMap::new();
        for (kind, extension, classpath) in [
            ("jar", "jar", true),
            ("test-jar", "jar", true),
            ("maven-plugin", "jar", true),
            ("ejb", "jar", true),
            ("ejb-client", "jar", true),
            ("java-source", "jar", false),
            ("javadoc", "jar", false),
            ("war", "war", false),
            ("ear", "ear", false),
            ("rar", "rar", false),
            ("pom", "pom", false),
        ] {
            handlers.insert(kind.to_owned(), TypeHandler::new(extension, classpath));
        }
        Self { handlers }
    }

    /// Build the registry with the defaults plus caller-supplied overrides.
    /// An override for an already-registered type replaces the default.
    #[must_use]
    pub fn with_overrides(overrides: HashMap<String, TypeHandler>) -> Self {
        let mut registry = Self::with_defaults();
        registry.handlers.extend(overrides);
        registry
    }

    /// Look up the handler for a type, falling back for unknown types.
    #[must_use]
    pub fn handler(&self, kind: &str) -> TypeHandler {
        self.handlers
            .get(kind)
            .cloned()
            .unwrap_or_else(|| TypeHandler::new(kind, false))
    }

    /// The file extension registered for a type.
    #[must_use]
    pub fn extension(&self, kind: &str) -> String {
        self.handler(kind).extension
    }

    /// Whether artifacts of a type are added to the compile classpath.
    #[must_use]
    pub fn added_to_classpath(&self, kind: &str) -> bool {
        self.handler(kind).added_to_classpath
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
