//! Error types for dependency resolution.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during dependency resolution.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The repository collaborator could not resolve the project's
    /// dependency graph. Without the graph the compile and test classpaths
    /// cannot be determined, so this aborts the run.
    #[error("failed to resolve the dependency graph: {coordinate}: {message}")]
    #[diagnostic(
        code(pomsync::resolver::graph_resolution_failed),
        help(
            "A primary artifact could not be resolved. Check that the named coordinate exists in the configured repositories and that the declared version is correct"
        )
    )]
    GraphResolution {
        /// The unresolvable coordinate reported by the collaborator.
        coordinate: String,
        /// Description of the failure.
        message: String,
    },

    /// The repository collaborator could not resolve a single artifact.
    /// During the optional sources/javadoc pass this is caught per artifact
    /// and downgraded to a debug log line.
    #[error("failed to resolve artifact {coordinate}: {message}")]
    #[diagnostic(
        code(pomsync::resolver::artifact_resolution_failed),
        help("The artifact is missing from the configured repositories")
    )]
    ArtifactResolution {
        /// The requested coordinate.
        coordinate: String,
        /// Description of the failure.
        message: String,
    },

    /// Setup failed while building the artifact model (e.g. a malformed
    /// exclusion entry).
    #[error(transparent)]
    #[diagnostic(transparent)]
    Artifact(#[from] pomsync_artifact::Error),
}
