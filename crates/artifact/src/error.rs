//! Error types for artifact model setup.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for artifact operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the artifact model.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A configured exclusion entry is not a `groupId:artifactId` pair.
    #[error("malformed exclusion entry '{value}': expected 'groupId:artifactId'")]
    #[diagnostic(
        code(pomsync::artifact::malformed_exclude),
        help("Exclusion entries must contain exactly one ':' separating group id and artifact id, e.g. 'org.slf4j:slf4j-api'")
    )]
    MalformedExclude {
        /// The offending entry.
        value: String,
    },
}
