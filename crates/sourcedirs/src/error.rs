//! Error types for source directory reconciliation.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for source directory operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconciling source directory declarations.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Two declarations of the same directory disagree on a field that
    /// cannot be merged.
    #[error("irreconcilable declarations of directory '{path}': {left} / {right}")]
    #[diagnostic(
        code(pomsync::sourcedirs::irreconcilable),
        help(
            "Two declarations of the same directory disagree on output, test, optional or filtering; align them in the build configuration, or reconcile with MergePolicy::KeepSeparate"
        )
    )]
    Irreconcilable {
        /// The shared normalized path.
        path: String,
        /// Rendering of the entry already accepted.
        left: String,
        /// Rendering of the conflicting entry.
        right: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic;

    #[test]
    fn test_irreconcilable_display() {
        let error = Error::Irreconcilable {
            path: "src/main/java".to_owned(),
            left: "source src/main/java".to_owned(),
            right: "resource src/main/java".to_owned(),
        };
        let message = error.to_string();
        assert!(message.contains("src/main/java"));
        assert!(message.contains("irreconcilable"));
    }

    #[test]
    fn test_diagnostic_code() {
        let error = Error::Irreconcilable {
            path: "p".to_owned(),
            left: "l".to_owned(),
            right: "r".to_owned(),
        };
        assert_eq!(
            error.code().map(|code| code.to_string()),
            Some("pomsync::sourcedirs::irreconcilable".to_owned())
        );
        assert!(error.help().is_some());
    }
}
