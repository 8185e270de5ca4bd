//! Error types for the clone pipeline.

use thiserror::Error;

/// Failures surfaced by the clone pipeline.
///
/// The variants distinguish invalid input, confinement violations, and the
/// failure classes reported by the clone primitive. Display passes the
/// underlying message through unchanged so the presentation boundary can
/// render `Error: {message}` without double-prefixing.
#[derive(Debug, Error)]
pub enum CloneError {
    /// Repository URL could not be parsed or uses an unsupported form.
    #[error("{0}")]
    InvalidUrl(String),

    /// Destination path escapes or otherwise violates the workspace root.
    #[error("{0}")]
    InvalidDestination(String),

    /// Remote rejected the supplied credentials.
    #[error("{0}")]
    Auth(String),

    /// Remote unreachable or name resolution failed.
    #[error("{0}")]
    Network(String),

    /// Destination already exists and is not an empty directory.
    #[error("{0}")]
    DestinationConflict(String),

    /// Any other failure reported by the clone primitive.
    #[error("{0}")]
    Failed(String),
}
