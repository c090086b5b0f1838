use thiserror::Error;

use crate::patterns::Role;

/// Failure taxonomy for one parse run. Empty results (no matches, no
/// correlation ids) are not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Extraction was requested for a role with no usable pattern:
    /// a stripping role, or `Custom` with nothing registered.
    #[error("no pattern set for role {role}")]
    Configuration { role: Role },

    /// A caller-supplied regular expression failed to compile.
    /// Surfaced at first use, not at registration.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The input stream could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
