//! Probe and classification errors.

use access::AccessError;
use thiserror::Error;

/// Errors raised while probing for a predecessor or classifying a rotation.
#[derive(Debug, Error)]
pub enum RotationError {
    /// A provider primitive failed underneath a probe.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// A caller-supplied pattern template does not compile.
    #[error("invalid rotation pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending suffix template.
        pattern: String,
        /// Compilation failure reported by the regex engine.
        source: regex::Error,
    },
}
