use std::path::PathBuf;

use access::AccessError;
use cursor::CursorError;
use reader::ReadError;
use rotation::RotationError;
use thiserror::Error;

/// Errors surfaced by a tail pass.
///
/// Everything below the orchestrator keeps its own error type; this enum
/// only gathers them so callers match on one type. A malformed sidecar and
/// a failed read both abort the pass before the cursor is rewritten, so a
/// later retry resumes from the last successful delivery.
#[derive(Debug, Error)]
pub enum TailError {
    /// A provider primitive failed.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The sidecar could not be loaded or saved.
    #[error(transparent)]
    Cursor(#[from] CursorError),
    /// Rotation probing or pattern validation failed.
    #[error(transparent)]
    Rotation(#[from] RotationError),
    /// A remainder read failed.
    #[error(transparent)]
    Read(#[from] ReadError),
    /// The target path cannot name a tailed file.
    #[error("invalid tail target '{}': {detail}", .path.display())]
    InvalidTarget {
        /// The rejected path.
        path: PathBuf,
        /// What is wrong with it.
        detail: &'static str,
    },
}
