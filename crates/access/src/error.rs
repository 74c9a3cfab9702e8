//! Provider-level error reporting.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error returned when a [`FileAccess`](crate::FileAccess) primitive fails.
#[derive(Debug)]
pub struct AccessError {
    kind: AccessErrorKind,
}

impl AccessError {
    fn new(kind: AccessErrorKind) -> Self {
        Self { kind }
    }

    /// Builds an error for a failed existence probe.
    pub fn probe(path: PathBuf, source: io::Error) -> Self {
        Self::new(AccessErrorKind::Probe { path, source })
    }

    /// Builds an error for a failed stat call.
    pub fn stat(path: PathBuf, source: io::Error) -> Self {
        Self::new(AccessErrorKind::Stat { path, source })
    }

    /// Builds an error for a failed inode resolution.
    pub fn inode(path: PathBuf, source: io::Error) -> Self {
        Self::new(AccessErrorKind::Inode { path, source })
    }

    /// Builds an error for a directory that could not be read.
    pub fn list_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(AccessErrorKind::ListDir { path, source })
    }

    /// Builds an error for a directory entry that could not be obtained.
    pub fn list_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(AccessErrorKind::ListDirEntry { path, source })
    }

    /// Builds an error for a file that could not be opened for reading.
    pub fn open(path: PathBuf, source: io::Error) -> Self {
        Self::new(AccessErrorKind::Open { path, source })
    }

    /// Builds an error for a file that could not be opened for writing.
    pub fn create(path: PathBuf, source: io::Error) -> Self {
        Self::new(AccessErrorKind::Create { path, source })
    }

    /// Builds an error for a capability the provider cannot offer.
    pub fn unsupported(path: PathBuf, operation: &'static str) -> Self {
        Self::new(AccessErrorKind::Unsupported { path, operation })
    }

    /// Returns the specific primitive failure.
    #[must_use]
    pub fn kind(&self) -> &AccessErrorKind {
        &self.kind
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            AccessErrorKind::Probe { path, source } => {
                write!(f, "failed to probe '{}': {}", path.display(), source)
            }
            AccessErrorKind::Stat { path, source } => {
                write!(f, "failed to stat '{}': {}", path.display(), source)
            }
            AccessErrorKind::Inode { path, source } => {
                write!(
                    f,
                    "failed to resolve inode for '{}': {}",
                    path.display(),
                    source
                )
            }
            AccessErrorKind::ListDir { path, source } => {
                write!(
                    f,
                    "failed to list directory '{}': {}",
                    path.display(),
                    source
                )
            }
            AccessErrorKind::ListDirEntry { path, source } => {
                write!(
                    f,
                    "failed to read entry in '{}': {}",
                    path.display(),
                    source
                )
            }
            AccessErrorKind::Open { path, source } => {
                write!(
                    f,
                    "failed to open '{}' for reading: {}",
                    path.display(),
                    source
                )
            }
            AccessErrorKind::Create { path, source } => {
                write!(
                    f,
                    "failed to open '{}' for writing: {}",
                    path.display(),
                    source
                )
            }
            AccessErrorKind::Unsupported { path, operation } => {
                write!(
                    f,
                    "operation '{}' is not supported for '{}'",
                    operation,
                    path.display()
                )
            }
        }
    }
}

impl Error for AccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            AccessErrorKind::Probe { source, .. }
            | AccessErrorKind::Stat { source, .. }
            | AccessErrorKind::Inode { source, .. }
            | AccessErrorKind::ListDir { source, .. }
            | AccessErrorKind::ListDirEntry { source, .. }
            | AccessErrorKind::Open { source, .. }
            | AccessErrorKind::Create { source, .. } => Some(source),
            AccessErrorKind::Unsupported { .. } => None,
        }
    }
}

/// Classification of provider failures.
#[derive(Debug)]
pub enum AccessErrorKind {
    /// An existence probe failed before it could answer yes or no.
    Probe {
        /// Path whose existence could not be determined.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A stat snapshot could not be taken.
    Stat {
        /// Path that failed to provide metadata.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// The inode number could not be resolved.
    Inode {
        /// Path whose inode could not be resolved.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// The contents of a directory could not be read.
    ListDir {
        /// Directory whose contents could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A directory entry could not be obtained during iteration.
    ListDirEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A file could not be opened for reading.
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// A file could not be opened for writing.
    Create {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// The provider does not implement the requested capability.
    Unsupported {
        /// Path the operation was attempted on.
        path: PathBuf,
        /// Name of the unsupported capability.
        operation: &'static str,
    },
}
