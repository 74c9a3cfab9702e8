//! Capability trait and the snapshot types it trades in.

use std::io::{Read, Seek, Write};
use std::path::Path;

use filetime::FileTime;

use crate::error::AccessError;

/// Immutable size and mtime snapshot of a file.
///
/// The inode is deliberately absent: it is resolved through the separate
/// [`FileAccess::inode`] capability because transfer-protocol stat responses
/// commonly omit it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FileMeta {
    /// File size in bytes at snapshot time.
    pub size: u64,
    /// Last modification time at snapshot time.
    pub mtime: FileTime,
}

/// Byte stream that supports both reading and repositioning.
///
/// Blanket-implemented for every `Read + Seek` type so providers can hand
/// back plain [`std::fs::File`] handles or protocol-backed streams alike.
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

/// Seekable byte stream returned by [`FileAccess::open_read`].
pub type ReadHandle = Box<dyn ReadSeek>;

/// Truncating byte sink returned by [`FileAccess::open_write`].
pub type WriteHandle = Box<dyn Write>;

/// Filesystem primitives the tailing pipeline is built on.
///
/// Implementations own their transport concerns (connection management,
/// timeouts, retries) and surface every failure as [`AccessError`]. The
/// consuming crates never retry; a failed call aborts the orchestration and
/// the caller decides whether to try again later.
pub trait FileAccess {
    /// Reports whether `path` names an existing filesystem entry.
    fn exists(&self, path: &Path) -> Result<bool, AccessError>;

    /// Takes a size/mtime snapshot of `path`.
    fn stat(&self, path: &Path) -> Result<FileMeta, AccessError>;

    /// Resolves the inode number of `path`.
    ///
    /// Kept separate from [`stat`](Self::stat) so remote providers can
    /// answer it through whatever side channel their transport requires.
    fn inode(&self, path: &Path) -> Result<u64, AccessError>;

    /// Lists the entry names (not paths) of `dir`, sorted lexicographically.
    fn list_dir(&self, dir: &Path) -> Result<Vec<String>, AccessError>;

    /// Opens `path` for reading as a seekable byte stream.
    fn open_read(&self, path: &Path) -> Result<ReadHandle, AccessError>;

    /// Opens `path` for writing, truncating any existing content.
    fn open_write(&self, path: &Path) -> Result<WriteHandle, AccessError>;
}
