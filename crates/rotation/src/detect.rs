//! Rotation suspicion and classification.

use std::path::{Path, PathBuf};

use access::FileAccess;
use cursor::Cursor;

use crate::error::RotationError;
use crate::patterns::{PatternSet, find_predecessor};

/// How the watched file moved relative to its recorded cursor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rotation {
    /// The recorded cursor still describes the live file.
    None,
    /// The old file was renamed aside and a fresh one took its path.
    Pure {
        /// Rotated-away file still holding the unread remainder.
        predecessor: PathBuf,
    },
    /// The file was copied elsewhere and truncated in place.
    Copytruncate,
    /// Rotation happened but no safe predecessor could be resolved.
    Unknown,
}

impl Rotation {
    /// Reports whether any rotation was detected.
    #[must_use]
    pub const fn occurred(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Decides whether the live file could have rotated since `cursor` was
/// recorded.
///
/// Exactly two signals are authoritative: the live inode differing from the
/// recorded one, or the live size shrinking below the recorded offset. Any
/// other change (growth, mtime, content) is not treated as rotation. A
/// fresh cursor never suspects rotation; there is no prior read to
/// reconcile.
#[must_use]
pub const fn suspect_rotation(current_inode: u64, live_size: u64, cursor: Cursor) -> bool {
    if cursor.is_start() {
        return false;
    }
    current_inode != cursor.inode || live_size < cursor.offset
}

/// Classifies a suspected rotation.
///
/// A predecessor whose inode matches the cursor identifies the renamed-away
/// old file ([`Rotation::Pure`]). Failing that, a live file that kept the
/// cursor's inode was truncated in place ([`Rotation::Copytruncate`]).
/// Everything else is [`Rotation::Unknown`]: the unread remainder cannot be
/// located safely, which is reported rather than raised so the live file
/// stays tailed.
pub fn classify<P: FileAccess>(
    provider: &P,
    directory: &Path,
    file_name: &str,
    patterns: &PatternSet,
    cursor: Cursor,
    current_inode: u64,
) -> Result<Rotation, RotationError> {
    if let Some(predecessor) = find_predecessor(provider, directory, file_name, patterns)? {
        if provider.inode(&predecessor)? == cursor.inode {
            return Ok(Rotation::Pure { predecessor });
        }
    }
    if current_inode == cursor.inode {
        return Ok(Rotation::Copytruncate);
    }
    tracing::warn!(
        file = %directory.join(file_name).display(),
        "rotation suspected but no predecessor matches the recorded cursor; \
         continuing on the live file"
    );
    Ok(Rotation::Unknown)
}
