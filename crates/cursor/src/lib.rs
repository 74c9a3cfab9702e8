#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cursor` persists delivery progress for a tailed log file. Progress is a
//! [`Cursor`]: the inode the file had when it was last read plus the byte
//! offset one past the last delivered byte, stored in a plain-text sidecar
//! file beside the log (`<file>.offset` by default). Keeping the state next
//! to the log rather than in a central registry means a watched file can be
//! moved, re-homed, or inspected with nothing but `cat`.
//!
//! # Design
//!
//! - [`sidecar_path`] derives the default sidecar location from the target
//!   path by appending `.offset` to the file name.
//! - [`load`] and [`save`] go through a
//!   [`FileAccess`](access::FileAccess) provider, so the sidecar lives on
//!   the same host as the log it describes, including remote hosts.
//! - The wire format is two decimal lines (inode, then offset) with no
//!   version tag. [`save`] emits no trailing newline; [`load`] tolerates
//!   one.
//!
//! # Invariants
//!
//! - An absent or zero-length sidecar loads as [`Cursor::start`]; the
//!   file has never been read.
//! - Anything else that fails to parse as exactly two decimal lines is a
//!   hard [`CursorError::Malformed`] failure, never silently defaulted:
//!   guessing a cursor risks redelivering or skipping log data.
//! - [`save`] truncates; a successful save fully replaces the previous
//!   state.
//!
//! # Examples
//!
//! ```
//! use access::LocalFs;
//! use cursor::Cursor;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let sidecar = cursor::sidecar_path(&temp.path().join("app.log"));
//! assert!(sidecar.ends_with("app.log.offset"));
//!
//! let provider = LocalFs::new();
//! assert_eq!(cursor::load(&provider, &sidecar)?, Cursor::start());
//!
//! cursor::save(&provider, &sidecar, Cursor { inode: 7, offset: 42 })?;
//! assert_eq!(
//!     cursor::load(&provider, &sidecar)?,
//!     Cursor { inode: 7, offset: 42 },
//! );
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::str;

use access::{AccessError, FileAccess};
use thiserror::Error;

/// Result type for cursor operations.
pub type CursorResult<T> = Result<T, CursorError>;

/// Delivery progress recorded against a specific incarnation of a file.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    /// Inode of the file the offset was recorded against.
    pub inode: u64,
    /// Byte offset one past the last delivered byte.
    pub offset: u64,
}

impl Cursor {
    /// Cursor for a file that has never been read.
    #[must_use]
    pub const fn start() -> Self {
        Self {
            inode: 0,
            offset: 0,
        }
    }

    /// Reports whether this cursor records any prior delivery.
    #[must_use]
    pub const fn is_start(&self) -> bool {
        self.inode == 0 && self.offset == 0
    }
}

/// Errors that can occur while loading or saving a cursor sidecar.
#[derive(Debug, Error)]
pub enum CursorError {
    /// A provider primitive failed underneath the store.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The sidecar stream could not be read.
    #[error("failed to read cursor sidecar '{}': {source}", .path.display())]
    Read {
        /// Sidecar that failed to read.
        path: PathBuf,
        /// Underlying error emitted by the stream.
        source: io::Error,
    },
    /// The sidecar stream could not be written.
    #[error("failed to write cursor sidecar '{}': {source}", .path.display())]
    Write {
        /// Sidecar that failed to write.
        path: PathBuf,
        /// Underlying error emitted by the stream.
        source: io::Error,
    },
    /// The sidecar exists but does not hold a valid cursor.
    #[error("malformed cursor sidecar '{}': {detail}", .path.display())]
    Malformed {
        /// Sidecar holding the unparsable content.
        path: PathBuf,
        /// What exactly failed to parse.
        detail: String,
    },
}

/// Derives the default sidecar location for `target`.
///
/// The sidecar sits beside the log with `.offset` appended to the full file
/// name, so `app.log` pairs with `app.log.offset`.
#[must_use]
pub fn sidecar_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map_or_else(std::ffi::OsString::new, ToOwned::to_owned);
    name.push(".offset");
    target.with_file_name(name)
}

/// Loads the cursor recorded in `sidecar`.
///
/// An absent or zero-length sidecar yields [`Cursor::start`]. Any other
/// content must parse as exactly two decimal lines or the load fails with
/// [`CursorError::Malformed`].
pub fn load<P: FileAccess>(provider: &P, sidecar: &Path) -> CursorResult<Cursor> {
    if !provider.exists(sidecar)? {
        return Ok(Cursor::start());
    }

    let mut handle = provider.open_read(sidecar)?;
    let mut raw = Vec::new();
    handle
        .read_to_end(&mut raw)
        .map_err(|error| CursorError::Read {
            path: sidecar.to_path_buf(),
            source: error,
        })?;
    if raw.is_empty() {
        return Ok(Cursor::start());
    }

    let text = str::from_utf8(&raw).map_err(|_| {
        malformed(sidecar, "content is not valid UTF-8".to_owned())
    })?;
    parse(text, sidecar)
}

/// Overwrites `sidecar` with `cursor`.
///
/// Best-effort, at-least-once: no partial-write recovery is attempted. A
/// torn write surfaces as [`CursorError::Malformed`] on the next load
/// rather than being papered over here.
pub fn save<P: FileAccess>(provider: &P, sidecar: &Path, cursor: Cursor) -> CursorResult<()> {
    let mut handle = provider.open_write(sidecar)?;
    let payload = format!("{}\n{}", cursor.inode, cursor.offset);
    handle
        .write_all(payload.as_bytes())
        .and_then(|()| handle.flush())
        .map_err(|error| CursorError::Write {
            path: sidecar.to_path_buf(),
            source: error,
        })
}

fn parse(text: &str, sidecar: &Path) -> CursorResult<Cursor> {
    let mut lines = text.lines();
    let inode_line = lines
        .next()
        .ok_or_else(|| malformed(sidecar, "expected two lines, found none".to_owned()))?;
    let offset_line = lines
        .next()
        .ok_or_else(|| malformed(sidecar, "expected two lines, found one".to_owned()))?;
    if lines.any(|rest| !rest.trim().is_empty()) {
        return Err(malformed(
            sidecar,
            "trailing content after the offset line".to_owned(),
        ));
    }

    Ok(Cursor {
        inode: parse_decimal(inode_line, sidecar, "inode")?,
        offset: parse_decimal(offset_line, sidecar, "offset")?,
    })
}

fn parse_decimal(line: &str, sidecar: &Path, field: &str) -> CursorResult<u64> {
    let trimmed = line.trim();
    trimmed.parse::<u64>().map_err(|_| {
        malformed(
            sidecar,
            format!("{field} line '{trimmed}' is not a decimal integer"),
        )
    })
}

fn malformed(sidecar: &Path, detail: String) -> CursorError {
    CursorError::Malformed {
        path: sidecar.to_path_buf(),
        detail,
    }
}
