#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `reader` delivers the remainder of a file from a byte offset onward,
//! transparently decompressing gzip. It is the data plane of incremental
//! tailing: the orchestrator decides *where* to start (cursor, rotation
//! outcome), this crate performs the positioned read through a
//! [`FileAccess`](access::FileAccess) provider and hands back the raw
//! bytes.
//!
//! # Design
//!
//! - Plain streams seek directly to the offset; a seek past the end is not
//!   an error and simply yields an empty remainder.
//! - Gzip streams have no random-access index, so the decompressed stream
//!   is skipped sequentially up to the offset. Offsets always refer to
//!   positions in the *decompressed* stream. Concatenated gzip members are
//!   read through as one stream, the way rotation tools that append
//!   compressed chunks expect.
//! - Remainders are returned as raw bytes. Decoding happens once at
//!   assembly in the orchestrator, keeping cursor arithmetic in stream-byte
//!   space regardless of how the text renders.
//!
//! # Errors
//!
//! Provider failures, positioning failures, and read or decompression
//! failures surface as [`ReadError`]. A failed read aborts the whole
//! orchestration for that file; no partial output is produced.
//!
//! # Examples
//!
//! ```
//! use access::LocalFs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let log = temp.path().join("app.log");
//! std::fs::write(&log, b"one\ntwo\nthree\n")?;
//!
//! let rest = reader::read_remainder(&LocalFs::new(), &log, 4, false)?;
//! assert_eq!(rest, b"two\nthree\n");
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use access::{AccessError, FileAccess};
use flate2::read::MultiGzDecoder;
use thiserror::Error;

/// Errors that can occur while reading a remainder.
#[derive(Debug, Error)]
pub enum ReadError {
    /// A provider primitive failed underneath the read.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// The stream could not be positioned at the requested offset.
    #[error("failed to position '{}' at byte {offset}: {source}", .path.display())]
    Seek {
        /// File that failed to seek.
        path: PathBuf,
        /// Offset the seek aimed for.
        offset: u64,
        /// Underlying error emitted by the stream.
        source: io::Error,
    },
    /// The stream could not be read or decompressed.
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying error emitted by the stream or the decoder.
        source: io::Error,
    },
}

/// Reads everything from `from_offset` to the end of `path`.
///
/// With `gzip` set, the stream is decompressed transparently and
/// `from_offset` addresses the decompressed stream; positioning then costs
/// a sequential skip. Either way, an offset at or past the end of the
/// stream yields an empty remainder rather than an error.
pub fn read_remainder<P: FileAccess>(
    provider: &P,
    path: &Path,
    from_offset: u64,
    gzip: bool,
) -> Result<Vec<u8>, ReadError> {
    let mut handle = provider.open_read(path)?;
    let mut remainder = Vec::new();

    if gzip {
        let mut decoder = MultiGzDecoder::new(BufReader::new(handle));
        io::copy(&mut (&mut decoder).take(from_offset), &mut io::sink()).map_err(|error| {
            ReadError::Read {
                path: path.to_path_buf(),
                source: error,
            }
        })?;
        decoder
            .read_to_end(&mut remainder)
            .map_err(|error| ReadError::Read {
                path: path.to_path_buf(),
                source: error,
            })?;
    } else {
        handle
            .seek(SeekFrom::Start(from_offset))
            .map_err(|error| ReadError::Seek {
                path: path.to_path_buf(),
                offset: from_offset,
                source: error,
            })?;
        handle
            .read_to_end(&mut remainder)
            .map_err(|error| ReadError::Read {
                path: path.to_path_buf(),
                source: error,
            })?;
    }

    Ok(remainder)
}
