#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `tail` is the orchestrator of the logtail workspace. One call to
//! [`Tail::check_file`] performs one complete pass over a watched file:
//! load the sidecar cursor, compare the recorded identity against the live
//! file, reconcile any rotation, read the unread remainder, persist the
//! advanced cursor, and hand back the newly appended text.
//!
//! # Design
//!
//! - A pass is synchronous and stateless between calls. Everything durable
//!   lives in the sidecar, so a process restart (or a different process
//!   entirely) resumes exactly where delivery stopped.
//! - Rotation handling follows the classification from the
//!   [`rotation`] crate: a pure rename rotation drains the rotated-away
//!   predecessor file from the recorded offset before reading the fresh
//!   live file from zero; copytruncate rereads the live file from zero; an
//!   unresolved rotation degrades to the live file with the offset clamped
//!   to its size.
//! - Files named `*.gz` are decompressed transparently, and offsets then
//!   count decompressed bytes.
//!
//! # Invariants
//!
//! - The sidecar is rewritten only after every read in the pass has
//!   succeeded. A failed pass re-delivers bytes on retry; it never skips
//!   them.
//! - A missing target is not an error. The pass returns `None` and leaves
//!   the sidecar exactly as it was.
//! - The persisted offset always counts raw stream bytes. Text is decoded
//!   once at assembly, with invalid UTF-8 replaced, so undecodable content
//!   cannot corrupt cursor arithmetic.
//!
//! # Errors
//!
//! All failure modes funnel into [`TailError`]. A malformed sidecar is a
//! hard error rather than a silent restart from zero; see
//! [`cursor::CursorError::Malformed`].
//!
//! # Examples
//!
//! ```
//! use access::LocalFs;
//! use tail::Tail;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let log = temp.path().join("app.log");
//! std::fs::write(&log, "first\n")?;
//!
//! let tail = Tail::new(LocalFs::new());
//! let pass = tail.check_file(&log, None)?.ok_or("absent")?;
//! assert_eq!(pass.text(), "first\n");
//!
//! std::fs::write(&log, "first\nsecond\n")?;
//! let pass = tail.check_file(&log, None)?.ok_or("absent")?;
//! assert_eq!(pass.text(), "second\n");
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod error;
mod output;
mod tailer;


pub use crate::error::TailError;
pub use crate::output::TailOutput;
pub use crate::tailer::{Tail, TailBuilder};

pub use cursor::Cursor;
pub use rotation::Rotation;
