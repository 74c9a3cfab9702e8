#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `rotation` answers the two questions at the heart of rotation-safe
//! tailing: *might the file have rotated since the cursor was recorded?*
//! and if so, *where did the old content go?* The first is a pure predicate
//! over inode and size ([`suspect_rotation`]); the second probes the
//! directory for the naming schemes real rotation tools leave behind
//! ([`find_predecessor`]) and classifies the outcome ([`classify`]).
//!
//! # Design
//!
//! - [`PatternSet`] holds the probe templates: a fixed built-in priority
//!   list covering savelog(8), logrotate(8) numeric and dated schemes, and
//!   Python's `TimedRotatingFileHandler`, plus caller-supplied suffix
//!   templates appended at the end.
//! - [`find_predecessor`] runs the probes in priority order; the first
//!   probe with a hit wins outright and later probes never run.
//! - [`classify`] turns a suspicion into a [`Rotation`]: a predecessor
//!   whose inode matches the cursor means a pure rename rotation; a live
//!   file whose inode matches the cursor means copytruncate; anything else
//!   is unresolved and tailing degrades to the live file alone.
//!
//! # Invariants
//!
//! - Probes never guess: the savelog pair only names `<file>.0` while its
//!   mtime is strictly newer than `<file>.1.gz`'s, and a dated template
//!   only matches the whole entry name, never a prefix of it.
//! - Within one dated template, the lexicographically greatest match wins,
//!   which is newest first under zero-padded date ordering.
//! - An unresolved rotation is reported, never raised: losing a predecessor
//!   must not knock the file out of tailing.
//!
//! # Errors
//!
//! Probing surfaces provider failures and invalid caller-supplied templates
//! as [`RotationError`].
//!
//! # Examples
//!
//! ```
//! use access::LocalFs;
//! use rotation::PatternSet;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! std::fs::write(temp.path().join("app.log"), b"live")?;
//! std::fs::write(temp.path().join("app.log.1"), b"rotated away")?;
//!
//! let found = rotation::find_predecessor(
//!     &LocalFs::new(),
//!     temp.path(),
//!     "app.log",
//!     &PatternSet::builtin(),
//! )?;
//! assert_eq!(found, Some(temp.path().join("app.log.1")));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod detect;
mod error;
mod patterns;

#[cfg(test)]
mod tests;

pub use crate::detect::{Rotation, classify, suspect_rotation};
pub use crate::error::RotationError;
pub use crate::patterns::{PatternSet, find_predecessor};
