#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `access` defines the filesystem capability surface the logtail workspace
//! tails files through. Cursor persistence, rotation probing, and the
//! incremental reader all perform their I/O exclusively via the
//! [`FileAccess`] trait, so the same orchestration logic runs unchanged
//! against the bundled local provider or an out-of-tree remote one (SFTP,
//! agent-forwarded shells, test doubles).
//!
//! # Design
//!
//! - [`FileAccess`] is the injected capability set: `exists`, `stat`,
//!   `inode`, `list_dir`, `open_read`, and `open_write`. The operations are
//!   deliberately primitive; composition lives in the consuming crates.
//! - [`LocalFs`] implements the trait against the local filesystem and is
//!   the provider the `logtail` binary ships with.
//! - [`FileMeta`] is an immutable size/mtime snapshot. The inode is a
//!   separate capability call because common transfer protocols do not
//!   carry it in their stat response; remote providers typically resolve it
//!   through command execution on the far side.
//! - [`Endpoint`] carries the `(host, username, password)` identity a remote
//!   provider authenticates with. The password is zeroized on drop and never
//!   appears in `Debug` output.
//!
//! # Invariants
//!
//! - [`FileAccess::list_dir`] yields entry names (never paths) in sorted
//!   order, so directory scans behave identically across platforms and
//!   providers.
//! - [`FileAccess::open_write`] truncates: a successful open followed by a
//!   full write fully replaces the previous content.
//! - No method panics on filesystem failure; everything surfaces as
//!   [`AccessError`] with the offending path attached.
//!
//! # Errors
//!
//! All operations report [`AccessError`]. The wrapped [`AccessErrorKind`]
//! names the failed primitive and path; the underlying [`std::io::Error`]
//! is reachable through [`std::error::Error::source`].
//!
//! # Examples
//!
//! ```
//! use access::{FileAccess, LocalFs};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let log = temp.path().join("app.log");
//! std::fs::write(&log, b"booted\n")?;
//!
//! let fs = LocalFs::new();
//! assert!(fs.exists(&log)?);
//! assert_eq!(fs.stat(&log)?.size, 7);
//! assert_eq!(fs.list_dir(temp.path())?, vec!["app.log".to_owned()]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - The `tail` crate for the orchestrator that consumes this capability
//!   set.

mod endpoint;
mod error;
mod local;
mod provider;


pub use crate::endpoint::Endpoint;
pub use crate::error::{AccessError, AccessErrorKind};
pub use crate::local::LocalFs;
pub use crate::provider::{FileAccess, FileMeta, ReadHandle, ReadSeek, WriteHandle};
