use std::path::Path;

use access::FileAccess;
use cursor::Cursor;
use reader::read_remainder;
use rotation::{PatternSet, Rotation, classify, suspect_rotation};

use crate::error::TailError;
use crate::output::TailOutput;

/// Rotation-aware incremental tailer over a [`FileAccess`] provider.
///
/// A `Tail` holds no per-file state; everything that must survive between
/// passes lives in the sidecar next to each watched file. One instance can
/// therefore watch any number of files, provided no two callers work the
/// same (file, sidecar) pair at once.
#[derive(Debug)]
pub struct Tail<P> {
    provider: P,
    patterns: PatternSet,
}

impl<P: FileAccess> Tail<P> {
    /// Creates a tailer with the built-in rotation probes.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            patterns: PatternSet::builtin(),
        }
    }

    /// Starts configuring a tailer, for callers with site-specific rotation
    /// naming schemes.
    #[must_use]
    pub fn builder(provider: P) -> TailBuilder<P> {
        TailBuilder {
            provider,
            extra_patterns: Vec::new(),
        }
    }

    /// Delivers everything appended to `target` since the previous pass.
    ///
    /// Progress is read from and written back to the sidecar (`sidecar`
    /// when given, `<target>.offset` otherwise). When the recorded identity
    /// no longer matches the live file, the pass classifies the rotation,
    /// drains a renamed-away predecessor if one can be found, and restarts
    /// the cursor on the live file.
    ///
    /// Returns `Ok(None)` when `target` does not exist. The sidecar is left
    /// untouched in that case, so once the file reappears the next pass
    /// reconciles against the last recorded identity. An existing file with
    /// nothing new still yields an output, just an empty one.
    ///
    /// The sidecar is rewritten only after every read has succeeded; a
    /// failed pass re-delivers on retry rather than skipping bytes.
    ///
    /// # Errors
    ///
    /// - [`TailError::InvalidTarget`] when `target` has no UTF-8 file name.
    /// - [`TailError::Cursor`] when the sidecar exists but cannot be
    ///   parsed, read, or rewritten.
    /// - [`TailError::Access`], [`TailError::Rotation`] or
    ///   [`TailError::Read`] when a provider call underneath the pass
    ///   fails.
    pub fn check_file(
        &self,
        target: &Path,
        sidecar: Option<&Path>,
    ) -> Result<Option<TailOutput>, TailError> {
        let file_name = target.file_name().ok_or_else(|| TailError::InvalidTarget {
            path: target.to_path_buf(),
            detail: "path does not name a file",
        })?;
        let file_name = file_name.to_str().ok_or_else(|| TailError::InvalidTarget {
            path: target.to_path_buf(),
            detail: "file name is not valid UTF-8",
        })?;
        let directory = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let sidecar = match sidecar {
            Some(path) => path.to_path_buf(),
            None => cursor::sidecar_path(target),
        };

        if !self.provider.exists(target)? {
            tracing::debug!(file = %target.display(), "target absent, nothing to tail");
            return Ok(None);
        }

        let stored = cursor::load(&self.provider, &sidecar)?;
        let meta = self.provider.stat(target)?;
        let current_inode = self.provider.inode(target)?;

        let rotation = if suspect_rotation(current_inode, meta.size, stored) {
            classify(
                &self.provider,
                directory,
                file_name,
                &self.patterns,
                stored,
                current_inode,
            )?
        } else {
            Rotation::None
        };

        // Reads happen before the sidecar is rewritten. Offsets count raw
        // stream bytes (decompressed bytes for gzip), so decoding waits
        // until assembly.
        let mut delivered: Vec<u8> = Vec::new();
        let start = match &rotation {
            Rotation::None => stored.offset,
            Rotation::Pure { predecessor } => {
                delivered = read_remainder(
                    &self.provider,
                    predecessor,
                    stored.offset,
                    is_gzip(predecessor),
                )?;
                tracing::debug!(
                    predecessor = %predecessor.display(),
                    bytes = delivered.len(),
                    "drained rotated-away predecessor"
                );
                0
            }
            Rotation::Copytruncate => 0,
            Rotation::Unknown => stored.offset.min(meta.size),
        };

        let current = read_remainder(&self.provider, target, start, is_gzip(target))?;
        let next = Cursor {
            inode: current_inode,
            offset: start + current.len() as u64,
        };
        cursor::save(&self.provider, &sidecar, next)?;

        delivered.extend_from_slice(&current);
        tracing::debug!(
            file = %target.display(),
            bytes = delivered.len(),
            inode = next.inode,
            offset = next.offset,
            "tail pass complete"
        );
        Ok(Some(TailOutput {
            text: String::from_utf8_lossy(&delivered).into_owned(),
            rotation,
            cursor: next,
        }))
    }
}

/// Builder for a [`Tail`] that probes caller-supplied rotation suffixes
/// after the built-in ones.
#[derive(Debug)]
pub struct TailBuilder<P> {
    provider: P,
    extra_patterns: Vec<String>,
}

impl<P: FileAccess> TailBuilder<P> {
    /// Appends one rotation suffix template to probe after the built-ins.
    #[must_use]
    pub fn rotation_pattern<S: Into<String>>(mut self, suffix: S) -> Self {
        self.extra_patterns.push(suffix.into());
        self
    }

    /// Appends several rotation suffix templates, preserving their order.
    #[must_use]
    pub fn rotation_patterns<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_patterns
            .extend(suffixes.into_iter().map(Into::into));
        self
    }

    /// Validates the configured suffixes and builds the tailer.
    ///
    /// # Errors
    ///
    /// Returns [`TailError::Rotation`] when a supplied suffix template does
    /// not compile as a regular expression.
    pub fn build(self) -> Result<Tail<P>, TailError> {
        let patterns = if self.extra_patterns.is_empty() {
            PatternSet::builtin()
        } else {
            PatternSet::with_extras(self.extra_patterns)?
        };
        Ok(Tail {
            provider: self.provider,
            patterns,
        })
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|extension| extension == "gz")
}
