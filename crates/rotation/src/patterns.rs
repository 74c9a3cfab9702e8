//! Predecessor probes over rotation naming schemes.

use std::path::{Path, PathBuf};

use access::FileAccess;
use regex::Regex;

use crate::error::RotationError;

/// Built-in date-suffix templates, in probe order.
///
/// Digit counts follow the rotation tools they mirror: logrotate's
/// `dateext` (`-YYYYMMDD`, plain then compressed), logrotate's
/// `dateformat -%Y%m%d-%s` (eight date digits plus ten epoch digits), and
/// Python's `TimedRotatingFileHandler` (`.YYYY-MM-DD`).
const DATE_SUFFIXES: &[&str] = &[
    r"-[0-9]{8}",
    r"-[0-9]{8}\.gz",
    r"-[0-9]{8}-[0-9]{10}",
    r"-[0-9]{8}-[0-9]{10}\.gz",
    r"\.[0-9]{4}-[0-9]{2}-[0-9]{2}",
];

/// Ordered set of rotation filename templates.
///
/// The built-in templates always run first; caller-supplied suffix
/// templates extend the probe list at the end, in the order supplied. A
/// suffix template is a regular expression matched against the part of an
/// entry name that follows the watched file's name, anchored over the whole
/// entry.
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    extras: Vec<String>,
}

impl PatternSet {
    /// The built-in probe templates with no caller additions.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { extras: Vec::new() }
    }

    /// Appends caller-supplied suffix templates after the built-ins.
    ///
    /// Every template is compiled eagerly so a bad pattern fails at
    /// construction instead of surfacing mid-probe on some later rotation.
    pub fn with_extras<I, S>(extras: I) -> Result<Self, RotationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let extras: Vec<String> = extras.into_iter().map(Into::into).collect();
        for suffix in &extras {
            compile("x", suffix)?;
        }
        Ok(Self { extras })
    }

    /// Reports whether any caller-supplied templates are registered.
    #[must_use]
    pub fn has_extras(&self) -> bool {
        !self.extras.is_empty()
    }

    pub(crate) fn suffixes(&self) -> impl Iterator<Item = &str> {
        DATE_SUFFIXES
            .iter()
            .copied()
            .chain(self.extras.iter().map(String::as_str))
    }
}

/// Locates the rotated-away predecessor of `file_name` inside `directory`.
///
/// Probes run in fixed priority order and the first hit wins outright:
///
/// 1. the savelog(8) numeric pair: `<file>.0` is the predecessor only
///    while both `<file>.0` and `<file>.1.gz` exist and `.0` carries the
///    strictly newer mtime;
/// 2. `<file>.1` (logrotate with delaycompress);
/// 3. `<file>.1.gz` (logrotate with compress);
/// 4. the dated templates of `patterns`, each filtering one shared
///    directory listing, picking the lexicographically greatest match.
///
/// Returns `None` when no probe matches; the caller decides whether that
/// degrades the read or simply means no rotation happened.
pub fn find_predecessor<P: FileAccess>(
    provider: &P,
    directory: &Path,
    file_name: &str,
    patterns: &PatternSet,
) -> Result<Option<PathBuf>, RotationError> {
    let zero = directory.join(format!("{file_name}.0"));
    let one_gz = directory.join(format!("{file_name}.1.gz"));
    if provider.exists(&zero)? && provider.exists(&one_gz)? {
        let zero_mtime = provider.stat(&zero)?.mtime;
        let one_gz_mtime = provider.stat(&one_gz)?.mtime;
        if zero_mtime > one_gz_mtime {
            tracing::debug!(predecessor = %zero.display(), "matched savelog numeric pair");
            return Ok(Some(zero));
        }
    }

    let one = directory.join(format!("{file_name}.1"));
    if provider.exists(&one)? {
        tracing::debug!(predecessor = %one.display(), "matched numeric rotation");
        return Ok(Some(one));
    }
    if provider.exists(&one_gz)? {
        tracing::debug!(
            predecessor = %one_gz.display(),
            "matched compressed numeric rotation"
        );
        return Ok(Some(one_gz));
    }

    // The dated schemes share a single directory listing; a template only
    // runs when every earlier one found nothing.
    let entries = provider.list_dir(directory)?;
    for suffix in patterns.suffixes() {
        let regex = compile(file_name, suffix)?;
        if let Some(name) = entries.iter().filter(|entry| regex.is_match(entry)).max() {
            tracing::debug!(predecessor = %name, template = suffix, "matched dated rotation");
            return Ok(Some(directory.join(name)));
        }
    }

    Ok(None)
}

fn compile(file_name: &str, suffix: &str) -> Result<Regex, RotationError> {
    let pattern = format!("^{}{}$", regex::escape(file_name), suffix);
    Regex::new(&pattern).map_err(|source| RotationError::InvalidPattern {
        pattern: suffix.to_owned(),
        source,
    })
}
