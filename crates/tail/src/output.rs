use cursor::Cursor;
use rotation::Rotation;

/// Result of one tail pass over an existing file.
///
/// Carries the newly delivered text together with how the pass got there:
/// the rotation outcome that shaped the read and the cursor that was
/// persisted afterwards. An unchanged file still produces an output, just
/// an [empty](TailOutput::is_empty) one.
#[derive(Debug)]
pub struct TailOutput {
    pub(crate) text: String,
    pub(crate) rotation: Rotation,
    pub(crate) cursor: Cursor,
}

impl TailOutput {
    /// Newly delivered text, decoded with invalid UTF-8 replaced.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the output and returns just the delivered text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// How the pass classified the file's identity since the last read.
    #[must_use]
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// The cursor persisted by this pass.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Reports whether the pass delivered no new bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
