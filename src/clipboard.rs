//! Clipboard shim supplying the default expected hash.

use arboard::Clipboard;

use crate::error::HashError;

/// Read the clipboard as text, trimming the surrounding whitespace that
/// pasted digests usually carry.
pub(crate) fn read_text() -> Result<String, HashError> {
    let mut clipboard = Clipboard::new()?;
    let text = clipboard.get_text()?;
    Ok(text.trim().to_string())
}
