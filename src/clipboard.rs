//! Clipboard capability
//!
//! The router talks to the clipboard through the `ClipboardCapability` trait
//! so tests can substitute a recording mock. The production implementation is
//! backed by arboard.

use crate::error::HostError;

/// System clipboard operations available to extensions
pub trait ClipboardCapability: Send + Sync {
    /// Replace the clipboard contents with `content`
    fn write_text(&self, content: &str) -> Result<(), HostError>;
    /// Read the clipboard as text; `None` when no text content is available
    fn read_text(&self) -> Result<Option<String>, HostError>;
    /// Clear the clipboard
    fn clear(&self) -> Result<(), HostError>;
}

/// arboard-backed clipboard
///
/// A fresh `arboard::Clipboard` handle is opened per call; a long-lived
/// handle would hold clipboard ownership on X11.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }

    fn open() -> Result<arboard::Clipboard, HostError> {
        arboard::Clipboard::new().map_err(|e| HostError::Clipboard(e.to_string()))
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardCapability for SystemClipboard {
    fn write_text(&self, content: &str) -> Result<(), HostError> {
        Self::open()?
            .set_text(content.to_string())
            .map_err(|e| HostError::Clipboard(e.to_string()))
    }

    fn read_text(&self) -> Result<Option<String>, HostError> {
        match Self::open()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(HostError::Clipboard(e.to_string())),
        }
    }

    fn clear(&self) -> Result<(), HostError> {
        Self::open()?
            .clear()
            .map_err(|e| HostError::Clipboard(e.to_string()))
    }
}
