//! Clipboard access for copying summaries
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux).
//! The system clipboard is opened fresh for every write to avoid holding
//! resources, and the write runs on a blocking thread so the UI loop never
//! stalls on a slow display server.

use async_trait::async_trait;
use std::fmt;

/// Errors from a clipboard write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard available (headless Linux, no display server)
    Unavailable(String),
    /// Clipboard opened but the write was rejected
    WriteFailed(String),
    /// The blocking write task died
    TaskFailed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Clipboard unavailable: {}", msg),
            Self::WriteFailed(msg) => write!(f, "Failed to set clipboard text: {}", msg),
            Self::TaskFailed(msg) => write!(f, "Clipboard task failed: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Something that can receive copied text
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The user's system clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || copy_to_clipboard(&text))
            .await
            .map_err(|e| ClipboardError::TaskFailed(e.to_string()))?
    }
}

/// Copy text to the system clipboard (blocking)
fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
}
