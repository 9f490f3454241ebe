//! Clipboard access for copying a selected emoji.

use std::sync::Mutex;
use std::time::Duration;

use crate::error::{FinderError, FinderResult};
use crate::services::notify::{copied_message, Notifier};

/// Write text to the system clipboard
pub trait ClipboardAccess: Send + Sync {
    fn set_text(&self, content: &str) -> FinderResult<()>;
}

/// Cross-platform clipboard using arboard
pub struct ArboardClipboard {
    clipboard: Mutex<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> FinderResult<Self> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| FinderError::Clipboard(e.to_string()))?;
        Ok(Self {
            clipboard: Mutex::new(clipboard),
        })
    }
}

impl ClipboardAccess for ArboardClipboard {
    fn set_text(&self, content: &str) -> FinderResult<()> {
        self.clipboard
            .lock()
            .map_err(|e| FinderError::Clipboard(e.to_string()))?
            .set_text(content)
            .map_err(|e| FinderError::Clipboard(e.to_string()))
    }
}

/// Copy `character` and confirm on `notifier`.
///
/// A failed confirmation is logged and does not undo the copy.
pub fn copy_with_notice(
    clipboard: &dyn ClipboardAccess,
    notifier: &mut dyn Notifier,
    character: &str,
    duration: Duration,
) -> FinderResult<()> {
    clipboard.set_text(character)?;
    tracing::info!(character, "Copied emoji to clipboard");

    if let Err(e) = notifier.notify(&copied_message(character), duration) {
        tracing::warn!("Failed to show copy notification: {}", e);
    }
    Ok(())
}
