use std::sync::Mutex;

use arboard::Clipboard;

use crate::app::ports::{ClipboardError, ClipboardWriter};

/// System clipboard via arboard.
///
/// The handle is opened lazily so a headless session can still browse data.
#[derive(Default)]
pub struct ArboardClipboard {
    handle: Mutex<Option<Clipboard>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write(&self, content: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;

        if guard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            *guard = Some(clipboard);
        }

        let Some(clipboard) = guard.as_mut() else {
            return Err(ClipboardError::Unavailable("clipboard not initialized".to_string()));
        };

        clipboard
            .set_text(content.to_string())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
