use arboard::Clipboard;

use crate::error::{Result, StatusError};

#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard, opened on first use and kept for later copies.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new()
                .map_err(|e| StatusError::Clipboard(format!("clipboard unavailable: {e}")))?,
        };

        self.inner
            .insert(clipboard)
            .set_text(text.to_string())
            .map_err(|e| StatusError::Clipboard(e.to_string()))
    }
}
