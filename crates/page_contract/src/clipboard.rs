//! Clipboard service contracts and no-op/in-memory adapters.

use std::{cell::RefCell, rc::Rc};

/// Host service for writing text to the system clipboard.
pub trait ClipboardService {
    /// Copies `text` to the clipboard.
    fn write_text(&self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op clipboard service for unsupported targets.
pub struct NoopClipboardService;

impl ClipboardService for NoopClipboardService {
    fn write_text(&self, _text: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory clipboard that keeps the last written value.
pub struct MemoryClipboardService {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboardService {
    /// Returns the current clipboard contents.
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl ClipboardService for MemoryClipboardService {
    fn write_text(&self, text: &str) -> Result<(), String> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_keeps_last_write() {
        let clipboard = MemoryClipboardService::default();
        let clipboard_obj: &dyn ClipboardService = &clipboard;
        assert_eq!(clipboard.contents(), None);

        clipboard_obj.write_text("first").expect("write");
        clipboard_obj.write_text("hello").expect("write");

        assert_eq!(clipboard.contents(), Some("hello".to_string()));
    }
}
