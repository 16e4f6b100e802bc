//! The text-editing surface the window delegates to.

use crate::font::FontSpec;

/// A multi-line text widget with its own undo stack and clipboard access.
///
/// The window never keeps a copy of the text or an edit history; it asks
/// the surface. The UI crate implements this on top of its editor widget.
pub trait TextSurface {
    /// Full buffer contents.
    fn text(&self) -> String;

    /// Replaces the whole buffer.
    fn set_text(&mut self, text: &str);

    /// Returns false when there was nothing to undo.
    fn undo(&mut self) -> bool;

    /// Returns false when there was nothing to redo.
    fn redo(&mut self) -> bool;

    /// Copies the selection to the clipboard. Returns false without a selection.
    fn copy(&mut self) -> bool;

    /// Moves the selection to the clipboard. Returns false without a selection.
    fn cut(&mut self) -> bool;

    /// Inserts the clipboard text at the cursor. Returns false if the clipboard was empty.
    fn paste(&mut self) -> bool;

    fn font(&self) -> &FontSpec;

    fn set_font(&mut self, font: FontSpec);
}
