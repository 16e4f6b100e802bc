//! The iced text editor as a [`TextSurface`].
//!
//! iced's `text_editor` has no undo stack of its own, so this wrapper keeps
//! whole-text snapshots taken before each edit.

use iced::widget::text_editor;
use std::sync::Arc;

use quill_core::{FontSpec, TextSurface};

/// Maximum number of undo snapshots kept.
const UNDO_LIMIT: usize = 100;

pub struct EditorSurface {
    content: text_editor::Content,
    font: FontSpec,
    clipboard: Option<arboard::Clipboard>,
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
}

impl EditorSurface {
    pub fn new(font: FontSpec, clipboard: Option<arboard::Clipboard>) -> Self {
        Self {
            content: text_editor::Content::new(),
            font,
            clipboard,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn content(&self) -> &text_editor::Content {
        &self.content
    }

    /// Applies a widget action, snapshotting first if it edits the text.
    pub fn perform(&mut self, action: text_editor::Action) {
        if action.is_edit() {
            self.save_undo_state();
        }
        self.content.perform(action);
    }

    /// (line, column), both zero based.
    pub fn cursor_position(&self) -> (usize, usize) {
        self.content.cursor_position()
    }

    fn save_undo_state(&mut self) {
        let current = self.text();
        // Only save if different from last state
        if self.undo_stack.last() != Some(&current) {
            self.undo_stack.push(current);
            if self.undo_stack.len() > UNDO_LIMIT {
                self.undo_stack.remove(0);
            }
            self.redo_stack.clear();
        }
    }

    fn restore(&mut self, text: &str) {
        // `Content::with_text` drops one empty last line, so "x\n" would load as "x".
        self.content = if text.ends_with('\n') {
            text_editor::Content::with_text(&format!("{text}\n"))
        } else {
            text_editor::Content::with_text(text)
        };
    }
}

impl TextSurface for EditorSurface {
    fn text(&self) -> String {
        // `Content::text` always appends a newline; join lines to keep the buffer exact.
        let mut text = String::new();
        for (i, line) in self.content.lines().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(&line);
        }
        text
    }

    fn set_text(&mut self, text: &str) {
        self.restore(text);
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(self.text());
        self.restore(&previous);
        true
    }

    fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(self.text());
        self.restore(&next);
        true
    }

    fn copy(&mut self) -> bool {
        let Some(selected) = self.content.selection() else {
            return false;
        };
        let Some(clipboard) = self.clipboard.as_mut() else {
            return false;
        };
        if let Err(e) = clipboard.set_text(selected) {
            tracing::warn!("Copy failed: {}", e);
            return false;
        }
        true
    }

    fn cut(&mut self) -> bool {
        if !self.copy() {
            return false;
        }
        self.perform(text_editor::Action::Edit(text_editor::Edit::Delete));
        true
    }

    fn paste(&mut self) -> bool {
        let Some(clipboard) = self.clipboard.as_mut() else {
            return false;
        };
        match clipboard.get_text() {
            Ok(text) if !text.is_empty() => {
                self.perform(text_editor::Action::Edit(text_editor::Edit::Paste(Arc::new(
                    text,
                ))));
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::debug!("Nothing to paste: {}", e);
                false
            }
        }
    }

    fn font(&self) -> &FontSpec {
        &self.font
    }

    fn set_font(&mut self, font: FontSpec) {
        tracing::debug!("Editor font: {}", font.describe());
        self.font = font;
    }
}
