//! # Quill UI
//!
//! The editor window, built with the iced framework.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture:
//! - **Model**: [`App`] wraps the core `EditorWindow` plus dialog state
//! - **Message**: menu clicks, key presses, editor actions, dialog results
//! - **Update**: turns messages into window commands and dialog answers
//! - **View**: menu bar, editor, status bar and any open modal
//!
//! Native file and warning dialogs come from `rfd`; the font picker, print
//! dialog and about box are drawn as in-window modals.

pub mod app;
pub mod theme;

pub use app::{run, App, Flags};
