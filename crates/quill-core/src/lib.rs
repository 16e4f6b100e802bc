//! # Quill Core
//!
//! Toolkit-independent logic behind the Quill editor window.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    EditorWindow                       │
//! │  ┌──────────────┐ ┌──────────────┐ ┌───────────────┐ │
//! │  │ CommandTable │ │ Capabilities │ │    Printer    │ │
//! │  └──────────────┘ └──────────────┘ └───────────────┘ │
//! │         │                                             │
//! │  ┌──────┴──────┐        ┌──────────────────────────┐ │
//! │  │  Document   │        │   TextSurface (widget)   │ │
//! │  └─────────────┘        └──────────────────────────┘ │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The UI crate owns the widget and the dialogs. Commands that need a dialog
//! return an [`Outcome::Prompt`]; the UI shows it and hands the answer back
//! through [`EditorWindow::answer`].

pub mod capabilities;
pub mod command;
pub mod config;
pub mod document;
pub mod font;
pub mod print;
pub mod surface;
pub mod window;

pub use capabilities::{Capabilities, FeatureToggle};
pub use command::{Command, CommandTable, Menu};
pub use config::Config;
pub use document::Document;
pub use font::{FontFamily, FontSpec};
pub use print::{PrintJob, Printer, SpoolerPrinter};
pub use surface::TextSurface;
pub use window::{AboutInfo, Answer, EditorWindow, Outcome, Prompt, SaveMode};

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Print(#[from] print::PrintError),
}

/// File-system failures surfaced to the user as warnings.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("Cannot open file: {source}")]
    Open {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot save file: {source}")]
    Save {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// Path the failed operation was attempted on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileError::Open { path, .. } | FileError::Save { path, .. } => path,
        }
    }
}
