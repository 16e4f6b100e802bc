use iced::keyboard;
use iced::widget::text_editor;
use std::path::PathBuf;

use quill_core::{Command, FontFamily, Menu};

#[derive(Debug, Clone)]
pub enum Message {
    // Menu commands and shortcuts
    Command(Command),
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Editor
    EditorAction(text_editor::Action),

    // Menu bar
    ToggleMenu(Menu),
    CloseMenu,

    // Native dialog results
    PathChosen(Option<PathBuf>),
    WarningClosed,

    // Font picker
    FontFamilySelected(FontFamily),
    FontSizeChanged(f32),
    FontBoldToggled(bool),
    FontItalicToggled(bool),
    FontUnderlineToggled(bool),
    FontConfirm,
    FontCancel,

    // Print dialog
    PrintPrinterChanged(String),
    PrintCopiesChanged(String),
    PrintConfirm,
    PrintCancel,

    // About box
    HideAbout,
}
