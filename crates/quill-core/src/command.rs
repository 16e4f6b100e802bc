//! Menu commands and the table that dispatches them.
//!
//! Every menu entry and keyboard shortcut maps to one [`Command`]. The
//! [`CommandTable`] maps each command to its handler and records whether
//! it is enabled, so a disabled command stays in the menu but does nothing.

use std::collections::HashMap;

use crate::capabilities::Capabilities;
use crate::surface::TextSurface;
use crate::window::{EditorWindow, Outcome};

/// User-invoked window commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // File
    New,
    Open,
    Save,
    SaveAs,
    Print,
    Exit,

    // Edit
    Copy,
    Cut,
    Paste,
    Undo,
    Redo,

    // Format
    SelectFont,
    Bold,
    Underline,
    Italic,

    // Help
    About,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 16] = [
        Command::New,
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Print,
        Command::Exit,
        Command::Undo,
        Command::Redo,
        Command::Cut,
        Command::Copy,
        Command::Paste,
        Command::SelectFont,
        Command::Bold,
        Command::Italic,
        Command::Underline,
        Command::About,
    ];

    /// Returns the command's menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open...",
            Command::Save => "Save",
            Command::SaveAs => "Save As...",
            Command::Print => "Print...",
            Command::Exit => "Exit",
            Command::Copy => "Copy",
            Command::Cut => "Cut",
            Command::Paste => "Paste",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::SelectFont => "Font...",
            Command::Bold => "Bold",
            Command::Underline => "Underline",
            Command::Italic => "Italic",
            Command::About => "About Quill",
        }
    }

    /// Keyboard shortcut shown next to the label (empty if none).
    pub fn shortcut(&self) -> &'static str {
        match self {
            Command::New => "Ctrl+N",
            Command::Open => "Ctrl+O",
            Command::Save => "Ctrl+S",
            Command::SaveAs => "Ctrl+Shift+S",
            Command::Print => "Ctrl+P",
            Command::Exit => "Ctrl+Q",
            Command::Copy => "Ctrl+C",
            Command::Cut => "Ctrl+X",
            Command::Paste => "Ctrl+V",
            Command::Undo => "Ctrl+Z",
            Command::Redo => "Ctrl+Y",
            Command::SelectFont => "",
            Command::Bold => "Ctrl+B",
            Command::Underline => "Ctrl+U",
            Command::Italic => "Ctrl+I",
            Command::About => "",
        }
    }

    pub fn menu(&self) -> Menu {
        match self {
            Command::New
            | Command::Open
            | Command::Save
            | Command::SaveAs
            | Command::Print
            | Command::Exit => Menu::File,
            Command::Copy | Command::Cut | Command::Paste | Command::Undo | Command::Redo => {
                Menu::Edit
            }
            Command::SelectFont | Command::Bold | Command::Underline | Command::Italic => {
                Menu::Format
            }
            Command::About => Menu::Help,
        }
    }

    /// Style toggles show a check mark in the menu.
    pub fn is_toggle(&self) -> bool {
        matches!(self, Command::Bold | Command::Underline | Command::Italic)
    }

    /// Whether the platform features this command needs are present.
    pub fn is_supported(&self, caps: &Capabilities) -> bool {
        match self {
            Command::Print => caps.printing,
            Command::Copy | Command::Cut | Command::Paste => caps.clipboard,
            _ => true,
        }
    }
}

/// Top-level menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    File,
    Edit,
    Format,
    Help,
}

impl Menu {
    pub const ALL: [Menu; 4] = [Menu::File, Menu::Edit, Menu::Format, Menu::Help];

    pub fn label(&self) -> &'static str {
        match self {
            Menu::File => "File",
            Menu::Edit => "Edit",
            Menu::Format => "Format",
            Menu::Help => "Help",
        }
    }

    /// Commands in this menu, in display order.
    pub fn commands(self) -> impl Iterator<Item = Command> {
        Command::ALL.into_iter().filter(move |c| c.menu() == self)
    }
}

/// A command handler.
pub type Handler<S> = fn(&mut EditorWindow<S>) -> Outcome;

struct Entry<S> {
    handler: Handler<S>,
    enabled: bool,
}

/// Dispatch table from commands to handlers.
pub struct CommandTable<S> {
    entries: HashMap<Command, Entry<S>>,
}

impl<S: TextSurface> CommandTable<S> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The window's built-in handlers, enabled according to `caps`.
    pub fn standard(caps: &Capabilities) -> Self {
        let mut table = Self::new();
        table.register(Command::New, EditorWindow::new_document);
        table.register(Command::Open, EditorWindow::open);
        table.register(Command::Save, EditorWindow::save);
        table.register(Command::SaveAs, EditorWindow::save_as);
        table.register(Command::Print, EditorWindow::print);
        table.register(Command::Exit, EditorWindow::exit);
        table.register(Command::Copy, EditorWindow::copy);
        table.register(Command::Cut, EditorWindow::cut);
        table.register(Command::Paste, EditorWindow::paste);
        table.register(Command::Undo, EditorWindow::undo);
        table.register(Command::Redo, EditorWindow::redo);
        table.register(Command::SelectFont, EditorWindow::select_font);
        table.register(Command::Bold, EditorWindow::toggle_bold);
        table.register(Command::Underline, EditorWindow::toggle_underline);
        table.register(Command::Italic, EditorWindow::toggle_italic);
        table.register(Command::About, EditorWindow::about);
        table.apply_capabilities(caps);
        table
    }

    /// Registers (or replaces) the handler for `command`, enabled.
    pub fn register(&mut self, command: Command, handler: Handler<S>) {
        self.entries.insert(
            command,
            Entry {
                handler,
                enabled: true,
            },
        );
    }

    pub fn set_enabled(&mut self, command: Command, enabled: bool) {
        if let Some(entry) = self.entries.get_mut(&command) {
            entry.enabled = enabled;
        }
    }

    /// Disables every command whose feature is missing.
    pub fn apply_capabilities(&mut self, caps: &Capabilities) {
        for command in Command::ALL {
            if !command.is_supported(caps) {
                tracing::debug!("Disabling {:?}: feature unavailable", command);
                self.set_enabled(command, false);
            }
        }
    }

    pub fn is_enabled(&self, command: Command) -> bool {
        self.entries.get(&command).is_some_and(|e| e.enabled)
    }

    /// Handler for an enabled command.
    pub fn handler(&self, command: Command) -> Option<Handler<S>> {
        self.entries
            .get(&command)
            .filter(|e| e.enabled)
            .map(|e| e.handler)
    }
}

impl<S: TextSurface> Default for CommandTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::tests::MemorySurface;

    #[test]
    fn test_command_display_name() {
        assert_eq!(Command::Save.display_name(), "Save");
        assert_eq!(Command::SaveAs.shortcut(), "Ctrl+Shift+S");
        assert_eq!(Command::SelectFont.shortcut(), "");
    }

    #[test]
    fn test_every_command_in_one_menu() {
        let total: usize = Menu::ALL.iter().map(|m| m.commands().count()).sum();
        assert_eq!(total, Command::ALL.len());
        assert_eq!(
            Menu::Format.commands().collect::<Vec<_>>(),
            [
                Command::SelectFont,
                Command::Bold,
                Command::Italic,
                Command::Underline
            ]
        );
    }

    #[test]
    fn test_standard_table_registers_everything() {
        let table = CommandTable::<MemorySurface>::standard(&Capabilities::all());
        for command in Command::ALL {
            assert!(table.is_enabled(command), "{:?} should be enabled", command);
        }
    }

    #[test]
    fn test_missing_features_disable_commands() {
        let table = CommandTable::<MemorySurface>::standard(&Capabilities::none());
        assert!(!table.is_enabled(Command::Print));
        assert!(!table.is_enabled(Command::Copy));
        assert!(!table.is_enabled(Command::Cut));
        assert!(!table.is_enabled(Command::Paste));
        assert!(table.handler(Command::Paste).is_none());

        assert!(table.is_enabled(Command::Undo));
        assert!(table.handler(Command::Save).is_some());
    }

    #[test]
    fn test_unregistered_command_is_disabled() {
        let table = CommandTable::<MemorySurface>::new();
        assert!(!table.is_enabled(Command::New));
    }
}
