use iced::{Task, keyboard};
use std::path::PathBuf;

use quill_core::{Answer, Command, Outcome, Prompt, SaveMode, TextSurface};

use super::{App, FontPicker, Message, Modal, PrintDialog};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(command) => {
                self.active_menu = None;
                if self.modal.is_some() || self.warning_open {
                    return Task::none();
                }
                let outcome = self.window.dispatch(command);
                return self.handle_outcome(outcome);
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }

            Message::EditorAction(action) => {
                self.active_menu = None;
                // Dialogs are modal: no typing while one is open.
                if self.is_blocked() {
                    return Task::none();
                }
                self.window.surface_mut().perform(action);
            }

            Message::ToggleMenu(menu) => {
                if self.active_menu == Some(menu) {
                    self.active_menu = None;
                } else {
                    self.active_menu = Some(menu);
                }
            }

            Message::CloseMenu => {
                self.active_menu = None;
            }

            Message::PathChosen(path) => {
                let outcome = self.window.answer(Answer::Path(path));
                return self.handle_outcome(outcome);
            }

            Message::WarningClosed => {
                self.warning_open = false;
            }

            Message::FontFamilySelected(family) => {
                if let Some(Modal::Font(picker)) = &mut self.modal {
                    picker.font.family = family;
                }
            }
            Message::FontSizeChanged(size) => {
                if let Some(Modal::Font(picker)) = &mut self.modal {
                    picker.font.size = size;
                }
            }
            Message::FontBoldToggled(on) => {
                if let Some(Modal::Font(picker)) = &mut self.modal {
                    picker.font.bold = on;
                }
            }
            Message::FontItalicToggled(on) => {
                if let Some(Modal::Font(picker)) = &mut self.modal {
                    picker.font.italic = on;
                }
            }
            Message::FontUnderlineToggled(on) => {
                if let Some(Modal::Font(picker)) = &mut self.modal {
                    picker.font.underline = on;
                }
            }
            Message::FontConfirm => {
                if let Some(Modal::Font(picker)) = self.modal.take() {
                    let outcome = self.window.answer(Answer::Font(Some(picker.font)));
                    return self.handle_outcome(outcome);
                }
            }
            Message::FontCancel => {
                if let Some(Modal::Font(_)) = self.modal.take() {
                    let outcome = self.window.answer(Answer::Font(None));
                    return self.handle_outcome(outcome);
                }
            }

            Message::PrintPrinterChanged(value) => {
                if let Some(Modal::Print(dialog)) = &mut self.modal {
                    dialog.printer_input = value;
                }
            }
            Message::PrintCopiesChanged(value) => {
                if let Some(Modal::Print(dialog)) = &mut self.modal {
                    dialog.copies_input = value;
                    dialog.error = None;
                }
            }
            Message::PrintConfirm => {
                let job = match &mut self.modal {
                    Some(Modal::Print(dialog)) => match dialog.job() {
                        Ok(job) => job,
                        Err(e) => {
                            dialog.error = Some(e);
                            return Task::none();
                        }
                    },
                    _ => return Task::none(),
                };
                self.modal = None;
                let outcome = self.window.answer(Answer::Print(Some(job)));
                return self.handle_outcome(outcome);
            }
            Message::PrintCancel => {
                if let Some(Modal::Print(_)) = self.modal.take() {
                    let outcome = self.window.answer(Answer::Print(None));
                    return self.handle_outcome(outcome);
                }
            }

            Message::HideAbout => {
                if let Some(Modal::About(_)) = self.modal {
                    self.modal = None;
                }
            }
        }
        Task::none()
    }

    /// Turns a window outcome into UI state and follow-up tasks.
    pub fn handle_outcome(&mut self, outcome: Outcome) -> Task<Message> {
        match outcome {
            Outcome::Done(message) => {
                self.status_message = message;
            }
            Outcome::Prompt(prompt) => {
                return self.show_prompt(prompt);
            }
            Outcome::Warning { title, message } => {
                self.status_message = message.clone();
                self.warning_open = true;
                return Task::perform(show_warning(title, message), |_| Message::WarningClosed);
            }
            Outcome::Exit => {
                return iced::exit();
            }
            Outcome::About(info) => {
                self.modal = Some(Modal::About(info));
            }
            Outcome::Disabled(command) => {
                self.status_message = format!("{} is not available", command.display_name());
            }
            Outcome::Cancelled => {
                self.status_message = "Cancelled".to_string();
            }
            Outcome::Ignored => {}
        }
        Task::none()
    }

    fn show_prompt(&mut self, prompt: Prompt) -> Task<Message> {
        match prompt {
            Prompt::OpenPath => Task::perform(pick_open_path(), Message::PathChosen),
            Prompt::SavePath(mode) => {
                let file_name = self
                    .window
                    .document()
                    .path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "untitled.txt".to_string());
                Task::perform(pick_save_path(mode, file_name), Message::PathChosen)
            }
            Prompt::Font(font) => {
                self.modal = Some(Modal::Font(FontPicker { font }));
                Task::none()
            }
            Prompt::Print(job) => {
                let device = self.window.printer_name().unwrap_or("no printer").to_string();
                self.modal = Some(Modal::Print(PrintDialog::new(job, device)));
                Task::none()
            }
        }
    }

    pub fn handle_key_pressed(&mut self, key: keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        if let keyboard::Key::Named(keyboard::key::Named::Escape) = key {
            self.active_menu = None;
            let close = match &self.modal {
                Some(Modal::Font(_)) => Message::FontCancel,
                Some(Modal::Print(_)) => Message::PrintCancel,
                Some(Modal::About(_)) => Message::HideAbout,
                None => return Task::none(),
            };
            return self.update(close);
        }

        match shortcut_command(&key, modifiers) {
            Some(command) => self.update(Message::Command(command)),
            None => Task::none(),
        }
    }

    /// True while any dialog, native or in-window, is waiting on the user.
    pub fn is_blocked(&self) -> bool {
        self.modal.is_some() || self.warning_open || self.window.pending_prompt().is_some()
    }

    /// Whether `command` should render with a check mark.
    pub fn is_checked(&self, command: Command) -> bool {
        if !command.is_toggle() {
            return false;
        }
        let font = self.window.surface().font();
        match command {
            Command::Bold => font.bold,
            Command::Italic => font.italic,
            Command::Underline => font.underline,
            _ => false,
        }
    }
}

/// Maps a key press to a menu command.
///
/// Ctrl+C/X/V are left to the editor widget, whose key bindings turn them
/// into commands while it has focus.
pub fn shortcut_command(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Command> {
    if !modifiers.control() || modifiers.alt() {
        return None;
    }
    let keyboard::Key::Character(c) = key else {
        return None;
    };

    let command = match (c.to_lowercase().as_str(), modifiers.shift()) {
        ("s", true) => Command::SaveAs,
        ("z", true) => Command::Redo,
        (_, true) => return None,
        ("n", false) => Command::New,
        ("o", false) => Command::Open,
        ("s", false) => Command::Save,
        ("p", false) => Command::Print,
        ("q", false) => Command::Exit,
        ("z", false) => Command::Undo,
        ("y", false) => Command::Redo,
        ("b", false) => Command::Bold,
        ("i", false) => Command::Italic,
        ("u", false) => Command::Underline,
        _ => return None,
    };
    Some(command)
}

async fn pick_open_path() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Open the file")
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

async fn pick_save_path(mode: SaveMode, file_name: String) -> Option<PathBuf> {
    let title = match mode {
        SaveMode::Save => "Save",
        SaveMode::SaveAs => "Save as",
    };
    rfd::AsyncFileDialog::new()
        .set_title(title)
        .set_file_name(file_name)
        .save_file()
        .await
        .map(|file| file.path().to_path_buf())
}

async fn show_warning(title: String, message: String) {
    let _ = rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}
