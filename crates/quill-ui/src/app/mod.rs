use iced::{Subscription, Task, keyboard};
use std::path::PathBuf;

use quill_core::{Capabilities, Config, EditorWindow, Menu, Outcome, SpoolerPrinter};

pub mod messages;
pub mod surface;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use surface::EditorSurface;
pub use types::*;

/// Launch options collected by the binary.
#[derive(Debug, Default)]
pub struct Flags {
    /// File to open at startup
    pub file: Option<PathBuf>,
    pub config: Config,
}

pub struct App {
    pub window: EditorWindow<EditorSurface>,
    pub status_message: String,
    pub active_menu: Option<Menu>,
    pub modal: Option<Modal>,
    /// A native warning dialog is showing
    pub warning_open: bool,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let features = &flags.config.features;

        let printer = SpoolerPrinter::from_config(features.print_command.as_deref());
        let mut clipboard = None;
        let capabilities = Capabilities::detect(features, printer.is_some(), || {
            match arboard::Clipboard::new() {
                Ok(cb) => {
                    clipboard = Some(cb);
                    true
                }
                Err(e) => {
                    tracing::warn!("System clipboard unavailable: {}", e);
                    false
                }
            }
        });
        if !capabilities.clipboard {
            clipboard = None;
        } else if clipboard.is_none() {
            // Forced on in config, so the probe never ran.
            clipboard = arboard::Clipboard::new().ok();
        }

        let surface = EditorSurface::new(flags.config.editor.font.clone().clamped(), clipboard);
        let mut window = EditorWindow::new(surface, capabilities);
        if let Some(printer) = printer {
            window = window.with_printer(Box::new(printer));
        }

        let mut app = Self {
            window,
            status_message: "Ready | Ctrl+O: Open | Ctrl+S: Save | Ctrl+N: New".to_string(),
            active_menu: None,
            modal: None,
            warning_open: false,
        };

        if let Some(path) = flags.file {
            // Startup failures go to the status line instead of a dialog.
            app.status_message = match app.window.open_path(&path) {
                Outcome::Done(message) => message,
                Outcome::Warning { message, .. } => message,
                _ => String::new(),
            };
        }

        (app, Task::none())
    }

    /// Mirrors the current file path; untitled documents show the app name.
    pub fn title(&self) -> String {
        self.window.title()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }
}

pub fn run(flags: Flags) -> iced::Result {
    let size = iced::Size::new(flags.config.window.width, flags.config.window.height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(size)
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
