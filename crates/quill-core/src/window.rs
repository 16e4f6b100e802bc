//! The editor window: command handlers over a text surface.
//!
//! Handlers run synchronously. A handler that needs the user to choose
//! something returns [`Outcome::Prompt`]; the UI shows the matching modal
//! dialog and passes the result to [`EditorWindow::answer`]. Document state
//! only changes once an operation has succeeded, and cancelling a dialog
//! leaves everything as it was.

use std::path::{Path, PathBuf};

use crate::capabilities::Capabilities;
use crate::command::{Command, CommandTable};
use crate::document::{self, Document};
use crate::font::FontSpec;
use crate::print::{PrintError, PrintJob, Printer};
use crate::surface::TextSurface;
use crate::CoreError;

/// Why a save path is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// First save of an untitled document
    Save,
    /// Explicit "Save As"
    SaveAs,
}

/// A modal dialog the UI must show.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    OpenPath,
    SavePath(SaveMode),
    /// Font picker, seeded with the current font
    Font(FontSpec),
    /// Print dialog, seeded with a default job
    Print(PrintJob),
}

/// The user's response to a [`Prompt`]. `None` means the dialog was cancelled.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Path(Option<PathBuf>),
    Font(Option<FontSpec>),
    Print(Option<PrintJob>),
}

/// Contents of the about box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

impl AboutInfo {
    pub fn current() -> Self {
        Self {
            name: document::APP_NAME,
            version: env!("CARGO_PKG_VERSION"),
            description: "A small text editor",
        }
    }
}

/// What the UI should do after a command or answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Finished; the message goes to the status line.
    Done(String),
    Prompt(Prompt),
    /// Show a modal warning.
    Warning { title: String, message: String },
    Exit,
    About(AboutInfo),
    /// The command's feature is unavailable.
    Disabled(Command),
    /// A dialog was cancelled.
    Cancelled,
    /// Nothing to do (e.g. a command arrived while a dialog was open).
    Ignored,
}

impl Outcome {
    fn done(message: impl Into<String>) -> Self {
        Outcome::Done(message.into())
    }

    fn warning(err: impl Into<CoreError>) -> Self {
        let err = err.into();
        tracing::warn!("{}", err);
        Outcome::Warning {
            title: "Warning".to_string(),
            message: err.to_string(),
        }
    }
}

/// The main editor window.
pub struct EditorWindow<S> {
    surface: S,
    document: Document,
    capabilities: Capabilities,
    commands: CommandTable<S>,
    printer: Option<Box<dyn Printer>>,
    pending: Option<Prompt>,
}

impl<S: TextSurface> EditorWindow<S> {
    /// Creates a window with an untitled document.
    pub fn new(surface: S, capabilities: Capabilities) -> Self {
        Self {
            surface,
            document: Document::new(),
            capabilities,
            commands: CommandTable::standard(&capabilities),
            printer: None,
            pending: None,
        }
    }

    /// Attaches the device used by Print.
    pub fn with_printer(mut self, printer: Box<dyn Printer>) -> Self {
        self.printer = Some(printer);
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct access for typing and cursor movement, which bypass commands.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn is_enabled(&self, command: Command) -> bool {
        self.commands.is_enabled(command)
    }

    /// Name of the attached print device, if any.
    pub fn printer_name(&self) -> Option<&str> {
        self.printer.as_deref().map(|p| p.name())
    }

    /// The dialog currently awaiting an answer.
    pub fn pending_prompt(&self) -> Option<&Prompt> {
        self.pending.as_ref()
    }

    /// Runs the handler registered for `command`.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        if let Some(prompt) = &self.pending {
            tracing::debug!("Ignoring {:?} while {:?} is open", command, prompt);
            return Outcome::Ignored;
        }

        match self.commands.handler(command) {
            Some(handler) => {
                tracing::debug!("Dispatching {:?}", command);
                handler(self)
            }
            None => {
                tracing::debug!("{:?} is disabled", command);
                Outcome::Disabled(command)
            }
        }
    }

    /// Completes the pending prompt with the user's answer.
    pub fn answer(&mut self, answer: Answer) -> Outcome {
        let Some(prompt) = self.pending.take() else {
            tracing::warn!("Answer {:?} with no dialog open", answer);
            return Outcome::Ignored;
        };

        match (prompt, answer) {
            (Prompt::OpenPath | Prompt::SavePath(_), Answer::Path(None))
            | (Prompt::Font(_), Answer::Font(None))
            | (Prompt::Print(_), Answer::Print(None)) => {
                tracing::debug!("Dialog cancelled");
                Outcome::Cancelled
            }
            (Prompt::OpenPath, Answer::Path(Some(path))) => self.open_path(&path),
            (Prompt::SavePath(_), Answer::Path(Some(path))) => self.save_to(path),
            (Prompt::Font(_), Answer::Font(Some(font))) => {
                let font = font.clamped();
                let message = format!("Font: {}", font.describe());
                self.surface.set_font(font);
                Outcome::done(message)
            }
            (Prompt::Print(_), Answer::Print(Some(job))) => self.print_job(&job),
            (prompt, answer) => {
                tracing::warn!("Answer {:?} does not match {:?}", answer, prompt);
                self.pending = Some(prompt);
                Outcome::Ignored
            }
        }
    }

    fn prompt(&mut self, prompt: Prompt) -> Outcome {
        self.pending = Some(prompt.clone());
        Outcome::Prompt(prompt)
    }

    pub fn new_document(&mut self) -> Outcome {
        self.document.clear();
        self.surface.set_text("");
        Outcome::done("New document")
    }

    pub fn open(&mut self) -> Outcome {
        self.prompt(Prompt::OpenPath)
    }

    /// Loads `path` into the surface. On failure nothing changes.
    pub fn open_path(&mut self, path: &Path) -> Outcome {
        match document::read_text(path) {
            Ok(text) => {
                self.surface.set_text(&text);
                self.document.set_path(path);
                tracing::info!("Opened {}", path.display());
                Outcome::done(format!("Opened: {}", path.display()))
            }
            Err(e) => Outcome::warning(e),
        }
    }

    pub fn save(&mut self) -> Outcome {
        match self.document.path() {
            Some(path) => {
                let path = path.to_path_buf();
                self.save_to(path)
            }
            None => self.prompt(Prompt::SavePath(SaveMode::Save)),
        }
    }

    pub fn save_as(&mut self) -> Outcome {
        self.prompt(Prompt::SavePath(SaveMode::SaveAs))
    }

    /// Writes the surface text to `path` and adopts it on success.
    fn save_to(&mut self, path: PathBuf) -> Outcome {
        match document::write_text(&path, &self.surface.text()) {
            Ok(()) => {
                tracing::info!("Saved {}", path.display());
                let message = format!("Saved: {}", path.display());
                self.document.set_path(path);
                Outcome::done(message)
            }
            Err(e) => Outcome::warning(e),
        }
    }

    pub fn print(&mut self) -> Outcome {
        let title = self
            .document
            .path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());
        self.prompt(Prompt::Print(PrintJob::new(title)))
    }

    fn print_job(&mut self, job: &PrintJob) -> Outcome {
        let Some(printer) = self.printer.as_mut() else {
            return Outcome::warning(PrintError::Unavailable);
        };
        match printer.print(job, &self.surface.text()) {
            Ok(()) => Outcome::done(format!("Sent \"{}\" to {}", job.title, printer.name())),
            Err(e) => Outcome::warning(e),
        }
    }

    pub fn exit(&mut self) -> Outcome {
        tracing::info!("Exit requested");
        Outcome::Exit
    }

    pub fn copy(&mut self) -> Outcome {
        if self.surface.copy() {
            Outcome::done("Copied")
        } else {
            Outcome::done("Nothing selected")
        }
    }

    pub fn cut(&mut self) -> Outcome {
        if self.surface.cut() {
            Outcome::done("Cut")
        } else {
            Outcome::done("Nothing selected")
        }
    }

    pub fn paste(&mut self) -> Outcome {
        if self.surface.paste() {
            Outcome::done("Pasted")
        } else {
            Outcome::done("Clipboard is empty")
        }
    }

    pub fn undo(&mut self) -> Outcome {
        if self.surface.undo() {
            Outcome::done("Undo")
        } else {
            Outcome::done("Nothing to undo")
        }
    }

    pub fn redo(&mut self) -> Outcome {
        if self.surface.redo() {
            Outcome::done("Redo")
        } else {
            Outcome::done("Nothing to redo")
        }
    }

    pub fn select_font(&mut self) -> Outcome {
        let current = self.surface.font().clone();
        self.prompt(Prompt::Font(current))
    }

    pub fn toggle_bold(&mut self) -> Outcome {
        self.toggle_style("Bold", |font| &mut font.bold)
    }

    pub fn toggle_underline(&mut self) -> Outcome {
        self.toggle_style("Underline", |font| &mut font.underline)
    }

    pub fn toggle_italic(&mut self) -> Outcome {
        self.toggle_style("Italic", |font| &mut font.italic)
    }

    fn toggle_style(&mut self, name: &str, flag: fn(&mut FontSpec) -> &mut bool) -> Outcome {
        let mut font = self.surface.font().clone();
        let on = {
            let flag = flag(&mut font);
            *flag = !*flag;
            *flag
        };
        self.surface.set_font(font);
        Outcome::done(format!("{} {}", name, if on { "on" } else { "off" }))
    }

    pub fn about(&mut self) -> Outcome {
        Outcome::About(AboutInfo::current())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory surface with snapshot undo and a private clipboard.
    #[derive(Default)]
    pub struct MemorySurface {
        pub text: String,
        pub selection: Option<String>,
        pub clipboard: Option<String>,
        pub font: FontSpec,
        undo: Vec<String>,
        redo: Vec<String>,
    }

    impl MemorySurface {
        /// Simulates typing: snapshot, then replace.
        pub fn edit(&mut self, text: &str) {
            self.undo.push(std::mem::take(&mut self.text));
            self.redo.clear();
            self.text = text.to_string();
        }
    }

    impl TextSurface for MemorySurface {
        fn text(&self) -> String {
            self.text.clone()
        }

        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
            self.undo.clear();
            self.redo.clear();
        }

        fn undo(&mut self) -> bool {
            match self.undo.pop() {
                Some(prev) => {
                    self.redo.push(std::mem::replace(&mut self.text, prev));
                    true
                }
                None => false,
            }
        }

        fn redo(&mut self) -> bool {
            match self.redo.pop() {
                Some(next) => {
                    self.undo.push(std::mem::replace(&mut self.text, next));
                    true
                }
                None => false,
            }
        }

        fn copy(&mut self) -> bool {
            match &self.selection {
                Some(sel) => {
                    self.clipboard = Some(sel.clone());
                    true
                }
                None => false,
            }
        }

        fn cut(&mut self) -> bool {
            match self.selection.take() {
                Some(sel) => {
                    let rest = self.text.replacen(&sel, "", 1);
                    self.edit(&rest);
                    self.clipboard = Some(sel);
                    true
                }
                None => false,
            }
        }

        fn paste(&mut self) -> bool {
            match self.clipboard.clone() {
                Some(clip) => {
                    let text = format!("{}{}", self.text, clip);
                    self.edit(&text);
                    true
                }
                None => false,
            }
        }

        fn font(&self) -> &FontSpec {
            &self.font
        }

        fn set_font(&mut self, font: FontSpec) {
            self.font = font;
        }
    }

    /// Records every job it is asked to print.
    #[derive(Clone, Default)]
    struct RecordingPrinter {
        printed: Rc<RefCell<Vec<(PrintJob, String)>>>,
    }

    impl Printer for RecordingPrinter {
        fn name(&self) -> &str {
            "recorder"
        }

        fn print(&mut self, job: &PrintJob, text: &str) -> Result<(), PrintError> {
            self.printed.borrow_mut().push((job.clone(), text.to_string()));
            Ok(())
        }
    }

    fn window() -> EditorWindow<MemorySurface> {
        EditorWindow::new(MemorySurface::default(), Capabilities::all())
    }

    fn is_warning(outcome: &Outcome) -> bool {
        matches!(outcome, Outcome::Warning { .. })
    }

    #[test]
    fn test_new_document_clears_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "contents").unwrap();

        let mut win = window();
        win.open_path(&path);
        assert_eq!(win.surface().text, "contents");

        win.dispatch(Command::New);
        assert_eq!(win.surface().text, "");
        assert!(win.document().path().is_none());
        assert_eq!(win.title(), document::APP_NAME);
    }

    #[test]
    fn test_open_prompts_and_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "héllo\nwörld\n").unwrap();

        let mut win = window();
        assert_eq!(win.dispatch(Command::Open), Outcome::Prompt(Prompt::OpenPath));

        let outcome = win.answer(Answer::Path(Some(path.clone())));
        assert!(matches!(outcome, Outcome::Done(_)));
        assert_eq!(win.surface().text, "héllo\nwörld\n");
        assert_eq!(win.document().path(), Some(path.as_path()));
        assert_eq!(win.title(), path.display().to_string());
    }

    #[test]
    fn test_open_missing_file_warns_and_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut win = window();
        win.surface_mut().text = "unsaved work".to_string();

        win.dispatch(Command::Open);
        let outcome = win.answer(Answer::Path(Some(dir.path().join("missing.txt"))));

        match outcome {
            Outcome::Warning { message, .. } => assert!(message.starts_with("Cannot open file:")),
            other => panic!("expected warning, got {:?}", other),
        }
        assert_eq!(win.surface().text, "unsaved work");
        assert!(win.document().path().is_none());
        assert_eq!(win.title(), document::APP_NAME);
    }

    #[test]
    fn test_cancelled_open_changes_nothing() {
        let mut win = window();
        win.surface_mut().text = "keep".to_string();

        win.dispatch(Command::Open);
        assert_eq!(win.answer(Answer::Path(None)), Outcome::Cancelled);
        assert_eq!(win.surface().text, "keep");
        assert!(win.pending_prompt().is_none());
    }

    #[test]
    fn test_save_prompts_once_then_reuses_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let mut win = window();
        win.surface_mut().text = "first".to_string();

        assert_eq!(
            win.dispatch(Command::Save),
            Outcome::Prompt(Prompt::SavePath(SaveMode::Save))
        );
        assert!(matches!(
            win.answer(Answer::Path(Some(path.clone()))),
            Outcome::Done(_)
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

        win.surface_mut().text = "second".to_string();
        assert!(matches!(win.dispatch(Command::Save), Outcome::Done(_)));
        assert!(win.pending_prompt().is_none());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert_eq!(win.title(), path.display().to_string());
    }

    #[test]
    fn test_cancelled_save_keeps_document_untitled() {
        let mut win = window();
        win.dispatch(Command::Save);
        assert_eq!(win.answer(Answer::Path(None)), Outcome::Cancelled);
        assert!(win.document().is_untitled());

        // Still untitled, so the next save asks again.
        assert!(matches!(win.dispatch(Command::Save), Outcome::Prompt(_)));
    }

    #[test]
    fn test_failed_save_does_not_adopt_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut win = window();

        win.dispatch(Command::Save);
        let outcome = win.answer(Answer::Path(Some(dir.path().to_path_buf())));
        assert!(is_warning(&outcome));
        assert!(win.document().is_untitled());
    }

    #[test]
    fn test_save_as_always_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");

        let mut win = window();
        win.surface_mut().text = "body".to_string();
        win.dispatch(Command::SaveAs);
        win.answer(Answer::Path(Some(first.clone())));
        assert_eq!(win.document().path(), Some(first.as_path()));

        assert_eq!(
            win.dispatch(Command::SaveAs),
            Outcome::Prompt(Prompt::SavePath(SaveMode::SaveAs))
        );
        win.answer(Answer::Path(Some(second.clone())));
        assert_eq!(win.document().path(), Some(second.as_path()));
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "body");
    }

    #[test]
    fn test_round_trip_through_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unicode.txt");
        // The editor widget normalizes "\r\n" to "\n", so only "\n" is used here.
        let text = "línea 1\n第二行\n🦀 crab\n\ntrailing\n";

        let mut win = window();
        win.surface_mut().text = text.to_string();
        win.dispatch(Command::SaveAs);
        win.answer(Answer::Path(Some(path.clone())));

        win.dispatch(Command::New);
        win.dispatch(Command::Open);
        win.answer(Answer::Path(Some(path)));
        assert_eq!(win.surface().text, text);
    }

    #[test]
    fn test_font_dialog() {
        let mut win = window();
        let original = win.surface().font.clone();

        match win.dispatch(Command::SelectFont) {
            Outcome::Prompt(Prompt::Font(current)) => assert_eq!(current, original),
            other => panic!("expected font prompt, got {:?}", other),
        }
        assert_eq!(win.answer(Answer::Font(None)), Outcome::Cancelled);
        assert_eq!(win.surface().font, original);

        let chosen = FontSpec::default()
            .with_family(crate::font::FontFamily::Serif)
            .with_size(20.0);
        win.dispatch(Command::SelectFont);
        win.answer(Answer::Font(Some(chosen.clone())));
        assert_eq!(win.surface().font, chosen);
    }

    #[test]
    fn test_style_toggles() {
        let mut win = window();
        win.dispatch(Command::Bold);
        win.dispatch(Command::Italic);
        win.dispatch(Command::Underline);
        win.dispatch(Command::Italic);

        let font = &win.surface().font;
        assert!(font.bold);
        assert!(!font.italic);
        assert!(font.underline);
    }

    #[test]
    fn test_commands_ignored_while_prompt_open() {
        let mut win = window();
        win.surface_mut().text = "text".to_string();
        win.dispatch(Command::Open);

        assert_eq!(win.dispatch(Command::New), Outcome::Ignored);
        assert_eq!(win.surface().text, "text");
    }

    #[test]
    fn test_mismatched_answer_keeps_prompt() {
        let mut win = window();
        win.dispatch(Command::Open);
        assert_eq!(
            win.answer(Answer::Font(Some(FontSpec::default()))),
            Outcome::Ignored
        );
        assert_eq!(win.pending_prompt(), Some(&Prompt::OpenPath));
    }

    #[test]
    fn test_cancel_of_other_dialog_keeps_prompt() {
        let mut win = window();
        win.dispatch(Command::Open);
        assert_eq!(win.answer(Answer::Font(None)), Outcome::Ignored);
        assert_eq!(win.answer(Answer::Print(None)), Outcome::Ignored);
        assert_eq!(win.pending_prompt(), Some(&Prompt::OpenPath));

        assert_eq!(win.answer(Answer::Path(None)), Outcome::Cancelled);
        assert!(win.pending_prompt().is_none());
    }

    #[test]
    fn test_answer_without_prompt() {
        let mut win = window();
        assert_eq!(win.answer(Answer::Path(None)), Outcome::Ignored);
    }

    #[test]
    fn test_undo_redo_delegate_to_surface() {
        let mut win = window();
        win.surface_mut().edit("one");
        win.surface_mut().edit("two");

        win.dispatch(Command::Undo);
        assert_eq!(win.surface().text, "one");
        win.dispatch(Command::Redo);
        assert_eq!(win.surface().text, "two");
        assert_eq!(win.dispatch(Command::Redo), Outcome::Done("Nothing to redo".into()));
    }

    #[test]
    fn test_clipboard_commands() {
        let mut win = window();
        win.surface_mut().text = "hello world".to_string();
        win.surface_mut().selection = Some(" world".to_string());

        win.dispatch(Command::Cut);
        assert_eq!(win.surface().text, "hello");
        win.dispatch(Command::Paste);
        assert_eq!(win.surface().text, "hello world");
        assert_eq!(win.dispatch(Command::Copy), Outcome::Done("Nothing selected".into()));
    }

    #[test]
    fn test_clipboard_disabled_without_capability() {
        let caps = Capabilities {
            printing: true,
            clipboard: false,
        };
        let mut win = EditorWindow::new(MemorySurface::default(), caps);
        win.surface_mut().clipboard = Some("clip".to_string());

        assert_eq!(win.dispatch(Command::Paste), Outcome::Disabled(Command::Paste));
        assert_eq!(win.surface().text, "");
        assert!(!win.is_enabled(Command::Copy));
    }

    #[test]
    fn test_print_sends_text_to_printer() {
        let printer = RecordingPrinter::default();
        let printed = printer.printed.clone();
        let mut win = window().with_printer(Box::new(printer));
        win.surface_mut().text = "print me".to_string();

        let job = match win.dispatch(Command::Print) {
            Outcome::Prompt(Prompt::Print(job)) => job,
            other => panic!("expected print prompt, got {:?}", other),
        };
        assert_eq!(job.title, "Untitled");

        assert!(matches!(win.answer(Answer::Print(Some(job))), Outcome::Done(_)));
        let printed = printed.borrow();
        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0].1, "print me");
    }

    #[test]
    fn test_cancelled_print_produces_no_output() {
        let printer = RecordingPrinter::default();
        let printed = printer.printed.clone();
        let mut win = window().with_printer(Box::new(printer));

        win.dispatch(Command::Print);
        assert_eq!(win.answer(Answer::Print(None)), Outcome::Cancelled);
        assert!(printed.borrow().is_empty());
    }

    #[test]
    fn test_print_without_device_warns() {
        let mut win = window();
        win.dispatch(Command::Print);
        let outcome = win.answer(Answer::Print(Some(PrintJob::new("x"))));
        assert!(is_warning(&outcome));
    }

    #[test]
    fn test_print_disabled_without_capability() {
        let mut win = EditorWindow::new(MemorySurface::default(), Capabilities::none());
        assert_eq!(win.dispatch(Command::Print), Outcome::Disabled(Command::Print));
        assert!(win.pending_prompt().is_none());
    }

    #[test]
    fn test_exit_and_about() {
        let mut win = window();
        assert_eq!(win.dispatch(Command::Exit), Outcome::Exit);
        match win.dispatch(Command::About) {
            Outcome::About(info) => assert_eq!(info.name, "Quill"),
            other => panic!("expected about, got {:?}", other),
        }
    }
}
