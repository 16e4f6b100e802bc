use quill_core::{AboutInfo, FontSpec, PrintJob};

/// In-window modal dialogs.
#[derive(Debug, Clone)]
pub enum Modal {
    Font(FontPicker),
    Print(PrintDialog),
    About(AboutInfo),
}

/// Draft font being edited in the font picker.
#[derive(Debug, Clone)]
pub struct FontPicker {
    pub font: FontSpec,
}

/// Print dialog form state.
#[derive(Debug, Clone)]
pub struct PrintDialog {
    pub title: String,
    /// Spooler the job will go to
    pub device: String,
    pub printer_input: String,
    pub copies_input: String,
    pub error: Option<String>,
}

impl PrintDialog {
    pub fn new(job: PrintJob, device: impl Into<String>) -> Self {
        Self {
            title: job.title,
            device: device.into(),
            printer_input: job.printer.unwrap_or_default(),
            copies_input: job.copies.to_string(),
            error: None,
        }
    }

    /// Validates the form into a job.
    pub fn job(&self) -> Result<PrintJob, String> {
        let copies = match self.copies_input.trim().parse::<u32>() {
            Ok(n) if (1..=99).contains(&n) => n,
            _ => return Err("Copies must be a number from 1 to 99".to_string()),
        };
        let printer = self.printer_input.trim();

        Ok(PrintJob {
            printer: (!printer.is_empty()).then(|| printer.to_string()),
            copies,
            title: self.title.clone(),
        })
    }
}
