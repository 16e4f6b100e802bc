//! Printing through the system print spooler.
//!
//! Plain text is piped to `lp` (CUPS / System V) or `lpr` (BSD) on standard
//! input. Whichever is found first on `PATH` wins, unless the config names a
//! program explicitly.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command as Process, Stdio};

/// A print request confirmed in the print dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    /// Destination printer. `None` prints to the system default.
    pub printer: Option<String>,
    pub copies: u32,
    /// Job title shown in the print queue
    pub title: String,
}

impl PrintJob {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            printer: None,
            copies: 1,
            title: title.into(),
        }
    }
}

/// A device that can print plain text.
pub trait Printer {
    /// Human readable name of the backend, for logs and the print dialog.
    fn name(&self) -> &str;

    fn print(&mut self, job: &PrintJob, text: &str) -> Result<(), PrintError>;
}

/// Print errors.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("Cannot print: no print spooler available")]
    Unavailable,

    #[error("Cannot print: failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot print: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot print: spooler exited with {status}: {stderr}")]
    Rejected { status: String, stderr: String },
}

/// Command-line dialect of the spooler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpoolerKind {
    /// `lp -d PRINTER -n COPIES -t TITLE`
    Lp,
    /// `lpr -P PRINTER -# COPIES -J TITLE`
    Lpr,
}

/// Prints by piping text into `lp` or `lpr`.
#[derive(Debug, Clone)]
pub struct SpoolerPrinter {
    program: PathBuf,
    kind: SpoolerKind,
    label: String,
}

impl SpoolerPrinter {
    /// Uses the configured program if any, otherwise searches `PATH`.
    pub fn from_config(program: Option<&Path>) -> Option<Self> {
        match program {
            Some(program) => Some(Self::from_program(program)),
            None => Self::detect(),
        }
    }

    /// Looks for `lp`, then `lpr`, on `PATH`.
    pub fn detect() -> Option<Self> {
        for name in ["lp", "lpr"] {
            if let Ok(path) = which::which(name) {
                tracing::debug!("Found print spooler: {}", path.display());
                return Some(Self::from_program(path));
            }
        }
        tracing::debug!("No print spooler found on PATH");
        None
    }

    /// Wraps an explicit program. The dialect is guessed from its file name.
    pub fn from_program(program: impl Into<PathBuf>) -> Self {
        let program = program.into();
        let label = program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| program.display().to_string());
        let kind = if label.starts_with("lpr") {
            SpoolerKind::Lpr
        } else {
            SpoolerKind::Lp
        };

        Self {
            program,
            kind,
            label,
        }
    }

    pub fn kind(&self) -> SpoolerKind {
        self.kind
    }

    /// Arguments passed to the spooler for `job`.
    pub fn args(&self, job: &PrintJob) -> Vec<String> {
        let (dest, copies, title) = match self.kind {
            SpoolerKind::Lp => ("-d", "-n", "-t"),
            SpoolerKind::Lpr => ("-P", "-#", "-J"),
        };

        let mut args = Vec::new();
        if let Some(printer) = job.printer.as_deref().filter(|p| !p.trim().is_empty()) {
            args.push(dest.to_string());
            args.push(printer.trim().to_string());
        }
        args.push(copies.to_string());
        args.push(job.copies.max(1).to_string());
        args.push(title.to_string());
        args.push(job.title.clone());
        args
    }
}

impl Printer for SpoolerPrinter {
    fn name(&self) -> &str {
        &self.label
    }

    fn print(&mut self, job: &PrintJob, text: &str) -> Result<(), PrintError> {
        let mut child = Process::new(&self.program)
            .args(self.args(job))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| PrintError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        // stdin is written on its own thread while `wait_with_output` drains stderr.
        let stdin = child.stdin.take();
        let data = text.as_bytes().to_vec();
        let writer = std::thread::spawn(move || -> std::io::Result<()> {
            if let Some(mut stdin) = stdin {
                stdin.write_all(&data)?;
            }
            Ok(())
        });

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked")));

        if !output.status.success() {
            return Err(PrintError::Rejected {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;

        tracing::info!("Sent {} bytes to {}", text.len(), self.label);
        Ok(())
    }
}
