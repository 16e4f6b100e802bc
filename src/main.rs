//! # Quill - A Small Text Editor
//!
//! ```bash
//! # Run the editor
//! cargo run
//!
//! # Open a file
//! cargo run -- notes.txt
//!
//! # Use a specific config file
//! cargo run -- --config ./quill.toml
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use quill_core::Config;
use quill_ui::{Flags, run};

/// Quill - a small text editor
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// An explicit `--config` must load; otherwise fall back to the default location.
    fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display())),
            None => Ok(Config::load()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().as_str().to_lowercase()));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();

    tracing::info!("Starting Quill v{}", env!("CARGO_PKG_VERSION"));

    let config = args.load_config()?;

    let flags = Flags {
        file: args.file,
        config,
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["quill"]);
        assert!(args.file.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_args_with_file() {
        let args = Args::parse_from(["quill", "notes.txt"]);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn test_verbosity() {
        let args = Args::parse_from(["quill", "-vv"]);
        assert_eq!(args.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_explicit_config_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quill.toml");
        std::fs::write(&path, "[window]\nwidth = 640.0\n").unwrap();

        let args = Args::parse_from(["quill", "--config", path.to_str().unwrap()]);
        let config = args.load_config().unwrap();
        assert_eq!(config.window.width, 640.0);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let args = Args::parse_from(["quill", "-c", path.to_str().unwrap()]);
        assert!(args.load_config().is_err());
    }
}
