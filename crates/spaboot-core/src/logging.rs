//! Tracing setup for the `spaboot` binary.
//!
//! Events go to `spaboot.log` under the XDG state home. `RUST_LOG` overrides
//! the default filter.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,spaboot=debug,spaboot_core=debug,spaboot_cli=debug";

/// Sink for a single event: the shared log file, or stderr for events whose
/// file handle could not be duplicated.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Location of the log file below a state home directory.
pub fn log_path(state_home: &Path) -> PathBuf {
    state_home.join("spaboot").join("spaboot.log")
}

/// Route tracing output to `~/.local/state/spaboot/spaboot.log`, appending.
///
/// Errors when the state directory or file cannot be created; the subscriber
/// is not installed in that case.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("spaboot")?;
    let log_file_path = log_path(&xdg_dirs.get_state_home());

    if let Some(dir) = log_file_path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .init();

    tracing::info!("spaboot logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Route tracing output to stderr. The CLI uses this when [`init_logging`]
/// could not open the log file.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
