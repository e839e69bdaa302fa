//! File-backed tracing setup
//!
//! The TUI owns stdout and stderr while it runs, so log records go to a file.
//! The filter comes from `RUST_LOG` when set and defaults to `info`.

use crate::errors::VisualizerError;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Install a global subscriber appending to `log_path`.
///
/// Installing twice is harmless: the second subscriber is ignored.
pub fn init_file_logging(log_path: &Path) -> Result<(), VisualizerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|err| VisualizerError::Logging {
            path: log_path.to_path_buf(),
            message: err.to_string(),
        })?;
    let writer = Arc::new(Mutex::new(file));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(move || LogWriter::new(Arc::clone(&writer)))
        .try_init();
    Ok(())
}

/// Shared handle to the log file, one per formatted record
struct LogWriter {
    file: Arc<Mutex<File>>,
}

impl LogWriter {
    fn new(file: Arc<Mutex<File>>) -> Self {
        LogWriter { file }
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.flush()
    }
}
