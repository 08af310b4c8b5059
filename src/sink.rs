//! File sink with the "fresh file" creation policy.
//!
//! A logger configured with `new_file` refuses to append to a file that
//! already existed before it wrote anything, so a run never silently
//! continues a stale log left over from a previous run. Once the logger has
//! opened a file itself, later writes append freely, including to paths
//! that already exist.

use std::cell::Cell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::error::{LoggerError, Result};

/// Appends lines to log files on behalf of one logger.
#[derive(Debug)]
pub struct FileSink {
    new_file: bool,
    created: Cell<bool>,
}

impl FileSink {
    pub fn new(new_file: bool) -> Self {
        Self {
            new_file,
            created: Cell::new(false),
        }
    }

    /// Whether this sink refuses pre-existing files before its first write
    pub fn new_file(&self) -> bool {
        self.new_file
    }

    /// Whether this sink has opened a file yet
    pub fn has_written(&self) -> bool {
        self.created.get()
    }

    /// Append `text` and a newline to `path`, creating the file if needed.
    ///
    /// ## Errors
    /// - `FileAlreadyExists` if the policy requires a fresh file, `path`
    ///   exists and this sink has not opened any file yet
    /// - `Io` if the file cannot be opened or written
    pub fn append(&self, path: &Path, text: &str) -> Result<()> {
        if self.new_file && !self.created.get() && path.exists() {
            return Err(LoggerError::FileAlreadyExists {
                path: path.to_path_buf(),
            });
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LoggerError::io(path, e))?;
        if !self.created.replace(true) {
            debug!("Opened log file {}", path.display());
        }

        writeln!(file, "{}", text).map_err(|e| LoggerError::io(path, e))
    }
}
