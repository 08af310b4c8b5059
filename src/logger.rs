//! # Logger
//!
//! A [`Logger`] is a logging session: it selects one active level from a
//! [`SharedRegistry`] by name and sends formatted lines either to a log file
//! or to the console.
//!
//! ## Dispatch
//!
//! Every call to [`Logger::log_with`] runs the same pipeline:
//!
//! 1. Resolve the active level in the registry. The level is looked up on
//!    every call, so the active level can be switched at any time, even
//!    while call wrappers created by this logger are alive.
//! 2. Re-indent multi-line messages, unless the caller opts out.
//! 3. Render the line: plain for files, colorized for the console.
//! 4. Append to the explicit file, else the configured file, else write to
//!    the console.
//!
//! ## Usage Example
//!
//! ```rust
//! use levelog::{Level, Logger, LoggerOptions, SharedRegistry};
//!
//! # fn main() -> levelog::Result<()> {
//! let registry = SharedRegistry::new();
//! let logger = Logger::new(registry.clone(), "DEBUG", LoggerOptions::default())?;
//! assert_eq!(logger.to_string(), "Logger level: DEBUG, to file: standard output");
//!
//! logger.set_new_level(Level::new("QUIET").with_show_time(false))?;
//! assert_eq!(logger.level(), "QUIET");
//! assert!(registry.contains("QUIET"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Interior State
//!
//! All methods take `&self`. The active level name and the file sink's
//! "has written" flag live in `RefCell`/`Cell`, so a logger can be borrowed
//! by the closures returned from [`Logger::pref`] and [`Logger::log_func`]
//! while the wrapped functions log through it too. A logger is therefore
//! not `Sync`; share the registry between threads, not the logger.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::clock::{Clock, SystemClock};
use crate::error::{LoggerError, Result};
use crate::format::MessageFormatter;
use crate::level::Level;
use crate::registry::SharedRegistry;
use crate::sink::FileSink;

/// Sink configuration for a [`Logger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerOptions {
    /// Default log file. `None` writes to standard output.
    pub file: Option<PathBuf>,

    /// Refuse to append to a file that existed before this logger's first
    /// write.
    pub new_file: bool,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            file: None,
            new_file: true,
        }
    }
}

impl LoggerOptions {
    /// Log to `path` with the default fresh-file policy
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            ..Self::default()
        }
    }
}

/// A logging session bound to one active level.
pub struct Logger {
    registry: SharedRegistry,
    level: RefCell<String>,
    file: Option<PathBuf>,
    sink: FileSink,
    clock: Box<dyn Clock>,
    console: RefCell<Box<dyn Write>>,
}

impl Logger {
    /// Create a logger whose active level is an already registered level.
    ///
    /// ## Errors
    /// - `UndefinedLevel` if `level` is not in the registry
    pub fn new(registry: SharedRegistry, level: &str, options: LoggerOptions) -> Result<Self> {
        if !registry.contains(level) {
            return Err(LoggerError::undefined_level(level));
        }
        Ok(Self::build(registry, level.to_string(), options))
    }

    /// Register `level` and create a logger that uses it.
    ///
    /// ## Errors
    /// - `DuplicateLevel` if a level with the same name is already registered
    pub fn with_level(registry: SharedRegistry, level: Level, options: LoggerOptions) -> Result<Self> {
        let name = level.name().to_string();
        registry.add_level(level)?;
        Ok(Self::build(registry, name, options))
    }

    fn build(registry: SharedRegistry, level: String, options: LoggerOptions) -> Self {
        Self {
            registry,
            level: RefCell::new(level),
            file: options.file.filter(|p| !is_empty_path(p)),
            sink: FileSink::new(options.new_file),
            clock: Box::new(SystemClock),
            console: RefCell::new(Box::new(io::stdout())),
        }
    }

    /// Replace the wall-clock source used for timestamps
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the console writer (standard output by default)
    pub fn with_console(mut self, console: impl Write + 'static) -> Self {
        self.console = RefCell::new(Box::new(console));
        self
    }

    /// Name of the active level
    pub fn level(&self) -> String {
        self.level.borrow().clone()
    }

    /// The default log file, if any
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn new_file(&self) -> bool {
        self.sink.new_file()
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Resolve the active level in the registry
    pub fn active_level(&self) -> Result<Level> {
        self.registry.resolve(&self.level.borrow())
    }

    /// Register a level in this logger's registry without selecting it
    pub fn add_level(&self, level: Level) -> Result<()> {
        self.registry.add_level(level)
    }

    /// Switch to a registered level.
    ///
    /// ## Errors
    /// - `UndefinedLevel` if `name` is not registered; the active level is
    ///   left unchanged
    pub fn set_level(&self, name: &str) -> Result<()> {
        if !self.registry.contains(name) {
            return Err(LoggerError::undefined_level(name));
        }
        *self.level.borrow_mut() = name.to_string();
        Ok(())
    }

    /// Register `level` and switch to it.
    ///
    /// ## Errors
    /// - `DuplicateLevel` if the name is taken; the active level is left
    ///   unchanged
    pub fn set_new_level(&self, level: Level) -> Result<()> {
        let name = level.name().to_string();
        self.registry.add_level(level)?;
        *self.level.borrow_mut() = name;
        Ok(())
    }

    /// A formatter for `level` at the current time
    pub(crate) fn formatter<'a>(&self, level: &'a Level) -> MessageFormatter<'a> {
        MessageFormatter::new(level, self.clock.as_ref())
    }

    /// Render `msg` with the active level, without indentation or output
    pub fn format(&self, msg: &str, colorize: bool) -> Result<String> {
        let level = self.active_level()?;
        self.formatter(&level).render(msg, colorize)
    }

    /// Log `msg` to the default sink.
    pub fn log(&self, msg: &str) -> Result<()> {
        self.log_with(msg, None, true)
    }

    /// Log `msg` to `file`, overriding the default sink.
    pub fn log_to(&self, msg: &str, file: impl AsRef<Path>) -> Result<()> {
        self.log_with(msg, Some(file.as_ref()), true)
    }

    /// Log `msg`, optionally to an explicit file and without indentation.
    ///
    /// ## Parameters
    /// - `msg`: The message; may span several lines
    /// - `file`: Target file, overriding the logger's default file
    /// - `indent`: Align continuation lines under the message body
    ///
    /// ## Errors
    /// - `UndefinedLevel` if the active level is no longer resolvable
    /// - `Formatting` when writing to the console with an unknown color
    /// - `FileAlreadyExists`, `Io` or `Console` from the sink
    pub fn log_with(&self, msg: &str, file: Option<&Path>, indent: bool) -> Result<()> {
        let level = self.active_level()?;
        let formatter = self.formatter(&level);

        let indented;
        let msg = if indent {
            indented = formatter.indent(msg);
            indented.as_str()
        } else {
            msg
        };

        let file = file.filter(|p| !is_empty_path(p));
        match file.or(self.file.as_deref()) {
            Some(path) => {
                let text = formatter.render(msg, false)?;
                self.sink.append(path, &text)
            }
            None => {
                let text = formatter.render(msg, true)?;
                let mut console = self.console.borrow_mut();
                writeln!(console, "{}", text)
                    .and_then(|_| console.flush())
                    .map_err(LoggerError::Console)
            }
        }
    }
}

/// An empty path means standard output, the same as no path.
pub(crate) fn is_empty_path(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(path) => write!(
                f,
                "Logger level: {}, to file: {}",
                self.level.borrow(),
                path.display()
            ),
            None => write!(
                f,
                "Logger level: {}, to file: standard output",
                self.level.borrow()
            ),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self
            .file
            .as_ref()
            .map_or_else(|| "None".to_string(), |p| p.display().to_string());
        let new_file = if self.sink.new_file() { "True" } else { "False" };
        write!(
            f,
            "Logger(level={}, file={}, new_file={})",
            self.level.borrow(),
            file,
            new_file
        )
    }
}
