//! # levelog
//!
//! A small, configurable console and file logger built around named
//! formatting levels, with wrappers that log function calls.
//!
//! ## Architecture Overview
//!
//! The library is organized into several key modules:
//!
//! - `level`: The `Level` formatting profile (decoration, colors, timing flags)
//! - `registry`: The shared catalog of levels, seeded with `DEBUG` and `DEFAULT`
//! - `format`: Rendering of a message under a level, including indentation
//! - `logger`: The `Logger` session and its stdout/file dispatch
//! - `decorate`: Call wrappers that log elapsed time, results and arguments
//! - `args`: Best-effort textual rendering of call arguments
//! - `cli` and `logging`: Command-line options and tracing output of the binary
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use levelog::{CallOptions, Level, Logger, LoggerOptions, SharedRegistry};
//!
//! fn main() -> levelog::Result<()> {
//!     let registry = SharedRegistry::new();
//!     let logger = Logger::new(registry, "DEBUG", LoggerOptions::default())?;
//!     logger.set_new_level(
//!         Level::new("MSG")
//!             .with_prefix(">>> ")
//!             .with_suffix("<<<")
//!             .with_color("red")
//!             .with_background("yellow"),
//!     )?;
//!
//!     let mut sigma = logger.log_func("sigma", CallOptions::detailed(), |(n,): (u64,)| {
//!         (0..n).sum::<u64>()
//!     });
//!     sigma((1000,));
//!
//!     logger.log("done")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Execution Model
//!
//! Everything is synchronous and single-threaded. A `Logger` is not `Sync`;
//! the registry handle is cheap to clone and may be shared freely.

/// Call argument rendering
///
/// Defines the `Displayable` trait that picks the best textual form of a
/// value (quoted text, display form, debug form, or an opaque fallback),
/// and the tuple support used to describe a call's positional and keyword
/// arguments.
pub mod args;

/// Command-line interface of the `levelog` binary
pub mod cli;

/// Wall-clock source for level timestamps
pub mod clock;

/// Terminal color names and painting
pub mod color;

/// Function call wrappers
///
/// `Logger::pref` logs the elapsed time of each call; `Logger::log_func`
/// logs the result, elapsed time and arguments. Logging failures inside the
/// wrappers are reported on standard error and never change the wrapped
/// function's result.
pub mod decorate;

pub mod error;

/// Message rendering
///
/// Implements timestamp injection, prefix/suffix decoration, multi-line
/// indentation and colorization for a single level.
pub mod format;

/// Level definitions
pub mod level;

/// The logger session and its output dispatch
pub mod logger;

/// Tracing event formatting for the binary's own diagnostics
pub mod logging;

/// The shared level catalog
pub mod registry;

/// Log file appends and the fresh-file policy
pub mod sink;

pub use args::{ArgValue, CallArguments, Debugged, Displayable, Keyword, Opaque};
pub use clock::{Clock, FixedClock, SystemClock};
pub use decorate::CallOptions;
pub use error::{LoggerError, Result};
pub use format::MessageFormatter;
pub use level::Level;
pub use logger::{Logger, LoggerOptions};
pub use registry::{LevelRegistry, SharedRegistry};

/// The current version of levelog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    /// Level selected when none is requested
    pub const LEVEL: &str = "DEFAULT";

    /// Built-in level that renders in red
    pub const DEBUG_LEVEL: &str = "DEBUG";

    /// Text color of a level that does not choose one
    pub const COLOR: &str = "white";

    /// `chrono` format of the wall-clock timestamp
    pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

    /// Spaces a tab expands to when a multi-line message is re-indented
    pub const TAB_WIDTH: usize = 4;

    /// Decimal places of elapsed seconds in timing reports
    pub const ELAPSED_PRECISION: usize = 5;
}
