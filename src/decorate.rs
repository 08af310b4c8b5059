//! # Call Wrappers
//!
//! Higher-order helpers on [`Logger`] that wrap a function and log each of
//! its calls. The returned closure has the same signature as the wrapped
//! function: it takes the argument tuple and returns the function's result.
//!
//! - [`Logger::pref`] reports only the elapsed time:
//!
//!   ```text
//!   PREF TIME: parse: 0.05012 sec(s)
//!   ```
//!
//! - [`Logger::log_func`] reports the result, the elapsed time and the
//!   arguments:
//!
//!   ```text
//!   FUNCTION: sigma => 499500 | in 0.00004 sec(s)
//!   INFO: args   = [1000]
//!         kwargs = {}
//!   ```
//!
//! Both resolve the logger's active level at call time, so switching the
//! level affects wrappers that already exist.
//!
//! ## Failure Handling
//!
//! A failure while logging a call (unknown level, bad color, file policy,
//! I/O) is reported on standard error and otherwise ignored. The wrapped
//! function has already run by then, and its result is always returned to
//! the caller unchanged.
//!
//! ## Usage Example
//!
//! ```rust
//! use levelog::{CallOptions, Logger, LoggerOptions, SharedRegistry};
//!
//! # fn main() -> levelog::Result<()> {
//! let logger = Logger::new(SharedRegistry::new(), "DEFAULT", LoggerOptions::default())?;
//!
//! let mut sigma = logger.log_func("sigma", CallOptions::detailed(), |(n,): (u64,)| {
//!     (0..n).sum::<u64>()
//! });
//! assert_eq!(sigma((1000,)), 499500);
//! # Ok(())
//! # }
//! ```

use colored::Colorize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::args::{CallArgs, CallArguments, Displayable};
use crate::defaults;
use crate::error::{LoggerError, Result};
use crate::logger::Logger;

/// Options for [`Logger::log_func`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Log to this file instead of the logger's default sink
    pub file: Option<PathBuf>,

    /// Always include elapsed time and argument detail, whatever the
    /// active level says
    pub detailed: bool,
}

impl CallOptions {
    pub fn detailed() -> Self {
        Self {
            detailed: true,
            ..Self::default()
        }
    }

    pub fn to_file(file: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(file.into()),
            ..Self::default()
        }
    }
}

/// Elapsed seconds with five decimal places, e.g. `0.05012`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!(
        "{:.*}",
        defaults::ELAPSED_PRECISION,
        elapsed.as_secs_f64()
    )
}

fn report_failure(name: &str, err: &LoggerError) {
    eprintln!(
        "{} {}: {}",
        "failed to log call of".red(),
        name,
        err
    );
}

impl Logger {
    /// Wrap `func` so that each call logs its elapsed time.
    ///
    /// Nothing is logged while the active level has `show_pref_time`
    /// disabled. The line goes to `file` if given, else to the default
    /// sink.
    pub fn pref<'a, A, R, F>(
        &'a self,
        name: impl Into<String>,
        file: Option<PathBuf>,
        mut func: F,
    ) -> impl FnMut(A) -> R + 'a
    where
        F: FnMut(A) -> R + 'a,
    {
        let name = name.into();
        move |args: A| {
            let start = Instant::now();
            let value = func(args);
            let elapsed = start.elapsed();

            if let Err(err) = self.log_pref(&name, elapsed, file.as_deref()) {
                report_failure(&name, &err);
            }
            value
        }
    }

    fn log_pref(&self, name: &str, elapsed: Duration, file: Option<&Path>) -> Result<()> {
        if !self.active_level()?.show_pref_time() {
            return Ok(());
        }
        let msg = format!("PREF TIME: {}: {} sec(s)", name, format_elapsed(elapsed));
        self.log_with(&msg, file, true)
    }

    /// Wrap `func` so that each call logs its result, elapsed time and
    /// arguments.
    ///
    /// The elapsed time is included when the active level has
    /// `show_pref_time` set or the call is `detailed`. The argument block is
    /// omitted when the active level is `simplified`, unless the call is
    /// `detailed`.
    ///
    /// Arguments are rendered before the call, since `func` takes them by
    /// value.
    pub fn log_func<'a, A, R, F>(
        &'a self,
        name: impl Into<String>,
        options: CallOptions,
        mut func: F,
    ) -> impl FnMut(A) -> R + 'a
    where
        A: CallArguments,
        R: Displayable,
        F: FnMut(A) -> R + 'a,
    {
        let name = name.into();
        move |args: A| {
            let call = args.call_args();
            let start = Instant::now();
            let value = func(args);
            let elapsed = start.elapsed();

            if let Err(err) = self.log_call(&name, &call, &value, elapsed, &options) {
                report_failure(&name, &err);
            }
            value
        }
    }

    fn log_call(
        &self,
        name: &str,
        call: &CallArgs,
        value: &dyn Displayable,
        elapsed: Duration,
        options: &CallOptions,
    ) -> Result<()> {
        let msg = self.describe_call(name, call, value, elapsed, options.detailed)?;
        self.log_with(&msg, options.file.as_deref(), false)
    }

    /// Build the call report logged by [`log_func`](Self::log_func).
    pub(crate) fn describe_call(
        &self,
        name: &str,
        call: &CallArgs,
        value: &dyn Displayable,
        elapsed: Duration,
        detailed: bool,
    ) -> Result<String> {
        let level = self.active_level()?;

        let mut msg = format!("FUNCTION: {} => {}", name, value.to_arg_value().plain());
        if level.show_pref_time() || detailed {
            let _ = write!(msg, " | in {} sec(s)", format_elapsed(elapsed));
        }
        if !level.simplified() || detailed {
            let _ = write!(
                msg,
                "\nINFO: args   = [{}]\n      kwargs = {{{}}}",
                call.positional(),
                call.keywords()
            );
            msg = self.formatter(&level).indent(&msg);
            msg.push('\n');
        }
        Ok(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Keyword;
    use crate::level::Level;
    use crate::logger::tests::test_logger;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(50)), "0.05000");
        assert_eq!(format_elapsed(Duration::from_micros(1_234_567)), "1.23457");
    }

    #[test]
    fn test_pref_logs_elapsed() {
        let (logger, capture) = test_logger(Level::new("P").with_show_time(false));
        let mut double = logger.pref("double", None, |x: i32| x * 2);

        assert_eq!(double(21), 42);
        let out = capture.plain();
        assert!(out.starts_with(" PREF TIME: double: 0.0"), "{out}");
        assert!(out.ends_with(" sec(s) \n"));
    }

    #[test]
    fn test_pref_silent_without_pref_time() {
        let (logger, capture) = test_logger(Level::new("P").with_show_pref_time(false));
        let mut double = logger.pref("double", None, |x: i32| x * 2);

        assert_eq!(double(4), 8);
        assert!(capture.contents().is_empty());
    }

    #[test]
    fn test_describe_call_detailed() {
        let (logger, _) = test_logger(
            Level::new("C")
                .with_prefix(">>")
                .with_show_time(false)
                .with_simplified(true),
        );
        let call = (3, "x", Keyword::new("k", true)).call_args();
        let msg = logger
            .describe_call("f", &call, &7, Duration::from_millis(2), true)
            .unwrap();

        let pad = " ".repeat(3);
        assert_eq!(
            msg,
            format!(
                "FUNCTION: f => 7 | in 0.00200 sec(s)\n{pad}INFO: args   = [3, \"x\"]\n{pad}      kwargs = {{k: true}}\n"
            )
        );
    }

    #[test]
    fn test_describe_call_simplified() {
        let (logger, _) = test_logger(
            Level::new("C")
                .with_show_pref_time(false)
                .with_simplified(true),
        );
        let msg = logger
            .describe_call("f", &CallArgs::default(), &"ok", Duration::ZERO, false)
            .unwrap();
        assert_eq!(msg, "FUNCTION: f => ok");
    }

    #[test]
    fn test_log_func_returns_value_and_logs() {
        let (logger, capture) = test_logger(Level::new("C").with_show_time(false));
        let mut add = logger.log_func("add", CallOptions::default(), |(a, b): (i32, i32)| a + b);

        assert_eq!(add((2, 3)), 5);
        let out = capture.plain();
        assert!(out.starts_with(" FUNCTION: add => 5 | in "));
        assert!(out.contains("\n INFO: args   = [2, 3]\n"));
        assert!(out.contains("\n       kwargs = {}"));
    }

    #[test]
    fn test_log_func_keeps_float_shape() {
        let (logger, capture) = test_logger(Level::new("C").with_show_time(false));
        let mut scale = logger.log_func(
            "scale",
            CallOptions::default(),
            |(values, factor): (Vec<f64>, Keyword<f64>)| -> Vec<f64> {
                values.iter().map(|v| v * *factor).collect()
            },
        );

        assert_eq!(scale((vec![1.0, 2.5], Keyword::new("factor", 2.0))), vec![2.0, 5.0]);
        let out = capture.plain();
        assert!(out.starts_with(" FUNCTION: scale => [2.0, 5.0] | in "), "{out}");
        assert!(out.contains("INFO: args   = [[1.0, 2.5]]\n"), "{out}");
        assert!(out.contains("kwargs = {factor: 2.0}"), "{out}");
    }

    #[test]
    fn test_log_func_failure_still_returns() {
        let (logger, capture) = test_logger(Level::new("BAD").with_color("not-a-color"));
        let mut add = logger.log_func("add", CallOptions::default(), |(a, b): (i32, i32)| a + b);

        assert_eq!(add((1, 1)), 2);
        assert!(capture.contents().is_empty());
    }

    #[test]
    fn test_level_switch_applies_to_existing_wrapper() {
        let (logger, capture) = test_logger(Level::new("LOUD").with_show_time(false));
        logger
            .add_level(Level::new("QUIET").with_show_pref_time(false))
            .unwrap();

        let mut noop = logger.pref("noop", None, |_: ()| ());
        logger.set_level("QUIET").unwrap();
        noop(());
        assert!(capture.contents().is_empty());

        logger.set_level("LOUD").unwrap();
        noop(());
        assert!(capture.plain().contains("PREF TIME: noop"));
    }
}
