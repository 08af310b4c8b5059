//! # Message Formatting
//!
//! Turns a raw message and a resolved [`Level`] into the exact text a sink
//! emits. For a level with prefix `"[X] "`, no suffix and `show_time`
//! enabled, the message `"hello"` renders as:
//!
//! ```text
//! [X]  [14:03:59] hello
//! ^^^^ prefix
//!     ^ leading pad
//!      ^^^^^^^^^^^ timestamp
//!                 ^^^^^^ message + trailing pad
//! ```
//!
//! ## Rendering Steps
//!
//! 1. Prepend the timestamp when the level shows time.
//! 2. Pad with a leading space and, unless the message already ends with a
//!    newline, a trailing space. A trailing newline is dropped when the
//!    level has no suffix to put after it.
//! 3. Wrap in the level's prefix and suffix, whose tab, newline and
//!    carriage-return characters are replaced with spaces.
//! 4. Optionally colorize with the level's colors.
//!
//! The indentation pass ([`MessageFormatter::indent`]) is separate: the
//! logger applies it before rendering unless the caller opts out, and the
//! call-logging wrapper applies it to the call report it builds.
//!
//! ## Indentation
//!
//! Continuation lines of a multi-line message are shifted right so they
//! line up with the first character of the message body instead of column
//! zero. The offset is the prefix length plus the leading pad, plus the
//! timestamp length when the level shows time:
//!
//! ```text
//! >>>  [14:03:59] FUNCTION: sigma => 499500
//!                 INFO: args   = [1000]
//! ```

use crate::clock::Clock;
use crate::color;
use crate::defaults;
use crate::error::{LoggerError, Result};
use crate::level::Level;

/// Formats messages for one level at one instant.
///
/// The timestamp is taken once at construction, so indentation and
/// rendering through the same formatter always agree on its width.
#[derive(Debug, Clone)]
pub struct MessageFormatter<'a> {
    level: &'a Level,
    timestamp: Option<String>,
}

impl<'a> MessageFormatter<'a> {
    /// Create a formatter for `level`, reading the time from `clock` if the
    /// level shows it.
    pub fn new(level: &'a Level, clock: &dyn Clock) -> Self {
        let timestamp = if level.show_time() {
            Some(clock.timestamp())
        } else {
            None
        };
        Self { level, timestamp }
    }

    pub fn level(&self) -> &Level {
        self.level
    }

    /// The timestamp prefix this formatter will render, if any
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref()
    }

    /// Column at which the message body starts on the first line.
    pub fn body_column(&self) -> usize {
        let stamp = self.timestamp.as_deref().map_or(0, |t| t.chars().count());
        self.level.prefix().chars().count() + 1 + stamp
    }

    /// Align the continuation lines of a multi-line message under the
    /// message body.
    ///
    /// Single-line messages are returned unchanged. Otherwise every tab is
    /// expanded to four spaces, the first line is kept as is and each
    /// following line is prefixed with [`body_column`](Self::body_column)
    /// spaces.
    pub fn indent(&self, msg: &str) -> String {
        if !msg.contains('\n') {
            return msg.to_string();
        }

        let expanded = msg.replace('\t', &" ".repeat(defaults::TAB_WIDTH));
        let pad = " ".repeat(self.body_column());
        let mut lines = expanded.split('\n');

        let mut out = String::with_capacity(expanded.len() + pad.len() * 4);
        out.push_str(lines.next().unwrap_or_default());
        for line in lines {
            out.push('\n');
            out.push_str(&pad);
            out.push_str(line);
        }
        out
    }

    /// Render `msg` as a complete line, colorized if requested.
    ///
    /// ## Errors
    /// - `Formatting` if `colorize` is set and the level's color or
    ///   background color is unknown. Uncolored rendering never fails on
    ///   colors.
    pub fn render(&self, msg: &str, colorize: bool) -> Result<String> {
        let text = self.render_plain(msg);
        if !colorize {
            return Ok(text);
        }

        color::colorize(&text, self.level.color(), self.level.background_color()).map_err(
            |source| LoggerError::Formatting {
                color: self.level.color().to_string(),
                background: self.level.background_color().map(str::to_string),
                source,
            },
        )
    }

    fn render_plain(&self, msg: &str) -> String {
        let mut body = String::with_capacity(msg.len() + 16);
        body.push(' ');
        if let Some(stamp) = &self.timestamp {
            body.push_str(stamp);
        }
        body.push_str(msg);

        if !body.ends_with('\n') {
            body.push(' ');
        }
        if self.level.suffix().is_empty() && body.ends_with('\n') {
            body.pop();
        }

        let mut text = self.level.display_prefix();
        text.push_str(&body);
        text.push_str(&self.level.display_suffix());
        text
    }
}
