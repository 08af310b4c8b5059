//! # Level Definitions
//!
//! A [`Level`] is a named formatting profile: the decoration wrapped around
//! each message, its colors, and which timing information the logger and
//! its call wrappers emit while the level is active.
//!
//! Levels are immutable once built. They are assembled with a consuming
//! builder whose every field has a default, or deserialized from JSON with
//! the same defaults:
//!
//! ```rust
//! use levelog::Level;
//!
//! let level = Level::new("MSG")
//!     .with_prefix(">>> ")
//!     .with_suffix("<<<")
//!     .with_color("red")
//!     .with_background("yellow");
//!
//! assert_eq!(level.name(), "MSG");
//! assert!(level.show_time());
//!
//! let parsed: Level = serde_json::from_str(r#"{"name": "MSG", "color": "red"}"#).unwrap();
//! assert_eq!(parsed.color(), "red");
//! assert_eq!(parsed.background_color(), None);
//! ```

use serde::{Deserialize, Serialize};

use crate::defaults;

/// A named formatting and behavior profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    name: String,
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
    #[serde(default = "default_color")]
    color: String,
    #[serde(default, alias = "background")]
    background_color: Option<String>,
    #[serde(default = "enabled")]
    show_time: bool,
    #[serde(default = "enabled")]
    show_pref_time: bool,
    #[serde(default)]
    simplified: bool,
}

fn default_color() -> String {
    defaults::COLOR.to_string()
}

fn enabled() -> bool {
    true
}

impl Level {
    /// Create a level with default decoration: no prefix or suffix, white
    /// text, no background, wall-clock and elapsed time shown, full call
    /// detail.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: String::new(),
            suffix: String::new(),
            color: default_color(),
            background_color: None,
            show_time: true,
            show_pref_time: true,
            simplified: false,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Prepend `[HH:MM:SS] ` to every message
    pub fn with_show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Emit elapsed time from the call wrappers
    pub fn with_show_pref_time(mut self, show: bool) -> Self {
        self.show_pref_time = show;
        self
    }

    /// Omit argument detail from call logging unless a call is `detailed`
    pub fn with_simplified(mut self, simplified: bool) -> Self {
        self.simplified = simplified;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw prefix, as configured
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The raw suffix, as configured
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }

    pub fn show_time(&self) -> bool {
        self.show_time
    }

    pub fn show_pref_time(&self) -> bool {
        self.show_pref_time
    }

    pub fn simplified(&self) -> bool {
        self.simplified
    }

    /// The prefix with tab, newline and carriage-return replaced by spaces
    pub fn display_prefix(&self) -> String {
        normalize_whitespace(&self.prefix)
    }

    /// The suffix with tab, newline and carriage-return replaced by spaces
    pub fn display_suffix(&self) -> String {
        normalize_whitespace(&self.suffix)
    }
}

/// Replace every `\t`, `\n` and `\r` with a single space.
///
/// Decoration strings must never break the line structure of a message.
pub fn normalize_whitespace(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => ' ',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_defaults() {
        let level = Level::new("DEFAULT");
        assert_eq!(level.name(), "DEFAULT");
        assert_eq!(level.prefix(), "");
        assert_eq!(level.suffix(), "");
        assert_eq!(level.color(), "white");
        assert_eq!(level.background_color(), None);
        assert!(level.show_time());
        assert!(level.show_pref_time());
        assert!(!level.simplified());
    }

    #[test]
    fn test_level_builder() {
        let level = Level::new("MSG")
            .with_prefix(">>> ")
            .with_suffix("<<<")
            .with_color("red")
            .with_background("yellow")
            .with_show_time(false)
            .with_show_pref_time(false)
            .with_simplified(true);

        assert_eq!(level.prefix(), ">>> ");
        assert_eq!(level.suffix(), "<<<");
        assert_eq!(level.color(), "red");
        assert_eq!(level.background_color(), Some("yellow"));
        assert!(!level.show_time());
        assert!(!level.show_pref_time());
        assert!(level.simplified());
    }

    #[test]
    fn test_decoration_whitespace_normalized() {
        let level = Level::new("WS").with_prefix("a\tb\nc\rd").with_suffix("\n");
        assert_eq!(level.display_prefix(), "a b c d");
        assert_eq!(level.display_suffix(), " ");
        // the raw value is kept as configured
        assert_eq!(level.prefix(), "a\tb\nc\rd");
    }

    #[test]
    fn test_level_deserialize_defaults() {
        let level: Level = serde_json::from_str(
            r#"{"name": "WARN", "prefix": "! ", "background": "red", "show_time": false}"#,
        )
        .unwrap();

        assert_eq!(level.name(), "WARN");
        assert_eq!(level.prefix(), "! ");
        assert_eq!(level.color(), "white");
        assert_eq!(level.background_color(), Some("red"));
        assert!(!level.show_time());
        assert!(level.show_pref_time());
        assert!(!level.simplified());
    }

    #[test]
    fn test_level_deserialize_requires_name() {
        let result: std::result::Result<Level, _> = serde_json::from_str(r#"{"color": "red"}"#);
        assert!(result.is_err());
    }
}
