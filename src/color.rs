//! Terminal colorization.
//!
//! Thin seam over the `colored` crate. Levels store colors by symbolic name
//! so they can be declared in configuration files; this module resolves
//! those names and paints text with them.
//!
//! Whether escape sequences are actually emitted is decided by `colored`'s
//! global control (tty detection, `NO_COLOR`, `CLICOLOR_FORCE` and
//! [`colored::control::set_override`]).

use colored::{Color, Colorize};
use std::fmt;

/// A color name that does not map to any terminal color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor {
    name: String,
}

impl UnknownColor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name that failed to resolve
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color '{}'", self.name)
    }
}

impl std::error::Error for UnknownColor {}

/// Resolve a symbolic color name.
///
/// Names are case-insensitive and accept `_`, `-` or a space as word
/// separator, so `light_red`, `Light-Red` and `bright red` all resolve to
/// the same color.
///
/// ```rust
/// # use levelog::color::parse_color;
/// use colored::Color;
///
/// assert_eq!(parse_color("red").unwrap(), Color::Red);
/// assert_eq!(parse_color("light_blue").unwrap(), Color::BrightBlue);
/// assert!(parse_color("mauve").is_err());
/// ```
pub fn parse_color(name: &str) -> Result<Color, UnknownColor> {
    let normalized: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '_' | '-' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect();

    let color = match normalized.as_str() {
        "black" | "grey" | "gray" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" | "light grey" | "light gray" => Color::White,
        "bright black" | "dark grey" | "dark gray" => Color::BrightBlack,
        "bright red" | "light red" => Color::BrightRed,
        "bright green" | "light green" => Color::BrightGreen,
        "bright yellow" | "light yellow" => Color::BrightYellow,
        "bright blue" | "light blue" => Color::BrightBlue,
        "bright magenta" | "light magenta" | "bright purple" => Color::BrightMagenta,
        "bright cyan" | "light cyan" => Color::BrightCyan,
        "bright white" => Color::BrightWhite,
        _ => return Err(UnknownColor::new(name)),
    };
    Ok(color)
}

/// Paint `text` with a foreground and an optional background color.
///
/// Both names are resolved before any painting happens, so an unknown
/// background is reported even when the foreground is valid.
pub fn colorize(text: &str, fg: &str, bg: Option<&str>) -> Result<String, UnknownColor> {
    let fg = parse_color(fg)?;
    let bg = bg.map(parse_color).transpose()?;

    let painted = match bg {
        Some(bg) => text.color(fg).on_color(bg),
        None => text.color(fg),
    };
    Ok(painted.to_string())
}
