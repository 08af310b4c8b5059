use anyhow::Result;
use levelog::{FixedClock, Level, Logger, LoggerError, LoggerOptions, SharedRegistry};
use tempfile::tempdir;

fn clock() -> FixedClock {
    FixedClock::from_hms(8, 15, 0).expect("valid time")
}

/// A fresh logger refuses a pre-existing file, and once it has written a
/// file of its own it appends anywhere.
#[test]
fn new_file_policy_guards_first_write_only() -> Result<()> {
    let dir = tempdir()?;
    let stale = dir.path().join("stale.log");
    std::fs::write(&stale, "previous run\n")?;
    let fresh = dir.path().join("fresh.log");

    let logger = Logger::new(SharedRegistry::new(), "DEFAULT", LoggerOptions::default())?
        .with_clock(clock());

    let err = logger.log_to("first", &stale).unwrap_err();
    assert!(matches!(err, LoggerError::FileAlreadyExists { .. }));
    assert_eq!(std::fs::read_to_string(&stale)?, "previous run\n");

    logger.log_to("hello", &fresh)?;
    logger.log_to("again", &stale)?;

    assert_eq!(std::fs::read_to_string(&fresh)?, " [08:15:00] hello \n");
    assert_eq!(
        std::fs::read_to_string(&stale)?,
        "previous run\n [08:15:00] again \n"
    );
    Ok(())
}

/// Appending mode never refuses an existing file.
#[test]
fn append_mode_accepts_existing_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("shared.log");
    std::fs::write(&path, "kept\n")?;

    let options = LoggerOptions {
        file: Some(path.clone()),
        new_file: false,
    };
    let logger = Logger::new(SharedRegistry::new(), "DEBUG", options)?.with_clock(clock());
    logger.log("more")?;

    assert_eq!(std::fs::read_to_string(&path)?, "kept\n [08:15:00] more \n");
    Ok(())
}

/// File output is never colorized, even with color forced on and a level
/// whose colors are not even valid.
#[test]
fn file_output_has_no_ansi_codes() -> Result<()> {
    colored::control::set_override(true);

    let dir = tempdir()?;
    let path = dir.path().join("plain.log");
    let level = Level::new("LOUD")
        .with_prefix("[LOUD]")
        .with_color("bogus")
        .with_show_time(false);
    let logger = Logger::with_level(SharedRegistry::new(), level, LoggerOptions::to_file(&path))?;

    logger.log("line one\nline two")?;

    let text = std::fs::read_to_string(&path)?;
    assert!(!text.contains('\x1b'));
    assert_eq!(text, "[LOUD] line one\n       line two \n");
    Ok(())
}

/// Two loggers on one registry see each other's levels.
#[test]
fn loggers_share_registry() -> Result<()> {
    let dir = tempdir()?;
    let registry = SharedRegistry::new();

    let first = Logger::new(registry.clone(), "DEFAULT", LoggerOptions::to_file(dir.path().join("a.log")))?;
    let second = Logger::new(registry.clone(), "DEFAULT", LoggerOptions::to_file(dir.path().join("b.log")))?;

    first.set_new_level(Level::new("NOTE").with_prefix("note:").with_show_time(false))?;
    second.set_level("NOTE")?;
    second.log("shared")?;

    assert_eq!(
        std::fs::read_to_string(dir.path().join("b.log"))?,
        "note: shared \n"
    );
    assert!(matches!(
        second.set_new_level(Level::new("NOTE")),
        Err(LoggerError::DuplicateLevel { .. })
    ));
    Ok(())
}
