//! # levelog - Main Entry Point
//!
//! Logs the messages given on the command line with a chosen level, to
//! standard output or to a file.
//!
//! ## Architecture Overview
//!
//! 1. **Parse arguments**: Processes command-line configuration
//! 2. **Initialize diagnostics**: Tracing output on stderr, decorated by the
//!    same level registry the logger uses
//! 3. **Load levels**: Registers extra levels from a JSON catalog if given
//! 4. **Log**: Sends each message through a `Logger`, or runs the demo
//!
//! ## Error Handling
//!
//! Configuration mistakes (unknown level, duplicate level, bad color, an
//! existing log file without `--append`) end the run with an error.

use anyhow::{Context, Result};
use clap::Parser;
use levelog::{
    cli::Args, logging::LevelFormatter, CallOptions, Keyword, Level, Logger, LoggerOptions,
    SharedRegistry,
};
use std::time::Duration;
use tracing::{debug, info};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let registry = SharedRegistry::new();

    // The log level can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=debug levelog --demo
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .event_format(LevelFormatter::new(registry.clone()))
        .init();

    if let Some(path) = &args.levels {
        let count = registry
            .load_file(path)
            .with_context(|| format!("Failed to load levels from {}", path.display()))?;
        info!("Loaded {} level(s) from {}", count, path.display());
    }

    if args.list_levels {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let logger = Logger::new(registry, &args.level, LoggerOptions::from(&args))?;
    debug!("{:?}", logger);

    if args.demo {
        run_demo(&logger)?;
    }

    for message in &args.messages {
        logger.log(message)?;
    }

    Ok(())
}

/// Showcase of the call wrappers on a custom level.
fn run_demo(logger: &Logger) -> Result<()> {
    logger.set_new_level(
        Level::new("MSG")
            .with_prefix(">>> ")
            .with_suffix("<<<")
            .with_color("red")
            .with_background("yellow"),
    )?;
    println!("{}", logger);

    let mut sigma = logger.log_func("sigma", CallOptions::detailed(), |(n,): (u64,)| {
        let val: u64 = (0..n).sum();
        if let Err(e) = logger.log(&format!("sum is: {}", val)) {
            eprintln!("{}", e);
        }
        val
    });
    sigma((1000,));

    let mut scale = logger.log_func(
        "scale",
        CallOptions::default(),
        |(values, factor): (Vec<f64>, Keyword<f64>)| -> Vec<f64> {
            values.iter().map(|v| v * *factor).collect()
        },
    );
    scale((vec![1.0, 2.5], Keyword::new("factor", 2.0)));

    let mut nap = logger.pref("nap", None, |ms: u64| std::thread::sleep(Duration::from_millis(ms)));
    nap(50);

    Ok(())
}
