use clap::Parser;
use std::path::PathBuf;

use crate::logger::{is_empty_path, LoggerOptions};

/// levelog - log messages with named formatting levels
#[derive(Parser, Debug, Default, Clone)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Messages to log, one line each
    pub messages: Vec<String>,

    /// Level to log with
    #[clap(short = 'l', long, default_value = crate::defaults::LEVEL)]
    pub level: String,

    /// Log file to append to (standard output if omitted)
    #[clap(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Allow appending to a log file that already exists
    #[clap(short = 'a', long, default_value_t = false)]
    pub append: bool,

    /// JSON file with additional level definitions
    #[clap(long)]
    pub levels: Option<PathBuf>,

    /// Disable colored output
    #[clap(long, default_value_t = false)]
    pub no_color: bool,

    /// Print the registered levels and exit
    #[clap(long, default_value_t = false)]
    pub list_levels: bool,

    /// Run the call-logging showcase
    #[clap(long, default_value_t = false)]
    pub demo: bool,
}

impl From<&Args> for LoggerOptions {
    fn from(args: &Args) -> Self {
        Self {
            file: args.file.clone().filter(|p| !is_empty_path(p)),
            new_file: !args.append,
        }
    }
}
