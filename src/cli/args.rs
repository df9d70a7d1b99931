//! Command-line argument parsing

use crate::config::DEFAULT_DATABASE;
use clap::Parser;
use std::path::PathBuf;

/// Student lookup - query students, courses and reviews interactively
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "lookup")]
pub struct Args {
    /// SQLite database to query
    #[arg(
        short = 'd',
        long = "database",
        env = "LOOKUP_DATABASE",
        default_value = DEFAULT_DATABASE
    )]
    pub database: PathBuf,

    /// Spaces per nesting level when storing results as JSON
    #[arg(long = "json-indent", default_value_t = 2)]
    pub json_indent: usize,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
