//! # Student Lookup
//!
//! An interactive query tool over a small SQLite database of students,
//! courses, teachers, addresses and reviews.
//!
//! ## Features
//!
//! - A fixed command set decoded once into a typed [`core::Command`]
//! - Parameterized, read-only queries against an existing database
//! - Command-specific console output
//! - Export of the last result set to JSON or XML
//!
//! ## Example
//!
//! ```no_run
//! use student_lookup::core::{Dispatcher, Store};
//!
//! let dispatcher = Dispatcher::new(Store::open("HyperionDev.db")?)?;
//! let command = dispatcher.decode("vs ST0001")?;
//! for row in &dispatcher.execute(&command)? {
//!     println!("{:?}", row);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr so they never interleave with the console session.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if debug {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
