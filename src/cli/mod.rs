//! Command-line interface module
//!
//! Provides argument parsing, session startup and the interactive loop.

pub mod args;
pub mod commands;
pub mod session;

pub use args::{Args, parse_args};
pub use commands::execute_command;
pub use session::Session;
