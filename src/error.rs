//! Error types for the lookup tool
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the lookup tool
#[derive(Error, Debug)]
pub enum LookupError {
    /// The database could not be opened at startup
    #[error("Could not open database {}. Please store your database as {}", path.display(), path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A query failed while preparing, binding or reading rows
    #[error("There has been a database error: {source}")]
    Query {
        #[source]
        source: rusqlite::Error,
    },

    /// Export target has neither a `.json` nor a `.xml` extension
    #[error("Invalid file extension. Please use .xml or .json")]
    UnsupportedExtension,

    /// Serializing a row set failed
    #[error("Export error: {message}")]
    Export {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system operation errors
    #[error("Error saving the results to {}: {source}", path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the prompt or writing to the console failed
    #[error("Console I/O error: {0}")]
    Console(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl LookupError {
    /// Create a new connection error
    pub fn connection<P: Into<PathBuf>>(path: P, source: rusqlite::Error) -> Self {
        Self::Connection {
            path: path.into(),
            source,
        }
    }

    /// Create a new query error
    pub fn query(source: rusqlite::Error) -> Self {
        Self::Query { source }
    }

    /// Create a new export error with its underlying cause
    pub fn export(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Export {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Reasons a console line could not be decoded into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Error: No command entered. Please try again.")]
    Empty,

    #[error("Error: '{0}' is not a valid command. Please try again.")]
    Unknown(String),

    #[error("The {command} command requires {required} arguments.")]
    Arity {
        command: &'static str,
        required: usize,
    },

    #[error("Error: First name and surname should only contain alphabetic characters.")]
    InvalidName,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LookupError>;
