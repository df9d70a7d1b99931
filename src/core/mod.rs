//! Core functionality for querying the student database
//!
//! Contains command decoding, the fixed queries, the database handle,
//! console rendering and result export.

pub mod command;
pub mod dispatcher;
pub mod export;
pub mod queries;
pub mod report;
pub mod store;

pub use command::{Command, CommandKind, CommandParser};
pub use dispatcher::Dispatcher;
pub use export::{ExportFormat, Exporter};
pub use store::{Cell, Row, RowSet, Store};
