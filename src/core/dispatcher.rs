//! Maps decoded commands onto their fixed queries

use crate::{
    core::{
        command::{Command, CommandParser},
        store::{RowSet, Store},
    },
    error::{CommandError, Result},
};
use tracing::{debug, instrument, warn};

/// Owns the store handle for the lifetime of a session
pub struct Dispatcher {
    store: Store,
    parser: CommandParser,
}

impl Dispatcher {
    /// Create a dispatcher over an open store
    pub fn new(store: Store) -> Result<Self> {
        Ok(Self {
            store,
            parser: CommandParser::new()?,
        })
    }

    /// Decode a raw console line; never touches the store
    pub fn decode(&self, line: &str) -> std::result::Result<Command, CommandError> {
        self.parser.parse(line)
    }

    /// Run the one query bound to `command`
    #[instrument(skip(self))]
    pub fn execute(&self, command: &Command) -> Result<RowSet> {
        let Some(spec) = command.query() else {
            return Ok(RowSet::default());
        };

        debug!("Executing {} with {} parameter(s)", command.kind().token(), spec.params.len());
        self.store.fetch(spec.sql, &spec.params).inspect_err(|e| {
            warn!("Query for {} failed: {}", command.kind().token(), e);
        })
    }

    /// Give back the store so it can be closed
    pub fn into_store(self) -> Store {
        self.store
    }
}
