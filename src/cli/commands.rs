//! Session startup for the CLI

use crate::{
    cli::Session,
    config::Config,
    core::{Dispatcher, Exporter, Store},
};
use anyhow::Context;
use std::io;
use tracing::{info, instrument};

/// Open the database and run the interactive session until the user exits
#[instrument(skip(config))]
pub fn execute_command(config: &Config) -> anyhow::Result<()> {
    info!("Connecting to database: {}", config.database_path.display());

    let store = Store::open(&config.database_path).context("Failed to connect to the database")?;
    let dispatcher = Dispatcher::new(store).context("Failed to prepare the command parser")?;
    let exporter = Exporter::new(&config.export);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(dispatcher, exporter, stdin.lock(), stdout.lock());

    session.run().context("Console session failed")?;
    session.finish().context("Failed to close the database")?;

    info!("Session finished");
    Ok(())
}
