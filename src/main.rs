use anyhow::Result;
use student_lookup::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Validate configuration before touching the database
    let config = Config::from_args(&args)?;

    // Run the interactive session
    cli::execute_command(&config)
}
