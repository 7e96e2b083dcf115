//! Kosh CLI binary.
//!
//! This binary provides command-line access to the budget assistant:
//! - Ask a single question and print the answer
//! - Run an interactive question loop
//! - Inspect the schema description fed to the synthesis prompt

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, print_schema, run_ask, run_repl};

    // Load .env for local development before anything reads the environment
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Ask { question } => {
            run_ask(&cli.model, &question).await?;
        }

        Commands::Repl => {
            run_repl(&cli.model).await?;
        }

        Commands::Schema => {
            print_schema()?;
        }
    }

    Ok(())
}
