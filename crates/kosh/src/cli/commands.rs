//! CLI command definitions.

use clap::{Parser, Subcommand};

/// Kosh - Natural-language assistant for government budget and staffing data
#[derive(Parser, Debug)]
#[command(name = "kosh")]
#[command(about = "Ask questions about budget, staffing, and expenditure data", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Model identifier to use for synthesis and composition
    #[arg(long, global = true, default_value = "gpt-4o-mini")]
    pub model: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask a single question and print the answer
    Ask {
        /// The question to answer
        question: String,
    },

    /// Run an interactive question loop
    Repl,

    /// Print the schema description used in the synthesis prompt
    Schema,
}
