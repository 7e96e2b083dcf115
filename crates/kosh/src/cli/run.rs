//! Command handlers for the kosh binary.

use kosh_assistant::{Assistant, AssistantConfig};
use kosh_database::{DatabaseConfig, PgQueryBackend};
use kosh_interface::QueryBackend;
use kosh_models::OpenAiClient;
use std::io::{BufRead, Write};
use tracing::info;

/// Build the assistant from process configuration.
fn build_assistant(
    model: &str,
) -> Result<Assistant<OpenAiClient, PgQueryBackend>, Box<dyn std::error::Error>> {
    let driver = OpenAiClient::new(model.to_string())?;
    let config = DatabaseConfig::from_env()?;
    info!(db = %config.dbname, host = %config.host, model = %model, "Configuration loaded");

    let backend = PgQueryBackend::new(config);
    Ok(Assistant::new(driver, backend, AssistantConfig::default()))
}

/// Answer a single question and print the result.
pub async fn run_ask(model: &str, question: &str) -> Result<(), Box<dyn std::error::Error>> {
    if question.trim().is_empty() {
        return Err("Question cannot be empty.".into());
    }

    let assistant = build_assistant(model)?;
    let answer = assistant.answer(question).await;
    println!("{answer}");
    Ok(())
}

/// Read questions from stdin until EOF, answering each in turn.
pub async fn run_repl(model: &str) -> Result<(), Box<dyn std::error::Error>> {
    let assistant = build_assistant(model)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("question> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            println!("Question cannot be empty.");
            continue;
        }
        if question == "quit" || question == "exit" {
            break;
        }

        let answer = assistant.answer(question).await;
        println!("{answer}\n");
    }

    Ok(())
}

/// Print the schema description the synthesis prompt would receive.
pub fn print_schema() -> Result<(), Box<dyn std::error::Error>> {
    let config = DatabaseConfig::from_env()?;
    let backend = PgQueryBackend::new(config);
    println!("{}", backend.schema_description()?);
    Ok(())
}
