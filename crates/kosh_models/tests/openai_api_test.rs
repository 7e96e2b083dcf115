// Integration tests against the real OpenAI API.
//
// Run with: cargo test -p kosh_models --features api

use kosh_core::{GenerateRequest, Message, Role};
use kosh_interface::KoshDriver;
use kosh_models::OpenAiClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires OPENAI_API_KEY
async fn generate_returns_text() {
    let _ = dotenvy::dotenv();

    let client = OpenAiClient::new("gpt-4o-mini".to_string()).expect("Failed to create client");

    let request = GenerateRequest {
        messages: vec![Message::new(Role::User, "Reply with the single word: pong")],
        temperature: Some(0.0),
        ..Default::default()
    };

    let response = client.generate(&request).await.expect("Generation failed");
    assert!(!response.text().is_empty());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires OPENAI_API_KEY
async fn zero_temperature_is_deterministic_enough_to_follow_instructions() {
    let _ = dotenvy::dotenv();

    let client = OpenAiClient::new("gpt-4o-mini".to_string()).expect("Failed to create client");

    let request = GenerateRequest {
        messages: vec![Message::new(
            Role::User,
            "Return exactly the text UNRELATED_QUERY_ATTEMPT and nothing else.",
        )],
        temperature: Some(0.0),
        ..Default::default()
    };

    let response = client.generate(&request).await.expect("Generation failed");
    assert!(response.text().contains("UNRELATED_QUERY_ATTEMPT"));
}
