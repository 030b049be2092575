//! End-to-end tests for the model-fallback generation pipeline, driven by the
//! fake chat client.

use std::time::Duration;

use pantry_core::ai::FakeChatClient;
use pantry_core::generate::{backup_recipe, generate_recipe, GenerateConfig};

const RECIPE_JSON: &str = r#"{"title":"Egg Milk Bake","description":"x","ingredients_list":["Egg","Milk"],"instructions":["Mix","Bake"]}"#;

fn config(models: &[&str]) -> GenerateConfig {
    GenerateConfig {
        models: models.iter().map(|m| m.to_string()).collect(),
        attempt_timeout: Duration::from_millis(200),
    }
}

#[tokio::test]
async fn first_model_success_wins() {
    let client = FakeChatClient::new()
        .with_reply("model-a", RECIPE_JSON)
        .with_reply("model-b", r#"{"title":"Other"}"#);

    let result = generate_recipe(&client, &config(&["model-a", "model-b"]), "Egg, Milk").await;

    assert_eq!(result.recipe.title, "Egg Milk Bake");
    assert_eq!(result.model.as_deref(), Some("model-a"));
    assert_eq!(client.calls(), vec!["model-a"]);
}

#[tokio::test]
async fn failures_advance_to_next_model_and_stop_at_first_success() {
    let client = FakeChatClient::new()
        .with_failure("model-a", "429 rate limited")
        .with_failure("model-b", "404 not found")
        .with_reply("model-c", RECIPE_JSON)
        .with_reply("model-d", RECIPE_JSON);

    let models = ["model-a", "model-b", "model-c", "model-d"];
    let result = generate_recipe(&client, &config(&models), "Egg, Milk").await;

    assert_eq!(result.model.as_deref(), Some("model-c"));
    assert_eq!(client.calls(), vec!["model-a", "model-b", "model-c"]);
}

#[tokio::test]
async fn exhaustion_serves_the_backup_recipe() {
    let client = FakeChatClient::new()
        .with_failure("model-a", "boom")
        .with_failure("model-b", "boom");

    let result = generate_recipe(&client, &config(&["model-a", "model-b"]), "Egg").await;

    assert_eq!(result.recipe, backup_recipe());
    assert_eq!(result.model, None);
    assert_eq!(client.calls().len(), 2);
}

#[tokio::test]
async fn fenced_json_is_unwrapped() {
    let fenced = format!("```json\n{}\n```", RECIPE_JSON);
    let client = FakeChatClient::new().with_reply("model-a", &fenced);

    let result = generate_recipe(&client, &config(&["model-a"]), "Egg, Milk").await;

    assert_eq!(result.recipe.title, "Egg Milk Bake");
    assert_eq!(result.recipe.ingredients_list, vec!["Egg", "Milk"]);
    assert_eq!(result.recipe.instructions, vec!["Mix", "Bake"]);
}

#[tokio::test]
async fn fenced_json_without_newline_is_unwrapped() {
    let fenced = format!("```json{}```", RECIPE_JSON);
    let client = FakeChatClient::new().with_reply("model-a", &fenced);

    let result = generate_recipe(&client, &config(&["model-a"]), "Egg, Milk").await;

    assert_eq!(result.model.as_deref(), Some("model-a"));
    assert_eq!(result.recipe.title, "Egg Milk Bake");
}

#[tokio::test]
async fn prose_output_counts_as_failure() {
    let client = FakeChatClient::new()
        .with_reply("model-a", "Sure! Here is a recipe you will love.")
        .with_reply("model-b", RECIPE_JSON);

    let result = generate_recipe(&client, &config(&["model-a", "model-b"]), "Egg").await;

    assert_eq!(result.model.as_deref(), Some("model-b"));
    assert_eq!(client.calls(), vec!["model-a", "model-b"]);
}

#[tokio::test]
async fn hung_model_times_out_and_falls_through() {
    let client = FakeChatClient::new()
        .with_hang("model-a")
        .with_reply("model-b", RECIPE_JSON);

    let result = generate_recipe(&client, &config(&["model-a", "model-b"]), "Egg").await;

    assert_eq!(result.model.as_deref(), Some("model-b"));
}
