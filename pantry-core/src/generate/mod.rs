//! Model-fallback recipe generation.
//!
//! Given an ingredient string, try a priority-ordered list of models and return
//! the first response that parses into a [`Recipe`]. If every model fails, a
//! fixed backup recipe is served instead; generation never hard-fails.

pub mod prompts;

use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;

use crate::ai::{ChatClient, ChatMessage, ChatRequest};
use crate::types::Recipe;

/// Model identifiers to try, in priority order. All free-tier OpenRouter models.
pub const DEFAULT_MODELS: &[&str] = &[
    "nvidia/nemotron-3-nano-30b-a3b:free",
    "mistralai/devstral-2512:free",
    "amazon/nova-2-lite-v1:free",
    "arcee-ai/trinity-mini:free",
    "tngtech/tng-r1t-chimera:free",
    "allenai/olmo-3-32b-think:free",
    "kwaipilot/kat-coder-pro:free",
    "nvidia/nemotron-nano-12b-v2-vl:free",
    "alibaba/tongyi-deepresearch-30b-a3b:free",
    "nvidia/nemotron-nano-9b-v2:free",
    "openai/gpt-oss-120b:free",
    "openai/gpt-oss-20b:free",
    "z-ai/glm-4.5-air:free",
    "qwen/qwen3-coder:free",
    "moonshotai/kimi-k2:free",
    "cognitivecomputations/dolphin-mistral-24b-venice-edition:free",
    "google/gemma-3n-e2b-it:free",
];

/// Settings for one generation run: which models, and how long to wait on each.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub models: Vec<String>,
    pub attempt_timeout: Duration,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            attempt_timeout: Duration::from_secs(crate::ai::DEFAULT_ATTEMPT_TIMEOUT_SECS),
        }
    }
}

/// A generated recipe plus the model that produced it (`None` for the backup).
/// The model is surfaced for logging only; it is not part of the HTTP contract.
#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    pub recipe: Recipe,
    pub model: Option<String>,
}

#[derive(Debug, Error)]
enum RecipeParseError {
    #[error("response is not a JSON object")]
    NotJson,

    #[error("invalid recipe JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Generate a recipe from a non-empty ingredient string.
///
/// Models are attempted strictly in order, one attempt each, no retries. Each
/// attempt is raced against `config.attempt_timeout`; on timeout the call is
/// abandoned and the next model is tried. Abandoning only stops the wait; the
/// underlying request is not guaranteed to be canceled upstream. When every
/// model fails, the fixed [`backup_recipe`] is returned.
pub async fn generate_recipe(
    client: &dyn ChatClient,
    config: &GenerateConfig,
    ingredients: &str,
) -> GeneratedRecipe {
    let request = ChatRequest {
        messages: vec![
            ChatMessage::system(prompts::RECIPE_SYSTEM_PROMPT),
            ChatMessage::user(prompts::render_recipe_prompt(ingredients)),
        ],
        json_response: true,
        ..Default::default()
    };

    for model in &config.models {
        tracing::info!(model = %model, "attempting recipe generation");

        let response = match timeout(config.attempt_timeout, client.complete(model, request.clone())).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                tracing::warn!(model = %model, error = %e, "model attempt failed");
                continue;
            }
            Err(_) => {
                tracing::warn!(
                    model = %model,
                    timeout_secs = config.attempt_timeout.as_secs(),
                    "model attempt timed out"
                );
                continue;
            }
        };

        match parse_recipe(&response.content) {
            Ok(recipe) => {
                tracing::info!(model = %model, title = %recipe.title, "recipe generated");
                return GeneratedRecipe {
                    recipe,
                    model: Some(model.clone()),
                };
            }
            Err(e) => {
                tracing::warn!(model = %model, error = %e, "model returned unusable output");
            }
        }
    }

    tracing::warn!("all models failed, serving backup recipe");
    GeneratedRecipe {
        recipe: backup_recipe(),
        model: None,
    }
}

/// Strip surrounding code-fence markup (e.g. ```json ... ```) from model output.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // Drop the info string ("json"), with or without a newline after it.
        text = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

fn parse_recipe(raw: &str) -> Result<Recipe, RecipeParseError> {
    let text = strip_code_fences(raw);

    if !text.starts_with('{') {
        return Err(RecipeParseError::NotJson);
    }

    Ok(serde_json::from_str(text)?)
}

/// The fixed recipe served when every model attempt fails. Always identical.
pub fn backup_recipe() -> Recipe {
    Recipe {
        title: "Emergency 'Pantry Special' Stir-Fry".to_string(),
        description: "The AI chefs are currently swamped with requests, but here is a foolproof recipe for your ingredients!".to_string(),
        ingredients_list: vec![
            "Your main protein (chicken, beef, tofu, or eggs)".to_string(),
            "Any vegetables (broccoli, carrots, onions)".to_string(),
            "Soy sauce, garlic, and oil".to_string(),
            "Rice or noodles".to_string(),
        ],
        instructions: vec![
            "Heat oil in a pan over high heat.".to_string(),
            "Cook protein until browned and set aside.".to_string(),
            "Stir-fry vegetables until tender.".to_string(),
            "Combine everything with soy sauce and garlic.".to_string(),
            "Serve over rice or noodles.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fenced_json() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn strips_bare_fences() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn strips_fences_without_newline_after_info_string() {
        let raw = "```json{\"a\": 1}```";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn unfenced_text_is_unchanged() {
        assert_eq!(strip_code_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn prose_is_rejected() {
        let err = parse_recipe("Here is a lovely recipe for you!").unwrap_err();
        assert!(matches!(err, RecipeParseError::NotJson));
    }

    #[test]
    fn truncated_json_is_rejected() {
        let err = parse_recipe("{\"title\": \"Soup\"").unwrap_err();
        assert!(matches!(err, RecipeParseError::InvalidJson(_)));
    }

    #[test]
    fn backup_recipe_content_is_fixed() {
        assert_eq!(backup_recipe(), backup_recipe());

        let backup = backup_recipe();
        assert_eq!(backup.title, "Emergency 'Pantry Special' Stir-Fry");
        assert_eq!(backup.ingredients_list.len(), 4);
        assert_eq!(backup.instructions.len(), 5);
    }

    #[test]
    fn default_model_list_is_ordered_and_free_tier() {
        assert_eq!(DEFAULT_MODELS.len(), 17);
        assert_eq!(DEFAULT_MODELS[0], "nvidia/nemotron-3-nano-30b-a3b:free");
        assert_eq!(DEFAULT_MODELS[16], "google/gemma-3n-e2b-it:free");
        assert!(DEFAULT_MODELS.iter().all(|m| m.ends_with(":free")));
    }
}
