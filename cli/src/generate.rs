use anyhow::{bail, Result};
use pantry_core::{IngredientSet, SaveOutcome};

use crate::client::ApiClient;
use crate::favorites::open_favorites;
use crate::render;

/// Assemble the ingredient set from the command line, request one recipe, and
/// render it. Each argument may carry comma-separated tags.
pub async fn generate(server: &str, save: bool, raw_ingredients: &[String]) -> Result<()> {
    let mut ingredients = IngredientSet::new();
    for raw in raw_ingredients {
        ingredients.add_all(raw);
    }

    if ingredients.is_empty() {
        bail!("Add at least one ingredient!");
    }

    let client = ApiClient::new(server);
    let recipe = client.generate(&ingredients.to_request_string()).await?;

    render::print_recipe(&recipe);

    if save {
        let mut favorites = open_favorites();
        match favorites.save(recipe)? {
            SaveOutcome::Saved => println!("Saved to favorites."),
            SaveOutcome::Duplicate => println!("You already saved this!"),
        }
    }

    Ok(())
}
