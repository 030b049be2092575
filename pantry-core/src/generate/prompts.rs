//! Prompt for generating a recipe from a list of pantry ingredients.

/// System instruction pinning the response to the exact JSON shape we parse.
pub const RECIPE_SYSTEM_PROMPT: &str = "You are a professional chef. Respond ONLY with a valid JSON object containing: 'title', 'description', 'ingredients_list' (array of strings), 'instructions' (array of strings). Do not use markdown.";

/// Render the user prompt naming the ingredients.
pub fn render_recipe_prompt(ingredients: &str) -> String {
    format!("Create a recipe using: {}", ingredients)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_recipe_prompt("Egg, Milk");

        assert!(prompt.contains("Egg, Milk"));
        assert!(prompt.starts_with("Create a recipe"));
    }
}
