use pantry_core::Recipe;

/// Print a recipe card to stdout.
pub fn print_recipe(recipe: &Recipe) {
    println!("\n{}", recipe.title);
    println!("{}", "=".repeat(recipe.title.chars().count()));
    println!("{}\n", recipe.description);

    println!("Ingredients:");
    for item in &recipe.ingredients_list {
        println!("  - {}", item);
    }

    println!("\nInstructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
}
