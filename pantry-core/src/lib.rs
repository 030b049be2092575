pub mod ai;
pub mod favorites;
pub mod generate;
pub mod ingredients;
pub mod types;

pub use favorites::{Favorites, FileStorage, MemoryStorage, SaveOutcome, Storage};
pub use generate::{backup_recipe, generate_recipe, GenerateConfig, GeneratedRecipe};
pub use ingredients::IngredientSet;
pub use types::Recipe;
