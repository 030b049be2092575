//! Shared recipe type.

use serde::{Deserialize, Serialize};

/// A generated recipe, as produced by the fallback pipeline and stored in favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients_list: Vec<String>,
    pub instructions: Vec<String>,
}
