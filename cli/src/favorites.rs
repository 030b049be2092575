//! Favorites commands backed by the disk store in ~/.pantry-chef.

use std::path::PathBuf;

use anyhow::{bail, Result};
use pantry_core::{Favorites, FileStorage};

use crate::render;

fn favorites_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".pantry-chef"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

pub fn open_favorites() -> Favorites {
    Favorites::load(Box::new(FileStorage::new(favorites_dir())))
}

pub fn list() -> Result<()> {
    let favorites = open_favorites();

    if favorites.is_empty() {
        println!("No saved recipes yet.");
        return Ok(());
    }

    println!("Your cookbook ({}):", favorites.len());
    for recipe in favorites.iter() {
        println!("  {}", recipe.title);
    }

    Ok(())
}

pub fn show(title: &str) -> Result<()> {
    let favorites = open_favorites();

    match favorites.get(title) {
        Some(recipe) => {
            render::print_recipe(recipe);
            Ok(())
        }
        None => bail!("No saved recipe titled \"{}\"", title),
    }
}

pub fn delete(title: &str) -> Result<()> {
    let mut favorites = open_favorites();

    let removed = favorites.delete(title)?;
    if removed == 0 {
        bail!("No saved recipe titled \"{}\"", title);
    }

    println!("Deleted \"{}\".", title);
    Ok(())
}
