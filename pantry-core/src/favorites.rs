//! Persisted favorites, deduplicated by recipe title.
//!
//! Persistence goes through the [`Storage`] trait so the on-disk store can be
//! swapped for an in-memory one in tests. The list is read once at load time
//! and written back on every mutation.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use thiserror::Error;

use crate::types::Recipe;

/// Storage key for the favorites list, matching the original deployment.
pub const FAVORITES_KEY: &str = "pantryChefFavorites";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A key-value store for JSON-encoded state.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage> Storage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Disk-backed storage: one file per key under a directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. with corrupt data.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Result of a save attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// A favorite with the same title already exists; nothing was written.
    Duplicate,
}

/// The user's saved recipes. Invariant: no two entries share a title.
pub struct Favorites {
    storage: Box<dyn Storage>,
    recipes: Vec<Recipe>,
}

impl Favorites {
    /// Load the favorites list from storage.
    ///
    /// Missing or corrupt data yields an empty list; loading never fails.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let recipes = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "favorites data is corrupt, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read favorites, starting empty");
                Vec::new()
            }
        };

        Self { storage, recipes }
    }

    /// Save a recipe unless a favorite with the same exact title exists.
    pub fn save(&mut self, recipe: Recipe) -> Result<SaveOutcome, FavoritesError> {
        if self.recipes.iter().any(|r| r.title == recipe.title) {
            return Ok(SaveOutcome::Duplicate);
        }
        self.recipes.push(recipe);
        self.persist()?;
        Ok(SaveOutcome::Saved)
    }

    /// Delete every favorite whose title matches exactly. Returns the count removed.
    pub fn delete(&mut self, title: &str) -> Result<usize, FavoritesError> {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.title != title);
        let removed = before - self.recipes.len();
        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    pub fn get(&self, title: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.title == title)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn persist(&self) -> Result<(), FavoritesError> {
        let raw = serde_json::to_string(&self.recipes)?;
        self.storage.set(FAVORITES_KEY, &raw)?;
        Ok(())
    }
}
