// ABOUTME: In-memory recipe store loaded from catalog snapshots
// ABOUTME: Full-pool and name-projection fetch operations for the engine's callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Recipe Store
//!
//! The external-collaborator contract the engine depends on: fetch the full
//! pool, or fetch the pool restricted to a dish-name projection. The engine
//! never writes back. Persistence is out of scope here; the store holds a
//! point-in-time snapshot in memory.

use escoffier_core::errors::CatalogResult;
use escoffier_core::models::{Recipe, RecipeSnapshot};
use std::fs;
use std::path::Path;
use tracing::info;

/// In-memory recipe pool.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Wrap an already-loaded pool
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not a valid
    /// snapshot.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let body = fs::read_to_string(path)?;
        let snapshot: RecipeSnapshot = serde_json::from_str(&body)?;
        info!(
            recipes = snapshot.recipes.len(),
            fetched_at = %snapshot.fetched_at,
            "loaded catalog snapshot"
        );
        Ok(Self::new(snapshot.recipes))
    }

    /// The full pool
    #[must_use]
    pub fn pool(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The pool restricted to a dish-name projection (exact-name membership)
    #[must_use]
    pub fn pool_named<'a>(&'a self, names: &[String]) -> Vec<&'a Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| names.contains(&recipe.dish_name))
            .collect()
    }

    /// Number of recipes in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the pool is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
