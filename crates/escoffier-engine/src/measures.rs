// ABOUTME: Sortable measure extraction producing the fixed 11-position vector
// ABOUTME: Name lookups with missing-data sentinel, positional property reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Measure Extractor
//!
//! Derives the fixed-order vector of sortable numeric measures for one
//! recipe. Positions follow the sorter catalog ([`SortKey`]); reordering
//! them would break every caller-submitted sort spec.

use crate::matcher::match_count;
use escoffier_core::constants::{SortKey, MISSING_MEASURE};
use escoffier_core::models::Recipe;
use serde::Serialize;

/// The fixed-order measure vector for one recipe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecipeMeasures([f64; SortKey::COUNT]);

impl RecipeMeasures {
    /// Measure at the given catalog position
    #[must_use]
    pub const fn get(&self, key: SortKey) -> f64 {
        self.0[key.index()]
    }

    /// All measures in catalog order
    #[must_use]
    pub const fn as_array(&self) -> &[f64; SortKey::COUNT] {
        &self.0
    }
}

/// Extract the measure vector for a recipe against the required ingredients.
///
/// Pure function of its two inputs. Named nutrient lookups (Calories, Sugar,
/// Cholesterol) yield the [`MISSING_MEASURE`] sentinel when the record lacks
/// the entry (missing data, not an error). The glycemic index, glycemic
/// load, and nutrition score are read positionally from the first three
/// property entries per the ingestion precondition on [`Recipe`]; a record
/// with fewer than three properties is malformed and yields `None` so the
/// caller can skip it.
#[must_use]
pub fn extract(recipe: &Recipe, required_ingredients: &[String]) -> Option<RecipeMeasures> {
    let glycemic_index = recipe.properties.first()?.amount;
    let glycemic_load = recipe.properties.get(1)?.amount;
    let nutrition_score = recipe.properties.get(2)?.amount;

    let ingredient_names = recipe.ingredient_names_lowercase();
    let matched = match_count(&ingredient_names, required_ingredients);
    // The cross-product score can exceed the ingredient count, so this
    // measure can go negative; it still orders consistently.
    let extra_ingredients = ingredient_names.len() as f64 - matched as f64;

    Some(RecipeMeasures([
        extra_ingredients,
        f64::from(recipe.ready_in_minutes),
        nutrient_or_missing(recipe, SortKey::Calories),
        nutrient_or_missing(recipe, SortKey::Sugar),
        nutrient_or_missing(recipe, SortKey::Cholesterol),
        glycemic_index,
        glycemic_load,
        nutrition_score,
        recipe.caloric_breakdown.percent_protein,
        recipe.caloric_breakdown.percent_fat,
        recipe.caloric_breakdown.percent_carbohydrates,
    ]))
}

fn nutrient_or_missing(recipe: &Recipe, key: SortKey) -> f64 {
    recipe
        .nutrient_amount(key.label())
        .unwrap_or(MISSING_MEASURE)
}
