// ABOUTME: Spoonacular complex-search payload models and conversion to catalog records
// ABOUTME: Duplicate ids skipped, instruction groups flattened, nutrition lifted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Spoonacular Payloads
//!
//! Wire models for the `/recipes/complexSearch` response (with
//! `addRecipeInformation`, `addRecipeNutrition`, and `fillIngredients`
//! enabled) and the pure conversion into [`Recipe`] records.
//!
//! The property triple (glycemic index, glycemic load, nutrition score)
//! arrives in that order from the API and is carried through verbatim;
//! downstream measure extraction relies on the positions surviving.

use escoffier_core::models::{
    CaloricBreakdown, Ingredient, InstructionStep, Measurement, Recipe,
};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

/// Errors produced while decoding an ingestion payload.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The payload body was not a valid complex-search page
    #[error("malformed search payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// One complex-search response page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    /// Recipe entries on this page
    pub results: Vec<SearchResult>,
    /// Page offset echoed by the API
    #[serde(default)]
    pub offset: u32,
    /// Page size echoed by the API
    #[serde(default)]
    pub number: u32,
    /// Total matching recipes across all pages
    #[serde(default)]
    pub total_results: u64,
}

/// One recipe entry within a search page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// External recipe identifier
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Preparation time in minutes
    pub ready_in_minutes: u32,
    /// Serving count
    pub servings: u32,
    /// Nutrition block (requires `addRecipeNutrition`)
    pub nutrition: NutritionInfo,
    /// Cuisine labels
    #[serde(default)]
    pub cuisines: Vec<String>,
    /// Dish-type labels
    #[serde(default)]
    pub dish_types: Vec<String>,
    /// Diet labels
    #[serde(default)]
    pub diets: Vec<String>,
    /// Grouped preparation instructions
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionGroup>,
}

/// Nutrition block of one search result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInfo {
    /// Named nutrient measures
    #[serde(default)]
    pub nutrients: Vec<WireMeasure>,
    /// Property measures in fixed API order
    #[serde(default)]
    pub properties: Vec<WireMeasure>,
    /// Flavonoid measures
    #[serde(default)]
    pub flavonoids: Vec<WireMeasure>,
    /// Ingredient entries (requires `fillIngredients`)
    #[serde(default)]
    pub ingredients: Vec<WireIngredient>,
    /// Macro-nutrient calorie shares
    pub caloric_breakdown: WireCaloricBreakdown,
    /// Weight of one serving
    pub weight_per_serving: WireWeight,
}

/// One named measure as the API reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireMeasure {
    /// Measure name
    pub name: String,
    /// Numeric amount
    pub amount: f64,
    /// Unit string
    #[serde(default)]
    pub unit: String,
}

/// One ingredient entry as the API reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireIngredient {
    /// External ingredient identifier
    pub id: i64,
    /// Ingredient name
    pub name: String,
    /// Quantity amount
    pub amount: f64,
    /// Quantity unit
    #[serde(default)]
    pub unit: String,
}

/// Macro-nutrient calorie shares as the API reports them.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCaloricBreakdown {
    /// Percent of calories from protein
    pub percent_protein: f64,
    /// Percent of calories from fat
    pub percent_fat: f64,
    /// Percent of calories from carbohydrates
    pub percent_carbs: f64,
}

/// Serving weight as the API reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireWeight {
    /// Weight amount
    pub amount: f64,
    /// Weight unit
    #[serde(default)]
    pub unit: String,
}

/// One group of analyzed instruction steps.
#[derive(Debug, Clone, Deserialize)]
pub struct InstructionGroup {
    /// Ordered steps within the group
    #[serde(default)]
    pub steps: Vec<WireStep>,
}

/// One analyzed instruction step.
#[derive(Debug, Clone, Deserialize)]
pub struct WireStep {
    /// Step number within the group
    pub number: u32,
    /// Step text
    pub step: String,
}

/// Decode one complex-search page body.
///
/// # Errors
///
/// Returns [`IngestError::MalformedPayload`] when the body is not a valid
/// complex-search page.
pub fn decode_page(body: &str) -> Result<SearchPage, IngestError> {
    Ok(serde_json::from_str(body)?)
}

/// Convert a decoded page into catalog records.
///
/// A recipe id appearing more than once within the page is converted only
/// the first time; repeats are skipped with a diagnostic rather than
/// failing the batch.
#[must_use]
pub fn convert_page(page: SearchPage) -> Vec<Recipe> {
    let mut seen = HashSet::new();
    let mut recipes = Vec::with_capacity(page.results.len());
    for result in page.results {
        if !seen.insert(result.id) {
            warn!(id = result.id, "duplicate recipe id in payload, skipping");
            continue;
        }
        recipes.push(convert_result(result));
    }
    recipes
}

fn convert_result(result: SearchResult) -> Recipe {
    let nutrition = result.nutrition;
    Recipe {
        id: result.id,
        dish_name: result.title,
        ready_in_minutes: result.ready_in_minutes,
        servings: result.servings,
        nutrients: nutrition.nutrients.into_iter().map(convert_measure).collect(),
        properties: nutrition.properties.into_iter().map(convert_measure).collect(),
        flavonoids: nutrition.flavonoids.into_iter().map(convert_measure).collect(),
        ingredients: nutrition
            .ingredients
            .into_iter()
            .map(convert_ingredient)
            .collect(),
        caloric_breakdown: CaloricBreakdown {
            percent_protein: nutrition.caloric_breakdown.percent_protein,
            percent_fat: nutrition.caloric_breakdown.percent_fat,
            percent_carbohydrates: nutrition.caloric_breakdown.percent_carbs,
        },
        weight_per_serving_g: nutrition.weight_per_serving.amount,
        cuisines: result.cuisines,
        dish_types: result.dish_types,
        diet_types: result.diets,
        instructions: result
            .analyzed_instructions
            .into_iter()
            .flat_map(|group| group.steps)
            .map(|step| InstructionStep {
                step: step.number,
                instruction: step.step,
            })
            .collect(),
    }
}

fn convert_measure(measure: WireMeasure) -> Measurement {
    Measurement {
        name: measure.name,
        amount: measure.amount,
        unit: measure.unit,
    }
}

fn convert_ingredient(ingredient: WireIngredient) -> Ingredient {
    Ingredient {
        id: ingredient.id,
        name: ingredient.name,
        amount: ingredient.amount,
        unit: ingredient.unit,
    }
}
