// ABOUTME: Recipe record model matching the catalog's stored field names
// ABOUTME: Measurement, Ingredient, CaloricBreakdown, InstructionStep, RecipeSnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Recipe Records
//!
//! The serde field names follow the original catalog documents
//! (`"Dish Name"`, `"Ready in minutes"`, ...) so snapshots exported from it
//! load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One named measure entry (nutrient, property, or flavonoid)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Measure name as reported by the external API
    #[serde(rename = "Name")]
    pub name: String,
    /// Numeric amount (opaque to the catalog)
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// Unit string as reported
    #[serde(rename = "Unit", default)]
    pub unit: String,
}

impl Measurement {
    /// Create a measure entry
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// One recipe ingredient with its quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// External ingredient identifier
    #[serde(rename = "_id")]
    pub id: i64,
    /// Ingredient name
    #[serde(rename = "Name")]
    pub name: String,
    /// Quantity amount
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// Quantity unit
    #[serde(rename = "Unit", default)]
    pub unit: String,
}

/// Macro-nutrient share of total calories
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CaloricBreakdown {
    /// Percent of calories from protein
    #[serde(rename = "Percentage Protein")]
    pub percent_protein: f64,
    /// Percent of calories from fat
    #[serde(rename = "Percentage Fat")]
    pub percent_fat: f64,
    /// Percent of calories from carbohydrates
    #[serde(rename = "Percentage Carbohydrates")]
    pub percent_carbohydrates: f64,
}

/// One ordered preparation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    /// Step number within the recipe
    pub step: u32,
    /// Step text
    pub instruction: String,
}

/// A catalog recipe record.
///
/// Created by ingestion, read by every query, never mutated by the
/// filter-and-rank engine.
///
/// # Precondition
///
/// Ingestion guarantees `properties` holds at least three entries in fixed
/// positional order: glycemic index, glycemic load, nutrition score. The
/// measure extractor reads positions 0-2 rather than looking names up; a
/// record violating this is treated as malformed and skipped wherever
/// measures are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// External recipe identifier
    #[serde(rename = "_id")]
    pub id: u64,
    /// Unique display name
    #[serde(rename = "Dish Name")]
    pub dish_name: String,
    /// Preparation time in minutes
    #[serde(rename = "Ready in minutes")]
    pub ready_in_minutes: u32,
    /// Serving count
    #[serde(rename = "Servings")]
    pub servings: u32,
    /// Named nutrient measures
    #[serde(rename = "Nutrients", default)]
    pub nutrients: Vec<Measurement>,
    /// Positional property measures (see the precondition above)
    #[serde(rename = "Properties", default)]
    pub properties: Vec<Measurement>,
    /// Flavonoid measures (carried through ingestion, unused by queries)
    #[serde(rename = "Flavonoids", default)]
    pub flavonoids: Vec<Measurement>,
    /// Ingredient list
    #[serde(rename = "Ingredients", default)]
    pub ingredients: Vec<Ingredient>,
    /// Macro-nutrient calorie shares
    #[serde(rename = "Caloric Breakdown", default)]
    pub caloric_breakdown: CaloricBreakdown,
    /// Weight of one serving
    #[serde(rename = "Weight per serving in grams", default)]
    pub weight_per_serving_g: f64,
    /// Cuisine labels
    #[serde(rename = "Cuisine", default)]
    pub cuisines: Vec<String>,
    /// Raw dish-type labels
    #[serde(rename = "Dish Type", default)]
    pub dish_types: Vec<String>,
    /// Diet labels
    #[serde(rename = "Diet Type", default)]
    pub diet_types: Vec<String>,
    /// Ordered preparation steps
    #[serde(rename = "Instructions", default)]
    pub instructions: Vec<InstructionStep>,
}

impl Recipe {
    /// Lower-cased ingredient names, the form ingredient matching operates on
    #[must_use]
    pub fn ingredient_names_lowercase(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.name.to_lowercase())
            .collect()
    }

    /// Amount of the named nutrient, if the record carries it.
    ///
    /// Lookup is by exact, case-sensitive name match.
    #[must_use]
    pub fn nutrient_amount(&self, name: &str) -> Option<f64> {
        self.nutrients
            .iter()
            .find(|nutrient| nutrient.name == name)
            .map(|nutrient| nutrient.amount)
    }
}

/// A point-in-time export of the recipe pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSnapshot {
    /// When the pool was fetched from the external API
    pub fetched_at: DateTime<Utc>,
    /// The recipe records
    pub recipes: Vec<Recipe>,
}

impl RecipeSnapshot {
    /// Wrap a freshly ingested pool with the current timestamp
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            fetched_at: Utc::now(),
            recipes,
        }
    }
}
