// ABOUTME: Shared test fixtures for catalog and engine integration tests
// ABOUTME: Recipe builders with sensible defaults and per-field override helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence
#![allow(dead_code)]

//! Shared test fixtures
//!
//! Builders producing well-formed recipes (three property entries in
//! ingestion order) that individual tests then specialize.

use escoffier_core::models::{CaloricBreakdown, Ingredient, Measurement, Recipe};

/// A well-formed recipe with the given id and name and empty category lists.
pub fn recipe(id: u64, dish_name: &str) -> Recipe {
    Recipe {
        id,
        dish_name: dish_name.to_owned(),
        ready_in_minutes: 30,
        servings: 4,
        nutrients: vec![
            Measurement::new("Calories", 420.0, "kcal"),
            Measurement::new("Sugar", 12.0, "g"),
            Measurement::new("Cholesterol", 35.0, "mg"),
        ],
        properties: vec![
            Measurement::new("Glycemic Index", 48.0, ""),
            Measurement::new("Glycemic Load", 21.0, ""),
            Measurement::new("Nutrition Score", 62.0, "%"),
        ],
        flavonoids: Vec::new(),
        ingredients: Vec::new(),
        caloric_breakdown: CaloricBreakdown {
            percent_protein: 25.0,
            percent_fat: 35.0,
            percent_carbohydrates: 40.0,
        },
        weight_per_serving_g: 250.0,
        cuisines: Vec::new(),
        dish_types: vec!["main course".to_owned()],
        diet_types: Vec::new(),
        instructions: Vec::new(),
    }
}

/// Attach named ingredients (ids are synthesized).
pub fn with_ingredients(mut recipe: Recipe, names: &[&str]) -> Recipe {
    recipe.ingredients = names
        .iter()
        .enumerate()
        .map(|(position, name)| Ingredient {
            id: position as i64 + 1,
            name: (*name).to_owned(),
            amount: 1.0,
            unit: "piece".to_owned(),
        })
        .collect();
    recipe
}

/// Override the cuisine labels.
pub fn with_cuisines(mut recipe: Recipe, cuisines: &[&str]) -> Recipe {
    recipe.cuisines = cuisines.iter().map(|c| (*c).to_owned()).collect();
    recipe
}

/// Override the diet labels.
pub fn with_diets(mut recipe: Recipe, diets: &[&str]) -> Recipe {
    recipe.diet_types = diets.iter().map(|d| (*d).to_owned()).collect();
    recipe
}

/// Override the raw dish-type labels.
pub fn with_dish_types(mut recipe: Recipe, dish_types: &[&str]) -> Recipe {
    recipe.dish_types = dish_types.iter().map(|t| (*t).to_owned()).collect();
    recipe
}

/// Override the preparation time.
pub fn with_prep_time(mut recipe: Recipe, minutes: u32) -> Recipe {
    recipe.ready_in_minutes = minutes;
    recipe
}

/// Override the "Calories" nutrient amount.
pub fn with_calories(mut recipe: Recipe, calories: f64) -> Recipe {
    if let Some(entry) = recipe
        .nutrients
        .iter_mut()
        .find(|nutrient| nutrient.name == "Calories")
    {
        entry.amount = calories;
    }
    recipe
}

/// Dish names of an ordered result, for order assertions.
pub fn names(ranked: &[escoffier_engine::pipeline::RankedDish]) -> Vec<&str> {
    ranked.iter().map(|dish| dish.dish_name.as_str()).collect()
}
