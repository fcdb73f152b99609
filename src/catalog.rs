// ABOUTME: Browse aggregations and lookups over the recipe pool
// ABOUTME: Category counts, label occurrence counts, filter options, name lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Catalog Browsing
//!
//! Read-only aggregations the browse pages are built from: per-category
//! recipe counts, raw-label occurrence counts, the distinct filter-option
//! lists, and display-name lookup.

use escoffier_core::constants::DishCategory;
use escoffier_core::models::Recipe;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Bucket label for recipes carrying no value in a counted list
const NONE_BUCKET: &str = "None";

/// One browse category with its recipe count.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    /// Canonical category name
    pub label: &'static str,
    /// Recipe count shown next to it
    pub count: usize,
}

/// Distinct filter options offered to the user, in first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterOptions {
    /// Every distinct ingredient name in the pool
    pub ingredients: Vec<String>,
    /// Every distinct cuisine label in the pool
    pub cuisines: Vec<String>,
    /// Every distinct diet label in the pool
    pub diets: Vec<String>,
}

/// Dish names of recipes falling in the given browse category
#[must_use]
pub fn select_by_dish_type(pool: &[Recipe], category: DishCategory) -> Vec<&str> {
    pool.iter()
        .filter(|recipe| category.matches(&recipe.dish_types))
        .map(|recipe| recipe.dish_name.as_str())
        .collect()
}

fn list_counts<'a, F>(pool: &'a [Recipe], values: F) -> BTreeMap<String, usize>
where
    F: Fn(&'a Recipe) -> &'a [String],
{
    let mut counts = BTreeMap::new();
    for recipe in pool {
        let list = values(recipe);
        if list.is_empty() {
            *counts.entry(NONE_BUCKET.to_owned()).or_insert(0) += 1;
        } else {
            for value in list {
                *counts.entry(value.clone()).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Occurrence count per raw dish-type label, empty lists under "None"
#[must_use]
pub fn dish_type_counts(pool: &[Recipe]) -> BTreeMap<String, usize> {
    list_counts(pool, |recipe| recipe.dish_types.as_slice())
}

/// Occurrence count per cuisine label, empty lists under "None"
#[must_use]
pub fn cuisine_counts(pool: &[Recipe]) -> BTreeMap<String, usize> {
    list_counts(pool, |recipe| recipe.cuisines.as_slice())
}

/// Occurrence count per diet label, empty lists under "None"
#[must_use]
pub fn diet_counts(pool: &[Recipe]) -> BTreeMap<String, usize> {
    list_counts(pool, |recipe| recipe.diet_types.as_slice())
}

/// The twelve browse categories with the counts shown on the find page.
///
/// Most categories report the occurrence count of their representative raw
/// label; Sauce & Condiments instead counts recipes tagged with any of
/// "sauce"/"condiment" (recipe-level, so a record tagged with both counts
/// once). The asymmetry is part of the browse-page contract.
#[must_use]
pub fn category_counts(pool: &[Recipe]) -> Vec<CategoryCount> {
    let raw_counts = dish_type_counts(pool);
    DishCategory::ALL
        .into_iter()
        .map(|category| {
            let count = if category == DishCategory::SauceCondiments {
                pool.iter()
                    .filter(|recipe| {
                        recipe
                            .dish_types
                            .iter()
                            .any(|label| label == "sauce" || label == "condiment")
                    })
                    .count()
            } else {
                raw_counts
                    .get(category.representative())
                    .copied()
                    .unwrap_or(0)
            };
            CategoryCount {
                label: category.label(),
                count,
            }
        })
        .collect()
}

/// Distinct ingredient/cuisine/diet lists in first-seen order
#[must_use]
pub fn filter_options(pool: &[Recipe]) -> FilterOptions {
    let mut options = FilterOptions::default();
    let mut seen_ingredients = HashSet::new();
    let mut seen_cuisines = HashSet::new();
    let mut seen_diets = HashSet::new();
    for recipe in pool {
        for ingredient in &recipe.ingredients {
            if seen_ingredients.insert(ingredient.name.clone()) {
                options.ingredients.push(ingredient.name.clone());
            }
        }
        for cuisine in &recipe.cuisines {
            if seen_cuisines.insert(cuisine.clone()) {
                options.cuisines.push(cuisine.clone());
            }
        }
        for diet in &recipe.diet_types {
            if seen_diets.insert(diet.clone()) {
                options.diets.push(diet.clone());
            }
        }
    }
    options
}

/// Case-insensitive display-name lookup.
///
/// Display names are unique in a well-formed pool; should duplicates occur,
/// the last match wins.
#[must_use]
pub fn find_by_name<'a>(pool: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
    let needle = name.to_lowercase();
    pool.iter()
        .filter(|recipe| recipe.dish_name.to_lowercase() == needle)
        .last()
}
