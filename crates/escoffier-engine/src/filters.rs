// ABOUTME: Inclusion filters over the candidate pool
// ABOUTME: Tiered ingredient partitioning and list-attribute matching with Any widening
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Pool Filters
//!
//! Two order-preserving filters: a tiered partition by ingredient match
//! quality, and a generic inclusion filter over a list-valued attribute
//! (cuisine, diet) with an "Any" widening pass.

use crate::matcher::match_count;
use escoffier_core::constants::ANY_FILTER_VALUE;
use escoffier_core::models::Recipe;

/// List-valued recipe attribute the inclusion filter can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAttribute {
    /// The recipe's cuisine labels
    Cuisine,
    /// The recipe's diet labels
    DietType,
}

impl ListAttribute {
    /// The attribute's values on a record
    #[must_use]
    pub fn values(self, recipe: &Recipe) -> &[String] {
        match self {
            Self::Cuisine => &recipe.cuisines,
            Self::DietType => &recipe.diet_types,
        }
    }
}

/// Partition the pool into ingredient-match tiers and concatenate them.
///
/// Empty `required_tokens` is the identity. Otherwise each recipe's match
/// count classifies it: equal to the token count → "contains all"; strictly
/// between 1 and the token count → "contains some"; exactly 1 → "contains
/// one"; anything else (zero, or an overshoot from the cross-product
/// scoring) drops the recipe. Tiers keep their original relative order and
/// concatenate all → some → one.
#[must_use]
pub fn filter_by_ingredients<'a>(
    pool: Vec<&'a Recipe>,
    required_tokens: &[String],
) -> Vec<&'a Recipe> {
    if required_tokens.is_empty() {
        return pool;
    }

    let mut contains_all = Vec::new();
    let mut contains_some = Vec::new();
    let mut contains_one = Vec::new();
    for recipe in pool {
        let ingredient_names = recipe.ingredient_names_lowercase();
        let count = match_count(&ingredient_names, required_tokens);
        if count == required_tokens.len() {
            contains_all.push(recipe);
        } else if count > 1 && count < required_tokens.len() {
            contains_some.push(recipe);
        } else if count == 1 {
            contains_one.push(recipe);
        }
    }

    contains_all.extend(contains_some);
    contains_all.extend(contains_one);
    contains_all
}

/// Keep recipes whose attribute values intersect the required set.
///
/// An empty requirement, or the single sentinel value `"Any"`, is the
/// identity. When `"Any"` appears alongside concrete values it widens rather
/// than bypasses: every candidate not already kept is appended after the
/// concrete matches, preserving input order in both halves. A long-standing
/// quirk of the results form: "Any" runs as a second pass, not a
/// short-circuit.
#[must_use]
pub fn filter_by_attribute<'a>(
    pool: Vec<&'a Recipe>,
    required_values: &[String],
    attribute: ListAttribute,
) -> Vec<&'a Recipe> {
    if required_values.is_empty()
        || (required_values.len() == 1 && required_values[0] == ANY_FILTER_VALUE)
    {
        return pool;
    }

    let mut kept: Vec<&Recipe> = pool
        .iter()
        .copied()
        .filter(|recipe| {
            attribute
                .values(recipe)
                .iter()
                .any(|value| required_values.contains(value))
        })
        .collect();

    if required_values.iter().any(|value| value == ANY_FILTER_VALUE) {
        for recipe in pool {
            if !kept.iter().any(|included| std::ptr::eq(*included, recipe)) {
                kept.push(recipe);
            }
        }
    }

    kept
}
