// ABOUTME: Pipeline orchestrator composing restriction, filters, extraction, and sort
// ABOUTME: Best-effort batch semantics with per-stage diagnostics, no fatal surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Pipeline Orchestrator
//!
//! Composes the engine stages into the full query sequence:
//! candidate restriction → ingredient tiering → cuisine filter → diet filter
//! → measure extraction → multi-key sort → projection.
//!
//! The run is best-effort batch: a malformed record is skipped with a logged
//! diagnostic, never aborting the pipeline; no stage retries and nothing is
//! transactional. An empty result is a valid outcome.

use crate::filters::{filter_by_attribute, filter_by_ingredients, ListAttribute};
use crate::measures::{extract, RecipeMeasures};
use crate::sorter::apply_sorts;
use escoffier_core::models::{Recipe, RecipeQuery};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// One ranked result row.
#[derive(Debug, Clone, Serialize)]
pub struct RankedDish {
    /// External recipe identifier
    pub id: u64,
    /// Display name
    pub dish_name: String,
    /// The measures the row was ranked by
    pub measures: RecipeMeasures,
}

/// Run the full filter-and-rank pipeline over an immutable pool view.
///
/// Pure with respect to the pool: records are never mutated, and every
/// invocation works entirely from its arguments, so concurrent callers each
/// passing their own view cannot interfere.
#[must_use]
pub fn run(pool: &[Recipe], query: &RecipeQuery) -> Vec<RankedDish> {
    let candidate_names: HashSet<&str> = query
        .candidate_names
        .iter()
        .map(String::as_str)
        .collect();
    let candidates: Vec<&Recipe> = pool
        .iter()
        .filter(|recipe| candidate_names.contains(recipe.dish_name.as_str()))
        .collect();
    debug!(
        candidates = candidates.len(),
        "restricted pool to candidate dish names"
    );

    let tiered = filter_by_ingredients(candidates, &query.required_ingredients);
    debug!(remaining = tiered.len(), "applied ingredient tiers");

    let by_cuisine = filter_by_attribute(tiered, &query.required_cuisines, ListAttribute::Cuisine);
    debug!(remaining = by_cuisine.len(), "applied cuisine filter");

    let by_diet = filter_by_attribute(by_cuisine, &query.required_diets, ListAttribute::DietType);
    debug!(remaining = by_diet.len(), "applied diet filter");

    let mut ranked: Vec<RankedDish> = Vec::with_capacity(by_diet.len());
    for recipe in by_diet {
        match extract(recipe, &query.required_ingredients) {
            Some(measures) => ranked.push(RankedDish {
                id: recipe.id,
                dish_name: recipe.dish_name.clone(),
                measures,
            }),
            None => warn!(
                dish = %recipe.dish_name,
                "skipping record with an incomplete property list"
            ),
        }
    }

    apply_sorts(&mut ranked, &query.sort_specs);
    debug!(results = ranked.len(), "pipeline complete");
    ranked
}
