// ABOUTME: Query constraint specification built by the presentation layer
// ABOUTME: RecipeQuery, SortSpec, and SortDirection types consumed by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Query Types
//!
//! The constraint specification the caller assembles from user input and
//! hands to the filter-and-rank pipeline.

use crate::constants::SortKey;
use serde::{Deserialize, Serialize};

/// Direction of one sort pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest measure first
    Ascending,
    /// Largest measure first
    Descending,
}

/// One (measure key, direction) sort pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Which measure to sort by
    pub key: SortKey,
    /// Which way to order it
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a sort pass
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// The full constraint specification for one query.
///
/// All list fields default to empty, which every pipeline stage treats as
/// "no constraint". Sort passes apply in order; later passes take precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeQuery {
    /// Canonical dish-type name the candidate set was browsed under
    pub dish_type: String,
    /// Candidate dish names the pipeline is restricted to
    pub candidate_names: Vec<String>,
    /// Required ingredient tokens, lower-cased
    pub required_ingredients: Vec<String>,
    /// Required cuisine labels (may contain the "Any" sentinel)
    pub required_cuisines: Vec<String>,
    /// Required diet labels (may contain the "Any" sentinel)
    pub required_diets: Vec<String>,
    /// Ordered sort passes
    pub sort_specs: Vec<SortSpec>,
}

impl RecipeQuery {
    /// Start a query over a browsed candidate set
    #[must_use]
    pub fn for_candidates(dish_type: impl Into<String>, candidate_names: Vec<String>) -> Self {
        Self {
            dish_type: dish_type.into(),
            candidate_names,
            ..Self::default()
        }
    }

    /// Require ingredient tokens (callers lower-case them)
    #[must_use]
    pub fn with_ingredients(mut self, tokens: Vec<String>) -> Self {
        self.required_ingredients = tokens;
        self
    }

    /// Require cuisine labels
    #[must_use]
    pub fn with_cuisines(mut self, cuisines: Vec<String>) -> Self {
        self.required_cuisines = cuisines;
        self
    }

    /// Require diet labels
    #[must_use]
    pub fn with_diets(mut self, diets: Vec<String>) -> Self {
        self.required_diets = diets;
        self
    }

    /// Apply sort passes in order
    #[must_use]
    pub fn with_sorts(mut self, sort_specs: Vec<SortSpec>) -> Self {
        self.sort_specs = sort_specs;
        self
    }
}
