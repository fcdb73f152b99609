// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Fixed catalogs and sentinel values for the Escoffier recipe platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! Constants module
//!
//! Fixed, process-lifetime catalogs and the sentinel values shared between
//! the presentation layer and the filter-and-rank engine.

/// Dish-type category mapping (canonical UI names to raw record synonyms)
pub mod dish_types;
/// The fixed sorter catalog (measure positions and display labels)
pub mod sorters;

pub use dish_types::DishCategory;
pub use sorters::SortKey;

/// Amount reported when a named nutrient is absent from a record.
///
/// A missing-data signal, not an error: recipes without e.g. a "Sugar"
/// entry still participate in sorting, ranked by this sentinel.
pub const MISSING_MEASURE: f64 = -1.0;

/// Attribute-filter value that widens the result to include every candidate.
pub const ANY_FILTER_VALUE: &str = "Any";

/// Separator joining multi-value fields in the presentation wire format.
pub const MULTI_VALUE_SEPARATOR: &str = "||";
