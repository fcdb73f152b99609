// ABOUTME: Presentation wire-format parsing into the query constraint specification
// ABOUTME: "||"-joined multi-value fields and "index-direction" sort specs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Query Parsing
//!
//! The presentation layer submits multi-value form fields as `"||"`-joined
//! strings and sort passes as `"index-direction"` pairs (e.g.
//! `"2-descending"`). This module parses that wire format into a
//! [`RecipeQuery`]. Parsing is strict: an index outside the sorter catalog
//! or a direction other than `ascending`/`descending` is an invalid-query
//! error rather than a silent fallback.

use escoffier_core::constants::{SortKey, MULTI_VALUE_SEPARATOR};
use escoffier_core::errors::{CatalogError, CatalogResult};
use escoffier_core::models::{RecipeQuery, SortDirection, SortSpec};
use serde::Deserialize;

/// Raw form fields as the presentation layer submits them.
///
/// Field names follow the original form contract (`dishType`, `dishNames`,
/// `sortInputs`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryForm {
    /// Canonical dish-type name the candidate set was browsed under
    #[serde(rename = "dishType")]
    pub dish_type: String,
    /// `"||"`-joined candidate dish names
    #[serde(rename = "dishNames")]
    pub dish_names: String,
    /// `"||"`-joined required ingredients
    #[serde(default)]
    pub ingredients: String,
    /// `"||"`-joined required cuisines
    #[serde(default)]
    pub cuisines: String,
    /// `"||"`-joined required diets
    #[serde(default)]
    pub diets: String,
    /// `"||"`-joined sort specs
    #[serde(rename = "sortInputs", default)]
    pub sort_inputs: String,
}

/// Split a `"||"`-joined multi-value field; the empty string is an empty list
#[must_use]
pub fn split_multi_value(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(MULTI_VALUE_SEPARATOR)
            .map(str::to_owned)
            .collect()
    }
}

/// Split an ingredients field, lower-casing the tokens
#[must_use]
pub fn split_ingredients(raw: &str) -> Vec<String> {
    split_multi_value(&raw.to_lowercase())
}

/// Parse one `"index-direction"` sort spec.
///
/// # Errors
///
/// Returns an invalid-query error when the spec is not of the
/// `index-direction` form, the index does not name a sorter-catalog entry,
/// or the direction is not exactly `ascending` or `descending`.
pub fn parse_sort_spec(raw: &str) -> CatalogResult<SortSpec> {
    let (index_part, direction_part) = raw.split_once('-').ok_or_else(|| {
        CatalogError::invalid_query("sortInputs", format!("expected 'index-direction', got '{raw}'"))
    })?;
    let index: usize = index_part.parse().map_err(|_| {
        CatalogError::invalid_query("sortInputs", format!("sort index '{index_part}' is not a number"))
    })?;
    let key = SortKey::from_index(index).ok_or_else(|| {
        CatalogError::invalid_query(
            "sortInputs",
            format!("sort index {index} is outside the sorter catalog"),
        )
    })?;
    let direction = match direction_part {
        "ascending" => SortDirection::Ascending,
        "descending" => SortDirection::Descending,
        other => {
            return Err(CatalogError::invalid_query(
                "sortInputs",
                format!("unknown sort direction '{other}'"),
            ))
        }
    };
    Ok(SortSpec::new(key, direction))
}

/// Parse a `"||"`-joined list of sort specs, preserving submission order.
///
/// # Errors
///
/// Returns the first spec's parse error, if any.
pub fn parse_sort_specs(raw: &str) -> CatalogResult<Vec<SortSpec>> {
    split_multi_value(raw)
        .iter()
        .map(|spec| parse_sort_spec(spec))
        .collect()
}

/// Assemble a [`RecipeQuery`] from raw form fields.
///
/// # Errors
///
/// Returns an invalid-query error when the sort specs fail to parse.
pub fn parse_query(form: &QueryForm) -> CatalogResult<RecipeQuery> {
    Ok(RecipeQuery {
        dish_type: form.dish_type.clone(),
        candidate_names: split_multi_value(&form.dish_names),
        required_ingredients: split_ingredients(&form.ingredients),
        required_cuisines: split_multi_value(&form.cuisines),
        required_diets: split_multi_value(&form.diets),
        sort_specs: parse_sort_specs(&form.sort_inputs)?,
    })
}
