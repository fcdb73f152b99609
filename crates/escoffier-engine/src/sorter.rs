// ABOUTME: Multi-key sorting as sequential full stable re-sorts
// ABOUTME: Later passes take precedence; earlier order survives only through stability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Multi-key Sorter
//!
//! Each sort spec is applied as its own full stable re-sort of the whole
//! list, in submission order. The last pass therefore dominates the final
//! order; earlier passes persist only as tie-breaks through the stability of
//! each re-sort. This is deliberately not a single composite comparator.

use crate::pipeline::RankedDish;
use escoffier_core::models::{SortDirection, SortSpec};

/// Apply the sort passes in order over the ranked rows.
///
/// Empty `sort_specs` leaves the filter-stage order untouched. Measures are
/// compared with total ordering so a NaN amount in source data cannot make a
/// pass inconsistent.
pub fn apply_sorts(dishes: &mut [RankedDish], sort_specs: &[SortSpec]) {
    for spec in sort_specs {
        let key = spec.key;
        match spec.direction {
            SortDirection::Ascending => {
                dishes.sort_by(|a, b| a.measures.get(key).total_cmp(&b.measures.get(key)));
            }
            SortDirection::Descending => {
                dishes.sort_by(|a, b| b.measures.get(key).total_cmp(&a.measures.get(key)));
            }
        }
    }
}
