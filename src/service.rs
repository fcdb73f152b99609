// ABOUTME: Query execution wrapper adding per-invocation log correlation
// ABOUTME: Tags each pipeline run with a generated query id span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Query Service
//!
//! Thin wrapper over [`escoffier_engine::pipeline::run`] that tags every
//! invocation with a query id so the per-stage diagnostics of one run can be
//! correlated in logs.

use crate::store::RecipeStore;
use escoffier_core::models::RecipeQuery;
use escoffier_engine::pipeline::{self, RankedDish};
use tracing::{debug, info_span};
use uuid::Uuid;

/// Execute a parsed query against the store's pool.
#[must_use]
pub fn run_query(store: &RecipeStore, query: &RecipeQuery) -> Vec<RankedDish> {
    let query_id = Uuid::new_v4();
    let span = info_span!("recipe_query", %query_id, dish_type = %query.dish_type);
    let _guard = span.enter();
    let ranked = pipeline::run(store.pool(), query);
    debug!(results = ranked.len(), "query complete");
    ranked
}
