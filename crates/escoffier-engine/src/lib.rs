// ABOUTME: Filter-and-rank engine for the Escoffier recipe catalog
// ABOUTME: Extracted into its own crate for parallel compilation and modularity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

#![deny(unsafe_code)]

//! # Escoffier Engine
//!
//! The filter-and-rank core: given an in-memory recipe pool and a constraint
//! specification, produce a deterministically ordered result list. The whole
//! crate is pure and synchronous: no I/O, no shared state, no blocking.
//! Callers invoking it from a concurrent context hand each invocation its
//! own immutable view of the pool.
//!
//! ## Stages
//!
//! candidate restriction → ingredient tiering → cuisine filter → diet filter
//! → measure extraction → multi-key sort. See [`pipeline::run`].

/// Inclusion filters: ingredient tiering and list-attribute matching
pub mod filters;
/// Ingredient match scoring
pub mod matcher;
/// Sortable measure extraction
pub mod measures;
/// The full pipeline orchestrator
pub mod pipeline;
/// Multi-key stable sorting
pub mod sorter;

pub use filters::{filter_by_attribute, filter_by_ingredients, ListAttribute};
pub use matcher::match_count;
pub use measures::{extract, RecipeMeasures};
pub use pipeline::{run, RankedDish};
pub use sorter::apply_sorts;
