// ABOUTME: Core data models for the recipe catalog
// ABOUTME: Recipe records, snapshots, and the query constraint specification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! Core data models

/// The query constraint specification submitted by the presentation layer
pub mod query;
/// Recipe records and their sub-structures
pub mod recipe;

pub use query::{RecipeQuery, SortDirection, SortSpec};
pub use recipe::{
    CaloricBreakdown, Ingredient, InstructionStep, Measurement, Recipe, RecipeSnapshot,
};
