// ABOUTME: Escoffier recipe catalog service layer
// ABOUTME: Store, browse aggregations, wire-format query parsing, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

#![deny(unsafe_code)]

//! # Escoffier Catalog
//!
//! Service layer tying the catalog together: an in-memory recipe store, the
//! browse aggregations, the presentation wire-format parsing, and query
//! execution with log correlation. The algorithmic core lives in
//! [`escoffier_engine`]; payload ingestion lives in [`escoffier_providers`].

/// Browse aggregations and lookups over the pool
pub mod catalog;
/// Structured logging configuration
pub mod logging;
/// Presentation wire-format parsing into [`escoffier_core::models::RecipeQuery`]
pub mod query;
/// Query execution with log correlation
pub mod service;
/// In-memory recipe store
pub mod store;
