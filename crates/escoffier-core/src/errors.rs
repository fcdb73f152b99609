// ABOUTME: Unified error type for catalog operations across the workspace
// ABOUTME: CatalogError enum with constructor helpers and a CatalogResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Catalog Error Types
//!
//! The filter-and-rank engine itself has no fatal error surface: missing
//! nutrient data degrades to a sentinel amount, malformed records are skipped
//! with a diagnostic, and an empty result set is a valid outcome. The errors
//! here belong to the glue around the engine: unreadable snapshots and
//! unparseable query fields.

use thiserror::Error;

/// Errors produced by the catalog glue layer.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A query form field failed validation
    #[error("invalid query field '{field}': {reason}")]
    InvalidQuery {
        /// Name of the offending form field
        field: String,
        /// Why the field was rejected
        reason: String,
    },

    /// A snapshot file could not be read or written
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A record or snapshot failed to serialize or deserialize
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CatalogError {
    /// Create an "invalid query" error for a named form field
    #[must_use]
    pub fn invalid_query(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the catalog crates
pub type CatalogResult<T> = Result<T, CatalogError>;
