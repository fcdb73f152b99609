// ABOUTME: External recipe API payload transformation for the Escoffier catalog
// ABOUTME: Decodes provider search pages and converts them into catalog records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

#![deny(unsafe_code)]

//! # Escoffier Providers
//!
//! Typed decoding and conversion of external recipe API payloads into
//! catalog records. Fetching the payloads, including retry and pagination,
//! belongs to the surrounding I/O layer; this crate only sees bodies that
//! have already arrived.

/// Spoonacular complex-search payloads
pub mod spoonacular;

pub use spoonacular::{convert_page, decode_page, IngestError, SearchPage};
