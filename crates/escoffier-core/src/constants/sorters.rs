// ABOUTME: The fixed sorter catalog mapping measure positions to sort keys
// ABOUTME: SortKey enum with positional contract, key ids, and display labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Sorter Catalog
//!
//! A fixed ordered table of 11 sortable measures. The position of each key is
//! the contract between the caller (which submits `"index-direction"` sort
//! specs) and the measure extractor (which fills the measure vector in the
//! same order). Reordering or renumbering this table is a breaking change.

use serde::{Deserialize, Serialize};

/// One sortable measure in the fixed catalog order.
///
/// The discriminant of each variant is its position in the measure vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(usize)]
pub enum SortKey {
    /// Ingredients beyond the required set (total minus match count)
    ExtraIngredients = 0,
    /// Preparation time in minutes
    PreparationTime = 1,
    /// "Calories" nutrient amount
    Calories = 2,
    /// "Sugar" nutrient amount
    Sugar = 3,
    /// "Cholesterol" nutrient amount
    Cholesterol = 4,
    /// Glycemic index (first property entry)
    GlycemicIndex = 5,
    /// Glycemic load (second property entry)
    GlycemicLoad = 6,
    /// Nutrition score (third property entry)
    NutritionScore = 7,
    /// Caloric-breakdown protein percentage
    PercentageProtein = 8,
    /// Caloric-breakdown fat percentage
    PercentageFat = 9,
    /// Caloric-breakdown carbohydrate percentage
    PercentageCarbohydrates = 10,
}

impl SortKey {
    /// Number of entries in the sorter catalog
    pub const COUNT: usize = 11;

    /// All keys in catalog order
    pub const ALL: [Self; Self::COUNT] = [
        Self::ExtraIngredients,
        Self::PreparationTime,
        Self::Calories,
        Self::Sugar,
        Self::Cholesterol,
        Self::GlycemicIndex,
        Self::GlycemicLoad,
        Self::NutritionScore,
        Self::PercentageProtein,
        Self::PercentageFat,
        Self::PercentageCarbohydrates,
    ];

    /// Position of this key in the measure vector
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resolve a wire-format index back to a catalog key
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Stable key identifier used in wire formats and logs
    #[must_use]
    pub const fn key_id(self) -> &'static str {
        match self {
            Self::ExtraIngredients => "extra-ingredients",
            Self::PreparationTime => "preparation-time",
            Self::Calories => "calories",
            Self::Sugar => "sugar",
            Self::Cholesterol => "cholesterol",
            Self::GlycemicIndex => "glycemic-index",
            Self::GlycemicLoad => "glycemic-load",
            Self::NutritionScore => "nutrition-score",
            Self::PercentageProtein => "percentage-protein",
            Self::PercentageFat => "percentage-fat",
            Self::PercentageCarbohydrates => "percentage-carbohydrates",
        }
    }

    /// Display label for this key.
    ///
    /// For `Calories`, `Sugar`, and `Cholesterol` the label is also the exact
    /// (case-sensitive) name looked up in a recipe's `Nutrients` list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExtraIngredients => "Extra Ingredients",
            Self::PreparationTime => "Ready in minutes",
            Self::Calories => "Calories",
            Self::Sugar => "Sugar",
            Self::Cholesterol => "Cholesterol",
            Self::GlycemicIndex => "Glycemic Index",
            Self::GlycemicLoad => "Glycemic Load",
            Self::NutritionScore => "Nutrition Score",
            Self::PercentageProtein => "Percentage Protein",
            Self::PercentageFat => "Percentage Fat",
            Self::PercentageCarbohydrates => "Percentage Carbohydrates",
        }
    }
}

/// The sorter catalog as (key id, display label) pairs in contract order
#[must_use]
pub fn sorter_catalog() -> [(&'static str, &'static str); SortKey::COUNT] {
    SortKey::ALL.map(|key| (key.key_id(), key.label()))
}
