// ABOUTME: Dish-type category mapping between canonical UI names and raw record labels
// ABOUTME: DishCategory enum with synonym lists, labels, and membership checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

//! # Dish-Type Mapping
//!
//! The external recipe API tags records with loose, overlapping dish-type
//! labels ("lunch", "main dish", "hor d'oeuvre", ...). The catalog browses by
//! twelve canonical categories, each mapped to the raw labels it covers.
//! The mapping is read-only for the process lifetime.

use serde::{Deserialize, Serialize};

/// One of the twelve canonical browse categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishCategory {
    /// Breakfast, brunch, and morning meals
    Breakfast,
    /// Starters, appetizers, and snacks
    StartersAppetizers,
    /// Main courses, lunches, and dinners
    MainCourse,
    /// Side dishes
    SideDish,
    /// Soups
    Soup,
    /// Salads
    Salad,
    /// Desserts
    Desserts,
    /// Beverages and drinks
    Beverage,
    /// Breads
    Bread,
    /// Finger food
    Fingerfood,
    /// Sauces, condiments, dips, and spreads
    SauceCondiments,
    /// Seasonings and marinades
    Seasoning,
}

impl DishCategory {
    /// All categories in presentation order
    pub const ALL: [Self; 12] = [
        Self::Breakfast,
        Self::StartersAppetizers,
        Self::MainCourse,
        Self::SideDish,
        Self::Soup,
        Self::Salad,
        Self::Desserts,
        Self::Beverage,
        Self::Bread,
        Self::Fingerfood,
        Self::SauceCondiments,
        Self::Seasoning,
    ];

    /// Canonical display name shown in the UI
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::StartersAppetizers => "Starters & Appetizers",
            Self::MainCourse => "Main Course",
            Self::SideDish => "Side-Dish",
            Self::Soup => "Soup",
            Self::Salad => "Salad",
            Self::Desserts => "Desserts",
            Self::Beverage => "Beverage",
            Self::Bread => "Bread",
            Self::Fingerfood => "Fingerfood",
            Self::SauceCondiments => "Sauce & Condiments",
            Self::Seasoning => "Seasoning",
        }
    }

    /// Raw record labels this category covers
    #[must_use]
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Breakfast => &["breakfast", "brunch", "morning meal"],
            Self::StartersAppetizers => &[
                "starter",
                "antipasto",
                "antipasti",
                "snack",
                "appetizer",
                "hor d'oeuvre",
            ],
            Self::MainCourse => &["main course", "lunch", "main dish", "dinner"],
            Self::SideDish => &["side dish"],
            Self::Soup => &["soup"],
            Self::Salad => &["salad"],
            Self::Desserts => &["dessert"],
            Self::Beverage => &["beverage", "drink"],
            Self::Bread => &["bread"],
            Self::Fingerfood => &["fingerfood"],
            Self::SauceCondiments => &["sauce", "condiment", "dip", "spread"],
            Self::Seasoning => &["seasoning", "marinade"],
        }
    }

    /// Representative raw label used for per-category occurrence counts
    #[must_use]
    pub const fn representative(self) -> &'static str {
        self.synonyms()[0]
    }

    /// Resolve a canonical display name back to its category
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Whether any of a record's raw dish-type labels falls in this category
    #[must_use]
    pub fn matches(self, dish_types: &[String]) -> bool {
        dish_types
            .iter()
            .any(|raw| self.synonyms().contains(&raw.as_str()))
    }
}
