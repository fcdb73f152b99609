// ABOUTME: Tests for the in-memory store and the snapshot serde contract
// ABOUTME: Round-trips through the original catalog field names via tempfiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

mod common;

use anyhow::Result;
use common::{recipe, with_ingredients};
use escoffier_catalog::store::RecipeStore;
use escoffier_core::models::{Recipe, RecipeSnapshot};
use std::fs;

#[test]
fn snapshot_round_trips_through_a_file() -> Result<()> {
    let pool = vec![
        with_ingredients(recipe(1, "Carbonara"), &["egg", "pasta"]),
        recipe(2, "Pho"),
    ];
    let snapshot = RecipeSnapshot::new(pool.clone());

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("catalog.json");
    fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;

    let store = RecipeStore::load(&path)?;

    assert_eq!(store.len(), 2);
    assert_eq!(store.pool(), pool.as_slice());
    Ok(())
}

#[test]
fn records_serialize_with_the_original_field_names() -> Result<()> {
    let subject = with_ingredients(recipe(7, "Shakshuka"), &["egg", "tomato"]);

    let value = serde_json::to_value(&subject)?;

    assert_eq!(value["_id"], 7);
    assert_eq!(value["Dish Name"], "Shakshuka");
    assert_eq!(value["Ready in minutes"], 30);
    assert_eq!(value["Ingredients"][0]["Name"], "egg");
    assert_eq!(value["Caloric Breakdown"]["Percentage Protein"], 25.0);
    assert!(value["Properties"].as_array().is_some());
    Ok(())
}

#[test]
fn stored_documents_load_unchanged() -> Result<()> {
    // A document shaped exactly like the original catalog export.
    let body = r#"{
        "_id": 101,
        "Dish Name": "Minestrone",
        "Ready in minutes": 55,
        "Servings": 6,
        "Nutrients": [{"Name": "Calories", "Amount": 210.0, "Unit": "kcal"}],
        "Properties": [
            {"Name": "Glycemic Index", "Amount": 44.0, "Unit": ""},
            {"Name": "Glycemic Load", "Amount": 12.0, "Unit": ""},
            {"Name": "Nutrition Score", "Amount": 78.0, "Unit": "%"}
        ],
        "Flavonoids": [],
        "Ingredients": [{"_id": 11, "Name": "white beans", "Amount": 200.0, "Unit": "g"}],
        "Caloric Breakdown": {
            "Percentage Protein": 20.0,
            "Percentage Fat": 25.0,
            "Percentage Carbohydrates": 55.0
        },
        "Weight per serving in grams": 320.0,
        "Cuisine": ["Italian"],
        "Dish Type": ["soup"],
        "Diet Type": ["Vegetarian"],
        "Instructions": [{"step": 1, "instruction": "Simmer the vegetables."}]
    }"#;

    let loaded: Recipe = serde_json::from_str(body)?;

    assert_eq!(loaded.id, 101);
    assert_eq!(loaded.dish_name, "Minestrone");
    assert_eq!(loaded.ready_in_minutes, 55);
    assert_eq!(loaded.properties.len(), 3);
    assert_eq!(loaded.nutrient_amount("Calories"), Some(210.0));
    assert!((loaded.caloric_breakdown.percent_carbohydrates - 55.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn name_projection_restricts_the_pool() {
    let store = RecipeStore::new(vec![
        recipe(1, "Carbonara"),
        recipe(2, "Pho"),
        recipe(3, "Ramen"),
    ]);

    let projected = store.pool_named(&["Pho".to_owned(), "Ramen".to_owned()]);

    let names: Vec<&str> = projected.iter().map(|r| r.dish_name.as_str()).collect();
    assert_eq!(names, vec!["Pho", "Ramen"]);
}
