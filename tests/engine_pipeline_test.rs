// ABOUTME: End-to-end tests for the filter-and-rank pipeline orchestrator
// ABOUTME: Candidate restriction, chained filters, malformed-record skips, sorting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

mod common;

use common::{
    names, recipe, with_cuisines, with_diets, with_ingredients, with_prep_time,
};
use escoffier_core::constants::SortKey;
use escoffier_core::models::{RecipeQuery, SortDirection, SortSpec};
use escoffier_engine::pipeline::run;

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[test]
fn pool_is_restricted_to_the_candidate_names() {
    let pool = vec![recipe(1, "Carbonara"), recipe(2, "Pho"), recipe(3, "Ramen")];
    let query = RecipeQuery::for_candidates("Main Course", owned(&["Pho", "Ramen"]));

    let ranked = run(&pool, &query);

    assert_eq!(names(&ranked), vec!["Pho", "Ramen"]);
}

#[test]
fn filters_chain_in_order() {
    let pool = vec![
        with_diets(
            with_cuisines(
                with_ingredients(recipe(1, "Lentil Curry"), &["lentils", "onion"]),
                &["Indian"],
            ),
            &["Vegan"],
        ),
        with_diets(
            with_cuisines(
                with_ingredients(recipe(2, "Butter Chicken"), &["chicken", "onion"]),
                &["Indian"],
            ),
            &[],
        ),
        with_diets(
            with_cuisines(
                with_ingredients(recipe(3, "Onion Soup"), &["onion", "stock"]),
                &["French"],
            ),
            &["Vegetarian"],
        ),
    ];
    let query = RecipeQuery::for_candidates(
        "Main Course",
        owned(&["Lentil Curry", "Butter Chicken", "Onion Soup"]),
    )
    .with_ingredients(owned(&["onion"]))
    .with_cuisines(owned(&["Indian"]))
    .with_diets(owned(&["Vegan"]));

    let ranked = run(&pool, &query);

    assert_eq!(names(&ranked), vec!["Lentil Curry"]);
}

#[test]
fn malformed_records_are_skipped_not_fatal() {
    let mut broken = recipe(2, "Mystery Dish");
    broken.properties.clear();
    let pool = vec![recipe(1, "Carbonara"), broken, recipe(3, "Pho")];
    let query = RecipeQuery::for_candidates(
        "Main Course",
        owned(&["Carbonara", "Mystery Dish", "Pho"]),
    );

    let ranked = run(&pool, &query);

    assert_eq!(names(&ranked), vec!["Carbonara", "Pho"]);
}

#[test]
fn sort_specs_order_the_final_projection() {
    let pool = vec![
        with_prep_time(recipe(1, "Slow"), 90),
        with_prep_time(recipe(2, "Quick"), 15),
        with_prep_time(recipe(3, "Medium"), 45),
    ];
    let query = RecipeQuery::for_candidates("Main Course", owned(&["Slow", "Quick", "Medium"]))
        .with_sorts(vec![SortSpec::new(
            SortKey::PreparationTime,
            SortDirection::Ascending,
        )]);

    let ranked = run(&pool, &query);

    assert_eq!(names(&ranked), vec!["Quick", "Medium", "Slow"]);
    assert_eq!(ranked[0].id, 2);
    assert!((ranked[0].measures.get(SortKey::PreparationTime) - 15.0).abs() < f64::EPSILON);
}

#[test]
fn empty_result_is_a_valid_outcome() {
    let pool = vec![recipe(1, "Carbonara")];
    let query = RecipeQuery::for_candidates("Main Course", owned(&["Pho"]));

    let ranked = run(&pool, &query);

    assert!(ranked.is_empty());
}

#[test]
fn pool_order_survives_when_no_constraints_apply() {
    let pool = vec![recipe(1, "First"), recipe(2, "Second"), recipe(3, "Third")];
    let query =
        RecipeQuery::for_candidates("Main Course", owned(&["First", "Second", "Third"]));

    let ranked = run(&pool, &query);

    assert_eq!(names(&ranked), vec!["First", "Second", "Third"]);
}
