// ABOUTME: Tests for Spoonacular payload decoding and conversion to catalog records
// ABOUTME: Duplicate-id skipping, instruction flattening, nutrition field lifting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence

use escoffier_providers::spoonacular::{convert_page, decode_page};

fn result_json(id: u64, title: &str) -> String {
    format!(
        r#"{{
            "id": {id},
            "title": "{title}",
            "readyInMinutes": 25,
            "servings": 2,
            "cuisines": ["Italian"],
            "dishTypes": ["lunch", "main course"],
            "diets": ["vegetarian"],
            "analyzedInstructions": [
                {{"steps": [
                    {{"number": 1, "step": "Boil the pasta."}},
                    {{"number": 2, "step": "Whisk the eggs."}}
                ]}},
                {{"steps": [
                    {{"number": 1, "step": "Combine and serve."}}
                ]}}
            ],
            "nutrition": {{
                "nutrients": [
                    {{"name": "Calories", "amount": 510.0, "unit": "kcal"}},
                    {{"name": "Sugar", "amount": 3.2, "unit": "g"}}
                ],
                "properties": [
                    {{"name": "Glycemic Index", "amount": 52.0, "unit": ""}},
                    {{"name": "Glycemic Load", "amount": 18.0, "unit": ""}},
                    {{"name": "Nutrition Score", "amount": 44.0, "unit": "%"}}
                ],
                "flavonoids": [],
                "ingredients": [
                    {{"id": 1001, "name": "spaghetti", "amount": 200.0, "unit": "g"}},
                    {{"id": 1002, "name": "egg", "amount": 2.0, "unit": ""}}
                ],
                "caloricBreakdown": {{
                    "percentProtein": 18.0,
                    "percentFat": 32.0,
                    "percentCarbs": 50.0
                }},
                "weightPerServing": {{"amount": 310.0, "unit": "g"}}
            }}
        }}"#
    )
}

fn page_json(results: &[String]) -> String {
    format!(
        r#"{{"results": [{}], "offset": 0, "number": 10, "totalResults": 42}}"#,
        results.join(",")
    )
}

#[test]
fn decodes_and_converts_a_page() {
    let body = page_json(&[result_json(301, "Carbonara")]);

    let page = decode_page(&body).unwrap();
    assert_eq!(page.total_results, 42);

    let recipes = convert_page(page);
    assert_eq!(recipes.len(), 1);
    let converted = &recipes[0];

    assert_eq!(converted.id, 301);
    assert_eq!(converted.dish_name, "Carbonara");
    assert_eq!(converted.ready_in_minutes, 25);
    assert_eq!(converted.nutrient_amount("Calories"), Some(510.0));
    assert_eq!(converted.properties[0].name, "Glycemic Index");
    assert_eq!(converted.ingredients[1].name, "egg");
    assert!((converted.caloric_breakdown.percent_carbohydrates - 50.0).abs() < f64::EPSILON);
    assert!((converted.weight_per_serving_g - 310.0).abs() < f64::EPSILON);
    assert_eq!(converted.cuisines, vec!["Italian"]);
    assert_eq!(converted.diet_types, vec!["vegetarian"]);
}

#[test]
fn instruction_groups_flatten_in_order() {
    let body = page_json(&[result_json(301, "Carbonara")]);
    let recipes = convert_page(decode_page(&body).unwrap());

    let steps: Vec<&str> = recipes[0]
        .instructions
        .iter()
        .map(|step| step.instruction.as_str())
        .collect();

    assert_eq!(
        steps,
        vec!["Boil the pasta.", "Whisk the eggs.", "Combine and serve."]
    );
}

#[test]
fn duplicate_ids_within_a_page_convert_once() {
    let body = page_json(&[
        result_json(301, "Carbonara"),
        result_json(301, "Carbonara Again"),
        result_json(302, "Amatriciana"),
    ]);

    let recipes = convert_page(decode_page(&body).unwrap());

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].dish_name, "Carbonara");
    assert_eq!(recipes[1].dish_name, "Amatriciana");
}

#[test]
fn malformed_payload_is_a_typed_error() {
    assert!(decode_page("not json at all").is_err());
    assert!(decode_page(r#"{"results": "nope"}"#).is_err());
}
