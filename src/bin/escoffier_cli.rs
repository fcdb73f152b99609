// ABOUTME: Escoffier CLI - command-line front end for the recipe catalog
// ABOUTME: Ingests payloads, browses categories, and runs filter-and-rank queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Escoffier Recipe Intelligence
//!
//! Usage:
//! ```bash
//! # Convert fetched complex-search pages into a catalog snapshot
//! escoffier-cli --snapshot catalog.json ingest --payload page0.json --payload page1.json
//!
//! # List the browse categories with recipe counts
//! escoffier-cli --snapshot catalog.json categories
//!
//! # Show the distinct ingredient/cuisine/diet filter options
//! escoffier-cli --snapshot catalog.json options
//!
//! # Rank main courses containing egg and flour, Italian or anything else,
//! # cheapest ingredient overhead first, then by calories
//! escoffier-cli --snapshot catalog.json results \
//!     --dish-type "Main Course" \
//!     --ingredients "egg||flour" \
//!     --cuisines "Italian||Any" \
//!     --sort "0-ascending||2-ascending"
//! ```

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use escoffier_catalog::catalog;
use escoffier_catalog::logging::LoggingConfig;
use escoffier_catalog::query::{parse_sort_specs, split_ingredients, split_multi_value};
use escoffier_catalog::service::run_query;
use escoffier_catalog::store::RecipeStore;
use escoffier_core::constants::{sorters::sorter_catalog, DishCategory};
use escoffier_core::models::{Recipe, RecipeQuery, RecipeSnapshot};
use escoffier_providers::spoonacular::{convert_page, decode_page};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "escoffier-cli",
    about = "Escoffier Recipe Catalog CLI",
    long_about = "Command-line front end for building, browsing, and querying an Escoffier catalog snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to the catalog snapshot (JSON)
    #[arg(long, global = true, default_value = "catalog.json")]
    snapshot: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Convert fetched complex-search payload pages into the snapshot
    Ingest {
        /// Payload page files (JSON bodies), in fetch order
        #[arg(long, required = true)]
        payload: Vec<PathBuf>,
    },
    /// List the browse categories with recipe counts
    Categories,
    /// Show the distinct ingredient/cuisine/diet filter options
    Options,
    /// List the sorter catalog (index, key id, label)
    Sorters,
    /// Show one recipe by display name (case-insensitive)
    Show {
        /// Dish name to look up
        #[arg(long)]
        name: String,
    },
    /// Run a filter-and-rank query over one browse category
    Results {
        /// Canonical dish-type category (e.g. "Main Course")
        #[arg(long)]
        dish_type: String,
        /// "||"-joined required ingredients
        #[arg(long, default_value = "")]
        ingredients: String,
        /// "||"-joined required cuisines ("Any" widens)
        #[arg(long, default_value = "")]
        cuisines: String,
        /// "||"-joined required diets ("Any" widens)
        #[arg(long, default_value = "")]
        diets: String,
        /// "||"-joined "index-direction" sort specs
        #[arg(long, default_value = "")]
        sort: String,
        /// Emit JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    LoggingConfig::from_env().with_level(level).init()?;

    match cli.command {
        Command::Ingest { payload } => ingest(&payload, &cli.snapshot)?,
        Command::Categories => {
            let store = RecipeStore::load(&cli.snapshot)?;
            for category in catalog::category_counts(store.pool()) {
                println!("{:<24} {}", category.label, category.count);
            }
        }
        Command::Options => {
            let store = RecipeStore::load(&cli.snapshot)?;
            let options = catalog::filter_options(store.pool());
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
        Command::Sorters => {
            for (index, (key_id, label)) in sorter_catalog().iter().enumerate() {
                println!("{index:>2}  {key_id:<26} {label}");
            }
        }
        Command::Show { name } => {
            let store = RecipeStore::load(&cli.snapshot)?;
            let found = catalog::find_by_name(store.pool(), &name)
                .ok_or_else(|| anyhow!("no recipe named '{name}'"))?;
            println!("{}", serde_json::to_string_pretty(found)?);
        }
        Command::Results {
            dish_type,
            ingredients,
            cuisines,
            diets,
            sort,
            json,
        } => {
            let store = RecipeStore::load(&cli.snapshot)?;
            let category = DishCategory::from_label(&dish_type)
                .ok_or_else(|| anyhow!("unknown dish type '{dish_type}'"))?;
            let candidate_names = catalog::select_by_dish_type(store.pool(), category)
                .into_iter()
                .map(str::to_owned)
                .collect();
            let query = RecipeQuery::for_candidates(dish_type, candidate_names)
                .with_ingredients(split_ingredients(&ingredients))
                .with_cuisines(split_multi_value(&cuisines))
                .with_diets(split_multi_value(&diets))
                .with_sorts(parse_sort_specs(&sort)?);

            let ranked = run_query(&store, &query);
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                for (position, dish) in ranked.iter().enumerate() {
                    println!("{:>3}. {}", position + 1, dish.dish_name);
                }
            }
        }
    }

    Ok(())
}

/// Decode each payload page and write the combined pool as a snapshot.
/// Ids repeated across pages keep their first occurrence, mirroring the
/// catalog's unique-identifier constraint.
fn ingest(payloads: &[PathBuf], snapshot_path: &Path) -> Result<()> {
    let mut seen = HashSet::new();
    let mut recipes: Vec<Recipe> = Vec::new();
    for path in payloads {
        let body = fs::read_to_string(path)?;
        let page = decode_page(&body)?;
        let converted = convert_page(page);
        info!(page = %path.display(), recipes = converted.len(), "converted payload page");
        recipes.extend(
            converted
                .into_iter()
                .filter(|recipe| seen.insert(recipe.id)),
        );
    }

    let snapshot = RecipeSnapshot::new(recipes);
    fs::write(snapshot_path, serde_json::to_string_pretty(&snapshot)?)?;
    info!(
        recipes = snapshot.recipes.len(),
        snapshot = %snapshot_path.display(),
        "wrote catalog snapshot"
    );
    Ok(())
}
