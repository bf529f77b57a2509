//! Shared test utilities for `PrintPricer`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test products and quotes with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        materials::{MaterialEntry, MaterialUnit, WastePolicy},
        pricing::{Overhead, Quote, RoundingPolicy, quote},
        product,
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// The seeded sample material: one sheet batch costing 100 over 50 items.
pub fn sample_materials() -> Vec<MaterialEntry> {
    vec![MaterialEntry::new(
        "Sample Material",
        MaterialUnit::Sheet,
        100.0,
        50,
    )]
}

/// A quote from the default scenario: sample material, printing 5, labor 20,
/// 30% markup, no waste, no rounding. Sells at 35.10 with a 30.0% margin.
pub fn sample_quote() -> Quote {
    custom_quote(sample_materials(), 30.0)
}

/// A quote over custom materials and markup, with the default overheads and
/// no waste or rounding so margins equal markups.
pub fn custom_quote(materials: Vec<MaterialEntry>, markup_percentage: f64) -> Quote {
    quote(
        materials,
        Overhead::new(5.0, 20.0),
        markup_percentage,
        WastePolicy::NoWaste,
        RoundingPolicy::NoRounding,
    )
    .unwrap()
}

/// Creates a test product from the default sample quote.
///
/// # Defaults
/// * `category`: "cards"
/// * `color`: `"#0d6efd"`
/// * `currency`: "PHP"
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        name.to_string(),
        "cards".to_string(),
        "#0d6efd".to_string(),
        "PHP",
        &sample_quote(),
    )
    .await
}

/// Creates a test product with a custom markup percentage.
/// Use this when tests need products with distinct margins.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    markup_percentage: f64,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        name.to_string(),
        "cards".to_string(),
        "#0d6efd".to_string(),
        "PHP",
        &custom_quote(sample_materials(), markup_percentage),
    )
    .await
}
