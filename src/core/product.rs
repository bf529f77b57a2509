//! Product catalog business logic - Handles all catalog operations.
//!
//! This module persists computed pricing scenarios as named products and
//! provides functions for creating, retrieving, updating, listing, and
//! soft-deleting them. The catalog stores the engine's numbers verbatim and
//! never recomputes them; editing a product means pricing it again and
//! replacing the stored computation at the same id. All functions are async
//! and return Result types for proper error handling throughout the system.

use crate::{
    config::currencies,
    core::{materials::MaterialEntry, pricing::Quote},
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Sort order for catalog listings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProductSort {
    /// Most recently created first (the catalog default)
    Newest,
    /// Highest profit margin first
    Margin,
}

/// Retrieves all active (non-deleted) products, newest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_active_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    list_products(db, ProductSort::Newest).await
}

/// Retrieves all active products in the requested sort order.
///
/// Ties on `created_at` fall back to id order so listings are stable.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_products(
    db: &DatabaseConnection,
    sort: ProductSort,
) -> Result<Vec<product::Model>> {
    let query = Product::find().filter(product::Column::IsDeleted.eq(false));

    let query = match sort {
        ProductSort::Newest => query
            .order_by_desc(product::Column::CreatedAt)
            .order_by_desc(product::Column::Id),
        ProductSort::Margin => query
            .order_by_desc(product::Column::ProfitMarginPercentage)
            .order_by_desc(product::Column::Id),
    };

    query.all(db).await.map_err(Into::into)
}

/// Finds a specific product by its name, returning None if not found or deleted.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Name.eq(name))
        .filter(product::Column::IsDeleted.eq(false))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Decodes the JSON-encoded material list stored on a product.
///
/// # Errors
/// Returns an error if the stored document is not valid JSON for a material
/// list.
pub fn decode_materials(model: &product::Model) -> Result<Vec<MaterialEntry>> {
    serde_json::from_str(&model.materials).map_err(Into::into)
}

/// Validates the user-supplied product fields shared by create and update.
fn validate_product_fields(name: &str, currency: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Product name cannot be empty".to_string(),
        });
    }

    if currencies::get(currency).is_none() {
        return Err(Error::UnknownCurrency {
            code: currency.to_string(),
        });
    }

    Ok(())
}

/// Creates a new product from a computed quote, performing input validation.
///
/// The quote's breakdown and pricing figures are stored as-is; the catalog
/// trusts the engine and does not recompute.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The currency code is not in the currency table
/// - The material list cannot be serialized
/// - The database insert operation fails
pub async fn create_product(
    db: &DatabaseConnection,
    name: String,
    category: String,
    color: String,
    currency: &str,
    quote: &Quote,
) -> Result<product::Model> {
    validate_product_fields(&name, currency)?;

    let materials = serde_json::to_string(&quote.materials)?;
    let now = chrono::Utc::now().naive_utc();

    let product = product::ActiveModel {
        name: Set(name.trim().to_string()),
        category: Set(category),
        color: Set(color),
        currency: Set(currency.to_string()),
        materials: Set(materials),
        printing_cost: Set(quote.breakdown.printing_cost),
        labor_cost: Set(quote.breakdown.labor_cost),
        markup_percentage: Set(quote.pricing.markup_percentage),
        waste_percentage: Set(quote.breakdown.waste_percentage),
        material_cost_per_item: Set(quote.breakdown.material_cost_per_item),
        base_cost: Set(quote.pricing.base_cost),
        selling_price: Set(quote.pricing.selling_price),
        profit: Set(quote.pricing.profit),
        profit_margin_percentage: Set(quote.pricing.profit_margin_percentage),
        is_deleted: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = product.insert(db).await?;
    info!(product_id = created.id, name = %created.name, "Created product");
    Ok(created)
}

/// Replaces an existing product's details and computation (full re-edit).
///
/// The new quote replaces every stored figure; `created_at` is preserved and
/// `updated_at` is refreshed.
///
/// # Errors
/// Returns an error if:
/// - The product name is empty or whitespace-only
/// - The currency code is not in the currency table
/// - The product does not exist or is already deleted
/// - The database update operation fails
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    name: String,
    category: String,
    color: String,
    currency: &str,
    quote: &Quote,
) -> Result<product::Model> {
    validate_product_fields(&name, currency)?;

    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            name: product_id.to_string(),
        })?
        .into();

    if *product.is_deleted.as_ref() {
        return Err(Error::ProductNotFound {
            name: product_id.to_string(),
        });
    }

    product.name = Set(name.trim().to_string());
    product.category = Set(category);
    product.color = Set(color);
    product.currency = Set(currency.to_string());
    product.materials = Set(serde_json::to_string(&quote.materials)?);
    product.printing_cost = Set(quote.breakdown.printing_cost);
    product.labor_cost = Set(quote.breakdown.labor_cost);
    product.markup_percentage = Set(quote.pricing.markup_percentage);
    product.waste_percentage = Set(quote.breakdown.waste_percentage);
    product.material_cost_per_item = Set(quote.breakdown.material_cost_per_item);
    product.base_cost = Set(quote.pricing.base_cost);
    product.selling_price = Set(quote.pricing.selling_price);
    product.profit = Set(quote.pricing.profit);
    product.profit_margin_percentage = Set(quote.pricing.profit_margin_percentage);
    product.updated_at = Set(chrono::Utc::now().naive_utc());

    let updated = product.update(db).await?;
    info!(product_id = updated.id, name = %updated.name, "Updated product");
    Ok(updated)
}

/// Soft deletes a product by marking it as deleted, preserving its data.
///
/// # Errors
/// Returns an error if:
/// - The product does not exist or is already deleted
/// - The database update operation fails
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<product::Model> {
    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::ProductNotFound {
            name: product_id.to_string(),
        })?
        .into();

    if *product.is_deleted.as_ref() {
        return Err(Error::ProductNotFound {
            name: product_id.to_string(),
        });
    }

    product.is_deleted = Set(true);
    product.updated_at = Set(chrono::Utc::now().naive_utc());

    let deleted = product.update(db).await?;
    info!(product_id = deleted.id, name = %deleted.name, "Deleted product");
    Ok(deleted)
}
