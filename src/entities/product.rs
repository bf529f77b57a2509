//! Product entity - A saved pricing scenario in the catalog.
//!
//! Each product stores the material entries it was costed from (as a JSON
//! document), the fixed overheads and markup that were applied, and the
//! computed cost/pricing figures exactly as the engine produced them. The
//! stored numbers are never recomputed; a full re-edit replaces them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Business Cards", "A3 Poster")
    pub name: String,
    /// Product category for organization (e.g., "cards", "large-format")
    pub category: String,
    /// Display accent color as a hex string (e.g., `"#0d6efd"`)
    pub color: String,
    /// Currency the amounts below are denominated in (e.g., "PHP")
    pub currency: String,
    /// JSON-encoded list of material entries used in the costing
    #[sea_orm(column_type = "Text")]
    pub materials: String,
    /// Printing overhead per item
    pub printing_cost: f64,
    /// Labor overhead per item
    pub labor_cost: f64,
    /// Markup percentage that was applied
    pub markup_percentage: f64,
    /// Blended waste percentage applied to the material cost
    pub waste_percentage: f64,
    /// Sum of per-item material costs before the waste adjustment
    pub material_cost_per_item: f64,
    /// Total production cost per item
    pub base_cost: f64,
    /// Final selling price after the rounding policy
    pub selling_price: f64,
    /// Profit per item at the final price
    pub profit: f64,
    /// Profit as a percentage of base cost, rounded to one decimal
    pub profit_margin_percentage: f64,
    /// Soft delete flag - if true, product is hidden but data is preserved
    pub is_deleted: bool,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Products have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
