//! Pricing engine - Turns a cost breakdown into a recommended selling price.
//!
//! Combines the aggregated material cost with fixed printing and labor
//! overheads, applies the markup, and optionally rounds the price up to a
//! sales-friendly increment. Profit margin is computed from the final price,
//! so it legitimately diverges from the input markup whenever rounding moves
//! the price; that divergence is intentional and must not be "corrected".
//! Like the cost model, everything here is pure and stateless: identical
//! inputs produce bit-identical results.

use crate::{
    core::materials::{CostBreakdown, MaterialEntry, WastePolicy, aggregate},
    errors::{Error, Result},
};
use serde::{Deserialize, Serialize};

/// Fixed per-item overheads supplied alongside the material cost.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Overhead {
    /// Printing cost per item
    pub printing_cost: f64,
    /// Labor cost per item
    pub labor_cost: f64,
}

impl Overhead {
    /// Creates a new overhead pair.
    #[must_use]
    pub const fn new(printing_cost: f64, labor_cost: f64) -> Self {
        Self {
            printing_cost,
            labor_cost,
        }
    }
}

/// Price rounding policy applied after the markup.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RoundingPolicy {
    /// Keep the raw marked-up price
    NoRounding,
    /// Round the price up to the next multiple of the increment.
    /// The increment must be positive and finite.
    NearestIncrement(f64),
}

/// The computed pricing recommendation for one product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Total production cost per item (adjusted materials + overheads)
    pub base_cost: f64,
    /// Markup percentage that was applied
    pub markup_percentage: f64,
    /// Selling price before rounding
    pub raw_selling_price: f64,
    /// Final selling price after the rounding policy
    pub selling_price: f64,
    /// Profit per item at the final price
    pub profit: f64,
    /// Profit as a percentage of base cost, rounded to one decimal.
    /// Differs from `markup_percentage` whenever rounding changed the price.
    pub profit_margin_percentage: f64,
}

impl PricingResult {
    /// Whether the product would sell at or below cost.
    ///
    /// Advisory only: a loss never aborts pricing, since products may
    /// legitimately be sold below cost during promotions.
    #[must_use]
    pub fn is_loss(&self) -> bool {
        self.profit <= 0.0
    }

    /// Units to sell to reach `target_profit`, rounded up.
    ///
    /// Returns `None` when profit per item is zero or negative, where the
    /// question has no meaningful answer.
    #[must_use]
    pub fn break_even_units(&self, target_profit: f64) -> Option<u64> {
        if self.is_loss() {
            return None;
        }

        // Cast safety: the ratio is clamped non-negative and ceil yields an
        // integral value, so the cast only truncates the fractional zeros.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let units = (target_profit / self.profit).ceil().max(0.0) as u64;
        Some(units)
    }
}

/// Rounds a percentage to one decimal for display and persistence.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Prices a product from its cost breakdown, overheads, and markup.
///
/// The base cost is `adjusted_material_cost + printing_cost + labor_cost`,
/// taking the overheads from the `overhead` argument so the breakdown may be
/// either the raw aggregation output or one already completed via
/// [`CostBreakdown::with_overhead`].
///
/// # Errors
/// - [`Error::InvalidCost`] if the base cost is zero, negative, or not
///   finite; a free or negative-cost product cannot be priced.
/// - [`Error::Config`] if a [`RoundingPolicy::NearestIncrement`] increment
///   is not positive and finite.
pub fn price(
    breakdown: &CostBreakdown,
    overhead: Overhead,
    markup_percentage: f64,
    rounding: RoundingPolicy,
) -> Result<PricingResult> {
    let base_cost = breakdown.adjusted_material_cost + overhead.printing_cost + overhead.labor_cost;

    if base_cost <= 0.0 || !base_cost.is_finite() {
        return Err(Error::InvalidCost { base_cost });
    }

    let raw_selling_price = base_cost * (1.0 + markup_percentage / 100.0);

    let selling_price = match rounding {
        RoundingPolicy::NoRounding => raw_selling_price,
        RoundingPolicy::NearestIncrement(increment) => {
            if increment <= 0.0 || !increment.is_finite() {
                return Err(Error::Config {
                    message: format!("Rounding increment must be positive, got {increment}"),
                });
            }
            (raw_selling_price / increment).ceil() * increment
        }
    };

    let profit = selling_price - base_cost;
    let profit_margin_percentage = round_to_tenth(profit / base_cost * 100.0);

    Ok(PricingResult {
        base_cost,
        markup_percentage,
        raw_selling_price,
        selling_price,
        profit,
        profit_margin_percentage,
    })
}

/// A complete pricing scenario: the materials that went in, the completed
/// cost breakdown, and the resulting price recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Material entries the quote was computed from (invalid ones included,
    /// as entered; aggregation filtered them for the numbers below)
    pub materials: Vec<MaterialEntry>,
    /// Completed cost breakdown including overheads
    pub breakdown: CostBreakdown,
    /// Pricing recommendation
    pub pricing: PricingResult,
}

/// Composes aggregation and pricing into one call, for the live-preview and
/// save paths that start from raw material entries.
///
/// # Errors
/// Propagates [`Error::InsufficientInput`] from aggregation and
/// [`Error::InvalidCost`] / [`Error::Config`] from pricing.
pub fn quote(
    materials: Vec<MaterialEntry>,
    overhead: Overhead,
    markup_percentage: f64,
    waste_policy: WastePolicy,
    rounding: RoundingPolicy,
) -> Result<Quote> {
    let breakdown = aggregate(&materials, waste_policy)?
        .with_overhead(overhead.printing_cost, overhead.labor_cost);
    let pricing = price(&breakdown, overhead, markup_percentage, rounding)?;

    Ok(Quote {
        materials,
        breakdown,
        pricing,
    })
}
